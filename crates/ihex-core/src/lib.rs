//! Intel HEX encoding for contiguous binary images.
//!
//! [`encode`] turns a byte block and its absolute load address into the
//! ordered record lines a device programmer consumes. The encoding is pure and
//! deterministic; every call tracks its own 64KB bank state.

/// Error types for record formatting and encoder configuration.
pub mod error;
pub use error::{ConfigError, RecordError};

/// Record framing, record types and checksums.
pub mod record;
pub use record::{
    checksum, extended_linear_address, format_record, Record, RecordType, END_OF_FILE_LINE,
};

/// Block encoder with bank tracking and record splitting.
pub mod encoder;
pub use encoder::{
    encode, encode_with, records, write_hex, EncoderConfig, Records, MAX_DATA_RECORD_LEN,
};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
#[cfg(test)]
use serde_json as _;
