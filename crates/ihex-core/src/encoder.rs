//! Block encoding: chunking, bank tracking and record ordering.
//!
//! A block is a contiguous byte sequence loaded at an absolute start address.
//! It is cut into data records of at most [`EncoderConfig::record_len`]
//! bytes. Whenever the 64KB bank of a chunk differs from the last bank
//! announced, an Extended Linear Address record is emitted first. Bank 0 is
//! assumed active at the start of every pass. The pass always ends with a
//! single End-Of-File record.

use std::io;
use std::iter::FusedIterator;

use crate::{ConfigError, Record};

/// Upper bound on the payload of a single data record.
pub const MAX_DATA_RECORD_LEN: u8 = 32;

/// Bits addressed by a data record's 16-bit address field.
const BANK_SHIFT: u32 = 16;

/// Tunables for the block encoder.
///
/// Deserialized values pass through [`EncoderConfig::with_record_len`], so a
/// record length outside `1..=MAX_DATA_RECORD_LEN` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "RawEncoderConfig")
)]
pub struct EncoderConfig {
    record_len: u8,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawEncoderConfig {
    record_len: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEncoderConfig> for EncoderConfig {
    type Error = ConfigError;

    fn try_from(raw: RawEncoderConfig) -> Result<Self, Self::Error> {
        Self::with_record_len(raw.record_len)
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            record_len: MAX_DATA_RECORD_LEN,
        }
    }
}

impl EncoderConfig {
    /// Creates a configuration emitting data records of up to `record_len`
    /// payload bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RecordLenOutOfRange`] unless `record_len` is in
    /// `1..=MAX_DATA_RECORD_LEN`.
    pub const fn with_record_len(record_len: u8) -> Result<Self, ConfigError> {
        if record_len == 0 || record_len > MAX_DATA_RECORD_LEN {
            return Err(ConfigError::RecordLenOutOfRange(record_len));
        }
        Ok(Self { record_len })
    }

    /// Maximum payload bytes per data record.
    #[must_use]
    pub const fn record_len(&self) -> u8 {
        self.record_len
    }
}

/// Lazy record sequence for one block, produced by [`records`].
#[derive(Debug, Clone)]
pub struct Records<'a> {
    data: &'a [u8],
    start_address: u64,
    offset: usize,
    record_len: usize,
    current_bank: u64,
    finished: bool,
}

impl Iterator for Records<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        if self.finished {
            return None;
        }

        if self.offset >= self.data.len() {
            self.finished = true;
            return Some(Record::end_of_file());
        }

        let address = self.start_address + self.offset as u64;
        let [.., bank_high, bank_low, offset_high, offset_low] = address.to_be_bytes();
        let bank = address >> BANK_SHIFT;
        if bank != self.current_bank {
            self.current_bank = bank;
            return Some(Record::extended_linear_address(u16::from_be_bytes([
                bank_high, bank_low,
            ])));
        }

        let end = self.data.len().min(self.offset + self.record_len);
        let record = Record::data(
            u16::from_be_bytes([offset_high, offset_low]),
            &self.data[self.offset..end],
        );
        self.offset = end;
        Some(record)
    }
}

impl FusedIterator for Records<'_> {}

/// Returns the records encoding `data` loaded at `start_address`.
#[must_use]
pub fn records<'a>(config: &EncoderConfig, start_address: u32, data: &'a [u8]) -> Records<'a> {
    Records {
        data,
        start_address: u64::from(start_address),
        offset: 0,
        record_len: usize::from(config.record_len),
        current_bank: 0,
        finished: false,
    }
}

/// Encodes `data` loaded at `start_address` into Intel HEX lines using
/// 32-byte data records.
///
/// The last line is always [`END_OF_FILE_LINE`](crate::END_OF_FILE_LINE).
#[must_use]
pub fn encode(start_address: u32, data: &[u8]) -> Vec<String> {
    encode_with(&EncoderConfig::default(), start_address, data)
}

/// Encodes `data` loaded at `start_address` using a custom configuration.
#[must_use]
pub fn encode_with(config: &EncoderConfig, start_address: u32, data: &[u8]) -> Vec<String> {
    records(config, start_address, data)
        .map(|record| record.to_string())
        .collect()
}

/// Streams the encoded lines to `writer`, each terminated by `\n`.
///
/// Returns the number of records written.
///
/// # Errors
///
/// Propagates any error returned by `writer`.
pub fn write_hex<W: io::Write>(
    writer: &mut W,
    config: &EncoderConfig,
    start_address: u32,
    data: &[u8],
) -> io::Result<usize> {
    let mut written = 0;
    for record in records(config, start_address, data) {
        writeln!(writer, "{record}")?;
        written += 1;
    }
    Ok(written)
}
