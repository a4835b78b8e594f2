//! Single-record framing and checksums.
//!
//! Every line has the shape `:CCAAAATT<payload>SS` where `CC` is the payload
//! byte count, `AAAA` the 16-bit load offset, `TT` the record type and `SS`
//! the two's-complement checksum. All fields are uppercase, zero-padded hex.

use std::fmt;

use crate::RecordError;

/// Fixed rendering of the terminating End-Of-File record.
pub const END_OF_FILE_LINE: &str = ":00000001FF";

/// Record types this encoder emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum RecordType {
    /// Payload bytes loaded at the record address within the current bank.
    Data = 0x00,
    /// Terminates the image.
    EndOfFile = 0x01,
    /// Sets bits 16..32 of the address for subsequent data records.
    ExtendedLinearAddress = 0x04,
}

impl RecordType {
    /// Returns the on-wire type code.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Maps an on-wire type code back to a supported record type.
    #[must_use]
    pub const fn from_u8(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Self::Data),
            0x01 => Some(Self::EndOfFile),
            0x04 => Some(Self::ExtendedLinearAddress),
            _ => None,
        }
    }
}

/// Computes the record checksum.
///
/// The result makes the byte-wise sum of every record field, checksum
/// included, equal to zero modulo 256.
#[must_use]
pub fn checksum(byte_count: u8, address: u16, record_type: RecordType, payload: &[u8]) -> u8 {
    let [high, low] = address.to_be_bytes();
    let header = byte_count
        .wrapping_add(high)
        .wrapping_add(low)
        .wrapping_add(record_type.as_u8());

    payload
        .iter()
        .fold(header, |sum, &byte| sum.wrapping_add(byte))
        .wrapping_neg()
}

/// One Intel HEX record.
///
/// The byte count is always derived from the payload, so a `Record` can never
/// carry a mismatched length. `Display` renders the text line without a line
/// terminator. Deserialization goes through [`Record::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "RawRecord")
)]
pub struct Record {
    address: u16,
    record_type: RecordType,
    payload: Vec<u8>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRecord {
    address: u16,
    record_type: RecordType,
    payload: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRecord> for Record {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        Self::new(raw.record_type, raw.address, raw.payload)
    }
}

impl Record {
    /// Builds a record from an arbitrary payload.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::PayloadTooLong`] when `payload` does not fit the
    /// 8-bit byte-count field.
    pub fn new(
        record_type: RecordType,
        address: u16,
        payload: Vec<u8>,
    ) -> Result<Self, RecordError> {
        if payload.len() > usize::from(u8::MAX) {
            return Err(RecordError::PayloadTooLong { len: payload.len() });
        }

        Ok(Self {
            address,
            record_type,
            payload,
        })
    }

    /// Data record for a chunk the encoder has already bounded.
    pub(crate) fn data(address: u16, chunk: &[u8]) -> Self {
        debug_assert!(chunk.len() <= usize::from(crate::MAX_DATA_RECORD_LEN));
        Self {
            address,
            record_type: RecordType::Data,
            payload: chunk.to_vec(),
        }
    }

    /// Extended Linear Address record selecting bank `upper_address`.
    ///
    /// The payload is the big-endian bank number, not the full 32-bit address.
    #[must_use]
    pub fn extended_linear_address(upper_address: u16) -> Self {
        Self {
            address: 0,
            record_type: RecordType::ExtendedLinearAddress,
            payload: upper_address.to_be_bytes().to_vec(),
        }
    }

    /// The terminating End-Of-File record.
    #[must_use]
    pub const fn end_of_file() -> Self {
        Self {
            address: 0,
            record_type: RecordType::EndOfFile,
            payload: Vec::new(),
        }
    }

    /// Number of payload bytes.
    #[must_use]
    pub fn byte_count(&self) -> u8 {
        u8::try_from(self.payload.len()).unwrap_or(u8::MAX)
    }

    /// 16-bit address field.
    #[must_use]
    pub const fn address(&self) -> u16 {
        self.address
    }

    /// Record type.
    #[must_use]
    pub const fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Payload bytes in record order.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Checksum byte as rendered at the end of the line.
    #[must_use]
    pub fn checksum(&self) -> u8 {
        checksum(
            self.byte_count(),
            self.address,
            self.record_type,
            &self.payload,
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ":{:02X}{:04X}{:02X}",
            self.byte_count(),
            self.address,
            self.record_type.as_u8()
        )?;
        for byte in &self.payload {
            write!(f, "{byte:02X}")?;
        }
        write!(f, "{:02X}", self.checksum())
    }
}

/// Formats one record line from explicit fields.
///
/// # Errors
///
/// Returns [`RecordError::LengthMismatch`] when `byte_count` differs from
/// `payload.len()`.
pub fn format_record(
    byte_count: u8,
    address: u16,
    record_type: RecordType,
    payload: &[u8],
) -> Result<String, RecordError> {
    if usize::from(byte_count) != payload.len() {
        return Err(RecordError::LengthMismatch {
            declared: byte_count,
            actual: payload.len(),
        });
    }

    Ok(Record {
        address,
        record_type,
        payload: payload.to_vec(),
    }
    .to_string())
}

/// Formats the Extended Linear Address record for bank `upper_address`.
#[must_use]
pub fn extended_linear_address(upper_address: u16) -> String {
    Record::extended_linear_address(upper_address).to_string()
}
