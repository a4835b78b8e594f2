use thiserror::Error;

/// Contract violations when formatting a single record by hand.
///
/// Records produced by the block encoder never hit these; they only guard the
/// public formatter against mismatched inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum RecordError {
    /// Declared byte count disagrees with the payload actually supplied.
    #[error("byte count {declared} does not match payload length {actual}")]
    LengthMismatch {
        /// Byte count the caller declared.
        declared: u8,
        /// Length of the payload slice.
        actual: usize,
    },
    /// Payload does not fit the 8-bit byte-count field.
    #[error("payload of {len} bytes exceeds the 255-byte record limit")]
    PayloadTooLong {
        /// Length of the rejected payload.
        len: usize,
    },
}

/// Rejected encoder configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ConfigError {
    /// Data record length must be within `1..=MAX_DATA_RECORD_LEN`.
    #[error("record length {0} is outside 1..={max}", max = crate::MAX_DATA_RECORD_LEN)]
    RecordLenOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            RecordError::LengthMismatch {
                declared: 3,
                actual: 2
            }
            .to_string(),
            "byte count 3 does not match payload length 2"
        );
        assert_eq!(
            RecordError::PayloadTooLong { len: 300 }.to_string(),
            "payload of 300 bytes exceeds the 255-byte record limit"
        );
        assert_eq!(
            ConfigError::RecordLenOutOfRange(0).to_string(),
            "record length 0 is outside 1..=32"
        );
    }
}
