use std::io;
use std::path::PathBuf;

use ihex_core::ConfigError;
use thiserror::Error;

/// Failures surfaced to the user before or after encoding.
#[derive(Debug, Error)]
pub enum CliError {
    /// Start address is not a hexadecimal number that fits in 32 bits.
    #[error("invalid start address: {0}")]
    InvalidAddress(String),
    /// Block contents are not an even-length hexadecimal string.
    #[error("invalid hex data: {0}")]
    InvalidData(#[from] hex::FromHexError),
    /// Neither inline data nor an input file was supplied.
    #[error("no data supplied")]
    MissingData,
    /// Input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ReadInput {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Records could not be written to the destination.
    #[error("failed to write {target}: {source}")]
    WriteOutput {
        /// `stdout` or the output path.
        target: String,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Encoder configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
