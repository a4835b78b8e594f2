//! Turning command-line text and files into an address and a byte block.

use std::fs;
use std::path::Path;

use crate::error::CliError;

/// Parses a hexadecimal start address with an optional `0x`/`0X` prefix.
///
/// # Errors
///
/// Returns [`CliError::InvalidAddress`] for empty input, non-hex digits, or
/// values above `u32::MAX`.
pub fn parse_start_address(text: &str) -> Result<u32, CliError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    // from_str_radix tolerates a leading sign; addresses must be bare digits.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CliError::InvalidAddress(text.to_string()));
    }

    u32::from_str_radix(digits, 16).map_err(|_| CliError::InvalidAddress(text.to_string()))
}

/// Decodes an even-length hexadecimal string of either case.
///
/// # Errors
///
/// Returns [`CliError::InvalidData`] when `text` has odd length or contains a
/// non-hex character.
pub fn parse_hex_data(text: &str) -> Result<Vec<u8>, CliError> {
    Ok(hex::decode(text)?)
}

/// Reads a raw binary block from disk.
///
/// # Errors
///
/// Returns [`CliError::ReadInput`] when the file cannot be read.
pub fn read_binary(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the block from inline hex text or an input file, file first.
///
/// # Errors
///
/// Returns [`CliError::MissingData`] when neither source is given, otherwise
/// any error from the chosen source.
pub fn load_block(data: Option<&str>, input: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match (input, data) {
        (Some(path), _) => read_binary(path),
        (None, Some(text)) => parse_hex_data(text),
        (None, None) => Err(CliError::MissingData),
    }
}
