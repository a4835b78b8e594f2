//! Writing encoded records to stdout or a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ihex_core::{write_hex, EncoderConfig};
use log::debug;

use crate::error::CliError;

/// Encodes `data` and writes one record per line to `output`, or stdout when
/// `output` is `None`. Returns the number of records written.
///
/// # Errors
///
/// Returns [`CliError::WriteOutput`] when the destination cannot be created
/// or written.
pub fn write_records(
    output: Option<&Path>,
    config: &EncoderConfig,
    start_address: u32,
    data: &[u8],
) -> Result<usize, CliError> {
    match output {
        Some(path) => {
            let target = path.display().to_string();
            debug!("creating {target}");
            let file = File::create(path).map_err(|source| CliError::WriteOutput {
                target: target.clone(),
                source,
            })?;
            emit(BufWriter::new(file), config, start_address, data)
                .map_err(|source| CliError::WriteOutput { target, source })
        }
        None => emit(io::stdout().lock(), config, start_address, data).map_err(|source| {
            CliError::WriteOutput {
                target: "stdout".to_string(),
                source,
            }
        }),
    }
}

fn emit<W: Write>(
    mut writer: W,
    config: &EncoderConfig,
    start_address: u32,
    data: &[u8],
) -> io::Result<usize> {
    let written = write_hex(&mut writer, config, start_address, data)?;
    writer.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_records_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.hex");

        let written = write_records(
            Some(path.as_path()),
            &EncoderConfig::default(),
            0x0001_0000,
            &[0xAB],
        )
        .unwrap();

        assert_eq!(written, 3);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            ":020000040001F9\n:01000000AB54\n:00000001FF\n"
        );
    }

    #[test]
    fn reports_uncreatable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.hex");

        let error =
            write_records(Some(path.as_path()), &EncoderConfig::default(), 0, &[]).unwrap_err();
        assert!(matches!(error, CliError::WriteOutput { .. }));
        assert!(error.to_string().starts_with("failed to write "));
    }
}
