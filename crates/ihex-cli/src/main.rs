//! CLI entry point for the `bin2ihex` binary.

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};
use hex as _;
use ihex_cli::input::{load_block, parse_start_address};
use ihex_cli::output::write_records;
use ihex_cli::CliError;
use ihex_core::{EncoderConfig, MAX_DATA_RECORD_LEN};
use log::{debug, info};
#[cfg(test)]
use tempfile as _;
use thiserror as _;

/// Encode a binary block as Intel HEX records.
#[derive(Debug, Parser)]
#[command(name = "bin2ihex", version, about)]
#[command(group(ArgGroup::new("source").required(true).args(["data", "input"])))]
struct Args {
    /// Load address of the first byte, hexadecimal with optional 0x prefix
    start_address: String,

    /// Block contents as a hexadecimal string
    data: Option<String>,

    /// Read the block from a raw binary file instead of DATA
    #[arg(short, long, value_name = "FILE", conflicts_with = "data")]
    input: Option<PathBuf>,

    /// Write records to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum payload bytes per data record
    #[arg(long, value_name = "N", default_value_t = MAX_DATA_RECORD_LEN)]
    record_len: u8,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let start_address = parse_start_address(&args.start_address)?;
    let data = load_block(args.data.as_deref(), args.input.as_deref())?;
    let config = EncoderConfig::with_record_len(args.record_len)?;
    debug!(
        "encoding {} bytes at {start_address:#010X}, {} bytes per record",
        data.len(),
        config.record_len()
    );

    let written = write_records(args.output.as_deref(), &config, start_address, &data)?;
    info!(
        "wrote {written} records to {}",
        args.output
            .as_deref()
            .map_or_else(|| "stdout".to_string(), |p| p.display().to_string())
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(error) = run(&args) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
