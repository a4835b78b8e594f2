//! Command-line front end for the Intel HEX encoder.

use clap as _;
use env_logger as _;

/// User-facing error type.
pub mod error;
pub use error::CliError;
/// Start address and block parsing.
pub mod input;
/// Record output to stdout or files.
pub mod output;
