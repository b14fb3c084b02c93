//! Core library entry for the `seedusers` CLI.
//!
//! Generates batches of synthetic users with unique two-word usernames and
//! random service entitlements, and writes them as CSV.

pub mod adapters;
pub mod check;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod csv_io;
pub mod error;
pub mod generator;
pub mod logging;
pub mod ports;
pub mod record;
pub mod rng;

pub use error::{Error, Result};
pub use generator::{generate_batch, Generator};
pub use record::UserRecord;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    logging::init(cli.verbose);
    commands::dispatch(&cli.command())
}
