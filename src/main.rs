//! Binary entrypoint for the `seedusers` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is fine; SEEDUSERS_SEED and RUST_LOG may come from it.
    let _ = dotenvy::dotenv();

    match seedusers::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
