//! Interactive catalog entry point.
//!
//! Reads `libris.toml` from the working directory when present, then runs one
//! menu session on stdin/stdout.

use libris_cli::run_session;
use libris_core::{init_logging, LibraryConfig, CONFIG_FILE_NAME};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = LibraryConfig::load(CONFIG_FILE_NAME)?;
    let log_dir = config.resolve_log_dir(&std::env::current_dir()?);
    if let Err(err) = init_logging(config.effective_log_level(), &log_dir) {
        eprintln!("Warning: file logging disabled: {err}");
    }

    run_session(&config, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
