//! One run of the application: load, seed, menu loop, final save.
//!
//! # Invariants
//! - The final save is attempted even when the menu loop or the terminal
//!   fails on I/O, and `session_end` is logged either way.
//! - Load and save problems are reported to the user, never returned as
//!   errors.

use crate::render;
use crate::shell::Shell;
use libris_core::{catalog_from_config, LibraryConfig, LoadReport, SaveReport};
use log::info;
use std::io::{self, BufRead, Write};

/// What happened to the data files during a session.
#[derive(Debug)]
pub struct SessionOutcome {
    pub load: LoadReport,
    pub save: SaveReport,
}

/// Runs a full session reading commands from `input` and writing to
/// `output`.
///
/// # Errors
/// Returns terminal I/O errors. The final save has already been attempted
/// when a menu loop error is returned.
pub fn run_session<I: BufRead, O: Write>(
    config: &LibraryConfig,
    input: I,
    mut output: O,
) -> io::Result<SessionOutcome> {
    let paths = config.catalog_paths();
    let mut catalog = catalog_from_config(config);

    writeln!(output, "Library System Starting...")?;
    let load = catalog.load(&paths);
    render::write_load_report(&mut output, &load)?;

    if config.seed_defaults {
        let seeded = catalog.seed_defaults();
        if seeded.items_added > 0 {
            writeln!(output, "Data files not found. Loading default books.")?;
        }
        if seeded.members_added > 0 {
            writeln!(output, "Loading default member.")?;
        }
    }

    let mut shell = Shell::new(input, output);
    let loop_result = shell.run(&mut catalog);
    let mut output = shell.into_output();

    let save = catalog.save(&paths);
    info!(
        "event=session_end module=cli status={} items={} members={}",
        session_status(&loop_result, &save),
        catalog.list_items().len(),
        catalog.list_members().len()
    );

    let report_result = writeln!(output, "Saving data before closing...")
        .and_then(|()| render::write_save_report(&mut output, &save))
        .and_then(|()| output.flush());
    loop_result?;
    report_result?;
    Ok(SessionOutcome { load, save })
}

fn session_status(loop_result: &io::Result<()>, save: &SaveReport) -> &'static str {
    match (loop_result, save.is_ok()) {
        (Err(_), _) => "io_error",
        (Ok(()), false) => "save_failed",
        (Ok(()), true) => "ok",
    }
}
