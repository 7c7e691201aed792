//! Load/save of the two catalog data files.
//!
//! # Invariants
//! - Each file is opened, fully read or written, and closed within one call.
//! - Items and members are saved independently; one failing does not stop
//!   the other from being attempted.
//! - Members read from disk are re-created through the store counter.
//!
//! # Side effects
//! - Emits `catalog_load` / `catalog_save` logging events with status and
//!   duration.

use super::line_format::{decode_item_line, decode_member_line, encode_item, encode_member};
use super::{CatalogPaths, CodecError, CodecResult, ParseReason};
use crate::repo::catalog_repo::CatalogRepository;
use log::{debug, error, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use std::time::Instant;

/// Outcome of a startup load. Loading never fails as a whole.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub items_loaded: usize,
    pub members_loaded: usize,
    /// Skipped lines and unreadable files, in encounter order.
    pub errors: Vec<CodecError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Per-file outcome of a save.
#[derive(Debug)]
pub struct SaveReport {
    /// Number of item lines written.
    pub items: CodecResult<usize>,
    /// Number of member lines written.
    pub members: CodecResult<usize>,
}

impl SaveReport {
    pub fn is_ok(&self) -> bool {
        self.items.is_ok() && self.members.is_ok()
    }

    pub fn errors(&self) -> impl Iterator<Item = &CodecError> {
        self.items
            .as_ref()
            .err()
            .into_iter()
            .chain(self.members.as_ref().err())
    }
}

/// Appends every record found in `paths` to `repo`.
pub fn load_catalog<R: CatalogRepository>(repo: &mut R, paths: &CatalogPaths) -> LoadReport {
    let started_at = Instant::now();
    info!("event=catalog_load module=codec status=start");

    let mut report = LoadReport::default();
    let path = paths.items.as_path();
    let result = for_each_line(path, |line_no, line| {
        match line.and_then(decode_item_line) {
            Ok(Some(item)) => {
                repo.add_item(item);
                report.items_loaded += 1;
            }
            Ok(None) => debug!(
                "event=catalog_load module=codec status=ignored file=items line={line_no}"
            ),
            Err(reason) => report.errors.push(skip_line(path, line_no, reason)),
        }
    });
    if let Err(err) = result {
        report.errors.push(err);
    }

    let path = paths.members.as_path();
    let result = for_each_line(path, |line_no, line| match line.and_then(decode_member_line) {
        Ok(Some(decoded)) => {
            let id = repo.create_member(decoded.name, decoded.kind);
            debug!(
                "event=member_id_assigned module=codec persisted_id={} assigned_id={id}",
                decoded.persisted_id
            );
            report.members_loaded += 1;
        }
        Ok(None) => {
            debug!("event=catalog_load module=codec status=ignored file=members line={line_no}")
        }
        Err(reason) => report.errors.push(skip_line(path, line_no, reason)),
    });
    if let Err(err) = result {
        report.errors.push(err);
    }

    let status = if report.is_clean() { "ok" } else { "partial" };
    info!(
        "event=catalog_load module=codec status={status} items={} members={} skipped={} duration_ms={}",
        report.items_loaded,
        report.members_loaded,
        report.errors.len(),
        started_at.elapsed().as_millis()
    );
    report
}

/// Writes both data files, attempting each regardless of the other's result.
pub fn save_catalog<R: CatalogRepository>(repo: &R, paths: &CatalogPaths) -> SaveReport {
    let started_at = Instant::now();
    info!("event=catalog_save module=codec status=start");

    let report = SaveReport {
        items: save_items(repo, &paths.items),
        members: save_members(repo, &paths.members),
    };

    if report.is_ok() {
        info!(
            "event=catalog_save module=codec status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        );
    } else {
        for err in report.errors() {
            error!(
                "event=catalog_save module=codec status=error error_code={} error={err}",
                err.code()
            );
        }
    }
    report
}

/// Rewrites the items file. Returns the number of lines written.
pub fn save_items<R: CatalogRepository>(repo: &R, path: &Path) -> CodecResult<usize> {
    write_lines(path, repo.list_items().iter().map(encode_item))
}

/// Rewrites the members file. Returns the number of lines written.
pub fn save_members<R: CatalogRepository>(repo: &R, path: &Path) -> CodecResult<usize> {
    write_lines(path, repo.list_members().iter().map(encode_member))
}

fn write_lines(path: &Path, lines: impl Iterator<Item = String>) -> CodecResult<usize> {
    let io_error = |source: std::io::Error| CodecError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    let mut written = 0;
    for line in lines {
        writeln!(writer, "{line}").map_err(io_error)?;
        written += 1;
    }
    writer.flush().map_err(io_error)?;
    Ok(written)
}

/// Calls `visit` with each 1-based line number and line of `path`, line
/// ending removed.
///
/// A missing file visits nothing and succeeds. A line that is not valid
/// UTF-8 is visited as `InvalidEncoding` and reading continues.
fn for_each_line(
    path: &Path,
    mut visit: impl FnMut(usize, Result<&str, ParseReason>),
) -> CodecResult<()> {
    let io_error = |source: std::io::Error| CodecError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "event=catalog_load module=codec status=missing path={}",
                path.display()
            );
            return Ok(());
        }
        Err(err) => return Err(io_error(err)),
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(io_error)? == 0 {
            return Ok(());
        }
        line_no += 1;
        let line = strip_line_ending(&buf);
        match std::str::from_utf8(line) {
            Ok(line) => visit(line_no, Ok(line)),
            Err(_) => visit(line_no, Err(ParseReason::InvalidEncoding)),
        }
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn skip_line(path: &Path, line: usize, reason: ParseReason) -> CodecError {
    let err = CodecError::Parse {
        path: path.to_path_buf(),
        line,
        reason,
    };
    warn!(
        "event=catalog_load module=codec status=skipped error_code={} error={err}",
        err.code()
    );
    err
}
