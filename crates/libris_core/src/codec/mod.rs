//! Flat-file persistence for the catalog.
//!
//! # Responsibility
//! - Encode items and members as one comma-separated line per record.
//! - Load and save the two data files with line-granular error reporting.
//!
//! # Invariants
//! - Fields are written verbatim with no quoting or escaping. A comma inside a
//!   title, author or name shifts later fields on reload; this is a known
//!   limitation of the on-disk format and is not corrected here.
//! - A missing data file is an empty collection, not an error.
//! - A malformed line, including one that is not valid UTF-8, is skipped and
//!   reported; loading continues with the next line.
//! - The `issued` flag is not part of the format and reloads as `false`.

use crate::model::item::RecordValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod files;
pub mod line_format;

pub use files::{load_catalog, save_catalog, save_items, save_members, LoadReport, SaveReport};

pub type CodecResult<T> = Result<T, CodecError>;

/// Default items file name.
pub const DEFAULT_ITEMS_FILE: &str = "items.csv";
/// Default members file name.
pub const DEFAULT_MEMBERS_FILE: &str = "members.csv";

/// Locations of the two catalog data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub items: PathBuf,
    pub members: PathBuf,
}

impl CatalogPaths {
    pub fn new(items: impl Into<PathBuf>, members: impl Into<PathBuf>) -> Self {
        Self {
            items: items.into(),
            members: members.into(),
        }
    }

    /// Uses the default file names inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self::new(dir.join(DEFAULT_ITEMS_FILE), dir.join(DEFAULT_MEMBERS_FILE))
    }
}

/// Why a persisted line could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseReason {
    MissingField {
        field: &'static str,
    },
    InvalidNumber {
        field: &'static str,
        value: String,
    },
    Validation(RecordValidationError),
    /// The raw bytes of the line are not UTF-8.
    InvalidEncoding,
}

impl Display for ParseReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing field `{field}`"),
            Self::InvalidNumber { field, value } => {
                write!(f, "field `{field}` is not a valid number: `{value}`")
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidEncoding => write!(f, "line is not valid UTF-8"),
        }
    }
}

/// Persistence failure scoped to one file or one line.
#[derive(Debug)]
pub enum CodecError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        reason: ParseReason,
    },
}

impl CodecError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io_error",
            Self::Parse { .. } => "parse_error",
        }
    }
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Parse { path, line, reason } => {
                write!(f, "{}:{line}: {reason}", path.display())
            }
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { .. } => None,
        }
    }
}
