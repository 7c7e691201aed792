//! Optional TOML configuration for the catalog application.
//!
//! # Responsibility
//! - Resolve data file locations, loan period, id counter start and logging
//!   settings.
//!
//! # Invariants
//! - A missing config file yields [`LibraryConfig::default`].
//! - Unknown keys are rejected so typos do not silently fall back to defaults.

use crate::codec::{CatalogPaths, DEFAULT_ITEMS_FILE, DEFAULT_MEMBERS_FILE};
use crate::logging::default_log_level;
use crate::model::member::{MemberId, FIRST_MEMBER_ID};
use crate::service::catalog_service::DEFAULT_LOAN_DAYS;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "libris.toml";
const DEFAULT_LOG_SUBDIR: &str = "logs";
/// Upper bound for `first_member_id`, leaving the counter room to advance.
pub const MAX_FIRST_MEMBER_ID: MemberId = i64::MAX / 2;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    pub data_dir: PathBuf,
    pub items_file: String,
    pub members_file: String,
    pub loan_days: u32,
    pub first_member_id: MemberId,
    /// Seed demo books and a demo member into an empty catalog.
    pub seed_defaults: bool,
    /// Falls back to [`default_log_level`] when unset.
    pub log_level: Option<String>,
    /// Relative paths resolve against `data_dir`.
    pub log_dir: Option<PathBuf>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            items_file: DEFAULT_ITEMS_FILE.to_string(),
            members_file: DEFAULT_MEMBERS_FILE.to_string(),
            loan_days: DEFAULT_LOAN_DAYS,
            first_member_id: FIRST_MEMBER_ID,
            seed_defaults: true,
            log_level: None,
            log_dir: None,
        }
    }
}

impl LibraryConfig {
    /// Reads `path`, returning defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path.as_ref()) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(ConfigError::Io(err)),
        };
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.loan_days == 0 {
            return Err(ConfigError::Invalid("loan_days must be positive".to_string()));
        }
        if !(1..=MAX_FIRST_MEMBER_ID).contains(&self.first_member_id) {
            return Err(ConfigError::Invalid(format!(
                "first_member_id must be between 1 and {MAX_FIRST_MEMBER_ID}"
            )));
        }
        if self.items_file.trim().is_empty() || self.members_file.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "items_file and members_file cannot be empty".to_string(),
            ));
        }
        if self.items_file == self.members_file {
            return Err(ConfigError::Invalid(
                "items_file and members_file must differ".to_string(),
            ));
        }
        Ok(())
    }

    pub fn catalog_paths(&self) -> CatalogPaths {
        CatalogPaths::new(
            self.data_dir.join(&self.items_file),
            self.data_dir.join(&self.members_file),
        )
    }

    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    /// Returns an absolute log directory, resolving relative paths under
    /// `base`.
    pub fn resolve_log_dir(&self, base: &Path) -> PathBuf {
        let log_dir = match &self.log_dir {
            Some(dir) if dir.is_absolute() => return dir.clone(),
            Some(dir) => self.data_dir.join(dir),
            None => self.data_dir.join(DEFAULT_LOG_SUBDIR),
        };
        if log_dir.is_absolute() {
            log_dir
        } else {
            base.join(log_dir)
        }
    }
}
