//! Core catalog logic for Libris.
//! This crate owns the record model, the in-memory catalog store and the
//! flat-file persistence format.

pub mod codec;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use codec::{CatalogPaths, CodecError, CodecResult, LoadReport, ParseReason, SaveReport};
pub use config::{ConfigError, LibraryConfig, CONFIG_FILE_NAME, MAX_FIRST_MEMBER_ID};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemId, ItemKind, RecordValidationError};
pub use model::member::{Member, MemberId, MemberIdCounter, MemberKind, FIRST_MEMBER_ID};
pub use repo::catalog_repo::{
    CatalogError, CatalogRepository, CatalogResult, InMemoryCatalogRepository,
};
pub use service::catalog_service::{
    CatalogService, IssueReceipt, SeedOutcome, DEFAULT_LOAN_DAYS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Builds a service over an empty in-memory store configured from `config`.
pub fn catalog_from_config(config: &LibraryConfig) -> CatalogService<InMemoryCatalogRepository> {
    CatalogService::with_loan_days(
        InMemoryCatalogRepository::with_first_member_id(config.first_member_id),
        config.loan_days,
    )
}

#[cfg(test)]
mod tests {
    use super::{catalog_from_config, core_version, LibraryConfig};

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn catalog_from_config_applies_counter_and_loan_days() {
        let config = LibraryConfig {
            loan_days: 21,
            first_member_id: 5000,
            ..LibraryConfig::default()
        };
        let mut catalog = catalog_from_config(&config);
        assert_eq!(catalog.loan_days(), 21);
        assert_eq!(catalog.add_member("Zoe"), 5000);
    }
}
