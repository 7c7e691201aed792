use libris_core::{catalog_from_config, ConfigError, LibraryConfig, MAX_FIRST_MEMBER_ID};
use std::fs;
use std::path::PathBuf;

#[test]
fn missing_config_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = LibraryConfig::load(dir.path().join("libris.toml")).unwrap();

    assert_eq!(config, LibraryConfig::default());
    assert_eq!(config.loan_days, 14);
    assert_eq!(config.first_member_id, 1001);
    assert!(config.seed_defaults);
}

#[test]
fn config_file_overrides_selected_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("libris.toml");
    fs::write(
        &path,
        r#"
data_dir = "library-data"
items_file = "books.csv"
loan_days = 21
seed_defaults = false
log_level = "warn"
"#,
    )
    .unwrap();

    let config = LibraryConfig::load(&path).unwrap();
    let paths = config.catalog_paths();

    assert_eq!(paths.items, PathBuf::from("library-data").join("books.csv"));
    assert_eq!(paths.members, PathBuf::from("library-data").join("members.csv"));
    assert_eq!(config.loan_days, 21);
    assert!(!config.seed_defaults);
    assert_eq!(config.effective_log_level(), "warn");
    assert_eq!(catalog_from_config(&config).loan_days(), 21);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = LibraryConfig::from_toml_str("loan_dayz = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn zero_loan_days_is_invalid() {
    let err = LibraryConfig::from_toml_str("loan_days = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn first_member_id_outside_counter_range_is_invalid() {
    for value in ["0", "-5", "9223372036854775807"] {
        let source = format!("first_member_id = {value}");
        let err = LibraryConfig::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "accepted {value}");
    }

    let config =
        LibraryConfig::from_toml_str(&format!("first_member_id = {MAX_FIRST_MEMBER_ID}")).unwrap();
    let mut catalog = catalog_from_config(&config);
    assert_eq!(catalog.add_member("A"), MAX_FIRST_MEMBER_ID);
    assert_eq!(catalog.add_member("B"), MAX_FIRST_MEMBER_ID + 1);
}

#[test]
fn identical_data_file_names_are_invalid() {
    let err = LibraryConfig::from_toml_str(
        r#"
items_file = "catalog.csv"
members_file = "catalog.csv"
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn absolute_log_dir_is_used_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let config = LibraryConfig {
        log_dir: Some(dir.path().to_path_buf()),
        ..LibraryConfig::default()
    };

    assert_eq!(config.resolve_log_dir(&PathBuf::from("/elsewhere")), dir.path());
}
