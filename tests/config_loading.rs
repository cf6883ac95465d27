//! Tests for storage configuration loading.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod test_helpers;

use camino::Utf8PathBuf;
use taskdesk::config::{ConfigError, StorageConfig};
use test_helpers::DataDir;

#[test]
fn empty_document_selects_the_stock_layout() {
    let data = DataDir::new();
    data.write_file("config.json", "{}");

    let config = StorageConfig::load(&data.path().join("config.json")).expect("valid config");

    assert_eq!(config, StorageConfig::default());
    assert_eq!(config.data_dir, Utf8PathBuf::from("data"));
    assert_eq!(config.users_file, Utf8PathBuf::from("users.csv"));
    assert_eq!(config.tasks_file, Utf8PathBuf::from("tasks.csv"));
    assert_eq!(config.logs_file, Utf8PathBuf::from("logs.csv"));
}

#[test]
fn configured_fields_override_defaults() {
    let data = DataDir::new();
    data.write_file(
        "config.json",
        r#"{"data_dir": "/srv/taskdesk", "tasks_file": "work.csv"}"#,
    );

    let config = StorageConfig::load(&data.path().join("config.json")).expect("valid config");

    assert_eq!(config.data_dir, Utf8PathBuf::from("/srv/taskdesk"));
    assert_eq!(config.tasks_file, Utf8PathBuf::from("work.csv"));
    assert_eq!(config.users_file, Utf8PathBuf::from("users.csv"));
}

#[test]
fn malformed_document_fails_to_parse() {
    let data = DataDir::new();
    data.write_file("config.json", "not json");

    let result = StorageConfig::load(&data.path().join("config.json"));

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn unknown_fields_fail_to_parse() {
    let data = DataDir::new();
    data.write_file("config.json", r#"{"data_dirs": "typo"}"#);

    let result = StorageConfig::load(&data.path().join("config.json"));

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn missing_file_fails_to_read() {
    let data = DataDir::new();

    let result = StorageConfig::load(&data.path().join("absent.json"));

    assert!(matches!(result, Err(ConfigError::Read { .. })));
}
