use std::fs;

use super::*;

#[test]
fn defaults() {
    let config = AppConfig::default();

    assert_eq!(config.version, 1);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.log_dir, None);
    assert!(config.sidebar_open);
    assert_eq!(config.start_view, MainView::Downloads);
}

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("downbeat.toml");

    let config = load_config_from(&path).unwrap();

    assert_eq!(config, AppConfig::default());
    assert!(path.exists());
}

#[test]
fn partial_file_keeps_defaults_for_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("downbeat.toml");
    fs::write(&path, "log_level = \"debug\"\nstart_view = \"library\"\n").unwrap();

    let config = load_config_from(&path).unwrap();

    assert_eq!(config.log_level, "debug");
    assert_eq!(config.start_view, MainView::Library);
    assert!(config.sidebar_open);
    assert_eq!(config.version, 1);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("downbeat.toml");
    fs::write(&path, "start_view = \"player\"\n").unwrap();

    assert!(load_config_from(&path).is_err());
}

#[test]
fn configured_log_dir_wins() {
    let config = AppConfig {
        log_dir: Some(PathBuf::from("/var/log/downbeat")),
        ..AppConfig::default()
    };

    assert_eq!(log_dir(&config).unwrap(), PathBuf::from("/var/log/downbeat"));
}
