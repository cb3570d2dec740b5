//! 設定ファイルのテスト

use rule_check::config::{Config, DEFAULT_ENDPOINT};
use rule_check::error::RuleCheckError;
use tempfile::tempdir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert!(config.timeout().is_none());
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_endpoint("https://checker.example.com".to_string()).unwrap();
    config.timeout_seconds = Some(30);
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.timeout().unwrap().as_secs(), 30);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 5}"#).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(loaded.timeout_seconds, Some(5));
}

#[test]
fn test_invalid_endpoint_rejected() {
    let mut config = Config::default();
    let err = config.set_endpoint("localhost:8000".to_string()).unwrap_err();
    assert!(matches!(err, RuleCheckError::Config(_)));
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
}

#[test]
fn test_broken_file_is_json_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, RuleCheckError::JsonParse(_)));
}
