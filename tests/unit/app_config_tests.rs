/*!
 * Tests for app configuration loading and validation
 */

use anyhow::Result;
use doctran::app_config::{Config, LogLevel};

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_shouldMatchOriginalServiceDefaults() {
    let config = Config::default();

    assert_eq!(config.translation.endpoint, "http://localhost:5000/translate");
    assert_eq!(config.translation.concurrent_requests, 20);
    assert_eq!(config.translation.timeout_secs, 30);
    assert_eq!(config.storage.template_dir.to_string_lossy(), "templates");
    assert_eq!(config.storage.product_dir.to_string_lossy(), "products");
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test save/load round trip through a file
#[test]
fn test_config_save_and_from_file_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.translation.endpoint = "http://example.com:9000/translate".to_string();
    config.translation.concurrent_requests = 5;
    config.save(&config_path)?;

    let loaded = Config::from_file(&config_path)?;
    assert_eq!(loaded.translation.endpoint, "http://example.com:9000/translate");
    assert_eq!(loaded.translation.concurrent_requests, 5);
    Ok(())
}

/// Fields missing from the file fall back to serde defaults
#[test]
fn test_from_file_withPartialConfig_shouldUseDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("conf.json");
    std::fs::write(
        &config_path,
        r#"{"translation": {"endpoint": "http://localhost:8080/t"}}"#,
    )?;

    let config = Config::from_file(&config_path)?;
    assert_eq!(config.translation.endpoint, "http://localhost:8080/t");
    assert_eq!(config.translation.concurrent_requests, 20);
    assert_eq!(config.log_level, LogLevel::Info);
    Ok(())
}

#[test]
fn test_validate_withInvalidEndpoint_shouldFail() {
    let mut config = Config::default();
    config.translation.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());

    config.translation.endpoint = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroConcurrency_shouldFail() {
    let mut config = Config::default();
    config.translation.concurrent_requests = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_log_level_to_level_filter_shouldMapAllLevels() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
}
