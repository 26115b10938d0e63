//! # Configuration Tests
//!
//! Checks the layering of defaults, YAML file and `GEOCAT_*` environment
//! variables. Tests touching the environment run serially.

use anyhow::Result;
use geocat_cli::config::{get_config, AppConfig, ConfigError};
use serial_test::serial;
use serde_json::json;
use std::env;
use tempfile::TempDir;

fn write_config(dir: &TempDir, yaml: &str) -> Result<String> {
    let path = dir.path().join("geocat.yml");
    std::fs::write(&path, yaml)?;
    Ok(path.display().to_string())
}

#[test]
#[serial]
fn test_defaults_without_config_file() -> Result<()> {
    let config = get_config(None)?;
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.log_filter, "info");
    Ok(())
}

#[test]
#[serial]
fn test_yaml_file_is_loaded() -> Result<()> {
    let dir = TempDir::new()?;
    let values = json!({
        "catalog_url": "http://catalog.sample.org/csw",
        "request_timeout_secs": 5,
        "pretty": true
    });
    let path = write_config(&dir, &serde_yaml::to_string(&values)?)?;

    let config = get_config(Some(&path))?;

    assert_eq!(config.catalog_url.as_deref(), Some("http://catalog.sample.org/csw"));
    assert_eq!(config.request_timeout_secs, 5);
    assert!(config.pretty);
    assert_eq!(config.log_filter, "info");
    Ok(())
}

#[test]
#[serial]
fn test_placeholders_are_substituted_from_environment() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "catalog_url: \"${GEOCAT_TEST_CATALOG_HOST}/geoserver/csw\"\n")?;
    env::set_var("GEOCAT_TEST_CATALOG_HOST", "http://substituted.org");

    let config = get_config(Some(&path));
    env::remove_var("GEOCAT_TEST_CATALOG_HOST");

    assert_eq!(
        config?.catalog_url.as_deref(),
        Some("http://substituted.org/geoserver/csw")
    );
    Ok(())
}

#[test]
#[serial]
fn test_environment_overrides_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "request_timeout_secs: 5\nlog_filter: debug\n")?;
    env::set_var("GEOCAT_REQUEST_TIMEOUT_SECS", "90");

    let config = get_config(Some(&path));
    env::remove_var("GEOCAT_REQUEST_TIMEOUT_SECS");

    let config = config?;
    assert_eq!(config.request_timeout_secs, 90);
    assert_eq!(config.log_filter, "debug");
    Ok(())
}

#[test]
#[serial]
fn test_explicit_missing_file_is_an_error() {
    let result = get_config(Some("/definitely/not/here/geocat.yml"));
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
#[serial]
fn test_mistyped_value_is_a_source_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "request_timeout_secs: \"not a number\"\n")?;

    let result = get_config(Some(&path));

    assert!(matches!(result, Err(ConfigError::Source(_))));
    Ok(())
}
