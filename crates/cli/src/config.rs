//! # CLI Configuration
//!
//! Defines the configuration of the `geocat` command and loads it in layers:
//! built-in defaults, an optional YAML file (with `${VAR}` substitution), then
//! `GEOCAT_*` environment variables.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// The configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "geocat.yml";

/// Errors raised while loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    General(String),
    /// An explicitly requested configuration file was not found.
    #[error("{0}")]
    NotFound(String),
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A layer could not be merged or the result does not fit [`AppConfig`].
    #[error("Configuration error: {0}")]
    Source(#[from] config::ConfigError),
}

/// The root configuration structure, mapping directly to `geocat.yml`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL used to resolve relative links when a payload carries no
    /// `searchOptions.catalogURL`. Loaded from `GEOCAT_CATALOG_URL`.
    #[serde(default)]
    pub catalog_url: Option<String>,
    /// Timeout for fetching a payload over HTTP.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Pretty-print the JSON output.
    #[serde(default)]
    pub pretty: bool,
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: None,
            request_timeout_secs: default_request_timeout_secs(),
            pretty: false,
            log_filter: default_log_filter(),
        }
    }
}

// Reads a file and substitutes `${VAR}` placeholders from the environment.
// Returns Ok(None) if the file does not exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(format!("Invalid substitution pattern: {e}")))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the configuration.
///
/// An explicit `config_path_override` must exist; the default `geocat.yml` is
/// optional. Keys are overridden by `GEOCAT_`-prefixed environment variables,
/// e.g. `GEOCAT_CATALOG_URL` or `GEOCAT_REQUEST_TIMEOUT_SECS`.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder()
        .set_default("request_timeout_secs", default_request_timeout_secs())?
        .set_default("pretty", false)?
        .set_default("log_filter", default_log_filter())?;

    let config_path = config_path_override.unwrap_or(DEFAULT_CONFIG_FILE);
    match read_and_substitute(config_path)? {
        Some(content) => {
            info!("Loading configuration from '{config_path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None if config_path_override.is_some() => {
            return Err(ConfigError::NotFound(format!(
                "Config file not found at '{config_path}'."
            )));
        }
        None => {}
    }

    let settings = builder
        .add_source(
            Environment::with_prefix("GEOCAT")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
