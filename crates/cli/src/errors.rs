use crate::config::ConfigError;
use geocat::NormalizationError;
use thiserror::Error;

/// Errors raised by the `geocat` command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read catalog payload from '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to fetch catalog payload: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Catalog service returned status {status}: {body}")]
    FetchFailed { status: u16, body: String },
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Strict mode: {count} record warning(s) raised")]
    StrictWarnings { count: usize },
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}
