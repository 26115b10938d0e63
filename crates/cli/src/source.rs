//! # Payload Sources
//!
//! Loads a catalog search response from a file, standard input or an HTTP
//! endpoint. This is the only place in the workspace that performs I/O.

use std::path::PathBuf;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tracing::info;

use crate::errors::CliError;

/// Where the catalog payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    Stdin,
    File(PathBuf),
    Url(String),
}

impl PayloadSource {
    /// Picks the source from the command line: a URL wins, then a file path
    /// (`-` meaning stdin), and stdin when neither is given.
    pub fn from_args(input: Option<PathBuf>, url: Option<String>) -> Self {
        match (url, input) {
            (Some(url), _) => PayloadSource::Url(url),
            (None, Some(path)) if path.as_os_str() == "-" => PayloadSource::Stdin,
            (None, Some(path)) => PayloadSource::File(path),
            (None, None) => PayloadSource::Stdin,
        }
    }
}

/// Reads the raw JSON payload from `source`.
pub async fn load_payload(source: &PayloadSource, timeout: Duration) -> Result<String, CliError> {
    match source {
        PayloadSource::Stdin => {
            let mut content = String::new();
            tokio::io::stdin()
                .read_to_string(&mut content)
                .await
                .map_err(|source| CliError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(content)
        }
        PayloadSource::File(path) => {
            info!("Reading catalog payload from: {}", path.display());
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| CliError::Read {
                    path: path.display().to_string(),
                    source,
                })
        }
        PayloadSource::Url(url) => fetch_payload(url, timeout).await,
    }
}

async fn fetch_payload(url: &str, timeout: Duration) -> Result<String, CliError> {
    info!("Fetching catalog payload from: {url}");
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(CliError::FetchFailed { status, body });
    }
    Ok(response.text().await?)
}
