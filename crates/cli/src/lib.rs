//! # geocat-cli: Command-Line Front End
//!
//! Loads a catalog search response, normalizes it with the `geocat` library and
//! renders the canonical page as JSON.

pub mod config;
pub mod errors;
pub mod source;

use std::time::Duration;

use geocat::{catalog_to_page, parse_catalog, CatalogReport};
use tracing::{info, warn};

use self::{config::AppConfig, errors::CliError, source::PayloadSource};

/// Options of one `geocat normalize` run.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub source: PayloadSource,
    /// Overrides `searchOptions.catalogURL` of the payload.
    pub catalog_url: Option<String>,
    /// Fail when any record raised a warning.
    pub strict: bool,
}

/// Loads and normalizes a catalog payload.
///
/// Returns `Ok(None)` when the response has no `result.records`.
pub async fn run_normalize(
    options: &NormalizeOptions,
    config: &AppConfig,
) -> Result<Option<CatalogReport>, CliError> {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let payload = source::load_payload(&options.source, timeout).await?;
    let mut catalog = parse_catalog(&payload)?;

    if let Some(catalog_url) = &options.catalog_url {
        catalog.search_options.catalog_url = Some(catalog_url.clone());
    } else if catalog.search_options.base_url().is_none() {
        catalog.search_options.catalog_url = config.catalog_url.clone();
    }

    let Some(report) = catalog_to_page(&catalog) else {
        info!("Catalog response has no records, nothing to display.");
        return Ok(None);
    };

    for record_warning in &report.warnings {
        warn!(
            "Record #{} ({}): {}",
            record_warning.index,
            record_warning
                .identifier
                .as_deref()
                .unwrap_or("<no identifier>"),
            record_warning.warning
        );
    }

    if options.strict && !report.warnings.is_empty() {
        return Err(CliError::StrictWarnings {
            count: report.warnings.len(),
        });
    }

    Ok(Some(report))
}

/// Renders the normalized page as JSON; no records render as `null`.
pub fn render(report: Option<&CatalogReport>, pretty: bool) -> Result<String, CliError> {
    let page = report.map(|report| &report.page);
    let output = if pretty {
        serde_json::to_string_pretty(&page)?
    } else {
        serde_json::to_string(&page)?
    };
    Ok(output)
}
