use serde::Serialize;
use thiserror::Error;

/// Errors that stop a record or a catalog payload from being normalized.
#[derive(Error, Debug)]
pub enum NormalizationError {
    #[error("Catalog record has no Dublin Core metadata block")]
    MissingMetadata,
    #[error("Failed to parse catalog payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Non-fatal problems found while normalizing a record.
///
/// The record is still produced; the affected field is left empty (or the URL is
/// kept as published) and the warning travels next to it so a host UI can show
/// partial results instead of silently dropping data.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizationWarning {
    #[error("record has no Dublin Core metadata block, emitted an empty record")]
    MissingMetadata,
    #[error("record could not be read ({reason}), emitted an empty record")]
    MalformedRecord { reason: String },
    #[error("WMS reference '{url}' has no 'layers' parameter")]
    MissingLayerName { url: String },
    #[error("relative URL '{url}' could not be made absolute against the catalog base URL")]
    UnresolvedRelativeUrl { url: String },
}
