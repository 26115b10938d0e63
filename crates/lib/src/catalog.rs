//! # Catalog Page Normalization
//!
//! Applies the record normalizer to every record of a catalog search response.
//! Records are read one at a time; an unreadable record becomes an empty one
//! plus a warning, so every input record maps to exactly one output record.
//! A response without `result.records` means there is nothing to display and
//! yields `None` rather than an error or an empty page.

use serde::Serialize;
use tracing::info;

use crate::errors::{NormalizationError, NormalizationWarning};
use crate::normalize::RecordNormalizer;
use crate::types::{CanonicalRecord, Catalog, CatalogPage};

/// A warning raised for the record at `index` of the input page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordWarning {
    pub index: usize,
    pub identifier: Option<String>,
    pub warning: NormalizationWarning,
}

/// A normalized page plus every warning raised while building it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogReport {
    pub page: CatalogPage,
    pub warnings: Vec<RecordWarning>,
}

/// Parses a catalog search response from JSON text.
pub fn parse_catalog(json: &str) -> Result<Catalog, NormalizationError> {
    Ok(serde_json::from_str(json)?)
}

/// Normalizes every record of `catalog`, in input order.
pub fn catalog_to_records(catalog: &Catalog) -> Option<Vec<CanonicalRecord>> {
    catalog_to_page(catalog).map(|report| report.page.records)
}

/// Normalizes every record of `catalog` and carries the paging counters through.
pub fn catalog_to_page(catalog: &Catalog) -> Option<CatalogReport> {
    let result = catalog.result.as_ref()?;
    let records = result.records.as_ref()?;
    let normalizer = RecordNormalizer::new(&catalog.search_options);

    let mut warnings = Vec::new();
    let records: Vec<CanonicalRecord> = records
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let normalized = normalizer.normalize_value(raw);
            let identifier = normalized.record.identifier.clone().or_else(|| {
                raw.pointer("/dc/identifier")
                    .and_then(|id| id.as_str())
                    .map(str::to_string)
            });
            warnings.extend(normalized.warnings.into_iter().map(|warning| RecordWarning {
                index,
                identifier: identifier.clone(),
                warning,
            }));
            normalized.record
        })
        .collect();

    info!(
        "Normalized {} catalog records ({} warnings).",
        records.len(),
        warnings.len()
    );

    Some(CatalogReport {
        page: CatalogPage {
            number_of_records_matched: result.number_of_records_matched,
            number_of_records_returned: result.number_of_records_returned,
            next_record: result.next_record,
            records,
        },
        warnings,
    })
}
