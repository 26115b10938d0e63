//! # Record Normalization
//!
//! Turns one raw catalog record into a [`CanonicalRecord`]. Geonetwork `URI`
//! entries always take priority for the WMS endpoint and the thumbnail; GeoServer
//! `references` only fill the fields `URI` did not supply. GetCapabilities links
//! always come from `references`.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::dialect::{
    capabilities_references, find_thumbnail_reference, find_wms_reference, scan_uris,
    MetadataDialect, WmsCandidate,
};
use crate::errors::{NormalizationError, NormalizationWarning};
use crate::resolver::{is_absolute, ReferenceResolver};
use crate::types::{
    CanonicalRecord, CatalogSearchContext, DublinCore, RawCatalogRecord, ReferenceParams,
    ServiceReference,
};

/// A canonical record together with the non-fatal problems found building it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub record: CanonicalRecord,
    pub warnings: Vec<NormalizationWarning>,
}

/// Normalizes records found by one catalog search.
#[derive(Debug, Clone, Copy)]
pub struct RecordNormalizer<'a> {
    resolver: ReferenceResolver<'a>,
}

impl<'a> RecordNormalizer<'a> {
    pub fn new(context: &'a CatalogSearchContext) -> Self {
        Self {
            resolver: ReferenceResolver::new(context),
        }
    }

    /// Normalizes a record, failing if it has no Dublin Core block.
    pub fn normalize(&self, record: &RawCatalogRecord) -> Result<Normalized, NormalizationError> {
        let dc = record
            .dc
            .as_ref()
            .ok_or(NormalizationError::MissingMetadata)?;
        let mut normalized = self.normalize_dc(dc);
        normalized.record.bounding_box = record.bounding_box.clone();
        Ok(normalized)
    }

    /// Normalizes a record; a missing Dublin Core block yields an empty record
    /// (bounding box kept) and a [`NormalizationWarning::MissingMetadata`].
    pub fn normalize_lenient(&self, record: &RawCatalogRecord) -> Normalized {
        match self.normalize(record) {
            Ok(normalized) => normalized,
            Err(e) => {
                warn!("Emitting an empty record: {e}");
                Normalized {
                    record: CanonicalRecord {
                        bounding_box: record.bounding_box.clone(),
                        ..Default::default()
                    },
                    warnings: vec![NormalizationWarning::MissingMetadata],
                }
            }
        }
    }

    /// Normalizes one record of a search page given as raw JSON.
    ///
    /// A record that does not match the expected shape (a non-string title, an
    /// extent without four numbers, ...) yields an empty record and a
    /// [`NormalizationWarning::MalformedRecord`].
    pub fn normalize_value(&self, value: &Value) -> Normalized {
        match RawCatalogRecord::deserialize(value) {
            Ok(record) => self.normalize_lenient(&record),
            Err(e) => {
                warn!("Emitting an empty record for an unreadable catalog record: {e}");
                Normalized {
                    record: CanonicalRecord::default(),
                    warnings: vec![NormalizationWarning::MalformedRecord {
                        reason: e.to_string(),
                    }],
                }
            }
        }
    }

    fn normalize_dc(&self, dc: &DublinCore) -> Normalized {
        let dialect = MetadataDialect::classify(dc);
        let references = dialect.references();
        let mut warnings = Vec::new();

        let scan = scan_uris(dialect.uris());
        let wms = scan.wms.or_else(|| {
            let candidate = find_wms_reference(references);
            if candidate.is_some() {
                debug!("WMS endpoint taken from dc.references");
            }
            candidate
        });
        let thumbnail = scan
            .thumbnail
            .or_else(|| find_thumbnail_reference(references));

        let mut service_references: Vec<ServiceReference> = capabilities_references(references)
            .into_iter()
            .map(|(scheme, url)| ServiceReference {
                kind: scheme.to_string(),
                url: self.resolve(url, &mut warnings),
                params: None,
            })
            .collect();

        if let Some(wms) = wms {
            service_references.push(self.wms_reference(wms, &mut warnings));
        }

        let thumbnail = thumbnail.map(|url| self.resolve(url, &mut warnings));

        for warning in &warnings {
            warn!(
                "Record '{}': {warning}",
                dc.identifier.as_deref().unwrap_or("<no identifier>")
            );
        }

        Normalized {
            record: CanonicalRecord {
                title: dc.title.clone(),
                description: dc.summary.clone(),
                identifier: dc.identifier.clone(),
                thumbnail,
                tags: dc.subject.as_ref().map(|s| s.as_slice().to_vec()),
                bounding_box: None,
                references: service_references,
            },
            warnings,
        }
    }

    fn wms_reference(
        &self,
        wms: WmsCandidate<'_>,
        warnings: &mut Vec<NormalizationWarning>,
    ) -> ServiceReference {
        if wms.layer_name.is_none() {
            warnings.push(NormalizationWarning::MissingLayerName {
                url: wms.url.to_string(),
            });
        }
        ServiceReference {
            kind: wms.kind.to_string(),
            url: self.resolve(wms.url, warnings),
            params: Some(ReferenceParams {
                name: wms.layer_name.map(|name| name.into_owned()),
            }),
        }
    }

    // Warns whenever the result is still relative: no base URL at all, or a base
    // URL without any `/` to take a directory from.
    fn resolve(&self, url: &str, warnings: &mut Vec<NormalizationWarning>) -> String {
        let resolved = self.resolver.resolve(url);
        if !is_absolute(&resolved) {
            warnings.push(NormalizationWarning::UnresolvedRelativeUrl {
                url: url.to_string(),
            });
        }
        resolved
    }
}

/// Normalizes a single record against `context`, failing on a missing `dc` block.
pub fn normalize_record(
    record: &RawCatalogRecord,
    context: &CatalogSearchContext,
) -> Result<Normalized, NormalizationError> {
    RecordNormalizer::new(context).normalize(record)
}

/// Normalizes a single record against `context`, never failing.
pub fn normalize_record_lenient(
    record: &RawCatalogRecord,
    context: &CatalogSearchContext,
) -> Normalized {
    RecordNormalizer::new(context).normalize_lenient(record)
}
