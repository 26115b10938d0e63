//! # Metadata Dialects
//!
//! Catalog servers describe a record's links in one of two vendor shapes:
//!
//! * **Geonetwork** publishes `dc.URI`, a list of `{ protocol, name, value }`
//!   entries where `name` directly carries the WMS layer name.
//! * **GeoServer** publishes `dc.references`, a single object or a list of
//!   `{ scheme, value }` entries; the WMS layer name has to be read from the
//!   `layers` query parameter of the endpoint URL.
//!
//! A record is classified once into a [`MetadataDialect`] so the normalizer does
//! not re-inspect the raw JSON shape at every step.

use std::borrow::Cow;

use tracing::debug;
use url::form_urlencoded;

use crate::constants::{
    GET_CAPABILITIES_MARKER, THUMBNAIL_NAME, THUMBNAIL_SCHEMES, WMS_GET_MAP_PROTOCOL,
    WMS_LAYERS_PARAM, WMS_SCHEMES,
};
use crate::types::{DublinCore, Reference, UriEntry};

/// The link layout of one record's Dublin Core block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetadataDialect<'a> {
    /// `dc.URI` is present. `references` may also be present and is then used for
    /// fallbacks and GetCapabilities links.
    Geonetwork {
        uris: &'a [UriEntry],
        references: &'a [Reference],
    },
    /// Only `dc.references` is present.
    GeoServer { references: &'a [Reference] },
    /// The record publishes no links at all.
    Bare,
}

impl<'a> MetadataDialect<'a> {
    pub fn classify(dc: &'a DublinCore) -> Self {
        let references = dc.references.as_ref().map(|r| r.as_slice());
        match (dc.uri.as_ref(), references) {
            (Some(uris), references) => MetadataDialect::Geonetwork {
                uris: uris.as_slice(),
                references: references.unwrap_or_default(),
            },
            (None, Some(references)) => MetadataDialect::GeoServer { references },
            (None, None) => MetadataDialect::Bare,
        }
    }

    pub fn uris(&self) -> &'a [UriEntry] {
        match *self {
            MetadataDialect::Geonetwork { uris, .. } => uris,
            _ => &[],
        }
    }

    pub fn references(&self) -> &'a [Reference] {
        match *self {
            MetadataDialect::Geonetwork { references, .. }
            | MetadataDialect::GeoServer { references } => references,
            MetadataDialect::Bare => &[],
        }
    }
}

/// A WMS GetMap endpoint found in a record, before URL resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct WmsCandidate<'a> {
    /// The protocol (Geonetwork) or scheme (GeoServer) it was published under.
    pub kind: &'a str,
    pub url: &'a str,
    pub layer_name: Option<Cow<'a, str>>,
}

/// What a single pass over `dc.URI` found.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UriScan<'a> {
    pub thumbnail: Option<&'a str>,
    pub wms: Option<WmsCandidate<'a>>,
}

/// Scans Geonetwork `URI` entries once; the first match wins for each field.
pub fn scan_uris(uris: &[UriEntry]) -> UriScan<'_> {
    let mut scan = UriScan::default();
    for entry in uris {
        let Some(value) = entry.value.as_deref() else {
            continue;
        };
        if scan.thumbnail.is_none() && entry.name.as_deref() == Some(THUMBNAIL_NAME) {
            scan.thumbnail = Some(value);
        }
        if scan.wms.is_none() && entry.protocol.as_deref() == Some(WMS_GET_MAP_PROTOCOL) {
            scan.wms = Some(WmsCandidate {
                kind: WMS_GET_MAP_PROTOCOL,
                url: value,
                layer_name: entry.name.as_deref().map(Cow::Borrowed),
            });
        }
        if scan.thumbnail.is_some() && scan.wms.is_some() {
            break;
        }
    }
    debug!(
        "URI scan: thumbnail={}, wms={}",
        scan.thumbnail.is_some(),
        scan.wms.is_some()
    );
    scan
}

/// Finds the first GeoServer reference pointing at a WMS endpoint.
pub fn find_wms_reference(references: &[Reference]) -> Option<WmsCandidate<'_>> {
    references.iter().find_map(|reference| {
        let scheme = reference.scheme.as_deref()?;
        let value = reference.value.as_deref()?;
        if !WMS_SCHEMES.contains(&scheme) {
            return None;
        }
        Some(WmsCandidate {
            kind: scheme,
            url: value,
            layer_name: layers_param(value).map(Cow::Owned),
        })
    })
}

/// Finds the first GeoServer reference pointing at a thumbnail image.
pub fn find_thumbnail_reference(references: &[Reference]) -> Option<&str> {
    references.iter().find_map(|reference| {
        let scheme = reference.scheme.as_deref()?;
        if THUMBNAIL_SCHEMES.contains(&scheme) {
            reference.value.as_deref()
        } else {
            None
        }
    })
}

/// All GetCapabilities references as `(scheme, url)` pairs, in input order.
pub fn capabilities_references(references: &[Reference]) -> Vec<(&str, &str)> {
    references
        .iter()
        .filter_map(|reference| {
            let scheme = reference.scheme.as_deref()?;
            let value = reference.value.as_deref()?;
            scheme
                .contains(GET_CAPABILITIES_MARKER)
                .then_some((scheme, value))
        })
        .collect()
}

/// Reads the `layers` query parameter of a WMS endpoint URL.
///
/// The URL may be relative. An exact `layers` key wins over case variants such as
/// `LAYERS`; an empty value counts as missing.
pub fn layers_param(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    let pairs: Vec<(Cow<'_, str>, Cow<'_, str>)> =
        form_urlencoded::parse(query.as_bytes()).collect();

    pairs
        .iter()
        .find(|(key, _)| key == WMS_LAYERS_PARAM)
        .or_else(|| {
            pairs
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(WMS_LAYERS_PARAM))
        })
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
