//! # Catalog Data Model
//!
//! Raw records as returned by a CSW catalog search (in either vendor shape), the
//! search context used to resolve relative links, and the canonical records handed
//! to catalog-listing UIs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON value that vendors publish either as a single item or as a list.
///
/// `Many` is tried first so an array is never mistaken for a struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// Views the value as a slice; a single item becomes a one-element slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => std::slice::from_ref(item),
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

/// The spatial extent of a record, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// `[minx, miny, maxx, maxy]`
    pub extent: [f64; 4],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<String>,
    /// Vendor keys other than `extent` and `crs`, kept as published.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BoundingBox {
    pub fn new(extent: [f64; 4], crs: impl Into<String>) -> Self {
        Self {
            extent,
            crs: Some(crs.into()),
            extra: Map::new(),
        }
    }
}

/// A Geonetwork-style link entry (`dc.URI`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UriEntry {
    #[serde(default)]
    pub protocol: Option<String>,
    /// For WMS entries this is the layer name, for thumbnails the literal `thumbnail`.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A GeoServer-style link entry (`dc.references`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// The Dublin Core block of a catalog record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DublinCore {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "abstract")]
    pub summary: Option<String>,
    #[serde(default)]
    pub subject: Option<OneOrMany<String>>,
    #[serde(default, rename = "URI")]
    pub uri: Option<OneOrMany<UriEntry>>,
    #[serde(default)]
    pub references: Option<OneOrMany<Reference>>,
}

/// One record of a catalog search result page, in whichever vendor shape it came.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCatalogRecord {
    #[serde(default)]
    pub bounding_box: Option<BoundingBox>,
    #[serde(default)]
    pub dc: Option<DublinCore>,
}

/// Where the search was run; used to turn relative links into absolute ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSearchContext {
    #[serde(default, rename = "catalogURL", skip_serializing_if = "Option::is_none")]
    pub catalog_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl CatalogSearchContext {
    pub fn with_catalog_url(catalog_url: impl Into<String>) -> Self {
        Self {
            catalog_url: Some(catalog_url.into()),
            url: None,
        }
    }

    /// The base URL for resolution: `catalogURL` when set and non-empty, else `url`.
    pub fn base_url(&self) -> Option<&str> {
        self.catalog_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or_else(|| self.url.as_deref().filter(|u| !u.is_empty()))
    }
}

/// The `result` block of a catalog search response.
///
/// Records stay as raw JSON here and are converted one by one, so a single
/// malformed record cannot fail the whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResult {
    #[serde(default)]
    pub records: Option<Vec<Value>>,
    #[serde(default)]
    pub number_of_records_matched: Option<u64>,
    #[serde(default)]
    pub number_of_records_returned: Option<u64>,
    #[serde(default)]
    pub next_record: Option<u64>,
}

/// A full catalog search response: the options it was run with and its result page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub search_options: CatalogSearchContext,
    #[serde(default)]
    pub result: Option<CatalogResult>,
}

/// Parameters attached to a service reference (the WMS layer name).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceParams {
    pub name: Option<String>,
}

/// A typed, absolute service endpoint of a canonical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceReference {
    /// The protocol or scheme the endpoint was published under.
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<ReferenceParams>,
}

/// The vendor-neutral record consumed by catalog UIs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub identifier: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Option<Vec<String>>,
    pub bounding_box: Option<BoundingBox>,
    #[serde(default)]
    pub references: Vec<ServiceReference>,
}

/// A normalized result page, carrying the service's paging counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_records_matched: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_records_returned: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_record: Option<u64>,
    pub records: Vec<CanonicalRecord>,
}
