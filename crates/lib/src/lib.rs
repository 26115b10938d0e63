//! # geocat: Catalog Record Normalization
//!
//! CSW catalogs return search results in different vendor shapes: Geonetwork
//! publishes links as `dc.URI` entries, GeoServer as `dc.references`. This crate
//! turns either shape into one [`CanonicalRecord`] (title, description, tags,
//! thumbnail, bounding box and typed, absolute service references) that catalog
//! UIs can display without knowing which server answered.
//!
//! Everything here is pure data shaping: no I/O, no shared state between calls.

pub mod catalog;
pub mod constants;
pub mod dialect;
pub mod errors;
pub mod normalize;
pub mod resolver;
pub mod types;

pub use catalog::{
    catalog_to_page, catalog_to_records, parse_catalog, CatalogReport, RecordWarning,
};
pub use errors::{NormalizationError, NormalizationWarning};
pub use normalize::{normalize_record, normalize_record_lenient, Normalized, RecordNormalizer};
pub use resolver::{base_directory, is_absolute, resolve, ReferenceResolver};
pub use types::{
    BoundingBox, CanonicalRecord, Catalog, CatalogPage, CatalogResult, CatalogSearchContext,
    DublinCore, OneOrMany, RawCatalogRecord, Reference, ReferenceParams, ServiceReference,
    UriEntry,
};
