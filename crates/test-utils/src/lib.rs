//! # Shared Test Fixtures
//!
//! Sample catalog records in both vendor shapes, catalog payload builders and a
//! one-time tracing setup, shared by the tests of every crate in the workspace.

use geocat::{BoundingBox, CanonicalRecord, RawCatalogRecord, ReferenceParams, ServiceReference};
use serde_json::{json, Value};
use std::sync::Once;

pub const SAMPLE_WMS_URL: &str =
    "http://wms.sample.service:80/geoserver/wms?SERVICE=WMS&layers=workspace:layername";
pub const SAMPLE_THUMBNAIL_URL: &str = "http://sample.com/img.jpg";
pub const SAMPLE_LAYER_NAME: &str = "workspace:layername";

static INIT: Once = Once::new();

/// Installs a test-writer tracing subscriber once per test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// --- Raw Records ---

pub fn sample_bounding_box() -> Value {
    json!({
        "extent": [10.686, 44.931, 46.693, 12.54],
        "crs": "EPSG:4326"
    })
}

/// A Dublin Core block with the shared descriptive fields and `links` merged in.
fn dc_with(links: Value) -> Value {
    let mut dc = json!({
        "identifier": "test-identifier",
        "title": "sample title",
        "abstract": "sample abstract",
        "subject": ["subject1", "subject2"]
    });
    if let (Some(dc), Some(links)) = (dc.as_object_mut(), links.as_object()) {
        dc.extend(links.clone());
    }
    dc
}

/// A record JSON value with the sample bounding box and the given link block.
pub fn record_json(links: Value) -> Value {
    json!({
        "boundingBox": sample_bounding_box(),
        "dc": dc_with(links)
    })
}

/// The sample layer published Geonetwork style (`dc.URI`).
pub fn geonetwork_record_json() -> Value {
    record_json(json!({
        "URI": [
            {
                "protocol": "OGC:WMS-1.1.1-http-get-map",
                "name": SAMPLE_LAYER_NAME,
                "value": SAMPLE_WMS_URL
            },
            {
                "protocol": "image/png",
                "name": "thumbnail",
                "value": SAMPLE_THUMBNAIL_URL
            }
        ]
    }))
}

/// The same layer published GeoServer style (`dc.references`).
pub fn geoserver_record_json() -> Value {
    record_json(json!({
        "references": [
            {
                "scheme": "OGC:WMS-1.1.1-http-get-map",
                "value": SAMPLE_WMS_URL
            },
            {
                "scheme": "WWW:LINK-1.0-http--image-thumbnail",
                "value": SAMPLE_THUMBNAIL_URL
            }
        ]
    }))
}

pub fn raw_record(value: Value) -> RawCatalogRecord {
    serde_json::from_value(value).expect("fixture must deserialize into a RawCatalogRecord")
}

pub fn geonetwork_record() -> RawCatalogRecord {
    raw_record(geonetwork_record_json())
}

pub fn geoserver_record() -> RawCatalogRecord {
    raw_record(geoserver_record_json())
}

// --- Expected Output ---

/// What both sample records normalize to.
pub fn expected_canonical_record() -> CanonicalRecord {
    CanonicalRecord {
        title: Some("sample title".to_string()),
        description: Some("sample abstract".to_string()),
        identifier: Some("test-identifier".to_string()),
        thumbnail: Some(SAMPLE_THUMBNAIL_URL.to_string()),
        tags: Some(vec!["subject1".to_string(), "subject2".to_string()]),
        bounding_box: Some(BoundingBox::new(
            [10.686, 44.931, 46.693, 12.54],
            "EPSG:4326",
        )),
        references: vec![ServiceReference {
            kind: "OGC:WMS-1.1.1-http-get-map".to_string(),
            url: SAMPLE_WMS_URL.to_string(),
            params: Some(ReferenceParams {
                name: Some(SAMPLE_LAYER_NAME.to_string()),
            }),
        }],
    }
}

// --- Catalog Payloads ---

/// A catalog search response wrapping `records`, optionally with a `catalogURL`.
pub fn catalog_json(records: Vec<Value>, catalog_url: Option<&str>) -> Value {
    let search_options = match catalog_url {
        Some(url) => json!({ "catalogURL": url }),
        None => json!({}),
    };
    let returned = records.len();
    json!({
        "searchOptions": search_options,
        "result": {
            "records": records,
            "numberOfRecordsMatched": 12,
            "numberOfRecordsReturned": returned,
            "nextRecord": returned + 1
        }
    })
}
