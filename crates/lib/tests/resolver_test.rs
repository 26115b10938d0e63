//! # Reference Resolver Tests
//!
//! Covers the string helpers used to turn published reference URLs into
//! absolute ones.

use geocat::{base_directory, is_absolute, resolve, CatalogSearchContext, ReferenceResolver};

#[test]
fn test_base_directory_strips_last_segment() {
    assert_eq!(
        base_directory("http://demo.geo-solutions.it/geoserver/csw"),
        "http://demo.geo-solutions.it/geoserver"
    );
    assert_eq!(base_directory("http://sample.com/"), "http://sample.com");
}

#[test]
fn test_base_directory_without_slash_is_empty() {
    assert_eq!(base_directory("catalog"), "");
    assert_eq!(base_directory(""), "");
}

#[test]
fn test_is_absolute_checks_http_prefix() {
    assert!(is_absolute("http://sample.com/img.jpg"));
    assert!(is_absolute("https://sample.com/img.jpg"));
    assert!(!is_absolute("/img.jpg"));
    assert!(!is_absolute("img.jpg"));
    assert!(!is_absolute("ftp://sample.com/img.jpg"));
}

#[test]
fn test_absolute_url_passes_through_unchanged() {
    let context = CatalogSearchContext::with_catalog_url("http://other.org/geoserver/csw");
    let url = "https://wms.sample.service/geoserver/wms?layers=a:b";
    assert_eq!(resolve(url, &context), url);
}

#[test]
fn test_relative_url_gets_catalog_directory_prefix() {
    let context =
        CatalogSearchContext::with_catalog_url("http://demo.geo-solutions.it/geoserver/csw");
    assert_eq!(
        resolve("/wms?layers=topp:states", &context),
        "http://demo.geo-solutions.it/geoserver/wms?layers=topp:states"
    );
}

#[test]
fn test_relative_url_against_bare_host_is_still_absolute() {
    let context = CatalogSearchContext::with_catalog_url("http://sample.com");
    let resolved = resolve("/img.jpg", &context);
    assert_eq!(resolved, "http://img.jpg");
    assert!(is_absolute(&resolved));
}

#[test]
fn test_catalog_url_wins_over_url() {
    let context = CatalogSearchContext {
        catalog_url: Some("http://first.org/csw".to_string()),
        url: Some("http://second.org/csw".to_string()),
    };
    assert_eq!(resolve("/img.png", &context), "http://first.org/img.png");

    // An empty catalogURL falls back to url.
    let context = CatalogSearchContext {
        catalog_url: Some(String::new()),
        url: Some("http://second.org/csw".to_string()),
    };
    assert_eq!(resolve("/img.png", &context), "http://second.org/img.png");
}

#[test]
fn test_try_resolve_without_base_url() {
    let context = CatalogSearchContext::default();
    let resolver = ReferenceResolver::new(&context);
    assert_eq!(resolver.try_resolve("/img.png"), None);
    assert_eq!(resolver.resolve("/img.png"), "/img.png");
    assert_eq!(
        resolver.try_resolve("http://sample.com/img.png").as_deref(),
        Some("http://sample.com/img.png")
    );
}
