//! # Normalize Command Tests
//!
//! Runs the `normalize` pipeline end to end against payloads served by a mock
//! HTTP server or written to temporary files.

use anyhow::Result;
use geocat::{CatalogPage, NormalizationError};
use geocat_cli::{
    config::AppConfig, errors::CliError, render, run_normalize, source::PayloadSource,
    NormalizeOptions,
};
use geocat_test_utils::{
    catalog_json, expected_canonical_record, geonetwork_record_json, geoserver_record_json,
    record_json, setup_tracing,
};
use serde_json::json;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn options(source: PayloadSource) -> NormalizeOptions {
    NormalizeOptions {
        source,
        catalog_url: None,
        strict: false,
    }
}

fn payload_file(payload: &serde_json::Value) -> Result<NamedTempFile> {
    let file = NamedTempFile::new()?;
    std::fs::write(file.path(), payload.to_string())?;
    Ok(file)
}

#[test]
fn test_payload_source_from_args() {
    assert_eq!(PayloadSource::from_args(None, None), PayloadSource::Stdin);
    assert_eq!(
        PayloadSource::from_args(Some(PathBuf::from("-")), None),
        PayloadSource::Stdin
    );
    assert_eq!(
        PayloadSource::from_args(Some(PathBuf::from("page.json")), None),
        PayloadSource::File(PathBuf::from("page.json"))
    );
    assert_eq!(
        PayloadSource::from_args(None, Some("http://x.org/page".to_string())),
        PayloadSource::Url("http://x.org/page".to_string())
    );
}

#[tokio::test]
async fn test_normalize_from_url() -> Result<()> {
    // --- Arrange ---
    setup_tracing();
    let server = MockServer::start().await;
    let payload = catalog_json(vec![geonetwork_record_json(), geoserver_record_json()], None);
    Mock::given(method("GET"))
        .and(path("/catalog/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .mount(&server)
        .await;

    // --- Act ---
    let source = PayloadSource::Url(server.uri() + "/catalog/search");
    let report = run_normalize(&options(source), &AppConfig::default()).await?;

    // --- Assert ---
    let report = report.expect("records are present");
    assert_eq!(
        report.page.records,
        vec![expected_canonical_record(), expected_canonical_record()]
    );
    assert_eq!(report.page.number_of_records_matched, Some(12));
    assert!(report.warnings.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_normalize_fetch_error() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalog/search"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such catalog"))
        .mount(&server)
        .await;

    let source = PayloadSource::Url(server.uri() + "/catalog/search");
    let result = run_normalize(&options(source), &AppConfig::default()).await;

    match result {
        Err(CliError::FetchFailed { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "no such catalog");
        }
        other => panic!("expected FetchFailed, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_normalize_invalid_payload() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalog/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let source = PayloadSource::Url(server.uri() + "/catalog/search");
    let result = run_normalize(&options(source), &AppConfig::default()).await;

    assert!(matches!(
        result,
        Err(CliError::Normalization(NormalizationError::Json(_)))
    ));
    Ok(())
}

#[tokio::test]
async fn test_normalize_from_file_with_catalog_url_override() -> Result<()> {
    let relative = record_json(json!({
        "references": [{ "scheme": "OGC:WMS", "value": "/wms?layers=topp:states" }]
    }));
    let file = payload_file(&catalog_json(vec![relative], Some("http://ignored.org/csw")))?;

    let options = NormalizeOptions {
        source: PayloadSource::File(file.path().to_path_buf()),
        catalog_url: Some("http://override.org/geoserver/csw".to_string()),
        strict: false,
    };
    let report = run_normalize(&options, &AppConfig::default())
        .await?
        .expect("records are present");

    assert_eq!(
        report.page.records[0].references[0].url,
        "http://override.org/geoserver/wms?layers=topp:states"
    );
    Ok(())
}

#[tokio::test]
async fn test_config_catalog_url_applies_when_payload_has_none() -> Result<()> {
    let relative = record_json(json!({
        "references": { "scheme": "thumbnail", "value": "/thumbs/states.png" }
    }));
    let file = payload_file(&catalog_json(vec![relative], None))?;
    let config = AppConfig {
        catalog_url: Some("http://configured.org/geonetwork/srv/csw".to_string()),
        ..AppConfig::default()
    };

    let report = run_normalize(&options(PayloadSource::File(file.path().to_path_buf())), &config)
        .await?
        .expect("records are present");

    assert_eq!(
        report.page.records[0].thumbnail.as_deref(),
        Some("http://configured.org/geonetwork/srv/thumbs/states.png")
    );
    assert!(report.warnings.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_strict_mode_fails_on_warnings() -> Result<()> {
    let no_layers = record_json(json!({
        "references": [{ "scheme": "OGC:WMS", "value": "http://wms.sample.org/wms" }]
    }));
    let file = payload_file(&catalog_json(vec![no_layers], None))?;
    let source = PayloadSource::File(file.path().to_path_buf());

    let lenient = run_normalize(&options(source.clone()), &AppConfig::default()).await?;
    assert_eq!(lenient.map(|r| r.warnings.len()), Some(1));

    let strict = NormalizeOptions {
        source,
        catalog_url: None,
        strict: true,
    };
    let result = run_normalize(&strict, &AppConfig::default()).await;
    assert!(matches!(result, Err(CliError::StrictWarnings { count: 1 })));
    Ok(())
}

#[tokio::test]
async fn test_missing_file_is_a_read_error() {
    let source = PayloadSource::File(PathBuf::from("/definitely/not/here/page.json"));
    let result = run_normalize(&options(source), &AppConfig::default()).await;
    assert!(matches!(result, Err(CliError::Read { .. })));
}

#[tokio::test]
async fn test_missing_records_render_as_null() -> Result<()> {
    let file = payload_file(&json!({ "searchOptions": {}, "result": {} }))?;
    let report =
        run_normalize(&options(PayloadSource::File(file.path().to_path_buf())), &AppConfig::default())
            .await?;

    assert!(report.is_none());
    assert_eq!(render(report.as_ref(), false)?, "null");
    Ok(())
}

#[tokio::test]
async fn test_rendered_page_round_trips() -> Result<()> {
    let file = payload_file(&catalog_json(vec![geoserver_record_json()], None))?;
    let report =
        run_normalize(&options(PayloadSource::File(file.path().to_path_buf())), &AppConfig::default())
            .await?;

    let rendered = render(report.as_ref(), true)?;
    let page: CatalogPage = serde_json::from_str(&rendered)?;

    assert_eq!(page.records, vec![expected_canonical_record()]);
    assert_eq!(page.number_of_records_returned, Some(1));
    assert_eq!(page.next_record, Some(2));
    Ok(())
}
