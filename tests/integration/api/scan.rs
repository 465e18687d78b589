//! Scan endpoint integration tests.

use crate::common::samples;
use crate::common::server::{create_test_app, create_test_app_with_engine, post_json, post_raw};
use axum::http::StatusCode;
use pii_sentinel::EngineConfig;
use serde_json::json;

/// Tests the canonical contact scenario end to end over HTTP.
#[tokio::test]
async fn test_scan_contact_scenario() {
    let app = create_test_app();

    let (status, body) =
        post_json(app, "/api/v1/scan", json!({ "text": samples::CONTACT_TEXT })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], samples::CONTACT_TEXT);
    assert_eq!(body["redacted_text"], samples::CONTACT_REDACTED);

    let detections = body["pii_detected"].as_array().unwrap();
    assert_eq!(detections.len(), 2);

    assert_eq!(detections[0]["type"], "email");
    assert_eq!(detections[0]["value"], "jane@example.com");
    assert_eq!(detections[0]["position"]["start"], 14);
    assert_eq!(detections[0]["position"]["end"], 30);

    assert_eq!(detections[1]["type"], "phone");
    assert_eq!(detections[1]["value"], "555-123-4567");
    assert_eq!(detections[1]["position"]["start"], 34);
    assert_eq!(detections[1]["position"]["end"], 46);

    assert!(body["compliance_score"].as_f64().unwrap() < 100.0);
    assert!(!body["recommendations"].as_array().unwrap().is_empty());
    assert!(body["processing_time"].is_u64());
}

/// Tests clean text reports full compliance.
#[tokio::test]
async fn test_scan_clean_text() {
    let app = create_test_app();

    let (status, body) =
        post_json(app, "/api/v1/scan", json!({ "text": "Hello, how are you?" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["compliance_score"], 100.0);
    assert_eq!(body["redacted_text"], "Hello, how are you?");
    assert!(body["pii_detected"].as_array().unwrap().is_empty());
    assert!(body["recommendations"].as_array().unwrap().is_empty());
}

/// Tests empty text is a 400 with an `error` message.
#[tokio::test]
async fn test_scan_empty_text() {
    let app = create_test_app();

    let (status, body) = post_json(app, "/api/v1/scan", json!({ "text": "" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("empty"));
}

/// Tests a body without the `text` field behaves like empty text.
#[tokio::test]
async fn test_scan_missing_text_field() {
    let app = create_test_app();

    let (status, body) = post_json(app, "/api/v1/scan", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

/// Tests oversized input is rejected with a 400.
#[tokio::test]
async fn test_scan_oversized_text() {
    let app = create_test_app_with_engine(EngineConfig {
        max_input_chars: 32,
        ..EngineConfig::default()
    });

    let (status, body) = post_json(
        app,
        "/api/v1/scan",
        json!({ "text": "x".repeat(64) }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("maximum"));
}

/// Tests an expired scan budget maps to 504 with an `error` body.
#[tokio::test]
async fn test_scan_timeout_maps_to_gateway_timeout() {
    let app = create_test_app_with_engine(EngineConfig {
        scan_timeout_ms: 1,
        max_input_chars: 2_000_000,
        ..EngineConfig::default()
    });

    let text = "Contact me at jane@example.com or 555-123-4567. ".repeat(16_000);
    let (status, body) = post_json(app, "/api/v1/scan", json!({ "text": text })).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert!(body["error"].as_str().unwrap().contains("budget"));
}

/// Tests a syntactically invalid body is a client error.
#[tokio::test]
async fn test_scan_malformed_json() {
    let app = create_test_app();

    let status = post_raw(app, "/api/v1/scan", "{not json").await;

    assert!(status.is_client_error(), "got {status}");
}

/// Tests multi-byte text round-trips with character offsets.
#[tokio::test]
async fn test_scan_unicode_offsets() {
    let app = create_test_app();
    let text = "联系: jane@example.com";

    let (status, body) = post_json(app, "/api/v1/scan", json!({ "text": text })).await;

    assert_eq!(status, StatusCode::OK);

    let detections = body["pii_detected"].as_array().unwrap();
    assert_eq!(detections.len(), 1);

    let start = detections[0]["position"]["start"].as_u64().unwrap() as usize;
    let end = detections[0]["position"]["end"].as_u64().unwrap() as usize;

    let extracted: String = text.chars().skip(start).take(end - start).collect();
    assert_eq!(extracted, "jane@example.com");
    assert_eq!(body["redacted_text"], "联系: [EMAIL]");
}

/// Tests repeated scans of the same text return identical payloads apart
/// from the timing field.
#[tokio::test]
async fn test_scan_idempotent_modulo_timing() {
    let (_, mut a) = post_json(
        create_test_app(),
        "/api/v1/scan",
        json!({ "text": samples::MIXED_PII }),
    )
    .await;
    let (_, mut b) = post_json(
        create_test_app(),
        "/api/v1/scan",
        json!({ "text": samples::MIXED_PII }),
    )
    .await;

    a["processing_time"] = json!(0);
    b["processing_time"] = json!(0);
    assert_eq!(a, b);
}
