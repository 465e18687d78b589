//! Test server setup and request helpers.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pii_sentinel::api::state::{AppConfig, AppState};
use pii_sentinel::api::{create_router, create_test_router};
use pii_sentinel::{EngineConfig, ScanEngine};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Creates a test application with default configuration.
pub fn create_test_app() -> Router {
    create_test_router()
}

/// Creates a test application with a custom engine configuration.
pub fn create_test_app_with_engine(config: EngineConfig) -> Router {
    let engine = ScanEngine::with_builtin(config).expect("built-in registry must compile");

    let state = AppState::builder()
        .engine(Arc::new(engine))
        .config(AppConfig {
            service_name: "pii-sentinel-test".to_string(),
            api_version: "v1".to_string(),
            debug: true,
            cors_origins: vec!["*".to_string()],
        })
        .build()
        .expect("Failed to build app state");

    create_router(Arc::new(state))
}

/// Sends a JSON POST request and returns the status with the parsed body.
pub async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    send(app, request).await
}

/// Sends a POST request with a raw body and returns the status with the
/// parsed body, if any.
pub async fn post_raw(app: Router, path: &str, body: &str) -> StatusCode {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Request failed");
    response.status()
}

/// Sends a GET request and returns the status with the parsed body.
pub async fn get_json(app: Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("Failed to build request");

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, body)
}
