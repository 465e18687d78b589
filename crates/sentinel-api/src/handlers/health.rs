//! Health check handlers.

use crate::response::{HealthCheck, HealthResponse, HealthStatus};
use crate::state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use std::time::Instant;

/// Application start time for uptime calculation.
static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// Initializes the start time.
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Returns the uptime in seconds.
#[must_use]
pub fn uptime_seconds() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

/// Health check handler.
pub async fn health_handler(State(state): State<Arc<AppState>>) -> HealthResponse {
    let registry_check = if state.engine.registry().is_empty() {
        HealthCheck {
            name: "registry".to_string(),
            status: HealthStatus::Unhealthy,
            message: Some("no detection rules loaded".to_string()),
        }
    } else {
        HealthCheck {
            name: "registry".to_string(),
            status: HealthStatus::Healthy,
            message: None,
        }
    };

    HealthResponse::healthy(
        state.config.service_name.clone(),
        env!("CARGO_PKG_VERSION"),
        uptime_seconds(),
    )
    .with_check(registry_check)
}

/// Liveness probe handler.
pub async fn liveness_handler() -> &'static str {
    "OK"
}

/// Readiness probe handler. Ready once the registry holds rules.
pub async fn readiness_handler(
    State(state): State<Arc<AppState>>,
) -> Result<&'static str, (axum::http::StatusCode, &'static str)> {
    if state.engine.registry().is_empty() {
        return Err((
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            "registry empty",
        ));
    }
    Ok("OK")
}

/// Version information response.
#[derive(Debug, serde::Serialize)]
pub struct VersionInfo {
    /// Package name.
    pub name: String,
    /// Version.
    pub version: String,
    /// Number of loaded detection rules.
    pub rules: usize,
}

/// Version handler.
pub async fn version_handler(State(state): State<Arc<AppState>>) -> Json<VersionInfo> {
    Json(VersionInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rules: state.engine.registry().len(),
    })
}
