//! API routes.

use crate::{
    handlers::{health, scan},
    middleware::{cors::cors_layer_with_origins, logging::logging_layer},
    state::AppState,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer_with_origins(&state.config.cors_origins);

    Router::new()
        // Health endpoints
        .nest("/health", health_routes())
        // API v1
        .nest("/api/v1", api_v1_routes())
        // Middleware
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(middleware::from_fn(logging_layer))
        .with_state(state)
}

/// Health routes.
fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/live", get(health::liveness_handler))
        .route("/ready", get(health::readiness_handler))
        .route("/version", get(health::version_handler))
}

/// API v1 routes.
fn api_v1_routes() -> Router<Arc<AppState>> {
    Router::new().route("/scan", post(scan::scan_handler))
}

/// Creates a router over the built-in registry with default configuration,
/// for tests.
pub fn create_test_router() -> Router {
    use sentinel_engine::{EngineConfig, ScanEngine};

    let engine = ScanEngine::with_builtin(EngineConfig::default())
        .expect("built-in registry must compile");
    let state = AppState::builder()
        .engine(Arc::new(engine))
        .build()
        .expect("test state");

    create_router(Arc::new(state))
}
