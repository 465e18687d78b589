//! HTTP API layer for the PII scan service.
//!
//! This crate provides:
//! - REST API with Axum
//! - Scan and health handlers
//! - CORS and request logging middleware
//! - Error mapping from engine errors to the wire contract

pub mod error;
pub mod routes;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod response;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::{create_router, create_test_router};
pub use state::{AppConfig, AppState};
pub use response::{HealthResponse, HealthStatus};
