//! PII Sentinel Server
//!
//! Production server binary for the PII scan service.

mod config;
mod telemetry;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use sentinel_api::{create_router, handlers::health::init_start_time, state::AppState};
use sentinel_engine::ScanEngine;

use crate::config::ServerConfig;
use crate::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load().context("Failed to load configuration")?;

    // Initialize telemetry
    init_telemetry(&config.telemetry)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting PII Sentinel Server"
    );

    // Initialize start time for health checks
    init_start_time();

    // Build application state
    let state = build_app_state(&config)?;

    // Create router
    let app = create_router(state);

    // Bind server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid server address")?;

    info!(address = %addr, "Server listening");

    // Create server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down gracefully");
    Ok(())
}

/// Builds the application state. Fails fast if any built-in detection rule
/// does not compile.
fn build_app_state(config: &ServerConfig) -> Result<Arc<AppState>> {
    let engine = ScanEngine::with_builtin(config.engine.clone())
        .context("Failed to build detection rule registry")?;

    info!(
        rules = engine.registry().len(),
        max_input_chars = config.engine.max_input_chars,
        scan_timeout_ms = config.engine.scan_timeout_ms,
        "Scan engine initialized"
    );

    let state = AppState::builder()
        .engine(Arc::new(engine))
        .config(sentinel_api::state::AppConfig {
            service_name: config.service_name.clone(),
            api_version: "v1".to_string(),
            debug: config.debug,
            cors_origins: config.cors_origins.clone(),
        })
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build app state: {}", e))?;

    Ok(Arc::new(state))
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}
