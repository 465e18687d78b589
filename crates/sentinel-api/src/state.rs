//! Application state.

use sentinel_engine::ScanEngine;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The scan engine.
    pub engine: Arc<ScanEngine>,
    /// Application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Creates a new application state builder.
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Service name.
    pub service_name: String,
    /// API version.
    pub api_version: String,
    /// Enable debug mode.
    pub debug: bool,
    /// CORS allowed origins (`*` means any).
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "pii-sentinel".to_string(),
            api_version: "v1".to_string(),
            debug: false,
            cors_origins: vec!["*".to_string()],
        }
    }
}

/// Builder for [`AppState`].
#[derive(Default)]
pub struct AppStateBuilder {
    engine: Option<Arc<ScanEngine>>,
    config: AppConfig,
}

impl AppStateBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scan engine.
    #[must_use]
    pub fn engine(mut self, engine: Arc<ScanEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the state.
    pub fn build(self) -> Result<AppState, &'static str> {
        Ok(AppState {
            engine: self.engine.ok_or("engine is required")?,
            config: self.config,
        })
    }
}
