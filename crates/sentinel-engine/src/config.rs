//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scan engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum accepted input length in characters.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Per-scan wall-clock budget in milliseconds.
    #[serde(default = "default_scan_timeout_ms")]
    pub scan_timeout_ms: u64,

    /// Minimum number of spans a category needs before it contributes a
    /// recommendation.
    #[serde(default = "default_min_recommendation_count")]
    pub min_recommendation_count: usize,
}

impl EngineConfig {
    /// Returns the scan budget as a [`Duration`].
    #[must_use]
    pub fn scan_timeout(&self) -> Duration {
        Duration::from_millis(self.scan_timeout_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            scan_timeout_ms: default_scan_timeout_ms(),
            min_recommendation_count: default_min_recommendation_count(),
        }
    }
}

fn default_max_input_chars() -> usize {
    50_000
}

fn default_scan_timeout_ms() -> u64 {
    2_000
}

fn default_min_recommendation_count() -> usize {
    1
}
