//! Scan orchestrator.
//!
//! The only component exposed to external callers. Sequences scanner,
//! resolver, redactor, and scorer, enforces the input and time budgets, and
//! assembles the final [`ScanResult`].

use crate::cancel::CancelToken;
use crate::config::EngineConfig;
use crate::redactor::redact;
use crate::registry::PatternRegistry;
use crate::resolver::resolve;
use crate::scanner::SpanScanner;
use crate::scorer::{score, ScoreOutcome};
use sentinel_core::{ScanError, ScanResult, SentinelResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// The scan engine.
///
/// Scans are stateless apart from reading the shared, read-only registry;
/// one engine serves any number of concurrent scans.
#[derive(Debug, Clone)]
pub struct ScanEngine {
    registry: Arc<PatternRegistry>,
    config: EngineConfig,
}

impl ScanEngine {
    /// Creates an engine over a prebuilt registry.
    #[must_use]
    pub fn new(registry: Arc<PatternRegistry>, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    /// Creates an engine over the built-in registry.
    pub fn with_builtin(config: EngineConfig) -> SentinelResult<Self> {
        Ok(Self::new(Arc::new(PatternRegistry::builtin()?), config))
    }

    /// Returns the shared registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<PatternRegistry> {
        &self.registry
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scans `text`, enforcing the configured time budget.
    ///
    /// Fails with [`ScanError::InvalidInput`] for empty or oversized input
    /// and [`ScanError::Timeout`] when the budget is exceeded; in the
    /// latter case the in-flight worker is cancelled so it stops promptly.
    pub async fn scan_text(&self, text: &str) -> SentinelResult<ScanResult> {
        self.validate_input(text)?;

        let cancel = CancelToken::new();
        let worker_cancel = cancel.clone();
        let registry = Arc::clone(&self.registry);
        let config = self.config.clone();
        let budget = self.config.scan_timeout();
        let owned = text.to_string();

        let worker = tokio::task::spawn_blocking(move || {
            run_pipeline(&registry, &config, &owned, &worker_cancel)
        });

        match tokio::time::timeout(budget, worker).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(ScanError::Internal(format!(
                "scan worker failed: {join_error}"
            ))),
            Err(_) => {
                cancel.cancel();
                warn!(budget_ms = budget.as_millis() as u64, "scan timed out");
                Err(ScanError::Timeout(format!(
                    "scan exceeded budget of {} ms",
                    budget.as_millis()
                )))
            }
        }
    }

    /// Scans `text` synchronously on the calling thread, without the time
    /// budget. Intended for tests and embedding callers that manage their
    /// own scheduling.
    pub fn scan_blocking(&self, text: &str) -> SentinelResult<ScanResult> {
        self.validate_input(text)?;
        run_pipeline(&self.registry, &self.config, text, &CancelToken::new())
    }

    fn validate_input(&self, text: &str) -> SentinelResult<()> {
        if text.is_empty() {
            return Err(ScanError::InvalidInput("text must not be empty".to_string()));
        }

        let chars = text.chars().count();
        if chars > self.config.max_input_chars {
            return Err(ScanError::InvalidInput(format!(
                "text is {chars} characters, maximum is {}",
                self.config.max_input_chars
            )));
        }

        Ok(())
    }
}

fn run_pipeline(
    registry: &Arc<PatternRegistry>,
    config: &EngineConfig,
    text: &str,
    cancel: &CancelToken,
) -> SentinelResult<ScanResult> {
    let started = Instant::now();

    let scanner = SpanScanner::new(Arc::clone(registry));
    let candidates = scanner.scan(text, cancel)?;
    let spans = resolve(candidates)?;

    let redacted_text = redact(text, &spans);
    let ScoreOutcome {
        score: compliance_score,
        recommendations,
    } = score(&spans, config.min_recommendation_count);

    let duration = started.elapsed();
    debug!(
        spans = spans.len(),
        compliance_score,
        duration_ms = duration.as_millis() as u64,
        "scan complete"
    );

    Ok(ScanResult {
        text: text.to_string(),
        spans,
        compliance_score,
        redacted_text,
        recommendations,
        duration,
    })
}
