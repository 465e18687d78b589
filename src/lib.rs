//! # PII Sentinel
//!
//! PII detection, redaction, and compliance scoring, exposed as a library
//! facade and an HTTP service.
//!
//! The workspace is split into:
//! - `sentinel-core`: domain types (categories, spans, errors)
//! - `sentinel-engine`: the scan pipeline (registry, scanner, resolver,
//!   redactor, scorer, orchestrator)
//! - `sentinel-api`: the Axum HTTP layer
//! - `sentinel-server`: the server binary
//!
//! ## Example
//!
//! ```
//! use pii_sentinel::{EngineConfig, ScanEngine};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), pii_sentinel::ScanError> {
//! let engine = ScanEngine::with_builtin(EngineConfig::default())?;
//! let result = engine.scan_text("Contact me at jane@example.com").await?;
//!
//! assert_eq!(result.redacted_text, "Contact me at [EMAIL]");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub use sentinel_core::{
    CandidateSpan, PiiCategory, ResolvedSpan, ScanError, ScanResult, SentinelResult,
};
pub use sentinel_engine::{
    CancelToken, EngineConfig, PatternRegistry, PatternRegistryBuilder, PatternRule, ScanEngine,
    SpanValidator,
};

/// HTTP API layer re-export.
pub use sentinel_api as api;
