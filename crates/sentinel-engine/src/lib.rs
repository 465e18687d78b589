//! # Sentinel Engine
//!
//! PII detection and compliance-scoring engine: a pattern registry compiled
//! once at startup, a span scanner, a conflict resolver, a redactor, a
//! compliance scorer, and the orchestrator that sequences them under input
//! and time budgets.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cancel;
pub mod config;
pub mod orchestrator;
pub mod redactor;
pub mod registry;
pub mod resolver;
pub mod scanner;
pub mod scorer;

pub use cancel::CancelToken;
pub use config::EngineConfig;
pub use orchestrator::ScanEngine;
pub use redactor::redact;
pub use registry::{PatternRegistry, PatternRegistryBuilder, PatternRule, SpanValidator};
pub use resolver::resolve;
pub use scanner::SpanScanner;
pub use scorer::{category_weight, score, ScoreOutcome};

pub use sentinel_core::{CandidateSpan, PiiCategory, ResolvedSpan, ScanError, ScanResult};
