//! # Sentinel Core
//!
//! Core domain types for the PII Sentinel scanning engine:
//! - PII category taxonomy
//! - Text spans (candidate and resolved) and scan results
//! - The scan error taxonomy

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod error;
pub mod span;

pub use category::PiiCategory;
pub use error::{ScanError, SentinelResult};
pub use span::{CandidateSpan, ResolvedSpan, ScanResult};
