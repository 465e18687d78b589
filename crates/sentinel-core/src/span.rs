//! Text spans and scan results.
//!
//! All offsets are CHARACTER indices into the original input text, not byte
//! indices, so they stay correct for callers working with multi-byte
//! encodings.

use crate::category::PiiCategory;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A candidate PII match produced by the span scanner, before conflict
/// resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSpan {
    /// Detected category.
    pub category: PiiCategory,
    /// The exact matched substring.
    pub value: String,
    /// Start offset (character index, inclusive).
    pub start: usize,
    /// End offset (character index, exclusive). Always greater than `start`.
    pub end: usize,
    /// Confidence score in `[0, 1]`.
    pub confidence: f64,
}

impl CandidateSpan {
    /// Creates a new candidate span.
    #[must_use]
    pub fn new(
        category: PiiCategory,
        value: impl Into<String>,
        start: usize,
        end: usize,
        confidence: f64,
    ) -> Self {
        debug_assert!(start < end, "span must be non-empty");
        Self {
            category,
            value: value.into(),
            start,
            end,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Returns the span length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns true if this span overlaps `other`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A candidate span that survived conflict resolution.
///
/// Resolved span sets are pairwise non-overlapping and ordered by ascending
/// start offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSpan {
    /// Detected category.
    pub category: PiiCategory,
    /// The exact matched substring.
    pub value: String,
    /// Start offset (character index, inclusive).
    pub start: usize,
    /// End offset (character index, exclusive).
    pub end: usize,
    /// Confidence score in `[0, 1]`.
    pub confidence: f64,
}

impl ResolvedSpan {
    /// Returns the span length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl From<CandidateSpan> for ResolvedSpan {
    fn from(span: CandidateSpan) -> Self {
        Self {
            category: span.category,
            value: span.value,
            start: span.start,
            end: span.end,
            confidence: span.confidence,
        }
    }
}

/// The complete outcome of one scan.
///
/// Constructed once per request by the orchestrator and immutable
/// thereafter; ownership passes to the caller that issued the request.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// The original input text, unmodified.
    pub text: String,
    /// Resolved spans, non-overlapping, ordered by start offset.
    pub spans: Vec<ResolvedSpan>,
    /// Aggregate compliance score in `[0, 100]`; 100 means no PII found.
    pub compliance_score: f64,
    /// The input with each span replaced by its category placeholder.
    pub redacted_text: String,
    /// Remediation recommendations, one per detected category, ordered by
    /// descending penalty contribution.
    pub recommendations: Vec<String>,
    /// Wall-clock duration of the scan.
    pub duration: Duration,
}
