//! Span scanner.
//!
//! Runs every registered rule over the input and emits one candidate span
//! per match, at character-correct offsets. Candidate sets from different
//! rules are concatenated as-is; overlap handling belongs to the resolver.

use crate::cancel::CancelToken;
use crate::registry::PatternRegistry;
use sentinel_core::{CandidateSpan, ScanError, SentinelResult};
use std::sync::Arc;

/// Confidence boost applied when a structural validator passes.
const VALIDATOR_BOOST: f64 = 0.05;

/// Digit-only matches at or below this length are considered ambiguous.
const SHORT_NUMERIC_LEN: usize = 8;

/// Damping factor for ambiguous short numeric matches.
const SHORT_NUMERIC_DAMP: f64 = 0.8;

/// Stateless scanner over a shared registry.
#[derive(Debug, Clone)]
pub struct SpanScanner {
    registry: Arc<PatternRegistry>,
}

impl SpanScanner {
    /// Creates a scanner over the given registry.
    #[must_use]
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self { registry }
    }

    /// Finds every candidate span in `text`.
    ///
    /// The cancellation token is checked between per-rule passes; a
    /// cancelled scan returns [`ScanError::Cancelled`] without finishing
    /// the remaining rules. Empty input yields an empty candidate set.
    pub fn scan(&self, text: &str, cancel: &CancelToken) -> SentinelResult<Vec<CandidateSpan>> {
        let mut candidates = Vec::new();

        for compiled in self.registry.rules() {
            if cancel.is_cancelled() {
                return Err(ScanError::Cancelled);
            }

            let rule = &compiled.rule;
            for m in compiled.regex().find_iter(text) {
                let value = m.as_str();

                let mut confidence = rule.base_confidence;
                match rule.validator {
                    Some(validator) => {
                        if !validator.validate(value) {
                            continue;
                        }
                        confidence = (confidence + VALIDATOR_BOOST).min(1.0);
                    }
                    None => {
                        if is_short_numeric(value) {
                            confidence *= SHORT_NUMERIC_DAMP;
                        }
                    }
                }

                let (start, end) = char_range(text, m.start(), m.end());
                candidates.push(CandidateSpan::new(
                    rule.category.clone(),
                    value,
                    start,
                    end,
                    confidence,
                ));
            }
        }

        tracing::trace!(candidates = candidates.len(), "scan pass complete");
        Ok(candidates)
    }
}

fn is_short_numeric(value: &str) -> bool {
    value.len() <= SHORT_NUMERIC_LEN && value.chars().all(|c| c.is_ascii_digit())
}

/// Converts a byte range reported by the regex engine into a character
/// range over the same text.
fn char_range(text: &str, byte_start: usize, byte_end: usize) -> (usize, usize) {
    let start = text[..byte_start].chars().count();
    let len = text[byte_start..byte_end].chars().count();
    (start, start + len)
}
