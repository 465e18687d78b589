//! Redactor.
//!
//! Replaces each resolved span with its category placeholder, copying all
//! uncovered text verbatim. Splicing is done over characters, not bytes, so
//! multi-byte neighbors of a span boundary are never corrupted.

use sentinel_core::ResolvedSpan;

/// Produces a redacted copy of `text`.
///
/// `spans` must be non-overlapping and ordered by ascending start offset,
/// which is exactly what the resolver guarantees.
#[must_use]
pub fn redact(text: &str, spans: &[ResolvedSpan]) -> String {
    if spans.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    let mut cursor = 0usize;

    for span in spans {
        for _ in cursor..span.start {
            if let Some(c) = chars.next() {
                out.push(c);
            }
        }
        out.push_str(&span.category.placeholder());
        for _ in span.start..span.end {
            chars.next();
        }
        cursor = span.end;
    }

    out.extend(chars);
    out
}
