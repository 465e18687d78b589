//! Conflict resolver.
//!
//! Reconciles overlapping candidate spans into a non-overlapping set:
//! candidates are sorted by start offset (confidence descending, then
//! longer-span-first on ties) and swept left to right. A candidate that
//! overlaps the last accepted span is dropped unless it has strictly higher
//! confidence, in which case it evicts the accepted span. Evicted spans are
//! removed from the pool and the sweep repeats until a fixed point, bounded
//! by the candidate count; exceeding the bound is reported as a timeout
//! rather than looping unbounded.

use sentinel_core::{CandidateSpan, ResolvedSpan, ScanError, SentinelResult};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Resolves candidates into a non-overlapping span set ordered by start
/// offset.
pub fn resolve(mut candidates: Vec<CandidateSpan>) -> SentinelResult<Vec<ResolvedSpan>> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| {
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| b.end.cmp(&a.end))
    });

    let max_passes = candidates.len() + 1;
    let mut pool = candidates;

    for _ in 0..max_passes {
        let (accepted, evicted) = sweep(&pool);

        if evicted.is_empty() {
            return Ok(accepted
                .into_iter()
                .map(|i| ResolvedSpan::from(pool[i].clone()))
                .collect());
        }

        let evicted: HashSet<usize> = evicted.into_iter().collect();
        pool = pool
            .into_iter()
            .enumerate()
            .filter_map(|(i, c)| (!evicted.contains(&i)).then_some(c))
            .collect();
    }

    Err(ScanError::Timeout(
        "conflict resolution did not reach a fixed point".to_string(),
    ))
}

/// One left-to-right sweep over a sorted pool. Returns accepted and evicted
/// pool indices; indices the sweep dropped without evicting stay in the
/// pool for the next pass.
fn sweep(pool: &[CandidateSpan]) -> (Vec<usize>, Vec<usize>) {
    let mut accepted: Vec<usize> = Vec::new();
    let mut evicted: Vec<usize> = Vec::new();

    for (i, candidate) in pool.iter().enumerate() {
        // Evict lower-confidence accepted spans this candidate overlaps.
        while let Some(&last) = accepted.last() {
            let last_span = &pool[last];
            if candidate.start < last_span.end && candidate.confidence > last_span.confidence {
                accepted.pop();
                evicted.push(last);
            } else {
                break;
            }
        }

        match accepted.last() {
            Some(&last) if candidate.start < pool[last].end => {
                // Overlaps an accepted span of higher or equal confidence.
            }
            _ => accepted.push(i),
        }
    }

    (accepted, evicted)
}
