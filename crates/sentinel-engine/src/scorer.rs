//! Compliance scorer.
//!
//! Converts a resolved span set into a 0–100 compliance score plus ordered
//! remediation recommendations. Scoring starts at 100 and subtracts a
//! category-weighted penalty scaled by each span's confidence;
//! higher-sensitivity categories (SSN, payment cards) weigh more than
//! low-sensitivity ones (IP addresses). Identical span sets always produce
//! identical output.

use sentinel_core::{PiiCategory, ResolvedSpan};
use std::collections::HashMap;

/// Weight applied per detected span of a category.
#[must_use]
pub fn category_weight(category: &PiiCategory) -> f64 {
    match category {
        PiiCategory::Ssn => 30.0,
        PiiCategory::CreditCard => 28.0,
        PiiCategory::Name => 12.0,
        PiiCategory::Email => 10.0,
        PiiCategory::Phone => 10.0,
        PiiCategory::IpAddress => 5.0,
        PiiCategory::Other(_) => 8.0,
    }
}

/// Score and recommendations for one span set.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutcome {
    /// Compliance score in `[0, 100]`.
    pub score: f64,
    /// Recommendations ordered by descending aggregate penalty.
    pub recommendations: Vec<String>,
}

/// Scores a resolved span set.
///
/// `min_count` is the minimum number of spans a category needs before it
/// contributes a recommendation.
#[must_use]
pub fn score(spans: &[ResolvedSpan], min_count: usize) -> ScoreOutcome {
    if spans.is_empty() {
        return ScoreOutcome {
            score: 100.0,
            recommendations: Vec::new(),
        };
    }

    let mut by_category: HashMap<PiiCategory, (f64, usize)> = HashMap::new();
    let mut total_penalty = 0.0;

    for span in spans {
        let penalty = category_weight(&span.category) * span.confidence;
        total_penalty += penalty;
        let entry = by_category.entry(span.category.clone()).or_insert((0.0, 0));
        entry.0 += penalty;
        entry.1 += 1;
    }

    let mut present: Vec<(PiiCategory, f64)> = by_category
        .into_iter()
        .filter(|(_, (_, count))| *count >= min_count.max(1))
        .map(|(category, (penalty, _))| (category, penalty))
        .collect();

    // Descending penalty; wire name breaks ties so ordering stays stable.
    present.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.as_str().cmp(b.0.as_str()))
    });

    ScoreOutcome {
        score: (100.0 - total_penalty).clamp(0.0, 100.0),
        recommendations: present
            .into_iter()
            .map(|(category, _)| recommendation_for(&category))
            .collect(),
    }
}

fn recommendation_for(category: &PiiCategory) -> String {
    match category {
        PiiCategory::Ssn => {
            "Remove or tokenize Social Security numbers; store them only in systems \
             approved for regulated identifiers."
                .to_string()
        }
        PiiCategory::CreditCard => {
            "Apply stricter access controls to payment card numbers and follow PCI-DSS \
             handling before this text is shared."
                .to_string()
        }
        PiiCategory::Email => {
            "Mask email addresses or confirm consent before passing this text to \
             downstream services."
                .to_string()
        }
        PiiCategory::Phone => {
            "Mask phone numbers before sharing this text outside approved channels.".to_string()
        }
        PiiCategory::IpAddress => {
            "Strip client IP addresses unless they are required for abuse handling.".to_string()
        }
        PiiCategory::Name => {
            "Replace personal names with pseudonyms when full identity is not required."
                .to_string()
        }
        PiiCategory::Other(name) => {
            format!("Review detected {name} values and apply your data handling policy.")
        }
    }
}
