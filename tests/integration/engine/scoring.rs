//! Compliance scoring integration tests.

use crate::common::samples;
use once_cell::sync::Lazy;
use pii_sentinel::{EngineConfig, ScanEngine};

static ENGINE: Lazy<ScanEngine> =
    Lazy::new(|| ScanEngine::with_builtin(EngineConfig::default()).expect("built-in rules"));

/// Tests clean text scores fully compliant with no recommendations.
#[test]
fn test_clean_text_scores_100() {
    for sample in samples::CLEAN_TEXT {
        let result = ENGINE.scan_blocking(sample).unwrap();

        assert_eq!(result.compliance_score, 100.0, "sample: {sample}");
        assert!(result.recommendations.is_empty(), "sample: {sample}");
    }
}

/// Tests every score lands inside the 0 to 100 range.
#[test]
fn test_score_bounds() {
    let texts = [
        samples::CONTACT_TEXT,
        samples::MIXED_PII,
        "ssn 123-45-6789 ssn 545-12-3456 card 4111111111111111",
    ];

    for text in texts {
        let result = ENGINE.scan_blocking(text).unwrap();
        assert!(
            (0.0..=100.0).contains(&result.compliance_score),
            "score out of range for {text:?}: {}",
            result.compliance_score
        );
    }
}

/// Tests adding detections never raises the score.
#[test]
fn test_score_monotonically_non_increasing() {
    let stages = [
        "no sensitive data here",
        "no sensitive data here mail jane@example.com",
        "no sensitive data here mail jane@example.com call 555-123-4567",
        "no sensitive data here mail jane@example.com call 555-123-4567 ssn 123-45-6789",
    ];

    let mut last = 100.0f64;
    for stage in stages {
        let result = ENGINE.scan_blocking(stage).unwrap();
        assert!(
            result.compliance_score <= last,
            "score rose at {stage:?}: {} > {last}",
            result.compliance_score
        );
        last = result.compliance_score;
    }
}

/// Tests a text with PII always lands below a clean one.
#[test]
fn test_detections_lower_the_score() {
    let result = ENGINE.scan_blocking(samples::CONTACT_TEXT).unwrap();

    assert!(result.compliance_score < 100.0);
    assert!(!result.recommendations.is_empty());
}

/// Tests recommendations lead with the heaviest category.
#[test]
fn test_recommendations_ordered_by_severity() {
    let result = ENGINE
        .scan_blocking("ip 10.0.0.12, ssn 123-45-6789, mail jane@example.com")
        .unwrap();

    assert_eq!(result.recommendations.len(), 3);
    assert!(
        result.recommendations[0].contains("Social Security"),
        "expected SSN first: {:?}",
        result.recommendations
    );
}

/// Tests repeated detections of one category yield a single recommendation.
#[test]
fn test_one_recommendation_per_category() {
    let result = ENGINE
        .scan_blocking("write a@b.com or c@d.org or e@f.org")
        .unwrap();

    assert_eq!(result.recommendations.len(), 1);
}

/// Tests scoring output is identical across runs.
#[test]
fn test_scoring_deterministic() {
    let a = ENGINE.scan_blocking(samples::MIXED_PII).unwrap();
    let b = ENGINE.scan_blocking(samples::MIXED_PII).unwrap();

    assert_eq!(a.compliance_score, b.compliance_score);
    assert_eq!(a.recommendations, b.recommendations);
}
