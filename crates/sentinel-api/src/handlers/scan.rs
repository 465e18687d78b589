//! Scan handler and wire DTOs.
//!
//! The response shape is the external contract consumed by the UI layer;
//! its degraded regex fallback emits the same shape, so field names here
//! must not drift.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{extract::State, Json};
use sentinel_core::{ResolvedSpan, ScanResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Scan request body.
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    /// Text to scan. A missing field is treated as empty and rejected by
    /// the engine with a 400, per the contract.
    #[serde(default)]
    pub text: String,
}

/// Scan response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResponse {
    /// The original input text.
    pub text: String,
    /// Detected PII spans.
    pub pii_detected: Vec<PiiDetection>,
    /// Aggregate compliance score in `[0, 100]`.
    pub compliance_score: f64,
    /// Redacted copy of the input.
    pub redacted_text: String,
    /// Remediation recommendations.
    pub recommendations: Vec<String>,
    /// Scan duration in milliseconds.
    pub processing_time: u64,
}

/// One detected span on the wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct PiiDetection {
    /// Category wire name.
    #[serde(rename = "type")]
    pub pii_type: String,
    /// The matched value.
    pub value: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Character offsets into the original text.
    pub position: Position,
}

/// Span position.
#[derive(Debug, Serialize, Deserialize)]
pub struct Position {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl From<&ResolvedSpan> for PiiDetection {
    fn from(span: &ResolvedSpan) -> Self {
        Self {
            pii_type: span.category.as_str().to_string(),
            value: span.value.clone(),
            confidence: span.confidence,
            position: Position {
                start: span.start,
                end: span.end,
            },
        }
    }
}

impl From<ScanResult> for ScanResponse {
    fn from(result: ScanResult) -> Self {
        Self {
            pii_detected: result.spans.iter().map(PiiDetection::from).collect(),
            text: result.text,
            compliance_score: result.compliance_score,
            redacted_text: result.redacted_text,
            recommendations: result.recommendations,
            processing_time: result.duration.as_millis() as u64,
        }
    }
}

/// `POST /api/v1/scan` handler.
pub async fn scan_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScanRequest>,
) -> ApiResult<Json<ScanResponse>> {
    let result = state.engine.scan_text(&request.text).await?;

    info!(
        spans = result.spans.len(),
        compliance_score = result.compliance_score,
        duration_ms = result.duration.as_millis() as u64,
        "scan served"
    );

    Ok(Json(ScanResponse::from(result)))
}
