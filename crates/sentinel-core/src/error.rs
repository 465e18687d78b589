//! Scan error taxonomy.

use thiserror::Error;

/// Result type for scan operations.
pub type SentinelResult<T> = Result<T, ScanError>;

/// Errors raised by the scanning engine.
///
/// Per-scan failures are always returned as one of these variants, never as
/// a partially populated result. `MalformedRule` can only occur while the
/// pattern registry is being built, before any scan is accepted.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The input text is empty or exceeds the configured maximum length.
    /// Caller's fault; retrying the same request will not help.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The scan did not complete within its budget. Transient; safe to
    /// retry.
    #[error("scan timed out: {0}")]
    Timeout(String),

    /// The caller abandoned the scan before it completed.
    #[error("scan cancelled")]
    Cancelled,

    /// A registered pattern failed to compile. Fatal at startup; the
    /// process must not serve scans with a broken registry.
    #[error("malformed rule '{name}': {message}")]
    MalformedRule {
        /// Name of the offending rule.
        name: String,
        /// Compilation error detail.
        message: String,
    },

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ScanError {
    /// Returns the stable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "SCAN_INVALID_INPUT",
            Self::Timeout(_) => "SCAN_TIMEOUT",
            Self::Cancelled => "SCAN_CANCELLED",
            Self::MalformedRule { .. } => "SCAN_MALFORMED_RULE",
            Self::Internal(_) => "SCAN_INTERNAL",
        }
    }

    /// Returns true if retrying the same request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Cancelled)
    }
}
