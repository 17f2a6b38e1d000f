//! Cross-cutting error types for feedback-lens.
//!
//! Service-specific errors (e.g. `AnalyticsError`) live in their own crates.
//! The binary is where they converge into exit codes.

use thiserror::Error;

/// Errors raised by the correlation step and feedback sources.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A batch call returned a different number of outcomes than documents sent.
    #[error("{operation} batch returned {actual} outcomes for {expected} documents")]
    LengthMismatch {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A feedback source could not produce its texts.
    #[error("feedback source failed: {0}")]
    Source(String),
}
