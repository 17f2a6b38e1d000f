//! Text Analytics client error types.

use thiserror::Error;

/// Errors that abort a whole batch call.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// HTTP transport error (DNS, TLS, connection reset, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the request.
    #[error("{status} {code} - {message}")]
    RequestFailed {
        /// HTTP status code returned by the service.
        status: u16,
        /// Service error code, empty if the body carried none.
        code: String,
        /// Error message or raw response body.
        message: String,
    },

    /// The response body was not in the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The configured endpoint cannot be used as a base URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
