//! Shared HTTP response helpers.
//!
//! Turns any non-success status into [`AnalyticsError::RequestFailed`],
//! pulling the code and message out of the service's error envelope. A 429
//! is reported the same way; its `Retry-After` is only logged since batches
//! are never retried.

use crate::error::AnalyticsError;
use crate::wire::ErrorEnvelope;

/// Check an HTTP response for a service-level rejection.
///
/// Returns the response unchanged on success.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, AnalyticsError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        tracing::warn!(
            retry_after_secs = parse_retry_after(&resp),
            "text analytics rate limit hit; not retrying"
        );
    }

    let body = resp.text().await.unwrap_or_default();
    let (code, message) = describe_failure(&body);
    Err(AnalyticsError::RequestFailed {
        status: status.as_u16(),
        code,
        message,
    })
}

/// Extract `(code, message)` from an error body, preferring the inner error.
///
/// Falls back to an empty code and the raw body when the envelope is absent.
fn describe_failure(body: &str) -> (String, String) {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let error = envelope.error.most_specific();
            (error.code.clone(), error.message.clone())
        }
        Err(_) => (String::new(), body.trim().to_string()),
    }
}

/// Seconds the service asked us to wait. Only the delta-seconds form is
/// understood; anything else reads as a minute.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    const FALLBACK_SECS: u64 = 60;

    let Some(header) = resp.headers().get(reqwest::header::RETRY_AFTER) else {
        return FALLBACK_SECS;
    };
    header
        .to_str()
        .ok()
        .and_then(|secs| secs.trim().parse().ok())
        .unwrap_or(FALLBACK_SECS)
}
