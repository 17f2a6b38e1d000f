//! Top-level failures and the exit codes they map to.

use lens_analytics::AnalyticsError;
use lens_config::ConfigError;
use lens_core::{AnalyzeError, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    /// Missing or invalid configuration, found before any request.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be set up from the configuration.
    #[error(transparent)]
    Setup(AnalyticsError),

    /// The service rejected a batch or could not be reached.
    #[error("Azure request failed: {0}")]
    Request(AnalyticsError),

    /// The service answered with results that do not line up with the batch.
    #[error("Azure request failed: {0}")]
    Contract(CoreError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RunError {
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Setup(_) | Self::Other(_) => 1,
            Self::Request(_) | Self::Contract(_) => 2,
        }
    }
}

impl From<AnalyzeError<AnalyticsError>> for RunError {
    fn from(error: AnalyzeError<AnalyticsError>) -> Self {
        match error {
            AnalyzeError::Service(error) => Self::Request(error),
            AnalyzeError::Core(error) => Self::Contract(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_config_exits_with_one() {
        let error = RunError::from(ConfigError::Missing { field: "endpoint" });
        assert_eq!(error.exit_code(), 1);
        assert!(error.to_string().starts_with("Missing configuration."));
    }

    #[test]
    fn rejected_request_exits_with_two() {
        let error = RunError::from(AnalyzeError::Service(AnalyticsError::RequestFailed {
            status: 401,
            code: "401".into(),
            message: "Access denied.".into(),
        }));
        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.to_string(),
            "Azure request failed: 401 401 - Access denied."
        );
    }

    #[test]
    fn misaligned_response_exits_with_two() {
        let error = RunError::from(AnalyzeError::<AnalyticsError>::Core(
            CoreError::LengthMismatch {
                operation: "sentiment",
                expected: 4,
                actual: 3,
            },
        ));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn local_failure_exits_with_one() {
        let error = RunError::from(anyhow::anyhow!("disk full"));
        assert_eq!(error.exit_code(), 1);
    }
}
