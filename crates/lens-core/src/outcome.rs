//! Per-document outcomes reported by the analytics service.
//!
//! Each outcome is either a value or a captured error message, never both.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SentimentLabel
// ---------------------------------------------------------------------------

/// Overall sentiment assigned to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl SentimentLabel {
    /// Canonical name, as written to the report.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConfidenceScores
// ---------------------------------------------------------------------------

/// Service-estimated probabilities for each sentiment class, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConfidenceScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum SentimentOutcome {
    Success {
        label: SentimentLabel,
        scores: ConfidenceScores,
    },
    Failure {
        message: String,
    },
}

impl SentimentOutcome {
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPhraseOutcome {
    /// Phrases in the order the service returned them; may be empty.
    Success { phrases: Vec<String> },
    Failure { message: String },
}

impl KeyPhraseOutcome {
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Mixed).unwrap();
        assert_eq!(json, "\"mixed\"");
        let parsed: SentimentLabel = serde_json::from_str("\"negative\"").unwrap();
        assert_eq!(parsed, SentimentLabel::Negative);
    }

    #[test]
    fn label_display_matches_serde_name() {
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
            SentimentLabel::Mixed,
        ] {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json.trim_matches('"'), label.to_string());
        }
    }

    #[test]
    fn failure_exposes_message() {
        let s = SentimentOutcome::Failure {
            message: "timeout".into(),
        };
        assert_eq!(s.error_message(), Some("timeout"));

        let k = KeyPhraseOutcome::Success { phrases: vec![] };
        assert_eq!(k.error_message(), None);
    }
}
