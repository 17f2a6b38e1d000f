//! Report records: one per input document.
//!
//! The JSON shape is either
//! `{index, text, sentiment, confidence, keyPhrases}` or `{index, text, error}`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::feedback::FeedbackItem;
use crate::outcome::{ConfidenceScores, KeyPhraseOutcome, SentimentLabel, SentimentOutcome};

/// Analysis result for a single feedback item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisRecord {
    pub index: usize,
    pub text: String,
    #[serde(flatten)]
    pub body: RecordBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RecordBody {
    #[serde(rename_all = "camelCase")]
    Success {
        sentiment: SentimentLabel,
        confidence: ConfidenceScores,
        key_phrases: Vec<String>,
    },
    Failure {
        error: String,
    },
}

impl AnalysisRecord {
    /// Pair the two outcomes for `item`.
    ///
    /// A failure on either side discards whatever the other side produced.
    #[must_use]
    pub fn assemble(
        item: FeedbackItem,
        sentiment: SentimentOutcome,
        key_phrases: KeyPhraseOutcome,
    ) -> Self {
        let body = match (sentiment, key_phrases) {
            (
                SentimentOutcome::Success { label, scores },
                KeyPhraseOutcome::Success { phrases },
            ) => RecordBody::Success {
                sentiment: label,
                confidence: scores,
                key_phrases: phrases,
            },
            (sentiment, key_phrases) => RecordBody::Failure {
                error: combine_errors(sentiment.error_message(), key_phrases.error_message()),
            },
        };

        Self {
            index: item.index,
            text: item.text,
            body,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.body, RecordBody::Success { .. })
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.body {
            RecordBody::Failure { error } => Some(error),
            RecordBody::Success { .. } => None,
        }
    }
}

/// Sentiment message, then key-phrase message, space-joined and trimmed.
fn combine_errors(sentiment: Option<&str>, key_phrases: Option<&str>) -> String {
    format!(
        "{} {}",
        sentiment.unwrap_or_default(),
        key_phrases.unwrap_or_default()
    )
    .trim()
    .to_string()
}

/// Serialize a full record sequence as the indented JSON report.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if serialization fails.
pub fn to_report_json(records: &[AnalysisRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn item(index: usize, text: &str) -> FeedbackItem {
        FeedbackItem {
            index,
            text: text.into(),
        }
    }

    fn scores() -> ConfidenceScores {
        ConfidenceScores {
            positive: 0.95,
            neutral: 0.04,
            negative: 0.01,
        }
    }

    #[rstest]
    #[case(Some("timeout"), None, "timeout")]
    #[case(None, Some("too long"), "too long")]
    #[case(Some("timeout"), Some("too long"), "timeout too long")]
    #[case(Some("  padded "), Some(""), "padded")]
    fn combined_error_message(
        #[case] sentiment: Option<&str>,
        #[case] key_phrases: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(combine_errors(sentiment, key_phrases), expected);
    }

    #[test]
    fn key_phrase_failure_drops_sentiment() {
        let record = AnalysisRecord::assemble(
            item(3, "hello"),
            SentimentOutcome::Success {
                label: SentimentLabel::Positive,
                scores: scores(),
            },
            KeyPhraseOutcome::Failure {
                message: "Document text is empty.".into(),
            },
        );
        assert_eq!(record.index, 3);
        assert!(!record.is_success());
        assert_eq!(record.error(), Some("Document text is empty."));
    }

    #[test]
    fn success_json_shape() {
        let record = AnalysisRecord::assemble(
            item(0, "Great product!"),
            SentimentOutcome::Success {
                label: SentimentLabel::Positive,
                scores: scores(),
            },
            KeyPhraseOutcome::Success {
                phrases: vec!["product".into()],
            },
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "index": 0,
                "text": "Great product!",
                "sentiment": "positive",
                "confidence": { "positive": 0.95, "neutral": 0.04, "negative": 0.01 },
                "keyPhrases": ["product"]
            })
        );
    }

    #[test]
    fn failure_json_shape() {
        let record = AnalysisRecord {
            index: 1,
            text: "x".into(),
            body: RecordBody::Failure {
                error: "boom".into(),
            },
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"index":1,"text":"x","error":"boom"}"#);
    }

    #[test]
    fn empty_report_is_empty_array() {
        assert_eq!(to_report_json(&[]).unwrap(), "[]");
    }
}
