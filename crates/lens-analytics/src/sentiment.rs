//! Sentiment analysis batch call.

use lens_core::{ConfidenceScores, SentimentLabel, SentimentOutcome};

use crate::align::align;
use crate::wire::{BatchResponse, DocumentWarning};
use crate::{TextAnalyticsClient, error::AnalyticsError};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SentimentDocument {
    id: String,
    sentiment: SentimentLabel,
    confidence_scores: ConfidenceScores,
    #[serde(default)]
    warnings: Vec<DocumentWarning>,
}

impl TextAnalyticsClient {
    /// Score every document's overall sentiment in a single request.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError`] if the request fails, the service rejects
    /// the batch, or the response cannot be matched to the input documents.
    pub async fn analyze_sentiment(
        &self,
        documents: &[String],
        language: &str,
    ) -> Result<Vec<SentimentOutcome>, AnalyticsError> {
        let response: BatchResponse<SentimentDocument> =
            self.post_batch("sentiment", documents, language).await?;
        into_outcomes(response, documents.len())
    }
}

fn into_outcomes(
    response: BatchResponse<SentimentDocument>,
    expected: usize,
) -> Result<Vec<SentimentOutcome>, AnalyticsError> {
    tracing::debug!(
        model_version = response.model_version.as_deref().unwrap_or("unknown"),
        documents = response.documents.len(),
        errors = response.errors.len(),
        "sentiment batch answered"
    );

    let successes = response.documents.into_iter().map(|doc| {
        for warning in &doc.warnings {
            tracing::warn!(document = %doc.id, code = %warning.code, "{}", warning.message);
        }
        (
            doc.id,
            SentimentOutcome::Success {
                label: doc.sentiment,
                scores: doc.confidence_scores,
            },
        )
    });

    Ok(align("sentiment", expected, successes, response.errors)?
        .into_iter()
        .map(|slot| slot.unwrap_or_else(|message| SentimentOutcome::Failure { message }))
        .collect())
}
