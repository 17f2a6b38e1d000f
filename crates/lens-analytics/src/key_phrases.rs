//! Key-phrase extraction batch call.

use lens_core::KeyPhraseOutcome;

use crate::align::align;
use crate::wire::{BatchResponse, DocumentWarning};
use crate::{TextAnalyticsClient, error::AnalyticsError};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyPhraseDocument {
    id: String,
    key_phrases: Vec<String>,
    #[serde(default)]
    warnings: Vec<DocumentWarning>,
}

impl TextAnalyticsClient {
    /// Extract key phrases for every document in a single request.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError`] if the request fails, the service rejects
    /// the batch, or the response cannot be matched to the input documents.
    pub async fn extract_key_phrases(
        &self,
        documents: &[String],
        language: &str,
    ) -> Result<Vec<KeyPhraseOutcome>, AnalyticsError> {
        let response: BatchResponse<KeyPhraseDocument> =
            self.post_batch("keyPhrases", documents, language).await?;
        into_outcomes(response, documents.len())
    }
}

fn into_outcomes(
    response: BatchResponse<KeyPhraseDocument>,
    expected: usize,
) -> Result<Vec<KeyPhraseOutcome>, AnalyticsError> {
    tracing::debug!(
        model_version = response.model_version.as_deref().unwrap_or("unknown"),
        documents = response.documents.len(),
        errors = response.errors.len(),
        "key phrase batch answered"
    );

    let successes = response.documents.into_iter().map(|doc| {
        for warning in &doc.warnings {
            tracing::warn!(document = %doc.id, code = %warning.code, "{}", warning.message);
        }
        (
            doc.id,
            KeyPhraseOutcome::Success {
                phrases: doc.key_phrases,
            },
        )
    });

    Ok(align("key phrase", expected, successes, response.errors)?
        .into_iter()
        .map(|slot| slot.unwrap_or_else(|message| KeyPhraseOutcome::Failure { message }))
        .collect())
}
