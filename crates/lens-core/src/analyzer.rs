//! Batch analysis: two service calls, then positional correlation.

use std::future::Future;

use thiserror::Error;

use crate::errors::CoreError;
use crate::feedback::FeedbackItem;
use crate::outcome::{KeyPhraseOutcome, SentimentOutcome};
use crate::record::AnalysisRecord;

// ── Collaborator ───────────────────────────────────────────────────

/// A text-analytics backend that scores whole batches in one round trip.
///
/// Both calls must return exactly one outcome per document, in input order.
/// A per-document problem is an outcome; `Err` means the whole batch was
/// rejected or never reached the service.
pub trait TextAnalytics {
    type Error: std::error::Error + Send + Sync + 'static;

    fn analyze_sentiment_batch(
        &self,
        documents: &[String],
        language: &str,
    ) -> impl Future<Output = Result<Vec<SentimentOutcome>, Self::Error>> + Send;

    fn extract_key_phrases_batch(
        &self,
        documents: &[String],
        language: &str,
    ) -> impl Future<Output = Result<Vec<KeyPhraseOutcome>, Self::Error>> + Send;
}

/// Failure of a whole analysis run.
#[derive(Debug, Error)]
pub enum AnalyzeError<E> {
    /// The service rejected a batch call.
    #[error(transparent)]
    Service(E),

    /// The service answered, but the answer could not be correlated.
    #[error(transparent)]
    Core(#[from] CoreError),
}

// ── Correlation ────────────────────────────────────────────────────

/// Zip texts with their sentiment and key-phrase outcomes by position.
///
/// # Errors
///
/// Returns [`CoreError::LengthMismatch`] if either outcome list does not
/// have one entry per text.
pub fn correlate(
    texts: &[String],
    sentiments: Vec<SentimentOutcome>,
    key_phrases: Vec<KeyPhraseOutcome>,
) -> Result<Vec<AnalysisRecord>, CoreError> {
    ensure_aligned("sentiment", texts.len(), sentiments.len())?;
    ensure_aligned("key phrase", texts.len(), key_phrases.len())?;

    Ok(FeedbackItem::enumerate(texts)
        .zip(sentiments)
        .zip(key_phrases)
        .map(|((item, sentiment), phrases)| AnalysisRecord::assemble(item, sentiment, phrases))
        .collect())
}

const fn ensure_aligned(
    operation: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), CoreError> {
    if expected == actual {
        Ok(())
    } else {
        Err(CoreError::LengthMismatch {
            operation,
            expected,
            actual,
        })
    }
}

// ── Analyzer ───────────────────────────────────────────────────────

/// Runs one batch through a [`TextAnalytics`] backend and assembles records.
pub struct FeedbackAnalyzer<A> {
    service: A,
}

impl<A: TextAnalytics> FeedbackAnalyzer<A> {
    pub const fn new(service: A) -> Self {
        Self { service }
    }

    /// Analyze `texts` and return one record per text, in input order.
    ///
    /// The sentiment call is awaited before the key-phrase call is issued.
    /// An empty batch returns immediately without contacting the service.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::Service`] if either batch call fails, or
    /// [`AnalyzeError::Core`] if the service broke the one-outcome-per-document
    /// contract.
    pub async fn analyze(
        &self,
        texts: &[String],
        language: &str,
    ) -> Result<Vec<AnalysisRecord>, AnalyzeError<A::Error>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let sentiments = self
            .service
            .analyze_sentiment_batch(texts, language)
            .await
            .map_err(AnalyzeError::Service)?;
        let key_phrases = self
            .service
            .extract_key_phrases_batch(texts, language)
            .await
            .map_err(AnalyzeError::Service)?;

        Ok(correlate(texts, sentiments, key_phrases)?)
    }
}
