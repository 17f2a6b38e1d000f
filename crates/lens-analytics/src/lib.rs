//! # lens-analytics
//!
//! Text Analytics REST client for feedback-lens.
//!
//! Implements [`lens_core::TextAnalytics`] against the Azure AI Language
//! Text Analytics API:
//! - `POST {endpoint}/text/analytics/{version}/sentiment`
//! - `POST {endpoint}/text/analytics/{version}/keyPhrases`
//!
//! Each call sends the whole batch in one request. Documents are identified
//! by their input position, and results are put back into that order before
//! they leave this crate. Nothing is retried.

pub mod key_phrases;
pub mod sentiment;

mod align;
mod error;
mod http;
mod wire;

pub use error::AnalyticsError;

use std::time::Duration;

use lens_core::{KeyPhraseOutcome, SentimentOutcome, TextAnalytics};
use serde::de::DeserializeOwned;

use crate::http::check_response;
use crate::wire::DocumentBatch;

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for one Text Analytics resource.
pub struct TextAnalyticsClient {
    http: reqwest::Client,
    base_url: String,
    api_version: String,
    key: String,
}

impl TextAnalyticsClient {
    /// Create a client for `endpoint`, authenticating with `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidEndpoint`] if `endpoint` is not an
    /// absolute http(s) URL, or [`AnalyticsError::Http`] if the underlying
    /// `reqwest::Client` fails to build.
    pub fn new(
        endpoint: &str,
        key: &str,
        api_version: &str,
        timeout: Duration,
    ) -> Result<Self, AnalyticsError> {
        let parsed = reqwest::Url::parse(endpoint).map_err(|e| AnalyticsError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AnalyticsError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("feedback-lens/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            api_version: api_version.to_string(),
            key: key.to_string(),
        })
    }

    fn operation_url(&self, operation: &str) -> String {
        format!(
            "{}/text/analytics/{}/{operation}",
            self.base_url, self.api_version
        )
    }

    /// Send one batch to `operation` and decode the success body.
    async fn post_batch<T: DeserializeOwned>(
        &self,
        operation: &str,
        documents: &[String],
        language: &str,
    ) -> Result<T, AnalyticsError> {
        let url = self.operation_url(operation);
        tracing::debug!(%url, documents = documents.len(), "sending text analytics batch");

        let resp = self
            .http
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.key)
            .json(&DocumentBatch::new(documents, language))
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| AnalyticsError::Parse(format!("{operation} response: {e}")))
    }
}

impl TextAnalytics for TextAnalyticsClient {
    type Error = AnalyticsError;

    async fn analyze_sentiment_batch(
        &self,
        documents: &[String],
        language: &str,
    ) -> Result<Vec<SentimentOutcome>, AnalyticsError> {
        self.analyze_sentiment(documents, language).await
    }

    async fn extract_key_phrases_batch(
        &self,
        documents: &[String],
        language: &str,
    ) -> Result<Vec<KeyPhraseOutcome>, AnalyticsError> {
        self.extract_key_phrases(documents, language).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client(endpoint: &str) -> Result<TextAnalyticsClient, AnalyticsError> {
        TextAnalyticsClient::new(endpoint, "key", "v3.1", Duration::from_secs(5))
    }

    #[test]
    fn operation_url_strips_trailing_slash() {
        let client = client("https://demo.cognitiveservices.azure.com/").unwrap();
        assert_eq!(
            client.operation_url("sentiment"),
            "https://demo.cognitiveservices.azure.com/text/analytics/v3.1/sentiment"
        );
    }

    #[test]
    fn operation_url_keeps_base_path() {
        let client = client("http://127.0.0.1:8080/proxy").unwrap();
        assert_eq!(
            client.operation_url("keyPhrases"),
            "http://127.0.0.1:8080/proxy/text/analytics/v3.1/keyPhrases"
        );
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        let err = client("not a url").err().unwrap();
        assert!(matches!(err, AnalyticsError::InvalidEndpoint { .. }));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = client("ftp://demo.example.com").err().unwrap();
        assert!(matches!(err, AnalyticsError::InvalidEndpoint { ref reason, .. } if reason.contains("ftp")));
    }
}
