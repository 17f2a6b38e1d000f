//! Request and response bodies for the Text Analytics REST API.

use serde::{Deserialize, Serialize};

// ── Requests ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DocumentBatch<'a> {
    pub documents: Vec<InputDocument<'a>>,
}

#[derive(Debug, Serialize)]
pub struct InputDocument<'a> {
    pub id: String,
    pub language: &'a str,
    pub text: &'a str,
}

impl<'a> DocumentBatch<'a> {
    /// One input document per text, with the text's position as its id.
    pub fn new(texts: &'a [String], language: &'a str) -> Self {
        Self {
            documents: texts
                .iter()
                .enumerate()
                .map(|(index, text)| InputDocument {
                    id: index.to_string(),
                    language,
                    text,
                })
                .collect(),
        }
    }
}

// ── Responses ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse<D> {
    pub documents: Vec<D>,
    #[serde(default)]
    pub errors: Vec<DocumentError>,
    #[serde(default)]
    pub model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentError {
    pub id: String,
    pub error: ServiceError,
}

#[derive(Debug, Deserialize)]
pub struct DocumentWarning {
    pub code: String,
    pub message: String,
}

/// Top-level body of a rejected request.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ServiceError,
}

#[derive(Debug, Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub innererror: Option<Box<ServiceError>>,
}

impl ServiceError {
    /// The innermost error, which carries the most precise code and message.
    pub fn most_specific(&self) -> &Self {
        let mut current = self;
        while let Some(inner) = current.innererror.as_deref() {
            current = inner;
        }
        current
    }
}
