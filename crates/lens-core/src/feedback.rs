//! Feedback input: positioned items and the source interface.

use crate::errors::CoreError;

/// One piece of customer feedback, tagged with its position in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackItem {
    /// 0-based position in the original input.
    pub index: usize,
    pub text: String,
}

impl FeedbackItem {
    /// Number an ordered list of texts from zero.
    pub fn enumerate(texts: &[String]) -> impl Iterator<Item = Self> + '_ {
        texts.iter().enumerate().map(|(index, text)| Self {
            index,
            text: text.clone(),
        })
    }
}

/// Anything that can hand over an ordered batch of feedback texts.
pub trait FeedbackSource {
    /// Load the full batch, in the order it should be reported.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Source`] if the texts cannot be read.
    fn load(&self) -> Result<Vec<String>, CoreError>;
}

/// The built-in demo batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleFeedback;

const SAMPLE_TEXTS: [&str; 4] = [
    "Love the new noise-cancelling headphones, but the battery dies after 3 hours.",
    "Customer support resolved my issue quickly. Very satisfied!",
    "The app crashes when I try to upload photos. Please fix.",
    "Delivery was on time. Packaging was damaged though.",
];

impl FeedbackSource for SampleFeedback {
    fn load(&self) -> Result<Vec<String>, CoreError> {
        Ok(SAMPLE_TEXTS.iter().map(ToString::to_string).collect())
    }
}
