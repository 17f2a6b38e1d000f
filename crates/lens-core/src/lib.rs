//! # lens-core
//!
//! Core types and batch correlation for feedback-lens.
//!
//! This crate holds everything that does not touch the network or the
//! process boundary:
//! - Feedback items and the [`FeedbackSource`](feedback::FeedbackSource) interface
//! - Per-document outcomes returned by the analytics service
//! - Report records and their JSON shape
//! - The [`TextAnalytics`](analyzer::TextAnalytics) collaborator trait and
//!   the [`FeedbackAnalyzer`](analyzer::FeedbackAnalyzer) that pairs its results
//! - Cross-cutting error types

pub mod analyzer;
pub mod errors;
pub mod feedback;
pub mod outcome;
pub mod record;

pub use analyzer::{AnalyzeError, FeedbackAnalyzer, TextAnalytics, correlate};
pub use errors::CoreError;
pub use feedback::{FeedbackItem, FeedbackSource, SampleFeedback};
pub use outcome::{ConfidenceScores, KeyPhraseOutcome, SentimentLabel, SentimentOutcome};
pub use record::{AnalysisRecord, RecordBody};
