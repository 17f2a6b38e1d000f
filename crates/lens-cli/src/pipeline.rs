//! One analysis run: analyze → print → write report.

use std::path::Path;

use lens_analytics::AnalyticsError;
use lens_core::{AnalysisRecord, FeedbackAnalyzer, TextAnalytics};

use crate::failure::RunError;
use crate::report::{Reporter, write_report};

/// Analyze `texts`, render every record, then write the JSON report.
///
/// Nothing is printed or written if a batch call fails.
///
/// # Errors
///
/// Returns [`RunError`] if the analysis fails, or if the console or the
/// report file cannot be written.
pub async fn run_batch<A, R>(
    analyzer: &FeedbackAnalyzer<A>,
    texts: &[String],
    language: &str,
    reporter: &mut R,
    report_path: &Path,
) -> Result<Vec<AnalysisRecord>, RunError>
where
    A: TextAnalytics<Error = AnalyticsError>,
    R: Reporter,
{
    let records = analyzer.analyze(texts, language).await?;

    let failed = records.iter().filter(|r| !r.is_success()).count();
    tracing::debug!(
        succeeded = records.len() - failed,
        failed,
        "feedback batch analyzed"
    );

    reporter.heading().map_err(anyhow::Error::from)?;
    for record in &records {
        reporter.record(record).map_err(anyhow::Error::from)?;
    }

    write_report(report_path, &records)?;
    reporter
        .report_written(report_path)
        .map_err(anyhow::Error::from)?;

    Ok(records)
}
