//! Console rendering and the JSON report file.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use lens_core::{AnalysisRecord, RecordBody};

/// Default report location, relative to the working directory.
pub const REPORT_PATH: &str = "analysis-result.json";

/// Receives the human-readable side of a run.
pub trait Reporter {
    fn heading(&mut self) -> io::Result<()>;
    fn record(&mut self, record: &AnalysisRecord) -> io::Result<()>;
    fn report_written(&mut self, path: &Path) -> io::Result<()>;
}

/// Plain-text reporter over any writer.
pub struct ConsoleReporter<W> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn heading(&mut self) -> io::Result<()> {
        writeln!(self.out, "Customer Feedback Analysis")?;
        writeln!(self.out, "{}", "-".repeat(32))
    }

    fn record(&mut self, record: &AnalysisRecord) -> io::Result<()> {
        match &record.body {
            RecordBody::Success {
                sentiment,
                confidence,
                key_phrases,
            } => {
                writeln!(self.out, "[{}] {}", record.index, record.text)?;
                writeln!(
                    self.out,
                    "    Sentiment: {sentiment} (Pos {:.2}, Neu {:.2}, Neg {:.2})",
                    confidence.positive, confidence.neutral, confidence.negative
                )?;
                writeln!(self.out, "    Key Phrases: {}", key_phrases.join(", "))
            }
            RecordBody::Failure { error } => writeln!(
                self.out,
                "[{}] Error analyzing feedback: {error}",
                record.index
            ),
        }
    }

    fn report_written(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Wrote {}", path.display())
    }
}

/// Write the full record sequence as indented JSON, replacing any existing file.
pub fn write_report(path: &Path, records: &[AnalysisRecord]) -> anyhow::Result<()> {
    let json = lens_core::record::to_report_json(records).context("failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    tracing::debug!(path = %path.display(), records = records.len(), "report written");
    Ok(())
}
