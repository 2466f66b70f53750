//! Run summary rendering

mod json;
mod terminal;

use anyhow::Result;
use serde::Serialize;
use termcolor::WriteColor;

use crate::config::{ReportFormat, Theme};
use crate::export::ExportOutcome;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

/// One completed export in the summary
#[derive(Debug, Clone, Serialize)]
pub struct ExportRecord {
    /// Selector the request targeted
    pub target: String,
    /// Path the file was written to
    pub path: String,
    /// Rows written
    pub rows: usize,
    /// Document size in bytes
    pub bytes: usize,
}

impl ExportRecord {
    /// Build a record from a request target and its outcome
    pub fn new(target: &str, outcome: &ExportOutcome) -> Self {
        Self {
            target: target.to_string(),
            path: outcome.path.display().to_string(),
            rows: outcome.rows,
            bytes: outcome.bytes,
        }
    }
}

/// Summary of one export run
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    /// Input document path
    pub input: String,
    /// Exports that produced a file
    pub exports: Vec<ExportRecord>,
    /// Targets that resolved to nothing and were skipped
    pub skipped: Vec<String>,
}

impl Summary {
    /// Create a summary for an input document
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            exports: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Trait for summary reporters
pub trait Reporter {
    /// Render the summary to a writer
    fn render(&self, summary: &Summary, writer: &mut dyn WriteColor) -> Result<()>;
}

/// Factory for creating reporters
pub struct ReporterFactory;

impl ReporterFactory {
    /// Create a reporter for the format, with the injected theme
    pub fn create(format: ReportFormat, theme: Theme) -> Box<dyn Reporter> {
        match format {
            ReportFormat::Terminal => Box::new(TerminalReporter::new(theme)),
            ReportFormat::Json => Box::new(JsonReporter::new()),
        }
    }
}

/// Render a summary to stdout
pub fn render_to_stdout(summary: &Summary, format: ReportFormat, theme: Theme) -> Result<()> {
    let reporter = ReporterFactory::create(format, theme);
    let mut stdout = termcolor::StandardStream::stdout(termcolor::ColorChoice::Auto);
    reporter.render(summary, &mut stdout)
}
