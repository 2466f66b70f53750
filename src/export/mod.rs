//! Table-to-CSV export

mod csv;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::source::HtmlSource;

pub use self::csv::CsvDocument;

/// File name used when a request does not carry one
pub const DEFAULT_FILE_NAME: &str = "export.csv";

/// A single export invocation: which table, and what to call the file
///
/// Ephemeral; built at the moment a control is activated and discarded after
/// the export runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Selector of the table to export
    pub target: String,
    /// Requested output file name
    pub file_name: Option<String>,
}

impl ExportRequest {
    /// Create a request for a table selector
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            file_name: None,
        }
    }

    /// Set the requested file name
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Effective output file name; absent or empty falls back to
    /// [`DEFAULT_FILE_NAME`]
    pub fn file_name(&self) -> &str {
        match self.file_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_FILE_NAME,
        }
    }
}

/// What one export produced
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Path the CSV file was written to
    pub path: PathBuf,
    /// Rows written
    pub rows: usize,
    /// Document size in bytes
    pub bytes: usize,
}

/// Converts tables into CSV files on disk
pub struct CsvExporter {
    out_dir: PathBuf,
}

impl CsvExporter {
    /// Create an exporter writing into the given directory
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Export one table from the document as a CSV file.
    ///
    /// A request whose target resolves to nothing is a no-op: no file is
    /// created and `Ok(None)` is returned. The document is staged through a
    /// temporary file in the output directory so the final path only ever
    /// appears complete; the temporary handle is released whether or not the
    /// rename succeeds.
    pub fn export(
        &self,
        source: &HtmlSource,
        request: &ExportRequest,
    ) -> Result<Option<ExportOutcome>> {
        let table = match source.resolve(&request.target) {
            Some(table) => table,
            None => {
                debug!(target = %request.target, "export target not found, skipping");
                return Ok(None);
            }
        };

        let document = CsvDocument::from_source(&table);
        let path = self.out_dir.join(request.file_name());
        write_document(&document, &self.out_dir, &path)?;

        info!(path = %path.display(), rows = document.line_count(), "exported table");
        Ok(Some(ExportOutcome {
            path,
            rows: document.line_count(),
            bytes: document.len(),
        }))
    }
}

fn write_document(document: &CsvDocument, dir: &Path, path: &Path) -> Result<()> {
    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    staged
        .write_all(document.as_str().as_bytes())
        .context("failed to write CSV document")?;
    staged
        .persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
