//! Source layer for reading tabular structures out of documents

mod html;

use std::path::PathBuf;

use thiserror::Error;

pub use html::{HtmlSource, Trigger};

/// Errors raised while loading a document
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read document: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
