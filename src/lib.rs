//! tabrip - Export tables from server-rendered HTML pages to CSV files
//!
//! Resolves a CSS selector against an HTML document, reads the table's cell
//! text in document order, and writes an escaped CSV file. Export controls
//! embedded in the page (`.btn-export-csv` with `data-target` /
//! `data-filename`) can be discovered and run in one pass.

pub mod config;
pub mod events;
pub mod export;
pub mod model;
pub mod report;
pub mod source;

pub use config::Config;
pub use export::{CsvExporter, ExportRequest};
pub use model::Table;
