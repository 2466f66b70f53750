//! CSV document construction

use crate::model::RowSource;

/// A CSV rendition of a table, built once per export and then discarded
///
/// Every field is quoted; embedded quotes are doubled; commas and newlines
/// inside a field are preserved verbatim. Lines are joined with a single
/// `\n` and the document carries no trailing newline and no carriage returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    text: String,
    line_count: usize,
}

impl CsvDocument {
    /// Build a document from a row source, preserving row and cell order
    pub fn from_source(source: &dyn RowSource) -> Self {
        let rows = source.list_rows();
        let lines: Vec<String> = rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| escape_field(cell))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();

        Self {
            text: lines.join("\n"),
            line_count: rows.len(),
        }
    }

    /// The document text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of lines (one per source row)
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Size of the document in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the document is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Escape one cell's display text as a quoted CSV field
fn escape_field(text: &str) -> String {
    let mut field = String::with_capacity(text.len() + 2);
    field.push('"');
    for ch in text.chars() {
        if ch == '"' {
            field.push('"');
        }
        field.push(ch);
    }
    field.push('"');
    field
}
