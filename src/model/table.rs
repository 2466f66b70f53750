//! Table and Row data structures

/// A row in the table
///
/// Cells hold rendered display text only, in document order. Header and data
/// cells are not distinguished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Cell display text in document order
    pub cells: Vec<String>,
}

impl Row {
    /// Create a row from cell display text
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Get a cell's display text by index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Number of cells in this row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl From<Vec<&str>> for Row {
    fn from(cells: Vec<&str>) -> Self {
        Self::new(cells.into_iter().map(String::from).collect())
    }
}

/// Read-only access to rows of cell text in document order.
///
/// The CSV layer depends only on this trait, so it can be exercised without
/// any HTML document behind it.
pub trait RowSource {
    /// Rows in document order, each an ordered sequence of cell display text
    fn list_rows(&self) -> &[Row];
}

/// A table extracted from a document
///
/// Row order and intra-row cell order exactly match the document; nothing is
/// reordered, filtered, or coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// All rows, header rows included
    pub rows: Vec<Row>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a row of cell display text
    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(Row::new(cells));
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RowSource for Table {
    fn list_rows(&self) -> &[Row] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_keep_document_order() {
        let mut table = Table::new();
        table.add_row(vec!["Name".into(), "Qty".into()]);
        table.add_row(vec!["Widget".into(), "5".into()]);

        assert_eq!(table.row_count(), 2);
        let rows = table.list_rows();
        assert_eq!(rows[0].get(0), Some("Name"));
        assert_eq!(rows[1].get(1), Some("5"));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new();
        assert!(table.is_empty());
        assert!(table.list_rows().is_empty());
    }
}
