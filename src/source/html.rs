//! HTML document access backed by the scraper crate

use std::path::Path;

use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, warn};

use crate::model::Table;

use super::SourceError;

/// Class carried by export controls in the page
const TRIGGER_CLASS: &str = "btn-export-csv";

/// An export control found in the document, with its two configuration
/// attributes (`data-target`, `data-filename`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    /// Selector of the table this control exports
    pub target: String,
    /// Requested file name, if the control carries one
    pub file_name: Option<String>,
}

/// A parsed HTML document, read-only
///
/// Each export operates on the snapshot taken at parse time; nothing here
/// mutates the document.
pub struct HtmlSource {
    document: Html,
}

impl HtmlSource {
    /// Parse a document from a string
    pub fn from_str(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Read and parse a document from a file
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let html = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_str(&html))
    }

    /// Resolve a CSS selector to the first matching table element and read
    /// its rows in document order.
    ///
    /// Returns `None` when the selector matches nothing or does not parse;
    /// both are treated as a missing source.
    pub fn resolve(&self, selector: &str) -> Option<Table> {
        let sel = match Selector::parse(selector) {
            Ok(sel) => sel,
            Err(_) => {
                warn!(selector, "invalid table selector");
                return None;
            }
        };

        let element = match self.document.select(&sel).next() {
            Some(el) => el,
            None => {
                debug!(selector, "no element matches table selector");
                return None;
            }
        };

        let tr = Selector::parse("tr").expect("static selector");
        let cell = Selector::parse("td, th").expect("static selector");

        let mut table = Table::new();
        for row in element.select(&tr) {
            let cells = row.select(&cell).map(display_text).collect();
            table.add_row(cells);
        }
        Some(table)
    }

    /// Find every export control in the document, in document order.
    ///
    /// Controls without a `data-target` attribute cannot name a table and are
    /// skipped.
    pub fn find_triggers(&self) -> Vec<Trigger> {
        let sel = Selector::parse(&format!(".{}", TRIGGER_CLASS)).expect("static selector");

        let mut triggers = Vec::new();
        for control in self.document.select(&sel) {
            match control.value().attr("data-target") {
                Some(target) => triggers.push(Trigger {
                    target: target.to_string(),
                    file_name: control.value().attr("data-filename").map(String::from),
                }),
                None => warn!("export control has no data-target attribute"),
            }
        }
        triggers
    }
}

/// Rendered display text of an element: text nodes concatenated in document
/// order, whitespace runs collapsed, `<br>` contributing a line break.
fn display_text(element: ElementRef) -> String {
    // Segments are separated by <br>; whitespace inside a segment (including
    // source newlines) collapses to single spaces.
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => current.push_str(text),
            Node::Element(el) if el.name() == "br" => segments.push(std::mem::take(&mut current)),
            _ => {}
        }
    }
    segments.push(current);

    let collapsed: Vec<String> = segments
        .iter()
        .map(|segment| segment.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();
    collapsed.join("\n").trim_matches('\n').to_string()
}
