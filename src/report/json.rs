//! JSON summary

use anyhow::Result;
use termcolor::WriteColor;

use super::{Reporter, Summary};

/// JSON summary reporter
pub struct JsonReporter {
    pretty: bool,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn render(&self, summary: &Summary, writer: &mut dyn WriteColor) -> Result<()> {
        let text = if self.pretty {
            serde_json::to_string_pretty(summary)?
        } else {
            serde_json::to_string(summary)?
        };
        writeln!(writer, "{}", text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    #[test]
    fn test_json_summary_is_parseable() {
        let mut summary = Summary::new("page.html");
        summary.skipped.push("#missing".into());

        let mut buf = NoColor::new(Vec::new());
        JsonReporter::compact().render(&summary, &mut buf).unwrap();

        let value: serde_json::Value =
            serde_json::from_slice(&buf.into_inner()).unwrap();
        assert_eq!(value["input"], "page.html");
        assert_eq!(value["skipped"][0], "#missing");
        assert!(value["exports"].as_array().unwrap().is_empty());
    }
}
