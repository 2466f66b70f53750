//! Colored terminal summary

use anyhow::Result;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::config::Theme;

use super::{Reporter, Summary};

/// Terminal summary with theme-aware colors
pub struct TerminalReporter {
    theme: Theme,
}

impl TerminalReporter {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn exported_spec(&self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        if self.theme == Theme::Dark {
            spec.set_intense(true);
        }
        spec
    }

    fn skipped_spec(&self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        if self.theme == Theme::Dark {
            spec.set_intense(true);
        }
        spec
    }
}

impl Reporter for TerminalReporter {
    fn render(&self, summary: &Summary, writer: &mut dyn WriteColor) -> Result<()> {
        writeln!(writer, "tabrip: {}", summary.input)?;

        for record in &summary.exports {
            writer.set_color(&self.exported_spec())?;
            write!(writer, "  exported")?;
            writer.reset()?;
            writeln!(
                writer,
                " {} -> {} ({} rows, {} bytes)",
                record.target, record.path, record.rows, record.bytes
            )?;
        }

        for target in &summary.skipped {
            writer.set_color(&self.skipped_spec())?;
            write!(writer, "  skipped")?;
            writer.reset()?;
            writeln!(writer, "  {} (no matching table)", target)?;
        }

        writeln!(
            writer,
            "{} exported, {} skipped",
            summary.exports.len(),
            summary.skipped.len()
        )?;
        Ok(())
    }
}
