//! Configuration handling for tabrip

use std::path::PathBuf;

/// Report format for the run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(ReportFormat::Terminal),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

/// Color theme for terminal output
///
/// Read once at startup and passed down to the rendering layer; nothing
/// consults a global preference after that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Configuration for an export run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the input HTML document
    pub input: PathBuf,
    /// Directory exported files are written into
    pub out_dir: PathBuf,
    /// Explicit table selector; when absent, export controls in the document
    /// are discovered instead
    pub table: Option<String>,
    /// Output file name for an explicit export
    pub file_name: Option<String>,
    /// Report format
    pub report_format: ReportFormat,
    /// Terminal color theme
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            out_dir: PathBuf::from("."),
            table: None,
            file_name: None,
            report_format: ReportFormat::default(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Create a new Config for an input document
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }

    /// Set the output directory
    pub fn with_out_dir(mut self, out_dir: PathBuf) -> Self {
        self.out_dir = out_dir;
        self
    }

    /// Set an explicit table selector
    pub fn with_table(mut self, selector: String) -> Self {
        self.table = Some(selector);
        self
    }

    /// Set the output file name for an explicit export
    pub fn with_file_name(mut self, name: String) -> Self {
        self.file_name = Some(name);
        self
    }

    /// Set the report format
    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.report_format = format;
        self
    }

    /// Set the terminal color theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
