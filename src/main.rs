//! tabrip - Export tables from server-rendered HTML pages to CSV files

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tabrip::config::{Config, ReportFormat, Theme};
use tabrip::events::{Effect, EventRegistry, UiEvent};
use tabrip::export::{CsvExporter, ExportRequest};
use tabrip::report::{render_to_stdout, ExportRecord, Summary};
use tabrip::source::HtmlSource;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliReportFormat {
    Terminal,
    Json,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(f: CliReportFormat) -> Self {
        match f {
            CliReportFormat::Terminal => ReportFormat::Terminal,
            CliReportFormat::Json => ReportFormat::Json,
        }
    }
}

/// Export tables from server-rendered HTML pages to CSV files
#[derive(Parser, Debug)]
#[command(name = "tabrip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// HTML document to read
    input: PathBuf,

    /// CSS selector of the table to export; without this, export controls
    /// (.btn-export-csv) in the document are discovered and run
    #[arg(short, long)]
    table: Option<String>,

    /// Output file name for an explicit --table export
    #[arg(short, long)]
    name: Option<String>,

    /// Directory to write exported files into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliReportFormat,

    /// Use the dark color theme for terminal output
    #[arg(long)]
    dark: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::new(cli.input)
        .with_out_dir(cli.out_dir)
        .with_report_format(cli.format.into())
        .with_theme(if cli.dark { Theme::Dark } else { Theme::Light });
    if let Some(table) = cli.table {
        config = config.with_table(table);
    }
    if let Some(name) = cli.name {
        config = config.with_file_name(name);
    }

    let source = HtmlSource::from_path(&config.input)
        .with_context(|| format!("failed to load {}", config.input.display()))?;

    let requests = collect_requests(&config, &source);

    let exporter = CsvExporter::new(&config.out_dir);
    let mut summary = Summary::new(config.input.display().to_string());
    for request in &requests {
        match exporter.export(&source, request)? {
            Some(outcome) => summary
                .exports
                .push(ExportRecord::new(&request.target, &outcome)),
            None => summary.skipped.push(request.target.clone()),
        }
    }

    render_to_stdout(&summary, config.report_format, config.theme)
}

/// Build the export requests for this run.
///
/// An explicit --table selector becomes a single request; otherwise every
/// export control in the document is activated through the event registry.
fn collect_requests(config: &Config, source: &HtmlSource) -> Vec<ExportRequest> {
    if let Some(table) = &config.table {
        let mut request = ExportRequest::new(table);
        if let Some(name) = &config.file_name {
            request = request.with_file_name(name);
        }
        return vec![request];
    }

    let registry = EventRegistry::default();
    source
        .find_triggers()
        .into_iter()
        .flat_map(|trigger| registry.dispatch(&UiEvent::ExportClick(trigger)))
        .map(|effect| {
            let Effect::ExportCsv(request) = effect;
            request
        })
        .collect()
}
