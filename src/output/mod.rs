//! Output formatting for check results
//!
//! This module provides:
//! - Table output for human-readable display
//! - JSON output for machine processing
//! - A static HTML report written to a file
//!
//! `Reporter` applies the output flags in a fixed order: the empty-result
//! message wins over everything, JSON mode stops after the rows, and the
//! table is followed by the optional summary and HTML report.

mod html;
mod json;
mod text;

pub use html::HtmlReport;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::{CheckReport, EvaluationRow};
use crate::error::ReportError;
use std::io::Write;
use std::path::PathBuf;

/// Printed when no dependency declares the peer
pub const NO_MATCHES_MESSAGE: &str =
    "✅ All packages are compatible with the specified peer dependency.";

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON array of rows
    Json,
}

/// Configuration for output formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Output format (table, json)
    pub format: OutputFormat,
    /// Append the summary block after the table
    pub summary: bool,
    /// Show only rows whose peer range rejects the target version
    pub only_incompatible: bool,
    /// Also write an HTML report to this path
    pub html: Option<PathBuf>,
    /// Whether to use colors (when supported)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            summary: false,
            only_incompatible: false,
            html: None,
            color: true,
        }
    }
}

/// Trait for row formatters
pub trait OutputFormatter {
    /// Format and write the rows that survived filtering
    fn format_rows(
        &self,
        report: &CheckReport,
        rows: &[&EvaluationRow],
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;
}

/// Create a row formatter based on configuration
pub fn create_formatter(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Table => Box::new(TextFormatter::with_color(config.color)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

/// Drives output for a finished check
pub struct Reporter {
    config: OutputConfig,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write the report to `writer`, and the HTML file when requested
    pub fn report(&self, report: &CheckReport, writer: &mut dyn Write) -> Result<(), ReportError> {
        self.write_stdout(report, writer)
            .map_err(|e| ReportError::write_error("<stdout>", e))?;

        if report.is_empty() || self.config.format == OutputFormat::Json {
            return Ok(());
        }

        if let Some(ref path) = self.config.html {
            HtmlReport::new(report).write_to(path)?;
            tracing::debug!(path = %path.display(), rows = report.rows.len(), "wrote HTML report");
            writeln!(writer)
                .and_then(|_| writeln!(writer, "📝 HTML report written to {}", path.display()))
                .map_err(|e| ReportError::write_error("<stdout>", e))?;
        }

        Ok(())
    }

    fn write_stdout(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if report.is_empty() {
            return writeln!(writer, "{}", NO_MATCHES_MESSAGE);
        }

        let rows = report.visible_rows(self.config.only_incompatible);
        create_formatter(&self.config).format_rows(report, &rows, writer)?;

        if self.config.format == OutputFormat::Table && self.config.summary {
            TextFormatter::with_color(self.config.color).format_summary(&report.summary(), writer)?;
        }

        Ok(())
    }
}
