//! Static HTML report
//!
//! Renders the embedded `templates/report.html` with tera. Every matched row
//! is included regardless of `--only-incompatible`, and all values are
//! HTML-escaped by the template engine.

use crate::domain::{CheckReport, EvaluationRow};
use crate::error::ReportError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tera::{Context, Tera};

/// Embedded report template
const REPORT_HTML: &str = include_str!("../../templates/report.html");

/// Template name; the `.html` suffix turns on autoescaping
const TEMPLATE_NAME: &str = "report.html";

/// Row data for the template
#[derive(Debug, Serialize)]
struct HtmlRow<'a> {
    package: &'a str,
    kind: &'static str,
    current: &'a str,
    latest: &'a str,
    peer_range: &'a str,
    compatible: bool,
}

impl<'a> From<&'a EvaluationRow> for HtmlRow<'a> {
    fn from(row: &'a EvaluationRow) -> Self {
        Self {
            package: &row.package,
            kind: row.kind.label(),
            current: &row.current,
            latest: &row.latest,
            peer_range: &row.peer_range,
            compatible: row.compatible,
        }
    }
}

/// HTML rendering of a check report
pub struct HtmlReport<'a> {
    report: &'a CheckReport,
    generated_at: DateTime<Utc>,
}

impl<'a> HtmlReport<'a> {
    /// Create an HTML report stamped with the current time
    pub fn new(report: &'a CheckReport) -> Self {
        Self::with_time(report, Utc::now())
    }

    /// Create an HTML report with a fixed timestamp (for testing)
    pub fn with_time(report: &'a CheckReport, generated_at: DateTime<Utc>) -> Self {
        Self {
            report,
            generated_at,
        }
    }

    /// Render the document
    pub fn render(&self) -> Result<String, ReportError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, REPORT_HTML)?;

        let rows: Vec<HtmlRow> = self.report.rows.iter().map(HtmlRow::from).collect();

        let mut context = Context::new();
        context.insert("peer", &self.report.peer);
        context.insert("target_version", &self.report.target_version);
        context.insert("rows", &rows);
        context.insert(
            "generated_at",
            &self.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        );
        context.insert("tool_version", env!("CARGO_PKG_VERSION"));

        Ok(tera.render(TEMPLATE_NAME, &context)?)
    }

    /// Render and write the document as UTF-8
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        let html = self.render()?;
        std::fs::write(path, html).map_err(|e| ReportError::write_error(path, e))
    }
}
