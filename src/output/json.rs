//! JSON output formatter for machine processing
//!
//! Prints the filtered rows as a pretty JSON array using the field names
//! `package`, `type`, `current`, `latest`, `peerRange` and `compatible`.

use crate::domain::{CheckReport, EvaluationRow};
use crate::output::OutputFormatter;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_rows(
        &self,
        _report: &CheckReport,
        rows: &[&EvaluationRow],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(rows).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}
