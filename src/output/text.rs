//! Text output formatter for human-readable display
//!
//! This module provides:
//! - A box-drawn table of matched dependencies
//! - Yes/no compatibility markers with colors
//! - The summary block

use crate::domain::{CheckReport, CompatibilitySummary, EvaluationRow};
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

/// Marker for rows whose peer range accepts the target version
const YES: &str = "✔ Yes";
/// Marker for rows whose peer range rejects the target version
const NO: &str = "✘ No";

/// Box-drawing characters for one horizontal rule
struct Rule {
    left: &'static str,
    fill: &'static str,
    join: &'static str,
    right: &'static str,
}

const TOP: Rule = Rule {
    left: "╔",
    fill: "═",
    join: "╤",
    right: "╗",
};
const MIDDLE: Rule = Rule {
    left: "╟",
    fill: "─",
    join: "┼",
    right: "╢",
};
const BOTTOM: Rule = Rule {
    left: "╚",
    fill: "═",
    join: "╧",
    right: "╝",
};

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Column headers; the peer column is named after the peer
    fn headers(peer: &str) -> Vec<String> {
        vec![
            "Package".to_string(),
            "Type".to_string(),
            "Current".to_string(),
            "Latest".to_string(),
            format!("{} Peer Range", peer),
            "Compatible".to_string(),
        ]
    }

    /// Plain cell values for a row
    fn cells(row: &EvaluationRow) -> Vec<String> {
        vec![
            row.package.clone(),
            row.kind.label().to_string(),
            row.current.clone(),
            row.latest.clone(),
            row.peer_range.clone(),
            if row.compatible { YES } else { NO }.to_string(),
        ]
    }

    /// Column widths in characters
    fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
        headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .map(|cells| cells[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn write_rule(&self, rule: &Rule, widths: &[usize], writer: &mut dyn Write) -> std::io::Result<()> {
        let segments: Vec<String> = widths.iter().map(|w| rule.fill.repeat(w + 2)).collect();
        writeln!(writer, "{}{}{}", rule.left, segments.join(rule.join), rule.right)
    }

    /// Pad a cell, then color it so escapes do not affect alignment
    fn styled_cell(&self, text: &str, width: usize, column: usize, header: bool) -> String {
        let padded = format!("{:width$}", text, width = width);
        if !self.color {
            return padded;
        }
        if header {
            return padded.bold().to_string();
        }
        match (column, text) {
            (5, YES) => padded.green().to_string(),
            (5, NO) => padded.red().bold().to_string(),
            (0, _) => padded.bright_white().to_string(),
            _ => padded,
        }
    }

    fn write_line(
        &self,
        cells: &[String],
        widths: &[usize],
        header: bool,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let rendered: Vec<String> = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(column, (text, width))| self.styled_cell(text, *width, column, header))
            .collect();
        writeln!(writer, "║ {} ║", rendered.join(" │ "))
    }

    /// Format and write the summary block
    pub fn format_summary(
        &self,
        summary: &CompatibilitySummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer)?;
        if self.color {
            writeln!(writer, "📊 {}", "Summary:".bold())?;
        } else {
            writeln!(writer, "📊 Summary:")?;
        }
        writeln!(writer, "- Total packages checked: {}", summary.total)?;
        writeln!(writer, "- Compatible: {}", summary.compatible)?;
        writeln!(writer, "- Incompatible: {}", summary.incompatible)?;
        writeln!(writer, "- Compatibility Rate: {}%", summary.percent)
    }
}

impl OutputFormatter for TextFormatter {
    fn format_rows(
        &self,
        report: &CheckReport,
        rows: &[&EvaluationRow],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let headers = Self::headers(&report.peer);
        let body: Vec<Vec<String>> = rows.iter().map(|r| Self::cells(r)).collect();
        let widths = Self::column_widths(&headers, &body);

        self.write_rule(&TOP, &widths, writer)?;
        self.write_line(&headers, &widths, true, writer)?;
        for cells in &body {
            self.write_rule(&MIDDLE, &widths, writer)?;
            self.write_line(cells, &widths, false, writer)?;
        }
        self.write_rule(&BOTTOM, &widths, writer)?;
        writeln!(writer)
    }
}
