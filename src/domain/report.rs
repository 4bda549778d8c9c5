//! Result of a full check run

use super::{CompatibilitySummary, EvaluationRow};

/// Everything the reporter needs from a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Peer dependency name that was searched for
    pub peer: String,
    /// Version tested against each peer range, if one was given
    pub target_version: Option<String>,
    /// Matched rows in manifest order, unfiltered
    pub rows: Vec<EvaluationRow>,
    /// Number of dependencies read from the manifest
    pub total_dependencies: usize,
}

impl CheckReport {
    /// Creates an empty report
    pub fn new(peer: impl Into<String>, target_version: Option<String>) -> Self {
        Self {
            peer: peer.into(),
            target_version,
            rows: Vec::new(),
            total_dependencies: 0,
        }
    }

    /// Returns true when no dependency declared the peer
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows to display, dropping compatible ones when requested
    pub fn visible_rows(&self, only_incompatible: bool) -> Vec<&EvaluationRow> {
        self.rows
            .iter()
            .filter(|r| !only_incompatible || !r.compatible)
            .collect()
    }

    /// Summary over every matched row, ignoring display filters
    pub fn summary(&self) -> CompatibilitySummary {
        CompatibilitySummary::from_rows(&self.rows)
    }
}
