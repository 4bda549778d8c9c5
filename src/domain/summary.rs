//! Compatibility summary statistics

use super::EvaluationRow;
use serde::Serialize;

/// Counts over every matched row, computed before any output filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilitySummary {
    /// Number of dependencies declaring the peer
    pub total: usize,
    /// Rows whose peer range accepts the target version
    pub compatible: usize,
    /// Rows whose peer range rejects the target version
    pub incompatible: usize,
    /// `compatible / total` as a percentage, rounded half away from zero
    pub percent: u32,
}

impl CompatibilitySummary {
    /// Computes the summary for a set of rows
    pub fn from_rows(rows: &[EvaluationRow]) -> Self {
        let total = rows.len();
        let compatible = rows.iter().filter(|r| r.compatible).count();
        let incompatible = total - compatible;
        let percent = if total == 0 {
            0
        } else {
            (compatible as f64 / total as f64 * 100.0).round() as u32
        };

        Self {
            total,
            compatible,
            incompatible,
            percent,
        }
    }
}
