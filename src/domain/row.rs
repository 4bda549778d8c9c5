//! Evaluation row: one dependency that declares the target peer

use super::DependencyKind;
use serde::{Deserialize, Serialize};

/// One dependency whose registry metadata declares the target peer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRow {
    /// Package name
    pub package: String,
    /// Manifest section
    #[serde(rename = "type")]
    pub kind: DependencyKind,
    /// Range declared in package.json
    pub current: String,
    /// Latest version published to the registry
    pub latest: String,
    /// Range the package declares for the target peer
    pub peer_range: String,
    /// Whether the target version satisfies `peer_range`
    pub compatible: bool,
}
