//! Compatibility evaluation for peer dependency ranges
//!
//! This module provides:
//! - npm range matching (caret, tilde, x-ranges, hyphen ranges, `||` unions)
//! - The judge that turns a declaration and its registry snapshot into a row

mod range;

pub use range::{parse_version, satisfies};

use crate::domain::{DependencyDeclaration, EvaluationRow, RegistrySnapshot};
use nodejs_semver::Version;

/// Target version as given on the command line
#[derive(Debug, Clone)]
enum Target {
    /// No version given: every matched row is compatible
    Unconstrained,
    /// A version that parsed
    Version(Version),
    /// A version that did not parse: nothing is compatible
    Invalid,
}

/// Decides whether a dependency's peer range accepts the target version
#[derive(Debug, Clone)]
pub struct CompatibilityJudge {
    /// Peer dependency name, matched exactly
    peer: String,
    /// Target version as typed
    target_version: Option<String>,
    target: Target,
}

impl CompatibilityJudge {
    /// Create a judge for `peer`, optionally testing `target_version`
    pub fn new(peer: impl Into<String>, target_version: Option<&str>) -> Self {
        let target = match target_version {
            None => Target::Unconstrained,
            Some(raw) => match parse_version(raw) {
                Some(version) => Target::Version(version),
                None => {
                    tracing::warn!(version = raw, "target version is not valid semver");
                    Target::Invalid
                }
            },
        };

        Self {
            peer: peer.into(),
            target_version: target_version.map(str::to_string),
            target,
        }
    }

    /// Peer dependency name this judge looks for
    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Target version as given, if any
    pub fn target_version(&self) -> Option<&str> {
        self.target_version.as_deref()
    }

    /// Returns true if the target version satisfies `range`
    pub fn is_compatible(&self, range: &str) -> bool {
        match &self.target {
            Target::Unconstrained => true,
            Target::Version(version) => satisfies(version, range),
            Target::Invalid => false,
        }
    }

    /// Build a row when the snapshot declares the peer, None otherwise
    pub fn evaluate(
        &self,
        dependency: &DependencyDeclaration,
        snapshot: &RegistrySnapshot,
    ) -> Option<EvaluationRow> {
        let peer_range = snapshot.peer_range(&self.peer)?;

        Some(EvaluationRow {
            package: dependency.name.clone(),
            kind: dependency.kind,
            current: dependency.declared_range.clone(),
            latest: snapshot.latest_version.clone(),
            peer_range: peer_range.to_string(),
            compatible: self.is_compatible(peer_range),
        })
    }
}
