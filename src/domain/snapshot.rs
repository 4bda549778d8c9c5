//! Registry metadata for a single package

use serde::Serialize;
use serde_json::{Map, Value};

/// Placeholder used when the registry does not report a version
pub const UNKNOWN_VERSION: &str = "unknown";

/// Latest published version and peer dependencies of a package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    /// Latest published version
    pub latest_version: String,
    /// Peer dependency name to range, in registry order
    pub peer_dependencies: Vec<(String, String)>,
}

impl RegistrySnapshot {
    /// Creates a new snapshot
    pub fn new(latest_version: impl Into<String>) -> Self {
        Self {
            latest_version: latest_version.into(),
            peer_dependencies: Vec::new(),
        }
    }

    /// Adds a peer dependency (builder pattern)
    pub fn with_peer(mut self, name: impl Into<String>, range: impl Into<String>) -> Self {
        self.peer_dependencies.push((name.into(), range.into()));
        self
    }

    /// Builds a snapshot from the `version` and `peerDependencies` fields of a
    /// registry document. Missing fields fall back to `unknown` and no peers.
    pub fn from_document(document: &Map<String, Value>) -> Self {
        let latest_version = document
            .get("version")
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
            .unwrap_or(UNKNOWN_VERSION)
            .to_string();

        let peer_dependencies = document
            .get("peerDependencies")
            .and_then(Value::as_object)
            .map(|peers| {
                peers
                    .iter()
                    .filter_map(|(name, range)| {
                        range.as_str().map(|r| (name.clone(), r.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            latest_version,
            peer_dependencies,
        }
    }

    /// Returns the declared range for a peer, matched by exact name
    pub fn peer_range(&self, peer: &str) -> Option<&str> {
        self.peer_dependencies
            .iter()
            .find(|(name, _)| name == peer)
            .map(|(_, range)| range.as_str())
    }
}
