//! Manifest file loading and parsing
//!
//! This module provides functionality to:
//! - Locate package.json in a project directory
//! - Merge `dependencies` and `devDependencies` into one ordered list

mod package_json;

pub use package_json::PackageJsonParser;

use crate::domain::DependencyDeclaration;
use crate::error::ManifestError;
use std::path::{Path, PathBuf};

/// Manifest filename looked up in the project directory
pub const MANIFEST_FILENAME: &str = "package.json";

/// Returns the manifest path for a project directory
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILENAME)
}

/// Read and parse the manifest in `dir`
pub fn load_dependencies(dir: &Path) -> Result<Vec<DependencyDeclaration>, ManifestError> {
    let path = manifest_path(dir);
    let content = std::fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::not_found(&path)
        } else {
            ManifestError::read_error(&path, e)
        }
    })?;

    let dependencies = PackageJsonParser::new(&path).parse(&content)?;
    tracing::debug!(
        path = %path.display(),
        count = dependencies.len(),
        "loaded manifest"
    );
    Ok(dependencies)
}
