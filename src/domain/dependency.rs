//! Dependency declaration structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Section of package.json a dependency was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyKind {
    /// Declared under `dependencies`
    #[serde(rename = "dependency")]
    Dependency,
    /// Declared only under `devDependencies`
    #[serde(rename = "devDependency")]
    DevDependency,
}

impl DependencyKind {
    /// Returns the label used in table, JSON and HTML output
    pub fn label(&self) -> &'static str {
        match self {
            DependencyKind::Dependency => "dependency",
            DependencyKind::DevDependency => "devDependency",
        }
    }

    /// Returns true for development dependencies
    pub fn is_dev(&self) -> bool {
        matches!(self, DependencyKind::DevDependency)
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A dependency as declared in the project manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyDeclaration {
    /// Package name
    pub name: String,
    /// Version range as written in the manifest
    pub declared_range: String,
    /// Which manifest section the dependency belongs to
    pub kind: DependencyKind,
}

impl DependencyDeclaration {
    /// Creates a new dependency declaration
    pub fn new(
        name: impl Into<String>,
        declared_range: impl Into<String>,
        kind: DependencyKind,
    ) -> Self {
        Self {
            name: name.into(),
            declared_range: declared_range.into(),
            kind,
        }
    }

    /// Creates a declaration from the `dependencies` section
    pub fn production(name: impl Into<String>, declared_range: impl Into<String>) -> Self {
        Self::new(name, declared_range, DependencyKind::Dependency)
    }

    /// Creates a declaration from the `devDependencies` section
    pub fn development(name: impl Into<String>, declared_range: impl Into<String>) -> Self {
        Self::new(name, declared_range, DependencyKind::DevDependency)
    }
}

impl fmt::Display for DependencyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dev_marker = if self.kind.is_dev() { " (dev)" } else { "" };
        write!(f, "{}@{}{}", self.name, self.declared_range, dev_marker)
    }
}
