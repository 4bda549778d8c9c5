//! package.json parser
//!
//! Reads `dependencies` and `devDependencies`. The merged order is every
//! `dependencies` key in file order, then the `devDependencies`-only keys.
//! A name present in both sections keeps the `dependency` kind but takes the
//! range written under `devDependencies`.

use crate::domain::{DependencyDeclaration, UNKNOWN_VERSION};
use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Parser for package.json files
pub struct PackageJsonParser {
    /// Path reported in parse errors
    path: PathBuf,
}

impl PackageJsonParser {
    /// Create a parser that reports errors against `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse the merged dependency list from package.json content
    pub fn parse(&self, content: &str) -> Result<Vec<DependencyDeclaration>, ManifestError> {
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(&self.path, e.to_string()))?;

        let empty = Map::new();
        let dependencies = section(&json, "dependencies").unwrap_or(&empty);
        let dev_dependencies = section(&json, "devDependencies").unwrap_or(&empty);

        let mut merged = Vec::with_capacity(dependencies.len() + dev_dependencies.len());

        for (name, range) in dependencies {
            let range = dev_dependencies.get(name).unwrap_or(range);
            merged.push(DependencyDeclaration::production(
                name.clone(),
                range_text(range),
            ));
        }

        for (name, range) in dev_dependencies {
            if !dependencies.contains_key(name) {
                merged.push(DependencyDeclaration::development(
                    name.clone(),
                    range_text(range),
                ));
            }
        }

        Ok(merged)
    }
}

impl Default for PackageJsonParser {
    fn default() -> Self {
        Self::new(super::MANIFEST_FILENAME)
    }
}

fn section<'a>(json: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    json.get(key).and_then(Value::as_object)
}

/// Empty or null ranges display as `unknown`
fn range_text(value: &Value) -> String {
    match value {
        Value::String(s) if s.is_empty() => UNKNOWN_VERSION.to_string(),
        Value::Null => UNKNOWN_VERSION.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DependencyKind;

    fn parse(content: &str) -> Result<Vec<DependencyDeclaration>, ManifestError> {
        PackageJsonParser::default().parse(content)
    }

    #[test]
    fn test_parse_simple_dependencies() {
        let content = r#"{
            "dependencies": {
                "lodash": "^4.17.21",
                "express": "~4.18.2"
            }
        }"#;

        let deps = parse(content).unwrap();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0], DependencyDeclaration::production("lodash", "^4.17.21"));
        assert_eq!(deps[1], DependencyDeclaration::production("express", "~4.18.2"));
    }

    #[test]
    fn test_parse_dev_dependencies() {
        let content = r#"{
            "devDependencies": {
                "typescript": "^5.0.0",
                "jest": "^29.0.0"
            }
        }"#;

        let deps = parse(content).unwrap();
        assert_eq!(deps.len(), 2);
        assert!(deps.iter().all(|d| d.kind == DependencyKind::DevDependency));
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let content = r#"{
            "dependencies": { "zustand": "^4.0.0", "axios": "^1.6.0" },
            "devDependencies": { "vitest": "^1.0.0", "eslint": "^8.0.0" }
        }"#;

        let names: Vec<_> = parse(content)
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["zustand", "axios", "vitest", "eslint"]);
    }

    #[test]
    fn test_parse_duplicate_prefers_dependency_kind_and_dev_range() {
        let content = r#"{
            "dependencies": { "react": "^18.2.0", "swr": "^2.0.0" },
            "devDependencies": { "react": "^18.3.0", "jest": "^29.0.0" }
        }"#;

        let deps = parse(content).unwrap();
        assert_eq!(deps.len(), 3);
        assert_eq!(deps[0].name, "react");
        assert_eq!(deps[0].kind, DependencyKind::Dependency);
        assert_eq!(deps[0].declared_range, "^18.3.0");
        assert_eq!(deps[2], DependencyDeclaration::development("jest", "^29.0.0"));
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert!(parse("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_ignores_other_sections() {
        let content = r#"{
            "name": "app",
            "peerDependencies": { "react": "*" },
            "optionalDependencies": { "fsevents": "^2.3.0" }
        }"#;
        assert!(parse(content).unwrap().is_empty());
    }

    #[test]
    fn test_parse_non_string_range() {
        let content = r#"{ "dependencies": { "odd": 1 } }"#;
        let deps = parse(content).unwrap();
        assert_eq!(deps[0].declared_range, "1");
    }

    #[test]
    fn test_parse_empty_range_is_unknown() {
        let content = r#"{
            "dependencies": { "blank": "", "nothing": null },
            "devDependencies": { "jest": "" }
        }"#;
        let deps = parse(content).unwrap();
        assert_eq!(deps[0].declared_range, "unknown");
        assert_eq!(deps[1].declared_range, "unknown");
        assert_eq!(deps[2], DependencyDeclaration::development("jest", "unknown"));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse("{ invalid json }").unwrap_err();
        assert!(matches!(err, ManifestError::JsonParseError { .. }));
        assert!(err.to_string().contains("package.json"));
    }

    #[test]
    fn test_parse_scoped_packages() {
        let content = r#"{
            "dependencies": { "@tanstack/react-query": "^5.0.0" }
        }"#;
        let deps = parse(content).unwrap();
        assert_eq!(deps[0].name, "@tanstack/react-query");
    }
}
