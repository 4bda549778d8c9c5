//! npm CLI metadata source
//!
//! Runs `npm info <package> version peerDependencies --json` and reads the
//! result. npm prints an object when both fields exist and the bare value
//! when only one does, so a JSON string is read as the version alone.

use crate::domain::RegistrySnapshot;
use crate::error::RegistryError;
use crate::registry::MetadataSource;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Metadata source backed by the npm executable
pub struct NpmCliSource {
    program: PathBuf,
}

impl NpmCliSource {
    /// Create a source that runs the given npm executable
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
        }
    }

    /// Arguments passed to npm for a package
    fn info_args(package: &str) -> Vec<&str> {
        vec!["info", package, "version", "peerDependencies", "--json"]
    }

    /// Human-readable command line, used in errors
    fn command_line(&self, package: &str) -> String {
        format!(
            "{} {}",
            self.program.display(),
            Self::info_args(package).join(" ")
        )
    }
}

impl Default for NpmCliSource {
    fn default() -> Self {
        Self::new("npm")
    }
}

/// Parse the stdout of `npm info ... --json`
pub(crate) fn parse_info_output(
    package: &str,
    stdout: &str,
) -> Result<RegistrySnapshot, RegistryError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(RegistrySnapshot::from_document(&Map::new()));
    }

    let value: Value = serde_json::from_str(trimmed).map_err(|e| {
        RegistryError::invalid_response(package, "npm CLI", format!("invalid JSON: {}", e))
    })?;

    match value {
        Value::Object(document) => Ok(RegistrySnapshot::from_document(&document)),
        Value::String(version) => Ok(RegistrySnapshot::new(version)),
        other => Err(RegistryError::invalid_response(
            package,
            "npm CLI",
            format!("expected an object, got {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl MetadataSource for NpmCliSource {
    fn name(&self) -> &'static str {
        "npm CLI"
    }

    async fn fetch(&self, package: &str) -> Result<RegistrySnapshot, RegistryError> {
        let output = Command::new(&self.program)
            .args(Self::info_args(package))
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                RegistryError::command_failed(
                    package,
                    self.command_line(package),
                    format!("failed to execute command: {}", e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.lines().next().unwrap_or_default().trim().to_string();
            return Err(RegistryError::command_failed(
                package,
                self.command_line(package),
                format!("{} {}", output.status, detail).trim_end().to_string(),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_info_output(package, &stdout)
    }
}
