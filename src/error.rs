//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading or parsing package.json
//! - RegistryError: Issues with a single metadata lookup (always recoverable)
//! - ReportError: Issues with rendering or writing the HTML report

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Package registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Report output related errors
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

/// Errors related to a single registry metadata lookup
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in registry
    #[error("package '{package}' not found in {registry} registry")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// The lookup command could not be spawned or exited unsuccessfully
    #[error("`{command}` failed for '{package}': {message}")]
    CommandFailed {
        package: String,
        command: String,
        message: String,
    },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },
}

/// Errors related to report output
#[derive(Error, Debug)]
pub enum ReportError {
    /// HTML template failed to render
    #[error("failed to render HTML report: {message}")]
    TemplateError { message: String },

    /// Failed to write the report file
    #[error("failed to write report {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new CommandFailed error
    pub fn command_failed(
        package: impl Into<String>,
        command: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::CommandFailed {
            package: package.into(),
            command: command.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }
}

impl ReportError {
    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl From<tera::Error> for ReportError {
    fn from(err: tera::Error) -> Self {
        // tera nests the useful message in the source chain
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(inner) = source {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            source = inner.source();
        }
        ReportError::TemplateError { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_not_found() {
        let err = ManifestError::not_found("/path/to/package.json");
        let msg = format!("{}", err);
        assert!(msg.contains("manifest file not found"));
        assert!(msg.contains("package.json"));
    }

    #[test]
    fn test_manifest_error_json_parse() {
        let err = ManifestError::json_parse_error("/path/to/package.json", "unexpected token");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse JSON"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_manifest_error_read() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ManifestError::read_error("/path/to/package.json", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read manifest file"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_registry_error_package_not_found() {
        let err = RegistryError::package_not_found("nonexistent-package", "npm");
        let msg = format!("{}", err);
        assert!(msg.contains("package 'nonexistent-package' not found"));
        assert!(msg.contains("npm"));
    }

    #[test]
    fn test_registry_error_network() {
        let err = RegistryError::network_error("lodash", "npm", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to fetch"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_registry_error_command_failed() {
        let err = RegistryError::command_failed("left-pad", "npm info", "exit status: 1");
        let msg = format!("{}", err);
        assert!(msg.contains("`npm info` failed for 'left-pad'"));
        assert!(msg.contains("exit status: 1"));
    }

    #[test]
    fn test_registry_error_invalid_response() {
        let err = RegistryError::invalid_response("react-dom", "npm", "expected object");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid response from npm"));
        assert!(msg.contains("react-dom"));
    }

    #[test]
    fn test_report_error_write() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = ReportError::write_error("/missing/report.html", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to write report"));
        assert!(msg.contains("report.html"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let manifest_err = ManifestError::not_found("/path");
        let app_err: AppError = manifest_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("manifest file not found"));
    }

    #[test]
    fn test_app_error_from_registry_error() {
        let registry_err = RegistryError::package_not_found("pkg", "npm");
        let app_err: AppError = registry_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("package 'pkg' not found"));
    }

    #[test]
    fn test_app_error_from_report_error() {
        let report_err = ReportError::TemplateError {
            message: "unexpected end".to_string(),
        };
        let app_err: AppError = report_err.into();
        assert!(format!("{}", app_err).contains("failed to render HTML report"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ManifestError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
