//! Registry metadata sources
//!
//! This module provides:
//! - The `MetadataSource` trait used by the orchestrator
//! - An npm CLI source (`npm info <pkg> version peerDependencies --json`)
//! - A direct npm registry HTTP source

mod client;
mod npm;
mod npm_cli;

pub use client::HttpClient;
pub use npm::{NpmRegistrySource, NPM_REGISTRY_URL};
pub use npm_cli::NpmCliSource;

use crate::domain::RegistrySnapshot;
use crate::error::RegistryError;
use async_trait::async_trait;
use clap::ValueEnum;
use std::path::PathBuf;
use std::sync::Arc;

/// Trait for package metadata lookups
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Get the source name used in log events and errors
    fn name(&self) -> &'static str;

    /// Fetch the latest version and peer dependencies of a package
    async fn fetch(&self, package: &str) -> Result<RegistrySnapshot, RegistryError>;
}

/// Available metadata sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceKind {
    /// Shell out to the npm CLI
    #[default]
    Npm,
    /// Query the registry HTTP API directly
    Http,
}

/// Settings needed to build a metadata source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Which source to use
    pub kind: SourceKind,
    /// npm executable for the CLI source
    pub npm_program: PathBuf,
    /// Base URL for the HTTP source
    pub registry_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            npm_program: PathBuf::from("npm"),
            registry_url: NPM_REGISTRY_URL.to_string(),
        }
    }
}

/// Create a metadata source for the given configuration
pub fn create_source(config: &SourceConfig) -> Result<Arc<dyn MetadataSource>, RegistryError> {
    let source: Arc<dyn MetadataSource> = match config.kind {
        SourceKind::Npm => Arc::new(NpmCliSource::new(&config.npm_program)),
        SourceKind::Http => Arc::new(NpmRegistrySource::with_base_url(
            HttpClient::new()?,
            &config.registry_url,
        )),
    };
    Ok(source)
}
