//! npm Registry adapter
//!
//! Fetches the latest manifest of a package straight from the registry.
//! API endpoint: https://registry.npmjs.org/{package}/latest

use crate::domain::RegistrySnapshot;
use crate::error::RegistryError;
use crate::registry::{HttpClient, MetadataSource};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// npm registry base URL
pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// npm Registry HTTP source
pub struct NpmRegistrySource {
    client: HttpClient,
    base_url: String,
}

impl NpmRegistrySource {
    /// Create a new source against a custom registry
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for the latest manifest of a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}/latest", self.base_url, package)
    }
}

#[async_trait]
impl MetadataSource for NpmRegistrySource {
    fn name(&self) -> &'static str {
        "npm registry"
    }

    async fn fetch(&self, package: &str) -> Result<RegistrySnapshot, RegistryError> {
        let url = self.build_url(package);
        let document: Map<String, Value> =
            self.client.get_json(&url, package, self.name()).await?;

        Ok(RegistrySnapshot::from_document(&document))
    }
}
