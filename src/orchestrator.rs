//! Check orchestrator for coordinating the whole workflow
//!
//! This module provides:
//! - Workflow coordination: read manifest → look up → evaluate
//! - Sequential lookups by default, an optional bounded worker pool
//! - Fail-open handling of per-package lookup errors

use crate::compat::CompatibilityJudge;
use crate::domain::{CheckReport, DependencyDeclaration, RegistrySnapshot};
use crate::error::ManifestError;
use crate::manifest::load_dependencies;
use crate::progress::Progress;
use crate::registry::MetadataSource;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Default number of lookups in flight
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Lookup settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Maximum lookups in flight (1 means strictly sequential)
    pub concurrency: usize,
    /// Whether to draw the progress line
    pub show_progress: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            show_progress: true,
        }
    }
}

/// Orchestrator for coordinating the check workflow
pub struct Orchestrator {
    /// Where package metadata comes from
    source: Arc<dyn MetadataSource>,
    /// Peer name and target version
    judge: CompatibilityJudge,
    /// Lookup settings
    config: ProbeConfig,
}

impl Orchestrator {
    /// Create a new orchestrator
    pub fn new(
        source: Arc<dyn MetadataSource>,
        judge: CompatibilityJudge,
        config: ProbeConfig,
    ) -> Self {
        Self {
            source,
            judge,
            config,
        }
    }

    /// Read the manifest in `dir` and check every dependency.
    /// Only manifest errors are returned; lookup failures drop the package.
    pub async fn run(&self, dir: &Path) -> Result<CheckReport, ManifestError> {
        let dependencies = load_dependencies(dir)?;
        Ok(self.check(&dependencies).await)
    }

    /// Check an already loaded dependency list
    pub async fn check(&self, dependencies: &[DependencyDeclaration]) -> CheckReport {
        let mut report = CheckReport::new(
            self.judge.peer(),
            self.judge.target_version().map(str::to_string),
        );
        report.total_dependencies = dependencies.len();

        let mut progress = Progress::new(self.config.show_progress);
        progress.start(dependencies.len() as u64);

        let snapshots = if self.config.concurrency > 1 {
            self.fetch_parallel(dependencies, &progress).await
        } else {
            self.fetch_sequential(dependencies, &progress).await
        };

        if progress.finish() {
            println!();
            println!();
        }

        for (dependency, snapshot) in dependencies.iter().zip(snapshots) {
            let Some(snapshot) = snapshot else {
                continue;
            };
            if let Some(row) = self.judge.evaluate(dependency, &snapshot) {
                report.rows.push(row);
            }
        }

        tracing::debug!(
            peer = self.judge.peer(),
            matched = report.rows.len(),
            total = report.total_dependencies,
            "check finished"
        );
        report
    }

    /// One lookup at a time, in manifest order
    async fn fetch_sequential(
        &self,
        dependencies: &[DependencyDeclaration],
        progress: &Progress,
    ) -> Vec<Option<RegistrySnapshot>> {
        let mut snapshots = Vec::with_capacity(dependencies.len());

        for dep in dependencies {
            let snapshot = self.fetch_one(&dep.name).await;
            progress.inc();
            snapshots.push(snapshot);
        }

        snapshots
    }

    /// Bounded worker pool; results land in their manifest slot
    async fn fetch_parallel(
        &self,
        dependencies: &[DependencyDeclaration],
        progress: &Progress,
    ) -> Vec<Option<RegistrySnapshot>> {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency));
        let mut tasks = JoinSet::new();

        for (index, dep) in dependencies.iter().enumerate() {
            let source = Arc::clone(&self.source);
            let semaphore = Arc::clone(&semaphore);
            let name = dep.name.clone();

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok()?;
                let snapshot = lookup(source.as_ref(), &name).await;
                Some((index, snapshot))
            });
        }

        let mut slots: Vec<Option<RegistrySnapshot>> = vec![None; dependencies.len()];
        while let Some(joined) = tasks.join_next().await {
            progress.inc();
            match joined {
                Ok(Some((index, snapshot))) => slots[index] = snapshot,
                Ok(None) => {}
                Err(e) => tracing::debug!(error = %e, "lookup task failed"),
            }
        }

        slots
    }

    async fn fetch_one(&self, package: &str) -> Option<RegistrySnapshot> {
        lookup(self.source.as_ref(), package).await
    }
}

/// Run one lookup, discarding the error
async fn lookup(source: &dyn MetadataSource, package: &str) -> Option<RegistrySnapshot> {
    match source.fetch(package).await {
        Ok(snapshot) => {
            tracing::debug!(
                package,
                source = source.name(),
                latest = %snapshot.latest_version,
                peers = snapshot.peer_dependencies.len(),
                "fetched metadata"
            );
            Some(snapshot)
        }
        Err(e) => {
            tracing::debug!(package, source = source.name(), error = %e, "skipping package");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::time::Duration;

    /// In-memory metadata source
    struct MockSource {
        snapshots: HashMap<String, RegistrySnapshot>,
        delays: HashMap<String, u64>,
    }

    impl MockSource {
        fn new() -> Self {
            Self {
                snapshots: HashMap::new(),
                delays: HashMap::new(),
            }
        }

        fn with(mut self, name: &str, snapshot: RegistrySnapshot) -> Self {
            self.snapshots.insert(name.to_string(), snapshot);
            self
        }

        fn with_delay(mut self, name: &str, millis: u64) -> Self {
            self.delays.insert(name.to_string(), millis);
            self
        }
    }

    #[async_trait]
    impl MetadataSource for MockSource {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn fetch(&self, package: &str) -> Result<RegistrySnapshot, RegistryError> {
            if let Some(millis) = self.delays.get(package) {
                tokio::time::sleep(Duration::from_millis(*millis)).await;
            }
            self.snapshots
                .get(package)
                .cloned()
                .ok_or_else(|| RegistryError::package_not_found(package, "mock"))
        }
    }

    fn react_peer(latest: &str, range: &str) -> RegistrySnapshot {
        RegistrySnapshot::new(latest).with_peer("react", range)
    }

    fn orchestrator(source: MockSource, target: Option<&str>, concurrency: usize) -> Orchestrator {
        Orchestrator::new(
            Arc::new(source),
            CompatibilityJudge::new("react", target),
            ProbeConfig {
                concurrency,
                show_progress: false,
            },
        )
    }

    #[tokio::test]
    async fn test_check_single_match() {
        let source = MockSource::new().with("a", react_peer("2.0.0", "^18.0.0"));
        let deps = vec![DependencyDeclaration::production("a", "1.0.0")];

        let report = orchestrator(source, Some("18.2.0"), 1)
            .check(&deps)
            .await;

        assert_eq!(report.rows.len(), 1);
        assert!(report.rows[0].compatible);
        assert_eq!(report.rows[0].latest, "2.0.0");
        assert_eq!(report.total_dependencies, 1);
        assert_eq!(report.target_version.as_deref(), Some("18.2.0"));
    }

    #[tokio::test]
    async fn test_check_skips_failed_lookups() {
        let source = MockSource::new().with("b", react_peer("1.0.0", "^17.0.0"));
        let deps = vec![
            DependencyDeclaration::production("missing", "^1.0.0"),
            DependencyDeclaration::production("b", "^1.0.0"),
        ];

        let report = orchestrator(source, Some("17.0.2"), 1).check(&deps).await;

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].package, "b");
    }

    #[tokio::test]
    async fn test_check_skips_packages_without_peer() {
        let source = MockSource::new()
            .with("lodash", RegistrySnapshot::new("4.17.21"))
            .with("redux", RegistrySnapshot::new("5.0.0").with_peer("vue", "^3"));
        let deps = vec![
            DependencyDeclaration::production("lodash", "^4.17.21"),
            DependencyDeclaration::production("redux", "^5.0.0"),
        ];

        let report = orchestrator(source, None, 1).check(&deps).await;
        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_check_empty_manifest() {
        let report = orchestrator(MockSource::new(), None, 1)
            .check(&[])
            .await;
        assert!(report.is_empty());
        assert_eq!(report.total_dependencies, 0);
    }

    #[tokio::test]
    async fn test_parallel_preserves_manifest_order() {
        let source = MockSource::new()
            .with("slow", react_peer("1.0.0", "^18.0.0"))
            .with("fast", react_peer("1.0.0", "^17.0.0"))
            .with("medium", react_peer("1.0.0", "^18.0.0"))
            .with_delay("slow", 60)
            .with_delay("medium", 20);
        let deps = vec![
            DependencyDeclaration::production("slow", "1"),
            DependencyDeclaration::production("fast", "1"),
            DependencyDeclaration::development("medium", "1"),
        ];

        let report = orchestrator(source, Some("18.2.0"), 4).check(&deps).await;

        let names: Vec<_> = report.rows.iter().map(|r| r.package.as_str()).collect();
        assert_eq!(names, vec!["slow", "fast", "medium"]);
        let compatible: Vec<_> = report.rows.iter().map(|r| r.compatible).collect();
        assert_eq!(compatible, vec![true, false, true]);
    }

    #[tokio::test]
    async fn test_run_missing_manifest_is_fatal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = orchestrator(MockSource::new(), None, 1)
            .run(temp_dir.path())
            .await;
        assert!(matches!(result, Err(ManifestError::NotFound { .. })));
    }

    #[test]
    fn test_probe_config_default() {
        let config = ProbeConfig::default();
        assert_eq!(config.concurrency, 1);
        assert!(config.show_progress);
    }
}
