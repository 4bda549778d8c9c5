//! Core domain models for peerdep-checker
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency declarations read from package.json
//! - Registry snapshots holding the latest version and peer dependencies
//! - Evaluation rows produced by the compatibility check
//! - Summary and report structures

mod dependency;
mod report;
mod row;
mod snapshot;
mod summary;

pub use dependency::{DependencyDeclaration, DependencyKind};
pub use report::CheckReport;
pub use row::EvaluationRow;
pub use snapshot::{RegistrySnapshot, UNKNOWN_VERSION};
pub use summary::CompatibilitySummary;
