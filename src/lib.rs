//! peerdep-checker - peer dependency compatibility checker library
//!
//! This library provides the core functionality for checking which
//! dependencies of a Node.js project declare a peer dependency on a given
//! package, and whether a target version satisfies those peer ranges:
//! - Manifest reading (package.json)
//! - Registry lookups (npm CLI or registry HTTP API)
//! - npm range evaluation
//! - Table, JSON and HTML reporting

pub mod cli;
pub mod compat;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
