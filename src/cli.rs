//! CLI argument parsing module for peerdep-checker

use crate::orchestrator::{ProbeConfig, DEFAULT_CONCURRENCY};
use crate::output::{OutputConfig, OutputFormat};
use crate::registry::{SourceConfig, SourceKind, NPM_REGISTRY_URL};
use clap::Parser;
use std::path::PathBuf;

/// Printed to stderr when the peer name is missing
pub const USAGE_ERROR: &str =
    "❌ Please provide a peer dependency name. Example: peerdep-checker react 18.2.0";

/// Parse a concurrency value, rejecting zero
fn parse_concurrency(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", s))?;
    if n == 0 {
        return Err("concurrency must be at least 1".to_string());
    }
    Ok(n)
}

/// Find dependencies that declare a peer dependency and check a target version
#[derive(Parser, Debug, Clone)]
#[command(
    name = "peerdep-checker",
    version,
    about = "Check which dependencies declare a peer dependency and whether a version satisfies it"
)]
pub struct CliArgs {
    /// Peer dependency to look for (e.g. react)
    pub peer: Option<String>,

    /// Version to test against each declared peer range (e.g. 18.2.0)
    pub target_version: Option<String>,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Print a summary after the table
    #[arg(long)]
    pub summary: bool,

    /// Show only packages whose peer range rejects the target version
    #[arg(long)]
    pub only_incompatible: bool,

    /// Also write an HTML report to this file
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Do not draw the progress line
    #[arg(long)]
    pub hide_progress: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    // Lookup options
    /// Directory containing package.json
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub cwd: PathBuf,

    /// Where package metadata comes from
    #[arg(long, value_enum, default_value_t = SourceKind::Npm)]
    pub source: SourceKind,

    /// npm executable used by the npm source
    #[arg(long, value_name = "PATH", default_value = "npm")]
    pub npm: PathBuf,

    /// Registry base URL used by the http source
    #[arg(long, value_name = "URL", default_value = NPM_REGISTRY_URL)]
    pub registry_url: String,

    /// Number of lookups to run at once
    #[arg(long, value_parser = parse_concurrency, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Enable verbose (debug) logging on stderr
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Build the reporter configuration
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            },
            summary: self.summary,
            only_incompatible: self.only_incompatible,
            html: self.html.clone(),
            color: !self.no_color,
        }
    }

    /// Build the metadata source configuration
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig {
            kind: self.source,
            npm_program: self.npm.clone(),
            registry_url: self.registry_url.clone(),
        }
    }

    /// Build the lookup configuration
    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            concurrency: self.concurrency,
            show_progress: !self.hide_progress,
        }
    }
}
