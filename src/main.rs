//! peerdep-checker - peer dependency compatibility checker
//!
//! Reads package.json, looks up every dependency in the npm registry and
//! reports those that declare a peer dependency on the given package.

use clap::Parser;
use peerdep_checker::cli::{CliArgs, USAGE_ERROR};
use peerdep_checker::compat::CompatibilityJudge;
use peerdep_checker::error::{AppError, ReportError};
use peerdep_checker::orchestrator::Orchestrator;
use peerdep_checker::output::Reporter;
use peerdep_checker::registry::create_source;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let Some(peer) = args.peer.clone() else {
        eprintln!();
        eprintln!("{}", USAGE_ERROR);
        return ExitCode::FAILURE;
    };

    // Run the main logic and handle errors
    match run(args, peer).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; debug level only with --verbose
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("peerdep_checker={}", level)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
async fn run(args: CliArgs, peer: String) -> anyhow::Result<ExitCode> {
    if args.no_color {
        colored::control::set_override(false);
    }

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        peer = %peer,
        target = ?args.target_version,
        cwd = %args.cwd.display(),
        "starting"
    );

    check(&args, peer).await?;

    Ok(ExitCode::SUCCESS)
}

/// Look up every dependency and write the report to stdout
async fn check(args: &CliArgs, peer: String) -> Result<(), AppError> {
    let source = create_source(&args.source_config())?;
    let judge = CompatibilityJudge::new(peer, args.target_version.as_deref());
    let orchestrator = Orchestrator::new(source, judge, args.probe_config());

    let report = orchestrator.run(&args.cwd).await?;

    let mut stdout = io::stdout().lock();
    Reporter::new(args.output_config()).report(&report, &mut stdout)?;
    stdout
        .flush()
        .map_err(|e| ReportError::write_error("<stdout>", e))?;

    Ok(())
}
