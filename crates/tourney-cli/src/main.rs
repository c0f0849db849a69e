//! # tourney CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity maps repeated `-v` flags onto a
//! tracing filter.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tourney_cli::audit::{run_audit, AuditArgs};
use tourney_cli::ingest::{run_ingest, IngestArgs};

/// Tournament archive toolchain.
///
/// Audits the record collection for formatting drift, schema violations,
/// and participant-name inconsistencies, and ingests new tournaments from
/// Challonge.
#[derive(Parser, Debug)]
#[command(name = "tourney", version, about)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sweep every record: canonicalize, shape-check, and run the
    /// cross-record identity checks.
    Audit(AuditArgs),

    /// Fetch a tournament from Challonge and write a new record.
    Ingest(IngestArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Audit(args) => run_audit(&args),
        Commands::Ingest(args) => run_ingest(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
