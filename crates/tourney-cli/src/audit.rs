//! # Audit Subcommand
//!
//! Runs the full consistency sweep and prints one line per finding, in the
//! form `<path> - <message>`. Exits 1 when anything was found (including
//! formatting auto-fixes) so CI can gate on a clean archive.

use std::path::PathBuf;

use clap::Args;

use tourney_audit::{AuditConfig, Validator};
use tourney_store::RecordStore;

/// Arguments for the audit subcommand.
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Directory holding the record files (default: nearest tournaments/).
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Run the audit sweep. Returns the process exit code.
pub fn run_audit(args: &AuditArgs) -> anyhow::Result<u8> {
    let records_dir = crate::resolve_records_dir(args.dir.clone());
    let store = RecordStore::new(&records_dir);

    let mut validator = Validator::new(AuditConfig::default());
    let report = validator.audit_all(&store)?;

    for diagnostic in report.diagnostics() {
        println!("{diagnostic}");
    }

    if report.is_clean() {
        tracing::info!("archive is clean");
        Ok(0)
    } else {
        Ok(1)
    }
}
