//! # Ingest Subcommand
//!
//! Fetches a tournament from Challonge and writes a new record in canonical
//! form. With an ID argument it is a one-shot operation; without one it
//! prompts interactively (`q` quits), so several tournaments can be pulled
//! in one sitting.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Args;

use tourney_challonge::{build_record, ChallongeClient, ChallongeConfig};
use tourney_core::CanonicalJson;
use tourney_store::RecordStore;

/// Arguments for the ingest subcommand.
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Challonge tournament ID (prompted for interactively when omitted).
    pub id: Option<String>,

    /// Directory to write the record into (default: nearest tournaments/).
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Run the ingest subcommand. Returns the process exit code.
pub fn run_ingest(args: &IngestArgs) -> anyhow::Result<u8> {
    let records_dir = crate::resolve_records_dir(args.dir.clone());
    let store = RecordStore::new(&records_dir);

    let client = ChallongeClient::new(ChallongeConfig::from_env()?)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    if let Some(id) = &args.id {
        ingest_one(&runtime, &client, &store, id)?;
        return Ok(0);
    }

    let stdin = io::stdin();
    loop {
        println!("Type \"q\" to exit.");
        print!("Enter the Challonge tournament ID: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let id = line.trim();
        if id == "q" {
            break;
        }
        if id.is_empty() {
            continue;
        }
        ingest_one(&runtime, &client, &store, id)?;
    }
    Ok(0)
}

/// Fetch one tournament, transform it, and write the record.
fn ingest_one(
    runtime: &tokio::runtime::Runtime,
    client: &ChallongeClient,
    store: &RecordStore,
    id: &str,
) -> anyhow::Result<()> {
    let tournament = runtime.block_on(client.fetch_tournament(id))?;
    let record = build_record(&tournament, id)?;

    let canonical = CanonicalJson::new(&record)?;
    let path = store.record_path_for_title(&record.name);
    store.write_record(&path, canonical.as_str())?;
    println!("Wrote {}", path.display());
    Ok(())
}
