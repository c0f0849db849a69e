//! # tourney-core — Foundational Types for the Tournament Archive
//!
//! This crate is the bedrock of the archive toolchain. It defines the record
//! data model, the canonical on-disk serialization, the ruleset taxonomy, and
//! the score classifier. Every other crate in the workspace depends on
//! `tourney-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalJson` newtype.** ALL record bytes written to disk flow
//!    through `CanonicalJson::new()`. No raw `serde_json::to_string()` for
//!    record files. This makes formatting drift between writers impossible
//!    by construction.
//!
//! 2. **Single `Ruleset` enum.** One definition of the legal ruleset values,
//!    exhaustive `match` everywhere. Adding a ruleset forces every consumer
//!    to handle it.
//!
//! 3. **Pure score classification.** `ScoreClass::classify` maps a score
//!    string to a verdict with no side effects, independently of how the
//!    verdict is reported.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tourney-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod record;
pub mod score;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalJson;
pub use error::CanonicalError;
pub use record::{
    Matchup, Ruleset, Team, TournamentRecord, UnknownRuleset, Video, RECORD_FIELDS,
    RULESET_COUNT, TEAMS_FIELD, VIDEO_FIELDS,
};
pub use score::{ScoreClass, BOGUS_SCORE_MIN};
