//! # tourney-challonge — Bracket Ingestion
//!
//! Fetches a finished tournament from the Challonge v1 API and transforms it
//! into an archive record. Two halves, deliberately separated:
//!
//! - [`client`] — the HTTP surface: a thin typed wrapper over
//!   `reqwest::Client` with the API key, timeout, and error mapping.
//! - [`builder`] — the pure transformation from API payload to
//!   [`tourney_core::TournamentRecord`]: participant-ID resolution, score
//!   composition, and tournament-winner inference. No I/O, fully testable
//!   without a network.
//!
//! The emitted record is intentionally incomplete — `ruleset`,
//! `description`, `organizer`, and `videos` are left for a human to fill
//! in, and the archive auditor nags until they do.

pub mod api;
pub mod builder;
pub mod client;

pub use api::{ApiMatch, ApiParticipant, ApiTournament};
pub use builder::{build_record, IngestError};
pub use client::{ChallongeClient, ChallongeConfig, ChallongeError, DEFAULT_BASE_URL};
