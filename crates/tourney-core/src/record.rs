//! # Record Data Model
//!
//! The tournament record schema: one JSON document per tournament. The field
//! ORDER of [`TournamentRecord`] is load-bearing — serde serializes struct
//! fields in declaration order, and canonical form keeps keys as authored,
//! so the struct declaration below IS the canonical key order of a record
//! file.
//!
//! The auditor works over untyped `serde_json::Value` documents (it must
//! diagnose records that do not fit this model); the typed structs here are
//! the write path, used by the ingestion tool.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The legal top-level fields of a record, in canonical order. All of them
/// are required. `teams` is not listed here: it is conditionally legal, see
/// [`TEAMS_FIELD`].
pub const RECORD_FIELDS: [&str; 11] = [
    "name",
    "challonge_id",
    "challonge",
    "date",
    "notability",
    "organizer",
    "ruleset",
    "description",
    "videos",
    "matchups",
    "winner",
];

/// The one conditionally-legal top-level field: required for team events,
/// ignored otherwise.
pub const TEAMS_FIELD: &str = "teams";

/// The exact field set of a `videos` entry.
pub const VIDEO_FIELDS: [&str; 2] = ["description", "url"];

/// One tournament's complete result document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentRecord {
    /// Tournament title, also the basis of the record's file name.
    pub name: String,
    /// Opaque identifier in the bracket-hosting system. Kept as free-form
    /// JSON because existing records carry both strings and numbers.
    pub challonge_id: serde_json::Value,
    /// Public bracket URL.
    pub challonge: String,
    /// Start date, `YYYY-MM-DD`.
    pub date: String,
    /// Editorial notability tier (e.g. "major", "minor").
    pub notability: String,
    /// Names of the people who ran the tournament.
    pub organizer: Vec<String>,
    /// One of the [`Ruleset`] values; empty until a human fills it in.
    pub ruleset: String,
    /// Free-form description.
    pub description: String,
    /// Recorded broadcasts of the event.
    pub videos: Vec<Video>,
    /// Every played match, winner first.
    pub matchups: Vec<Matchup>,
    /// The tournament champion.
    pub winner: String,
    /// Team rosters; present if and only if `ruleset == "team"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<Team>>,
}

/// One pairwise result within a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub winner: String,
    pub loser: String,
    /// `<digits>-<digits>`, higher score first; `"0-0"` marks an unresolved
    /// match awaiting manual review.
    pub score: String,
}

/// One recorded broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub description: String,
    pub url: String,
}

/// One team roster within a team event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub participants: Vec<String>,
}

/// All legal ruleset values.
///
/// This is the ONE definition used across the toolchain. Every `match` on
/// `Ruleset` must be exhaustive — adding a ruleset forces every consumer to
/// handle it at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    /// Bracket seeded by prior results.
    Seeded,
    /// Random bracket.
    Unseeded,
    /// Diversity ruleset (restricted item pools).
    Diversity,
    /// Multiple rulesets across rounds.
    Mixed,
    /// Team event; records carry a `teams` field.
    Team,
    /// Several simultaneous brackets.
    Multiple,
    /// Anything else.
    Other,
}

/// Total number of ruleset values. Used for compile-time assertions.
pub const RULESET_COUNT: usize = 7;

impl Ruleset {
    /// Returns all ruleset values in canonical order.
    pub fn all() -> &'static [Ruleset] {
        &[
            Self::Seeded,
            Self::Unseeded,
            Self::Diversity,
            Self::Mixed,
            Self::Team,
            Self::Multiple,
            Self::Other,
        ]
    }

    /// The canonical lowercase spelling stored in record files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seeded => "seeded",
            Self::Unseeded => "unseeded",
            Self::Diversity => "diversity",
            Self::Mixed => "mixed",
            Self::Team => "team",
            Self::Multiple => "multiple",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string did not name a known ruleset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown ruleset: {0:?}")]
pub struct UnknownRuleset(pub String);

impl FromStr for Ruleset {
    type Err = UnknownRuleset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ruleset::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRuleset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruleset_count() {
        assert_eq!(Ruleset::all().len(), RULESET_COUNT);
    }

    #[test]
    fn test_ruleset_round_trip() {
        for r in Ruleset::all() {
            assert_eq!(r.as_str().parse::<Ruleset>().unwrap(), *r);
        }
    }

    #[test]
    fn test_ruleset_unknown() {
        assert!("bracket".parse::<Ruleset>().is_err());
        assert!("".parse::<Ruleset>().is_err());
        // Spellings are case-sensitive; records store lowercase.
        assert!("Team".parse::<Ruleset>().is_err());
    }

    #[test]
    fn test_record_fields_match_struct_order() {
        let record = TournamentRecord {
            name: "Weekly #1".into(),
            challonge_id: serde_json::json!("abc123"),
            challonge: "https://challonge.com/abc123".into(),
            date: "2017-06-09".into(),
            notability: "minor".into(),
            organizer: vec!["Alice".into()],
            ruleset: "seeded".into(),
            description: String::new(),
            videos: vec![],
            matchups: vec![],
            winner: "Alice".into(),
            teams: None,
        };
        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, RECORD_FIELDS);
    }

    #[test]
    fn test_teams_serialized_when_present() {
        let record = TournamentRecord {
            name: "Team Weekly".into(),
            challonge_id: serde_json::json!(42),
            challonge: "https://challonge.com/teamweekly".into(),
            date: "2018-02-03".into(),
            notability: "minor".into(),
            organizer: vec![],
            ruleset: "team".into(),
            description: String::new(),
            videos: vec![],
            matchups: vec![],
            winner: "Alice".into(),
            teams: Some(vec![Team {
                participants: vec!["Alice".into(), "Bob".into()],
            }]),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("teams").is_some());
        // And "teams" comes last, after "winner".
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(*keys.last().unwrap(), TEAMS_FIELD);
    }
}
