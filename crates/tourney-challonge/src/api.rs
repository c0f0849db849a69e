//! # Challonge v1 API Payload Types
//!
//! The subset of the Challonge response the ingestion path needs. Challonge
//! wraps every entity in a single-key envelope (`{"tournament": {...}}`,
//! `{"match": {...}}`, `{"participant": {...}}`); the envelope structs here
//! mirror that so deserialization stays declarative.

use serde::Deserialize;

/// Top-level response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentEnvelope {
    pub tournament: ApiTournament,
}

/// One tournament, with matches and participants included
/// (`include_matches=1&include_participants=1`).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiTournament {
    pub name: String,
    pub full_challonge_url: String,
    /// RFC 3339 timestamp; absent for tournaments that never started.
    pub started_at: Option<String>,
    #[serde(default)]
    pub matches: Vec<MatchEnvelope>,
    #[serde(default)]
    pub participants: Vec<ParticipantEnvelope>,
}

/// Envelope around one match.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchEnvelope {
    #[serde(rename = "match")]
    pub inner: ApiMatch,
}

/// One played (or abandoned) match.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMatch {
    /// Absent when the match was never decided.
    pub winner_id: Option<i64>,
    pub loser_id: Option<i64>,
    pub player1_id: Option<i64>,
    pub player2_id: Option<i64>,
    /// Reported sub-scores joined with `-`; empty or absent on forfeits.
    pub scores_csv: Option<String>,
}

/// Envelope around one participant.
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantEnvelope {
    pub participant: ApiParticipant,
}

/// One registered participant.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiParticipant {
    pub id: i64,
    /// Additional IDs this participant plays under in group stages.
    #[serde(default)]
    pub group_player_ids: Vec<i64>,
    pub name: Option<String>,
    /// Fallback handle when `name` is tied to an empty Challonge profile.
    pub challonge_username: Option<String>,
}

impl ApiParticipant {
    /// The name to record: `name`, falling back to `challonge_username`;
    /// `None` if both are empty or absent.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.challonge_username.as_deref().filter(|n| !n.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_name() {
        let p = ApiParticipant {
            id: 1,
            group_player_ids: vec![],
            name: Some("Alice".to_string()),
            challonge_username: Some("alice_c".to_string()),
        };
        assert_eq!(p.display_name(), Some("Alice"));
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let p = ApiParticipant {
            id: 1,
            group_player_ids: vec![],
            name: Some(String::new()),
            challonge_username: Some("alice_c".to_string()),
        };
        assert_eq!(p.display_name(), Some("alice_c"));
    }

    #[test]
    fn test_display_name_none_when_both_empty() {
        let p = ApiParticipant {
            id: 1,
            group_player_ids: vec![],
            name: None,
            challonge_username: Some(String::new()),
        };
        assert_eq!(p.display_name(), None);
    }

    #[test]
    fn test_deserialize_envelopes() {
        let payload = r#"{
            "tournament": {
                "name": "Weekly #1",
                "full_challonge_url": "https://challonge.com/weekly1",
                "started_at": "2017-06-09T20:00:00.000-05:00",
                "matches": [
                    {"match": {"winner_id": 2, "loser_id": 1,
                               "player1_id": 1, "player2_id": 2,
                               "scores_csv": "1-3"}}
                ],
                "participants": [
                    {"participant": {"id": 1, "name": "Alice"}},
                    {"participant": {"id": 2, "name": "Bob", "group_player_ids": [7]}}
                ]
            }
        }"#;
        let envelope: TournamentEnvelope = serde_json::from_str(payload).unwrap();
        let t = envelope.tournament;
        assert_eq!(t.name, "Weekly #1");
        assert_eq!(t.matches.len(), 1);
        assert_eq!(t.matches[0].inner.winner_id, Some(2));
        assert_eq!(t.participants[1].participant.group_player_ids, [7]);
    }
}
