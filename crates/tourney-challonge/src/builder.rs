//! # Record Builder
//!
//! The pure transformation from a Challonge payload to an archive record.
//! Everything here is deterministic and network-free:
//!
//! - participant IDs (including group-stage IDs) resolve to display names;
//! - each decided match gets its two reported sub-scores sorted descending
//!   and joined with `-`; undecided matches and forfeits get the `"0-0"`
//!   review sentinel;
//! - the tournament winner is the winner of the last decided match, because
//!   the API does not report an overall winner.

use std::collections::HashMap;

use thiserror::Error;

use tourney_core::{Matchup, TournamentRecord};

use crate::api::ApiTournament;

/// Score sentinel for matches that need manual review.
const DRAW_SCORE: &str = "0-0";

/// Notability assigned to freshly ingested records until a human promotes
/// them.
const DEFAULT_NOTABILITY: &str = "minor";

/// Error transforming an API payload into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// The tournament has no `started_at` timestamp.
    #[error("tournament has no start date")]
    MissingStartDate,

    /// The `started_at` timestamp is not RFC 3339.
    #[error("tournament start date {value:?} is not a valid timestamp")]
    InvalidStartDate { value: String },

    /// A participant has neither a name nor a Challonge username.
    #[error("participant {id} has no name and no Challonge username")]
    UnnamedParticipant { id: i64 },

    /// A match references an ID that is not in the participant list.
    #[error("match references unknown participant {id}")]
    UnknownParticipant { id: i64 },

    /// An undecided match has no player IDs at all.
    #[error("match has neither a winner nor any player IDs")]
    MissingPlayers,

    /// No match in the payload was ever decided.
    #[error("no match has a winner; cannot infer the tournament winner")]
    NoDecidedMatches,
}

/// Build an archive record from one tournament payload.
///
/// `challonge_id` is the identifier the user asked for, recorded verbatim.
/// The editorial fields (`organizer`, `ruleset`, `description`, `videos`)
/// are left empty for a human pass; the auditor flags them until filled in.
pub fn build_record(
    tournament: &ApiTournament,
    challonge_id: &str,
) -> Result<TournamentRecord, IngestError> {
    let date = started_date(tournament)?;
    let names = participant_names(tournament)?;

    let mut matchups = Vec::with_capacity(tournament.matches.len());
    let mut tournament_winner: Option<String> = None;

    for envelope in &tournament.matches {
        let m = &envelope.inner;
        match m.winner_id {
            None => {
                // Undecided match: record both sides with the review
                // sentinel. A side with no ID at all is recorded empty and
                // surfaces as a null racer in the next audit.
                if m.player1_id.is_none() && m.player2_id.is_none() {
                    return Err(IngestError::MissingPlayers);
                }
                matchups.push(Matchup {
                    winner: resolve_optional(&names, m.player1_id)?,
                    loser: resolve_optional(&names, m.player2_id)?,
                    score: DRAW_SCORE.to_string(),
                });
            }
            Some(winner_id) => {
                let winner = resolve(&names, winner_id)?;
                let loser = resolve_optional(&names, m.loser_id)?;
                matchups.push(Matchup {
                    winner: winner.clone(),
                    loser,
                    score: compose_score(m.scores_csv.as_deref().unwrap_or("")),
                });
                tournament_winner = Some(winner);
            }
        }
    }

    let winner = tournament_winner.ok_or(IngestError::NoDecidedMatches)?;

    Ok(TournamentRecord {
        name: tournament.name.clone(),
        challonge_id: serde_json::Value::String(challonge_id.to_string()),
        challonge: tournament.full_challonge_url.clone(),
        date,
        notability: DEFAULT_NOTABILITY.to_string(),
        organizer: Vec::new(),
        ruleset: String::new(),
        description: String::new(),
        videos: Vec::new(),
        matchups,
        winner,
        teams: None,
    })
}

/// Calendar date (`YYYY-MM-DD`) of the tournament's start.
fn started_date(tournament: &ApiTournament) -> Result<String, IngestError> {
    let raw = tournament
        .started_at
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(IngestError::MissingStartDate)?;
    let parsed = chrono::DateTime::parse_from_rfc3339(raw).map_err(|_| {
        IngestError::InvalidStartDate {
            value: raw.to_string(),
        }
    })?;
    Ok(parsed.date_naive().format("%Y-%m-%d").to_string())
}

/// Map every participant ID (including group-stage IDs) to a display name.
fn participant_names(tournament: &ApiTournament) -> Result<HashMap<i64, String>, IngestError> {
    let mut names = HashMap::new();
    for envelope in &tournament.participants {
        let p = &envelope.participant;
        let name = p
            .display_name()
            .ok_or(IngestError::UnnamedParticipant { id: p.id })?;
        names.insert(p.id, name.to_string());
        for group_id in &p.group_player_ids {
            names.insert(*group_id, name.to_string());
        }
    }
    Ok(names)
}

fn resolve(names: &HashMap<i64, String>, id: i64) -> Result<String, IngestError> {
    names
        .get(&id)
        .cloned()
        .ok_or(IngestError::UnknownParticipant { id })
}

fn resolve_optional(
    names: &HashMap<i64, String>,
    id: Option<i64>,
) -> Result<String, IngestError> {
    match id {
        Some(id) => resolve(names, id),
        None => Ok(String::new()),
    }
}

/// Compose a score string from `scores_csv`: numeric sub-scores sorted
/// descending and joined with `-`. Fewer than two sub-scores (forfeits,
/// empty reports) yield the `"0-0"` review sentinel.
fn compose_score(scores_csv: &str) -> String {
    let mut parts: Vec<u64> = scores_csv
        .split('-')
        .filter_map(|p| p.trim().parse().ok())
        .collect();
    parts.sort_unstable_by(|a, b| b.cmp(a));
    match (parts.first(), parts.get(1)) {
        (Some(high), Some(low)) => format!("{high}-{low}"),
        _ => DRAW_SCORE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiMatch, ApiParticipant, MatchEnvelope, ParticipantEnvelope};

    fn participant(id: i64, name: &str) -> ParticipantEnvelope {
        ParticipantEnvelope {
            participant: ApiParticipant {
                id,
                group_player_ids: vec![],
                name: Some(name.to_string()),
                challonge_username: None,
            },
        }
    }

    fn decided_match(winner: i64, loser: i64, scores_csv: &str) -> MatchEnvelope {
        MatchEnvelope {
            inner: ApiMatch {
                winner_id: Some(winner),
                loser_id: Some(loser),
                player1_id: Some(winner),
                player2_id: Some(loser),
                scores_csv: Some(scores_csv.to_string()),
            },
        }
    }

    fn tournament(
        matches: Vec<MatchEnvelope>,
        participants: Vec<ParticipantEnvelope>,
    ) -> ApiTournament {
        ApiTournament {
            name: "Weekly #1".to_string(),
            full_challonge_url: "https://challonge.com/weekly1".to_string(),
            started_at: Some("2017-06-09T20:00:00.000-05:00".to_string()),
            matches,
            participants,
        }
    }

    #[test]
    fn test_basic_record() {
        let t = tournament(
            vec![decided_match(2, 1, "1-3")],
            vec![participant(1, "Alice"), participant(2, "Bob")],
        );
        let record = build_record(&t, "weekly1").unwrap();
        assert_eq!(record.name, "Weekly #1");
        assert_eq!(record.challonge_id, serde_json::json!("weekly1"));
        assert_eq!(record.date, "2017-06-09");
        assert_eq!(record.notability, "minor");
        assert_eq!(record.ruleset, "");
        assert_eq!(record.matchups.len(), 1);
        assert_eq!(record.matchups[0].winner, "Bob");
        assert_eq!(record.matchups[0].loser, "Alice");
        assert_eq!(record.winner, "Bob");
        assert!(record.teams.is_none());
    }

    #[test]
    fn test_scores_sorted_descending() {
        let t = tournament(
            vec![decided_match(2, 1, "1-3")],
            vec![participant(1, "Alice"), participant(2, "Bob")],
        );
        let record = build_record(&t, "weekly1").unwrap();
        assert_eq!(record.matchups[0].score, "3-1");
    }

    #[test]
    fn test_forfeit_scores_become_review_sentinel() {
        for csv in ["", "3"] {
            let t = tournament(
                vec![decided_match(2, 1, csv)],
                vec![participant(1, "Alice"), participant(2, "Bob")],
            );
            let record = build_record(&t, "weekly1").unwrap();
            assert_eq!(record.matchups[0].score, "0-0", "csv {csv:?}");
        }
    }

    #[test]
    fn test_undecided_match_gets_review_sentinel() {
        let undecided = MatchEnvelope {
            inner: ApiMatch {
                winner_id: None,
                loser_id: None,
                player1_id: Some(1),
                player2_id: Some(2),
                scores_csv: Some("2-2".to_string()),
            },
        };
        let t = tournament(
            vec![undecided, decided_match(2, 1, "3-1")],
            vec![participant(1, "Alice"), participant(2, "Bob")],
        );
        let record = build_record(&t, "weekly1").unwrap();
        assert_eq!(record.matchups[0].score, "0-0");
        assert_eq!(record.matchups[0].winner, "Alice");
        assert_eq!(record.matchups[0].loser, "Bob");
    }

    #[test]
    fn test_undecided_match_without_players_is_error() {
        let broken = MatchEnvelope {
            inner: ApiMatch {
                winner_id: None,
                loser_id: None,
                player1_id: None,
                player2_id: None,
                scores_csv: None,
            },
        };
        let t = tournament(vec![broken], vec![participant(1, "Alice")]);
        assert_eq!(build_record(&t, "x").unwrap_err(), IngestError::MissingPlayers);
    }

    #[test]
    fn test_winner_is_last_decided_match() {
        let t = tournament(
            vec![
                decided_match(2, 1, "3-1"),
                decided_match(3, 2, "3-2"),
            ],
            vec![
                participant(1, "Alice"),
                participant(2, "Bob"),
                participant(3, "Carol"),
            ],
        );
        let record = build_record(&t, "weekly1").unwrap();
        assert_eq!(record.winner, "Carol");
    }

    #[test]
    fn test_no_decided_matches_is_error() {
        let undecided = MatchEnvelope {
            inner: ApiMatch {
                winner_id: None,
                loser_id: None,
                player1_id: Some(1),
                player2_id: Some(2),
                scores_csv: None,
            },
        };
        let t = tournament(
            vec![undecided],
            vec![participant(1, "Alice"), participant(2, "Bob")],
        );
        assert_eq!(
            build_record(&t, "x").unwrap_err(),
            IngestError::NoDecidedMatches
        );
    }

    #[test]
    fn test_group_player_ids_resolve() {
        let mut alice = participant(1, "Alice");
        alice.participant.group_player_ids = vec![71];
        let mut bob = participant(2, "Bob");
        bob.participant.group_player_ids = vec![72];
        // The group stage reports matches under the group IDs.
        let t = tournament(vec![decided_match(72, 71, "2-0")], vec![alice, bob]);
        let record = build_record(&t, "weekly1").unwrap();
        assert_eq!(record.matchups[0].winner, "Bob");
        assert_eq!(record.matchups[0].loser, "Alice");
    }

    #[test]
    fn test_username_fallback() {
        let p = ParticipantEnvelope {
            participant: ApiParticipant {
                id: 1,
                group_player_ids: vec![],
                name: Some(String::new()),
                challonge_username: Some("alice_c".to_string()),
            },
        };
        let t = tournament(vec![decided_match(1, 2, "3-0")], vec![p, participant(2, "Bob")]);
        let record = build_record(&t, "weekly1").unwrap();
        assert_eq!(record.matchups[0].winner, "alice_c");
    }

    #[test]
    fn test_unnamed_participant_is_error() {
        let p = ParticipantEnvelope {
            participant: ApiParticipant {
                id: 9,
                group_player_ids: vec![],
                name: None,
                challonge_username: None,
            },
        };
        let t = tournament(vec![], vec![p]);
        assert_eq!(
            build_record(&t, "x").unwrap_err(),
            IngestError::UnnamedParticipant { id: 9 }
        );
    }

    #[test]
    fn test_unknown_participant_is_error() {
        let t = tournament(vec![decided_match(5, 1, "3-0")], vec![participant(1, "Alice")]);
        assert_eq!(
            build_record(&t, "x").unwrap_err(),
            IngestError::UnknownParticipant { id: 5 }
        );
    }

    #[test]
    fn test_missing_start_date_is_error() {
        let mut t = tournament(vec![], vec![]);
        t.started_at = None;
        assert_eq!(build_record(&t, "x").unwrap_err(), IngestError::MissingStartDate);
    }

    #[test]
    fn test_invalid_start_date_is_error() {
        let mut t = tournament(vec![], vec![]);
        t.started_at = Some("last tuesday".to_string());
        assert!(matches!(
            build_record(&t, "x").unwrap_err(),
            IngestError::InvalidStartDate { .. }
        ));
    }

    #[test]
    fn test_compose_score() {
        assert_eq!(compose_score("3-1"), "3-1");
        assert_eq!(compose_score("1-3"), "3-1");
        assert_eq!(compose_score("0-2"), "2-0");
        assert_eq!(compose_score(""), "0-0");
        assert_eq!(compose_score("3"), "0-0");
    }
}
