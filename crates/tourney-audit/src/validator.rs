//! # The Audit Sweep
//!
//! Orchestrates one full pass over the archive. Per record, in order:
//! canonicalize (rewriting the file if needed), shape checks, then the
//! stateful passes — matchup names and scores, team rosters, organizers,
//! and the top-level winner — against the registries shared across the
//! whole sweep.
//!
//! One [`Validator`] instance is one run: registries start empty, accumulate
//! over the sorted record sequence, and die with the instance. There are no
//! ambient globals and no concurrency.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use tourney_core::{CanonicalError, CanonicalJson, ScoreClass};
use tourney_store::{RecordStore, StoreError};

use crate::config::AuditConfig;
use crate::identity::NameRegistry;
use crate::report::AuditReport;
use crate::schema;

/// Diagnostic emitted when a record is rewritten to canonical form.
pub const FIXED_MESSAGE: &str = "Not formatted properly; automatically fixed.";

/// Fatal error during an audit sweep. Data-quality findings are never
/// errors; this is for malformed input and filesystem failures only.
#[derive(Error, Debug)]
pub enum AuditError {
    /// Reading, writing, or parsing a record failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Canonical serialization failed.
    #[error(transparent)]
    Canonical(#[from] CanonicalError),
}

/// One audit run: the configuration plus the accumulating registries.
#[derive(Debug, Default)]
pub struct Validator {
    config: AuditConfig,
    registry: NameRegistry,
}

impl Validator {
    /// A validator with the given heuristics configuration.
    pub fn new(config: AuditConfig) -> Self {
        Self {
            config,
            registry: NameRegistry::new(),
        }
    }

    /// Sweep the whole archive in sorted path order.
    pub fn audit_all(&mut self, store: &RecordStore) -> Result<AuditReport, AuditError> {
        let mut report = AuditReport::new();
        let paths = store.list_records()?;
        tracing::info!(records = paths.len(), "starting audit sweep");
        for path in &paths {
            self.audit_record(store, path, &mut report)?;
        }
        tracing::info!(findings = report.len(), "audit sweep finished");
        Ok(report)
    }

    /// Audit a single record, appending findings to `report`.
    ///
    /// Registries are mutated as new names are learned, so calling this out
    /// of sorted order changes which spellings are treated as canonical.
    pub fn audit_record(
        &mut self,
        store: &RecordStore,
        path: &Path,
        report: &mut AuditReport,
    ) -> Result<(), AuditError> {
        let (raw, document) = store.read_record(path)?;
        tracing::debug!(path = %path.display(), "auditing record");

        // Canonical formatting: self-healing, reported, never an error.
        let canonical = CanonicalJson::new(&document)?;
        if !canonical.matches(&raw) {
            store.write_record(path, canonical.as_str())?;
            report.report(path, FIXED_MESSAGE);
        }

        for message in schema::check_shape(&document) {
            report.report(path, message);
        }

        let team_event = schema::is_team_event(&document);

        if let Some(matchups) = document.get("matchups").and_then(Value::as_array) {
            for matchup in matchups {
                self.check_name(matchup.get("winner"), team_event, path, report);
                self.check_name(matchup.get("loser"), team_event, path, report);
                self.check_score(matchup, path, report);
            }
        }

        if team_event {
            self.check_teams(&document, path, report);
        }

        if let Some(organizers) = document.get("organizer").and_then(Value::as_array) {
            for organizer in organizers {
                self.check_name(Some(organizer), team_event, path, report);
            }
        }

        self.check_name(document.get("winner"), team_event, path, report);

        Ok(())
    }

    /// Run the identity chain for one name occurrence and report the finding.
    fn check_name(
        &mut self,
        value: Option<&Value>,
        team_event: bool,
        path: &Path,
        report: &mut AuditReport,
    ) {
        let name = value.and_then(Value::as_str);
        let finding = self.registry.check_name(name, team_event, &self.config);
        if let Some(message) = finding.message(name.unwrap_or("")) {
            report.report(path, message);
        }
    }

    /// Classify one matchup's score and report draws, malformed scores, and
    /// implausible scores.
    fn check_score(&self, matchup: &Value, path: &Path, report: &mut AuditReport) {
        let winner = matchup.get("winner").and_then(Value::as_str).unwrap_or("?");
        let loser = matchup.get("loser").and_then(Value::as_str).unwrap_or("?");
        let score = matchup.get("score").and_then(Value::as_str).unwrap_or("");
        match ScoreClass::classify(score) {
            ScoreClass::Draw => {
                report.report(path, format!("\"{winner}\" vs. \"{loser}\" has a score of 0-0"));
            }
            ScoreClass::Invalid => {
                report.report(
                    path,
                    format!("\"{winner}\" vs. \"{loser}\" has an invalid score of \"{score}\""),
                );
            }
            ScoreClass::Bogus => {
                report.report(
                    path,
                    format!(
                        "\"{winner}\" vs. \"{loser}\" has a potentially bogus score of \"{score}\""
                    ),
                );
            }
            ScoreClass::Valid => {}
        }
    }

    /// Identity-check every roster name and enforce one-team-per-participant
    /// within this tournament (unless the title is exempt).
    fn check_teams(&mut self, document: &Value, path: &Path, report: &mut AuditReport) {
        let Some(teams) = document.get("teams").and_then(Value::as_array) else {
            return;
        };
        let exempt = document
            .get("name")
            .and_then(Value::as_str)
            .is_some_and(|title| self.config.is_team_split_exempt(title));

        let mut rostered: HashSet<String> = HashSet::new();
        for team in teams {
            let Some(participants) = team.get("participants").and_then(Value::as_array) else {
                continue;
            };
            for participant in participants {
                self.check_name(Some(participant), true, path, report);
                if exempt {
                    continue;
                }
                if let Some(name) = participant.as_str() {
                    if !rostered.insert(name.to_string()) {
                        report.report(path, format!("\"{name}\" appears on more than one team"));
                    }
                }
            }
        }
    }
}
