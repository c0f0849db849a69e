//! # Schema-Shape Checks
//!
//! Stateless per-record checks of the hardcoded field rules: required and
//! forbidden top-level fields, per-field type rules, the ruleset
//! enumeration, and the exact shape of `videos` entries. This is
//! deliberately NOT a general-purpose schema engine — the rules are the
//! domain, written out one by one.

use serde_json::Value;

use tourney_core::{Ruleset, RECORD_FIELDS, TEAMS_FIELD, VIDEO_FIELDS};

/// Whether a record describes a team event (`ruleset == "team"`).
pub fn is_team_event(document: &Value) -> bool {
    document.get("ruleset").and_then(Value::as_str) == Some(Ruleset::Team.as_str())
}

/// Run every shape check against one record, returning the diagnostic
/// messages in a fixed order. Never fails: a document of the wrong overall
/// type simply reports every required field as missing.
pub fn check_shape(document: &Value) -> Vec<String> {
    let mut messages = Vec::new();

    let team_event = is_team_event(document);

    // Required fields, one diagnostic each. "teams" joins the required set
    // for team events only.
    for field in RECORD_FIELDS {
        if document.get(field).is_none() {
            messages.push(format!("{field} does not exist!"));
        }
    }
    if team_event && document.get(TEAMS_FIELD).is_none() {
        messages.push(format!("{TEAMS_FIELD} does not exist!"));
    }

    // Forbidden fields. "teams" is conditionally legal and never unknown;
    // a non-team record carrying it is simply ignored downstream.
    if let Some(map) = document.as_object() {
        for key in map.keys() {
            if !RECORD_FIELDS.contains(&key.as_str()) && key != TEAMS_FIELD {
                messages.push(format!("has an unknown field of \"{key}\"!"));
            }
        }
    }

    // ruleset: not-a-string / empty / unknown, mutually exclusive in that
    // priority order. Absence was already reported above.
    if let Some(value) = document.get("ruleset") {
        match value.as_str() {
            None => messages.push("ruleset is not a string!".to_string()),
            Some("") => messages.push("ruleset is empty!".to_string()),
            Some(s) => {
                if s.parse::<Ruleset>().is_err() {
                    messages.push(format!("has an unknown ruleset of \"{s}\"!"));
                }
            }
        }
    }

    // description: type check only.
    if let Some(value) = document.get("description") {
        if !value.is_string() {
            messages.push("description is not a string!".to_string());
        }
    }

    // videos: list of objects with exactly {description, url}.
    if let Some(value) = document.get("videos") {
        match value.as_array() {
            None => messages.push("videos is not a list!".to_string()),
            Some(videos) => {
                for (i, video) in videos.iter().enumerate() {
                    let n = i + 1;
                    let Some(map) = video.as_object() else {
                        messages.push(format!("video #{n} is not an object!"));
                        continue;
                    };
                    for field in VIDEO_FIELDS {
                        if !map.contains_key(field) {
                            messages.push(format!(
                                "video #{n} does not have a \"{field}\" field!"
                            ));
                        }
                    }
                    for key in map.keys() {
                        if !VIDEO_FIELDS.contains(&key.as_str()) {
                            messages.push(format!(
                                "video #{n} has an unknown field of \"{key}\"!"
                            ));
                        }
                    }
                }
            }
        }
    }

    // winner: not-a-string / empty, mutually exclusive, type check first.
    if let Some(value) = document.get("winner") {
        match value.as_str() {
            None => messages.push("winner is not a string!".to_string()),
            Some("") => messages.push("winner is empty!".to_string()),
            Some(_) => {}
        }
    }

    // The remaining list-valued fields only need a type gate here; their
    // contents are covered by the identity checks.
    for field in ["organizer", "matchups", TEAMS_FIELD] {
        if let Some(value) = document.get(field) {
            if !value.is_array() {
                messages.push(format!("{field} is not a list!"));
            }
        }
    }

    messages
}
