//! # Participant Identity Checks
//!
//! The heart of the auditor: three registries that accumulate participant
//! spellings over the whole sweep, and the short-circuiting check chain run
//! for every name occurrence.
//!
//! Each registry is first-writer-wins — the first occurrence of a key (in
//! sweep order) establishes the canonical value, and every later mismatch is
//! a finding:
//!
//! - **canonical case**: lowercase name → first-seen exact spelling;
//! - **underscores**: lowercase name with underscores stripped → first-seen
//!   lowercase spelling (with underscores);
//! - **prefixes**: truncated lowercase name → first-seen full lowercase
//!   name. Two distinct names colliding on a prefix is a suspected duplicate
//!   identity. Skipped for team events, whose ad-hoc squad names collide
//!   constantly.

use std::collections::HashMap;

use crate::config::AuditConfig;

/// Truncation length for the duplicate-prefix heuristic.
pub const PREFIX_LEN: usize = 5;

/// Extended truncation length for names containing [`LONG_PREFIX_MARKER`].
/// "bindingof…" titles share far more than five leading characters, so the
/// short prefix would flag every pair of them.
pub const LONG_PREFIX_LEN: usize = 10;

const LONG_PREFIX_MARKER: &str = "bindingof";

// Markers are matched case-sensitively: real handles like "Tester" have
// historically been distinct people, while lowercase "test"/"placeholder"
// entries come from bracket scaffolding.
const TEST_MARKER: &str = "test";
const PLACEHOLDER_MARKER: &str = "placeholder";

/// Result of checking one name occurrence. The chain short-circuits: the
/// first rule that fires is the finding, and the remaining registries are
/// neither consulted nor updated for that occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFinding {
    /// Name absent or empty.
    NullName,
    /// Name contains the `test` scaffolding marker.
    TestMarker,
    /// Name contains the `placeholder` scaffolding marker.
    PlaceholderMarker,
    /// Spelling differs from the established canonical case.
    Miscapitalized {
        /// The first-seen exact spelling.
        canonical: String,
    },
    /// Name matches a known-alias rule and is not an allowed spelling.
    KnownAlias {
        /// The canonical handle to use instead.
        replacement: String,
    },
    /// Underscore placement differs from the established spelling.
    WrongUnderscores {
        /// Number of underscores in the established spelling.
        expected: usize,
    },
    /// Shares a truncated prefix with a different established name.
    SuspectedDuplicate {
        /// The established full (lowercase) name.
        existing: String,
    },
    /// No finding.
    Clean,
}

impl NameFinding {
    /// Render the finding as a diagnostic message, or `None` for
    /// [`NameFinding::Clean`]. `name` is the occurrence's exact spelling
    /// (empty for [`NameFinding::NullName`]).
    pub fn message(&self, name: &str) -> Option<String> {
        match self {
            Self::Clean => None,
            Self::NullName => Some("Null racer detected".to_string()),
            Self::TestMarker => Some("Test racer detected".to_string()),
            Self::PlaceholderMarker => Some("Placeholder racer detected".to_string()),
            Self::Miscapitalized { canonical } => Some(format!(
                "\"{name}\" has the wrong capitalization; it should be \"{canonical}\""
            )),
            Self::KnownAlias { replacement } => Some(format!(
                "\"{name}\" should be replaced with the known alias \"{replacement}\""
            )),
            Self::WrongUnderscores { expected } => Some(format!(
                "\"{name}\" has the wrong number of underscores; it should have {expected}"
            )),
            Self::SuspectedDuplicate { existing } => Some(format!(
                "\"{name}\" might be a duplicate entry of \"{existing}\""
            )),
        }
    }
}

/// The cross-record name registries for one audit run.
///
/// Created empty before the first record, mutated only through
/// [`check_name`](NameRegistry::check_name), discarded when the run ends.
#[derive(Debug, Default)]
pub struct NameRegistry {
    /// lowercase name → first-seen exact spelling.
    canonical_case: HashMap<String, String>,
    /// lowercase name minus underscores → first-seen lowercase spelling.
    underscores: HashMap<String, String>,
    /// truncated lowercase name → first-seen full lowercase name.
    prefixes: HashMap<String, String>,
}

impl NameRegistry {
    /// Empty registries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the identity chain for one name occurrence, updating the
    /// registries as a side effect. `team_event` disables the prefix
    /// heuristic.
    pub fn check_name(
        &mut self,
        name: Option<&str>,
        team_event: bool,
        config: &AuditConfig,
    ) -> NameFinding {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            return NameFinding::NullName;
        };

        if name.contains(TEST_MARKER) {
            return NameFinding::TestMarker;
        }
        if name.contains(PLACEHOLDER_MARKER) {
            return NameFinding::PlaceholderMarker;
        }

        let lower = name.to_lowercase();

        match self.canonical_case.get(&lower) {
            Some(stored) if stored != name => {
                return NameFinding::Miscapitalized {
                    canonical: stored.clone(),
                };
            }
            Some(_) => {}
            None => {
                self.canonical_case.insert(lower.clone(), name.to_string());
            }
        }

        for rule in &config.alias_rules {
            if rule.flags(name, &lower) {
                return NameFinding::KnownAlias {
                    replacement: rule.replacement.clone(),
                };
            }
        }

        let stripped: String = lower.chars().filter(|c| *c != '_').collect();
        match self.underscores.get(&stripped) {
            Some(stored) if *stored != lower => {
                return NameFinding::WrongUnderscores {
                    expected: stored.matches('_').count(),
                };
            }
            Some(_) => {}
            None => {
                self.underscores.insert(stripped, lower.clone());
            }
        }

        if !team_event {
            let len = if lower.contains(LONG_PREFIX_MARKER) {
                LONG_PREFIX_LEN
            } else {
                PREFIX_LEN
            };
            let prefix: String = lower.chars().take(len).collect();
            match self.prefixes.get(&prefix) {
                Some(stored) if *stored != lower => {
                    return NameFinding::SuspectedDuplicate {
                        existing: stored.clone(),
                    };
                }
                Some(_) => {}
                None => {
                    self.prefixes.insert(prefix, lower);
                }
            }
        }

        NameFinding::Clean
    }
}
