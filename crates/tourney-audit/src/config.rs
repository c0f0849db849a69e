//! # Audit Configuration
//!
//! The heuristics that are data rather than code: the known-alias table
//! (smurf accounts that should be recorded under one canonical handle) and
//! the tournaments exempt from the one-team-per-participant rule. The
//! validator takes an [`AuditConfig`] at construction; the defaults encode
//! the community's accumulated exceptions.

/// One known-alias rule.
///
/// A name whose lowercase form contains `needle` is expected to be one of
/// the `allowed` spellings exactly; anything else is a smurf or typo and
/// should be recorded as `replacement`.
#[derive(Debug, Clone)]
pub struct AliasRule {
    /// Lowercase substring that triggers the rule.
    pub needle: String,
    /// Exact spellings that are legitimate.
    pub allowed: Vec<String>,
    /// The canonical handle to record instead.
    pub replacement: String,
}

impl AliasRule {
    /// Whether `name` (exact spelling, `lower` its lowercase form) violates
    /// this rule.
    pub fn flags(&self, name: &str, lower: &str) -> bool {
        lower.contains(&self.needle) && !self.allowed.iter().any(|a| a == name)
    }
}

/// Configuration for one audit run.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Known-alias rules, checked in order.
    pub alias_rules: Vec<AliasRule>,
    /// Tournament titles exempt from the team-membership uniqueness check.
    pub team_split_exemptions: Vec<String>,
}

impl AuditConfig {
    /// Whether a tournament title is exempt from the one-team-per-participant
    /// rule.
    pub fn is_team_split_exempt(&self, title: &str) -> bool {
        self.team_split_exemptions.iter().any(|t| t == title)
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            alias_rules: vec![
                AliasRule {
                    needle: "crazy".to_string(),
                    allowed: vec!["CrazyCrispy".to_string()],
                    replacement: "CrazyCrispy".to_string(),
                },
                AliasRule {
                    needle: "reid".to_string(),
                    allowed: vec!["Reid".to_string(), "ReidRules".to_string()],
                    replacement: "Reid".to_string(),
                },
            ],
            // "Real Platinum Rod" legitimately fielded one player on two
            // teams; grandfathered in.
            team_split_exemptions: vec!["Real Platinum Rod".to_string()],
        }
    }
}
