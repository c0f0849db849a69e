//! # Score Classification
//!
//! A matchup score is a string of the form `<digits>-<digits>`, higher score
//! first. [`ScoreClass::classify`] is a pure function from score string to
//! verdict; diagnostic emission lives with the auditor, so the rules here
//! can be tested in isolation.

/// Any score component at or above this value is considered implausible for
/// a single match in this community.
pub const BOGUS_SCORE_MIN: u64 = 15;

/// Verdict for one matchup score, first match wins:
///
/// 1. exactly `"0-0"` — an unresolved match, flagged for manual review;
/// 2. not `<digits>-<digits>` — malformed;
/// 3. either component ≥ [`BOGUS_SCORE_MIN`] — suspiciously large;
/// 4. otherwise fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreClass {
    /// The `"0-0"` sentinel.
    Draw,
    /// Does not match `<digits>-<digits>`.
    Invalid,
    /// Matches the pattern but a component is implausibly large.
    Bogus,
    /// A plausible, well-formed score.
    Valid,
}

impl ScoreClass {
    /// Classify a score string.
    pub fn classify(score: &str) -> ScoreClass {
        if score == "0-0" {
            return ScoreClass::Draw;
        }
        let Some((left, right)) = score.split_once('-') else {
            return ScoreClass::Invalid;
        };
        if !is_digits(left) || !is_digits(right) {
            return ScoreClass::Invalid;
        }
        // A component too large for u64 is far past the plausibility bound.
        match (left.parse::<u64>(), right.parse::<u64>()) {
            (Ok(l), Ok(r)) if l < BOGUS_SCORE_MIN && r < BOGUS_SCORE_MIN => ScoreClass::Valid,
            _ => ScoreClass::Bogus,
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_sentinel() {
        assert_eq!(ScoreClass::classify("0-0"), ScoreClass::Draw);
    }

    #[test]
    fn test_valid_scores() {
        assert_eq!(ScoreClass::classify("3-1"), ScoreClass::Valid);
        assert_eq!(ScoreClass::classify("14-0"), ScoreClass::Valid);
        assert_eq!(ScoreClass::classify("0-1"), ScoreClass::Valid);
    }

    #[test]
    fn test_bogus_threshold_inclusive() {
        assert_eq!(ScoreClass::classify("15-0"), ScoreClass::Bogus);
        assert_eq!(ScoreClass::classify("16-3"), ScoreClass::Bogus);
        assert_eq!(ScoreClass::classify("3-16"), ScoreClass::Bogus);
        assert_eq!(ScoreClass::classify("14-14"), ScoreClass::Valid);
    }

    #[test]
    fn test_invalid_shapes() {
        assert_eq!(ScoreClass::classify(""), ScoreClass::Invalid);
        assert_eq!(ScoreClass::classify("3"), ScoreClass::Invalid);
        assert_eq!(ScoreClass::classify("3-"), ScoreClass::Invalid);
        assert_eq!(ScoreClass::classify("-1"), ScoreClass::Invalid);
        assert_eq!(ScoreClass::classify("3-1-2"), ScoreClass::Invalid);
        assert_eq!(ScoreClass::classify("three-one"), ScoreClass::Invalid);
        assert_eq!(ScoreClass::classify("3 - 1"), ScoreClass::Invalid);
    }

    #[test]
    fn test_draw_never_invalid_or_bogus() {
        // "0-0" is always the advisory class, before any other rule runs.
        assert_ne!(ScoreClass::classify("0-0"), ScoreClass::Invalid);
        assert_ne!(ScoreClass::classify("0-0"), ScoreClass::Bogus);
    }

    #[test]
    fn test_oversized_component_is_bogus() {
        // Pattern-valid, but does not fit in u64; still unambiguously bogus.
        assert_eq!(
            ScoreClass::classify("99999999999999999999999-1"),
            ScoreClass::Bogus
        );
    }
}
