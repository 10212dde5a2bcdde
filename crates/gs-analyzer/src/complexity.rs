// complexity.rs - Heuristic complexity rating for a goal.
//
// Rules, evaluated in order:
//   complex  - criteria >= complex_min_criteria, or the document talks about
//              phases / coordination / orchestration
//   simple   - criteria <= simple_max_criteria, constraints <= simple_max_constraints,
//              and any stated duration <= simple_max_minutes
//   moderate - everything else
//
// The thresholds are empirical, so they live in a config struct rather than
// in the rules themselves.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use gs_model::keywords;
use gs_model::Complexity;

/// Stems that signal multi-phase or coordination work.
pub const COORDINATION_KEYWORDS: &[&str] = &[
    "phase",
    "multi-stage",
    "multi-step",
    "coordinat",
    "orchestrat",
    "parallel",
    "milestone",
];

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*(seconds?|secs?|minutes?|mins?|hours?|hrs?)\b")
        .expect("duration pattern is a valid regex")
});

/// Tunable boundaries between the complexity classes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ComplexityThresholds {
    /// At most this many success criteria can still be simple.
    pub simple_max_criteria: usize,

    /// At least this many success criteria is always complex.
    pub complex_min_criteria: usize,

    /// At most this many constraints can still be simple.
    pub simple_max_constraints: usize,

    /// A stated time budget above this many minutes rules out simple.
    pub simple_max_minutes: u32,
}

impl Default for ComplexityThresholds {
    fn default() -> Self {
        Self {
            simple_max_criteria: 2,
            complex_min_criteria: 5,
            simple_max_constraints: 3,
            simple_max_minutes: 10,
        }
    }
}

/// The largest duration mentioned in the text, in whole minutes
/// (seconds round up). `None` when no duration is stated.
pub fn stated_duration_minutes(text: &str) -> Option<u32> {
    DURATION
        .captures_iter(text)
        .filter_map(|caps| {
            let amount: u32 = caps.get(1)?.as_str().parse().ok()?;
            let unit = caps.get(2)?.as_str().to_lowercase();
            let minutes = if unit.starts_with('s') {
                amount.div_ceil(60)
            } else if unit.starts_with('h') {
                amount.saturating_mul(60)
            } else {
                amount
            };
            Some(minutes)
        })
        .max()
}

/// Whether the text uses phase or coordination language.
pub fn mentions_coordination(text: &str) -> bool {
    let tokens = keywords::tokenize(text);
    COORDINATION_KEYWORDS
        .iter()
        .any(|kw| keywords::contains_keyword(&tokens, kw))
}

/// Rate a goal from its criteria/constraint counts and its full text.
pub fn assess_complexity(
    criteria: usize,
    constraints: usize,
    text: &str,
    thresholds: &ComplexityThresholds,
) -> Complexity {
    let coordination = mentions_coordination(text);
    if criteria >= thresholds.complex_min_criteria || coordination {
        return Complexity::Complex;
    }

    let within_time_budget =
        stated_duration_minutes(text).map_or(true, |m| m <= thresholds.simple_max_minutes);

    if criteria <= thresholds.simple_max_criteria
        && constraints <= thresholds.simple_max_constraints
        && within_time_budget
    {
        Complexity::Simple
    } else {
        Complexity::Moderate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assess(criteria: usize, constraints: usize, text: &str) -> Complexity {
        assess_complexity(criteria, constraints, text, &ComplexityThresholds::default())
    }

    #[test]
    fn duration_units_convert_to_minutes() {
        assert_eq!(stated_duration_minutes("Complete within 10 minutes"), Some(10));
        assert_eq!(stated_duration_minutes("takes 2 hours"), Some(120));
        assert_eq!(stated_duration_minutes("90 seconds max"), Some(2));
        assert_eq!(stated_duration_minutes("5min or 1 hr"), Some(60));
        assert_eq!(stated_duration_minutes("no time given"), None);
    }

    #[test]
    fn few_criteria_within_budget_is_simple() {
        assert_eq!(assess(2, 1, "Complete within 10 minutes"), Complexity::Simple);
        assert_eq!(assess(0, 0, ""), Complexity::Simple);
    }

    #[test]
    fn long_duration_bumps_to_moderate() {
        assert_eq!(assess(2, 1, "Complete within 30 minutes"), Complexity::Moderate);
    }

    #[test]
    fn many_constraints_bump_to_moderate() {
        assert_eq!(assess(1, 4, ""), Complexity::Moderate);
    }

    #[test]
    fn middle_criteria_count_is_moderate() {
        assert_eq!(assess(3, 0, ""), Complexity::Moderate);
        assert_eq!(assess(4, 0, ""), Complexity::Moderate);
    }

    #[test]
    fn five_criteria_is_complex() {
        assert_eq!(assess(5, 0, ""), Complexity::Complex);
    }

    #[test]
    fn coordination_language_is_complex() {
        assert_eq!(assess(1, 0, "Roll out in three phases"), Complexity::Complex);
        assert_eq!(
            assess(1, 0, "Coordinate the teams and orchestrate handoff"),
            Complexity::Complex
        );
        assert_eq!(assess(1, 0, "a multi-step migration"), Complexity::Complex);
    }

    #[test]
    fn thresholds_are_configurable() {
        let strict = ComplexityThresholds {
            simple_max_criteria: 0,
            complex_min_criteria: 2,
            ..ComplexityThresholds::default()
        };
        assert_eq!(assess_complexity(1, 0, "", &strict), Complexity::Moderate);
        assert_eq!(assess_complexity(2, 0, "", &strict), Complexity::Complex);
    }

    #[test]
    fn thresholds_deserialize_with_defaults() {
        let t: ComplexityThresholds = toml::from_str("complex_min_criteria = 7").unwrap();
        assert_eq!(t.complex_min_criteria, 7);
        assert_eq!(t.simple_max_criteria, 2);
    }
}
