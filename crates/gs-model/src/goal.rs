// goal.rs - GoalDefinition: the structured reading of a goal document.
//
// The Prompt Analyzer builds exactly one GoalDefinition per document and
// never touches it again. Every later stage borrows it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The problem domain a goal belongs to.
///
/// Serialized in kebab-case (`"security-analysis"`) so bundles read the same
/// way the domains are written in goal documents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    DataProcessing,
    SecurityAnalysis,
    Automation,
    Testing,
    Deployment,
    Monitoring,
    Integration,
    Reporting,
    Unknown,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::DataProcessing => "data-processing",
            Domain::SecurityAnalysis => "security-analysis",
            Domain::Automation => "automation",
            Domain::Testing => "testing",
            Domain::Deployment => "deployment",
            Domain::Monitoring => "monitoring",
            Domain::Integration => "integration",
            Domain::Reporting => "reporting",
            Domain::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much structure a goal needs. Drives phase count, duration estimate
/// and the iteration budget of the generated agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Simple => write!(f, "simple"),
            Complexity::Moderate => write!(f, "moderate"),
            Complexity::Complex => write!(f, "complex"),
        }
    }
}

/// A goal document reduced to the fields the pipeline reasons about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalDefinition {
    /// The objective, taken from the first substantive line of the document.
    pub primary_goal: String,

    /// Keyword-classified domain.
    pub domain: Domain,

    /// Items of the "Constraints" section, in document order.
    #[serde(default)]
    pub constraints: Vec<String>,

    /// Items of the "Success Criteria" section, in document order.
    #[serde(default)]
    pub success_criteria: Vec<String>,

    pub complexity: Complexity,

    /// Free text that belongs to neither labeled section. May be empty.
    #[serde(default)]
    pub raw_context: String,
}

impl GoalDefinition {
    /// Number of distinct success criteria (duplicates are kept in the list
    /// but count once here).
    pub fn distinct_criteria(&self) -> usize {
        let mut seen: Vec<&str> = Vec::with_capacity(self.success_criteria.len());
        for criterion in &self.success_criteria {
            if !seen.contains(&criterion.as_str()) {
                seen.push(criterion);
            }
        }
        seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(criteria: &[&str]) -> GoalDefinition {
        GoalDefinition {
            primary_goal: "Ship it".to_string(),
            domain: Domain::Deployment,
            constraints: vec![],
            success_criteria: criteria.iter().map(|s| s.to_string()).collect(),
            complexity: Complexity::Simple,
            raw_context: String::new(),
        }
    }

    #[test]
    fn domain_serializes_kebab_case() {
        let json = serde_json::to_string(&Domain::SecurityAnalysis).unwrap();
        assert_eq!(json, "\"security-analysis\"");
        let restored: Domain = serde_json::from_str("\"data-processing\"").unwrap();
        assert_eq!(restored, Domain::DataProcessing);
    }

    #[test]
    fn domain_display_matches_serde_name() {
        assert_eq!(Domain::Unknown.to_string(), "unknown");
        assert_eq!(Domain::Testing.to_string(), "testing");
    }

    #[test]
    fn complexity_display() {
        assert_eq!(Complexity::Moderate.to_string(), "moderate");
        assert_eq!(
            serde_json::to_string(&Complexity::Complex).unwrap(),
            "\"complex\""
        );
    }

    #[test]
    fn distinct_criteria_ignores_duplicates() {
        let g = goal(&["a", "b", "a"]);
        assert_eq!(g.success_criteria.len(), 3);
        assert_eq!(g.distinct_criteria(), 2);
    }
}
