// skill.rs - Catalog candidates and the skill references selected from them.
//
// The skill library is the single source of truth for skill content. The
// pipeline only ever holds an id and a path into that library, never a copy
// of the skill body.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::keywords::normalize_capability;

/// One entry of a skill catalog, as exposed by a catalog provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillCandidate {
    pub id: String,
    pub name: String,

    /// Where the skill definition lives in the external library.
    pub source_path: PathBuf,

    /// Normalised capability names this skill declares it provides.
    #[serde(default)]
    pub capability_tags: BTreeSet<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SkillCandidate {
    /// Build a candidate, normalising every tag and dropping empty ones.
    pub fn new<I, S>(
        id: impl Into<String>,
        name: impl Into<String>,
        source_path: impl Into<PathBuf>,
        tags: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            source_path: source_path.into(),
            capability_tags: tags
                .into_iter()
                .map(|t| normalize_capability(t.as_ref()))
                .filter(|t| !t.is_empty())
                .collect(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A catalog candidate selected for a plan, with its relevance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillDefinition {
    pub id: String,
    pub name: String,

    /// Reference into the skill library (never a copy).
    pub source_path: PathBuf,

    /// Highest relevance observed across the phases that selected this skill,
    /// in `[0, 1]`.
    pub relevance_score: f64,

    /// Required capabilities this skill satisfies, across all phases.
    #[serde(default)]
    pub matched_capabilities: BTreeSet<String>,

    /// Phases that selected this skill, in plan order.
    #[serde(default)]
    pub selected_for: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_tags_are_normalised() {
        let c = SkillCandidate::new(
            "cov",
            "Coverage",
            "skills/cov/SKILL.md",
            ["Coverage Analysis", "test_execution", " "],
        );
        let tags: Vec<&str> = c.capability_tags.iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["coverage-analysis", "test-execution"]);
        assert!(c.description.is_none());
    }

    #[test]
    fn description_is_skipped_when_absent() {
        let c = SkillCandidate::new("a", "A", "a.md", ["x"]);
        let json = serde_json::to_string(&c).unwrap();
        assert!(!json.contains("description"));

        let c = c.with_description("does a");
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"description\":\"does a\""));
    }
}
