// manifest.rs - PackageManifest: the run-specific metadata of a package.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gs_model::{GoalAgentBundle, SkillDefinition};

/// Longest agent name produced by [`slugify`].
const MAX_SLUG_LEN: usize = 48;

/// Tool that produced a package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorInfo {
    pub name: String,
    pub version: String,
}

impl Default for GeneratorInfo {
    fn default() -> Self {
        Self {
            name: "goalsmith".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// A selected skill, by reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillReference {
    pub id: String,
    pub source_path: PathBuf,
}

impl From<&SkillDefinition> for SkillReference {
    fn from(skill: &SkillDefinition) -> Self {
        Self {
            id: skill.id.clone(),
            source_path: skill.source_path.clone(),
        }
    }
}

/// Metadata written next to `bundle.json`.
///
/// `package_id` and `created_at` differ on every packaging run; everything
/// else follows from the bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageManifest {
    /// Fresh v4 UUID per packaging run.
    pub package_id: Uuid,

    /// Slug of the primary goal, usable as a directory or agent name.
    pub agent_name: String,

    pub created_at: DateTime<Utc>,
    pub generator: GeneratorInfo,

    /// SHA-256 of `bundle.json` as written.
    pub bundle_sha256: String,

    pub uses_generic_fallback: bool,

    #[serde(default)]
    pub skills: Vec<SkillReference>,
}

impl PackageManifest {
    /// A fresh manifest for `bundle`, whose serialized form hashes to `bundle_sha256`.
    pub fn for_bundle(bundle: &GoalAgentBundle, bundle_sha256: String) -> Self {
        Self {
            package_id: Uuid::new_v4(),
            agent_name: slugify(&bundle.goal.primary_goal),
            created_at: Utc::now(),
            generator: GeneratorInfo::default(),
            bundle_sha256,
            uses_generic_fallback: bundle.uses_generic_fallback,
            skills: bundle.skills.iter().map(SkillReference::from).collect(),
        }
    }
}

/// Lower-case ASCII alphanumerics separated by single `-`, at most
/// `MAX_SLUG_LEN` chars. Falls back to `"agent"` when nothing is left.
pub fn slugify(text: &str) -> String {
    let mut slug = String::new();
    for word in text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let sep = usize::from(!slug.is_empty());
        if slug.len() + sep + word.len() > MAX_SLUG_LEN {
            break;
        }
        if sep == 1 {
            slug.push('-');
        }
        slug.push_str(&word.to_ascii_lowercase());
    }
    if slug.is_empty() {
        "agent".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs() {
        assert_eq!(slugify("Analyze test coverage"), "analyze-test-coverage");
        assert_eq!(slugify("  Fix: the *auth* bug!! "), "fix-the-auth-bug");
        assert_eq!(slugify("日本語"), "agent");
        assert_eq!(slugify(""), "agent");
    }

    #[test]
    fn long_slugs_stop_at_a_word_boundary() {
        let slug = slugify(&"word ".repeat(40));
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(slug.ends_with("word"));
    }

    #[test]
    fn generator_is_goalsmith() {
        let generator = GeneratorInfo::default();
        assert_eq!(generator.name, "goalsmith");
        assert!(!generator.version.is_empty());
    }
}
