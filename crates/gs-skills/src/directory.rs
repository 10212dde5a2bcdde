// directory.rs - DirectoryCatalog: skills stored as markdown files on disk.
//
// Layout (both forms may be mixed):
//
//   <root>/<id>/SKILL.md
//   <root>/<id>.md
//
// Each file starts with YAML front matter:
//
//   ---
//   name: Coverage Analyzer
//   description: Measures line and branch coverage
//   capabilities: [coverage-analysis, test-execution]
//   ---
//   ...skill body, never read past the front matter by the pipeline...
//
// `id` defaults to the directory name (or file stem), `name` to the id, and
// `tags` is accepted as an alias for `capabilities`. Declaration order is
// lexicographic path order, which keeps tie-breaking stable across
// platforms whose directory listings are unordered.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use gs_model::SkillCandidate;

use crate::catalog::SkillCatalog;
use crate::error::SkillError;

/// Front matter keys recognised in a skill file.
#[derive(Debug, Default, Deserialize)]
struct SkillFrontMatter {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "tags")]
    capabilities: Vec<String>,
}

/// A skill catalog backed by a directory of markdown skill files.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Make sure the root exists, is a directory, and can be listed.
    fn check_readable(&self) -> Result<(), SkillError> {
        let unavailable = |source| SkillError::CatalogUnavailable {
            path: self.root.display().to_string(),
            source,
        };

        let metadata = fs::metadata(&self.root).map_err(unavailable)?;
        if !metadata.is_dir() {
            return Err(unavailable(std::io::Error::other("not a directory")));
        }
        fs::read_dir(&self.root).map_err(unavailable)?;
        Ok(())
    }

    /// Every skill file path, sorted.
    fn skill_files(&self) -> Result<Vec<PathBuf>, SkillError> {
        let base = glob::Pattern::escape(&self.root.to_string_lossy());
        let mut paths = BTreeSet::new();
        for pattern in [format!("{}/*/SKILL.md", base), format!("{}/*.md", base)] {
            for entry in glob::glob(&pattern)? {
                match entry {
                    Ok(path) if path.is_file() => {
                        paths.insert(path);
                    }
                    Ok(_) => {}
                    Err(e) => tracing::warn!("skipping unreadable catalog entry: {}", e),
                }
            }
        }
        Ok(paths.into_iter().collect())
    }
}

impl SkillCatalog for DirectoryCatalog {
    fn list_candidates(&self) -> Result<Vec<SkillCandidate>, SkillError> {
        self.check_readable()?;

        let mut candidates: Vec<SkillCandidate> = Vec::new();
        for path in self.skill_files()? {
            let candidate = match load_skill_file(&path) {
                Ok(Some(candidate)) => candidate,
                Ok(None) => {
                    tracing::debug!(path = %path.display(), "no front matter, not a skill");
                    continue;
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    continue;
                }
            };

            if candidates.iter().any(|c| c.id == candidate.id) {
                tracing::warn!(
                    id = %candidate.id,
                    path = %path.display(),
                    "duplicate skill id, keeping the first definition"
                );
                continue;
            }
            candidates.push(candidate);
        }

        tracing::debug!(
            root = %self.root.display(),
            skills = candidates.len(),
            "loaded directory catalog"
        );
        Ok(candidates)
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}

/// Parse one skill file. `Ok(None)` means the file has no front matter and
/// is not a skill definition (a README, say).
pub fn load_skill_file(path: &Path) -> Result<Option<SkillCandidate>, SkillError> {
    let invalid = |reason: String| SkillError::InvalidSkill {
        path: path.display().to_string(),
        reason,
    };

    let content = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let Some(yaml) = extract_front_matter(&content) else {
        return Ok(None);
    };

    let front: SkillFrontMatter = if yaml.trim().is_empty() {
        SkillFrontMatter::default()
    } else {
        serde_yaml::from_str(yaml).map_err(|e| invalid(e.to_string()))?
    };

    let id = match front.id.filter(|id| !id.trim().is_empty()) {
        Some(id) => id.trim().to_string(),
        None => default_id(path).ok_or_else(|| invalid("cannot derive a skill id".to_string()))?,
    };
    let name = front
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| id.clone());

    let mut candidate = SkillCandidate::new(id, name, path, front.capabilities);
    candidate.description = front.description;
    Ok(Some(candidate))
}

/// The YAML between a leading `---` line and the next `---` line.
fn extract_front_matter(content: &str) -> Option<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content
        .strip_prefix("---\r\n")
        .or_else(|| content.strip_prefix("---\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

/// `<root>/<id>/SKILL.md` → `<id>`; `<root>/<id>.md` → `<id>`.
fn default_id(path: &Path) -> Option<String> {
    let is_skill_md = path
        .file_name()
        .is_some_and(|name| name.eq_ignore_ascii_case("SKILL.md"));
    let source = if is_skill_md {
        path.parent()?.file_name()?
    } else {
        path.file_stem()?
    };
    Some(source.to_string_lossy().into_owned())
}
