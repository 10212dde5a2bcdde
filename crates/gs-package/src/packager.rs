// packager.rs - BundlePackager: writes bundle.json and manifest.json.
//
// bundle.json is written first and hashed from the bytes actually written,
// so the manifest checksum always describes the file next to it. Existing
// files in the output directory are overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use gs_model::GoalAgentBundle;

use crate::error::PackageError;
use crate::hasher::{hash_bytes, hash_file};
use crate::manifest::PackageManifest;

/// The serialized [`GoalAgentBundle`], pretty-printed JSON.
pub const BUNDLE_FILE: &str = "bundle.json";
/// The [`PackageManifest`] describing [`BUNDLE_FILE`].
pub const MANIFEST_FILE: &str = "manifest.json";

/// Writes and reads a packaged bundle in one output directory.
pub struct BundlePackager {
    out_dir: PathBuf,
}

impl BundlePackager {
    /// A packager for `out_dir`. Nothing touches the disk until
    /// [`package`](Self::package) or a read.
    pub fn new(out_dir: impl AsRef<Path>) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    /// The directory the package files live in.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// `<out_dir>/bundle.json`
    pub fn bundle_path(&self) -> PathBuf {
        self.out_dir.join(BUNDLE_FILE)
    }

    /// `<out_dir>/manifest.json`
    pub fn manifest_path(&self) -> PathBuf {
        self.out_dir.join(MANIFEST_FILE)
    }

    /// Write `bundle` and a fresh manifest into the output directory,
    /// creating it if needed.
    pub fn package(&self, bundle: &GoalAgentBundle) -> Result<PackageManifest, PackageError> {
        fs::create_dir_all(&self.out_dir).map_err(|source| PackageError::IoError {
            path: self.out_dir.display().to_string(),
            source,
        })?;

        let bundle_json = serde_json::to_string_pretty(bundle)?;
        write_file(&self.bundle_path(), bundle_json.as_bytes())?;

        let manifest = PackageManifest::for_bundle(bundle, hash_bytes(bundle_json.as_bytes()));
        let manifest_json = serde_json::to_string_pretty(&manifest)?;
        write_file(&self.manifest_path(), manifest_json.as_bytes())?;

        tracing::info!(
            out_dir = %self.out_dir.display(),
            package_id = %manifest.package_id,
            agent = %manifest.agent_name,
            skills = manifest.skills.len(),
            "packaged bundle"
        );
        Ok(manifest)
    }

    /// Load `manifest.json` without checking it against the bundle.
    pub fn read_manifest(&self) -> Result<PackageManifest, PackageError> {
        let json = read_file(&self.manifest_path())?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load `bundle.json`. Use [`verify`](Self::verify) first if the
    /// directory may have been edited since packaging.
    pub fn read_bundle(&self) -> Result<GoalAgentBundle, PackageError> {
        let json = read_file(&self.bundle_path())?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Check `bundle.json` against the checksum in `manifest.json`.
    pub fn verify(&self) -> Result<PackageManifest, PackageError> {
        let manifest = self.read_manifest()?;
        let actual = hash_file(&self.bundle_path())?;
        if actual != manifest.bundle_sha256 {
            return Err(PackageError::ChecksumMismatch {
                expected: manifest.bundle_sha256,
                actual,
            });
        }
        Ok(manifest)
    }
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), PackageError> {
    fs::write(path, data).map_err(|source| PackageError::IoError {
        path: path.display().to_string(),
        source,
    })
}

fn read_file(path: &Path) -> Result<String, PackageError> {
    fs::read_to_string(path).map_err(|source| PackageError::IoError {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_model::{
        AutoConfig, Complexity, CoverageReport, Domain, ExecutionPlan, GoalDefinition,
        SkillDefinition,
    };
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    fn bundle() -> GoalAgentBundle {
        let goal = GoalDefinition {
            primary_goal: "Analyze test coverage".to_string(),
            domain: Domain::Testing,
            constraints: vec![],
            success_criteria: vec!["Calculate coverage percentage".to_string()],
            complexity: Complexity::Simple,
            raw_context: String::new(),
        };
        GoalAgentBundle {
            plan: ExecutionPlan {
                domain: Domain::Testing,
                complexity: Complexity::Simple,
                phases: vec![],
                estimated_duration: 5.0,
                risks: vec![],
            },
            skills: vec![SkillDefinition {
                id: "coverage".to_string(),
                name: "Coverage".to_string(),
                source_path: PathBuf::from("/library/coverage/SKILL.md"),
                relevance_score: 1.0,
                matched_capabilities: BTreeSet::from(["coverage-analysis".to_string()]),
                selected_for: vec!["Analysis".to_string()],
            }],
            auto_config: AutoConfig {
                max_iterations: 5,
                initial_prompt: "Goal: Analyze test coverage\n\nPhases:".to_string(),
                completion_signals: goal.success_criteria.clone(),
                guardrails: vec![],
            },
            goal,
            uses_generic_fallback: false,
            coverage: CoverageReport::default(),
        }
    }

    #[test]
    fn writes_bundle_and_manifest() {
        let dir = tempdir().unwrap();
        let packager = BundlePackager::new(dir.path().join("out"));
        let manifest = packager.package(&bundle()).unwrap();

        assert!(packager.bundle_path().exists());
        assert!(packager.manifest_path().exists());
        assert_eq!(manifest.agent_name, "analyze-test-coverage");
        assert_eq!(manifest.generator.name, "goalsmith");
        assert!(!manifest.uses_generic_fallback);
        assert_eq!(manifest.skills.len(), 1);
        assert_eq!(
            manifest.skills[0].source_path,
            PathBuf::from("/library/coverage/SKILL.md")
        );

        assert_eq!(packager.read_manifest().unwrap(), manifest);
        assert_eq!(packager.read_bundle().unwrap(), bundle());
    }

    #[test]
    fn checksum_matches_written_bundle() {
        let dir = tempdir().unwrap();
        let packager = BundlePackager::new(dir.path());
        let manifest = packager.package(&bundle()).unwrap();
        assert_eq!(
            hash_file(&packager.bundle_path()).unwrap(),
            manifest.bundle_sha256
        );
        assert_eq!(packager.verify().unwrap(), manifest);
    }

    #[test]
    fn tampered_bundle_fails_verification() {
        let dir = tempdir().unwrap();
        let packager = BundlePackager::new(dir.path());
        packager.package(&bundle()).unwrap();
        fs::write(packager.bundle_path(), "{}").unwrap();
        assert!(matches!(
            packager.verify(),
            Err(PackageError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn repackaging_keeps_bundle_bytes_but_not_identity() {
        let dir = tempdir().unwrap();
        let packager = BundlePackager::new(dir.path());
        let first = packager.package(&bundle()).unwrap();
        let bytes = fs::read(packager.bundle_path()).unwrap();
        let second = packager.package(&bundle()).unwrap();

        assert_eq!(fs::read(packager.bundle_path()).unwrap(), bytes);
        assert_eq!(first.bundle_sha256, second.bundle_sha256);
        assert_ne!(first.package_id, second.package_id);
    }

    #[test]
    fn skill_bodies_are_not_copied() {
        let dir = tempdir().unwrap();
        BundlePackager::new(dir.path()).package(&bundle()).unwrap();
        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec![BUNDLE_FILE, MANIFEST_FILE]);
    }
}
