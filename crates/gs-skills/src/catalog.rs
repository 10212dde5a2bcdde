// catalog.rs - The catalog provider seam and the per-run snapshot.
//
// Providers expose `list_candidates()`. The pipeline never calls a provider
// more than once per run: it captures a `CatalogSnapshot` and scores against
// that, so concurrent edits to the library cannot make one run inconsistent.

use gs_model::SkillCandidate;

use crate::error::SkillError;

/// A read-only source of skill candidates.
///
/// Implementations must not mutate the library they read. The order of the
/// returned candidates is the catalog's declaration order and is used to
/// break relevance ties.
pub trait SkillCatalog: Send + Sync {
    /// List every candidate in declaration order.
    fn list_candidates(&self) -> Result<Vec<SkillCandidate>, SkillError>;

    /// Where this catalog reads from, for logs and error messages.
    fn location(&self) -> String;
}

/// A catalog held in memory (embedding callers, tests).
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    candidates: Vec<SkillCandidate>,
}

impl StaticCatalog {
    pub fn new(candidates: Vec<SkillCandidate>) -> Self {
        Self { candidates }
    }

    pub fn push(&mut self, candidate: SkillCandidate) {
        self.candidates.push(candidate);
    }
}

impl SkillCatalog for StaticCatalog {
    fn list_candidates(&self) -> Result<Vec<SkillCandidate>, SkillError> {
        Ok(self.candidates.clone())
    }

    fn location(&self) -> String {
        "<in-memory>".to_string()
    }
}

/// An immutable copy of a catalog listing, taken once per pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    candidates: Vec<SkillCandidate>,
}

impl CatalogSnapshot {
    /// Read the catalog exactly once.
    pub fn capture(catalog: &dyn SkillCatalog) -> Result<Self, SkillError> {
        let candidates = catalog.list_candidates()?;
        tracing::debug!(
            location = %catalog.location(),
            candidates = candidates.len(),
            "captured skill catalog snapshot"
        );
        Ok(Self { candidates })
    }

    pub fn from_candidates(candidates: Vec<SkillCandidate>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[SkillCandidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
