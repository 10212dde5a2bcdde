// error.rs - Error types for bundle assembly.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssemblerError {
    /// Strict mode only: some phases have required capabilities that no
    /// selected skill covers.
    #[error("bundle is incomplete; uncovered phases: {}", uncovered.join(", "))]
    IncompleteBundle { uncovered: Vec<String> },

    /// Strict mode only: every phase is covered but the bundle has no skills,
    /// so the generic executor would do all the work.
    #[error("bundle is incomplete; no skills were selected for {phases} phase(s)")]
    NoSkillsSelected { phases: usize },
}
