// error.rs - Invariant violations detected on shared model values.

use thiserror::Error;

/// Structural problems found when validating an [`crate::ExecutionPlan`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A phase lists a dependency that is not a phase of the same plan.
    #[error("phase '{phase}' depends on unknown phase '{dependency}'")]
    UnknownDependency { phase: String, dependency: String },

    /// Two phases share the same name.
    #[error("duplicate phase name '{0}'")]
    DuplicatePhase(String),

    /// The dependency graph contains a cycle through the named phase.
    #[error("dependency cycle detected at phase '{0}'")]
    DependencyCycle(String),
}
