// error.rs - Error types for objective planning.
//
// Both variants are internal invariant violations: the analyzer's closed
// complexity enum always maps to a phase count under the default config, and
// the planner only emits dependencies on earlier phases. Reaching either one
// means a broken configuration or a planner bug, so neither is retryable.

use gs_model::{Complexity, ModelError};
use thiserror::Error;

/// Errors that can occur while planning a goal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlannerError {
    /// The configured phase range for a complexity class is unusable.
    #[error("cannot map {complexity} complexity to a phase count: {reason}")]
    UnmappedComplexity {
        complexity: Complexity,
        reason: String,
    },

    /// The generated plan failed its own structural validation.
    #[error("generated plan violates its invariants: {0}")]
    InvariantViolation(#[from] ModelError),
}
