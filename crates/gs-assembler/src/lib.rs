//! # gs-assembler
//!
//! Final stage of the Goalsmith pipeline: combines a [`GoalDefinition`], its
//! [`ExecutionPlan`] and the selected [`SkillDefinition`]s into a
//! [`GoalAgentBundle`].
//!
//! ## Key invariants
//!
//! - A bundle is complete only if every phase's required capabilities are
//!   covered by the union of the selected skills' matched capabilities.
//! - An incomplete bundle (or one with no skills at all) is flagged
//!   `uses_generic_fallback`. In strict mode it is rejected instead, with
//!   [`AssemblerError::IncompleteBundle`] listing the uncovered phases, or
//!   [`AssemblerError::NoSkillsSelected`] when nothing is uncovered but no
//!   skill was selected.
//! - `completion_signals` and `guardrails` are the goal's success criteria
//!   and constraints, verbatim and in order.

pub mod assembler;
pub mod auto_config;
pub mod coverage;
pub mod error;

pub use assembler::{assemble, AgentAssembler, AssemblerConfig};
pub use auto_config::{build_auto_config, initial_prompt, IterationBudget};
pub use coverage::compute_coverage;
pub use error::AssemblerError;

pub use gs_model::{ExecutionPlan, GoalAgentBundle, GoalDefinition, SkillDefinition};
