//! # gs-model
//!
//! Shared data structures for the Goalsmith synthesis pipeline.
//!
//! Every pipeline stage produces one of these values and hands it, read-only,
//! to the next stage:
//!
//! - [`GoalDefinition`]: what the user wants (Prompt Analyzer output)
//! - [`ExecutionPlan`]: ordered, dependency-aware phases (Objective Planner output)
//! - [`SkillDefinition`]: a ranked reference into the skill catalog (Skill Synthesizer output)
//! - [`GoalAgentBundle`]: the terminal artifact (Agent Assembler output)
//!
//! The [`keywords`] module holds the single keyword-matching mechanism used
//! both for domain classification and for capability derivation.

pub mod bundle;
pub mod error;
pub mod goal;
pub mod keywords;
pub mod plan;
pub mod skill;

pub use bundle::{AutoConfig, CoverageReport, GoalAgentBundle, PhaseCoverage};
pub use error::ModelError;
pub use goal::{Complexity, Domain, GoalDefinition};
pub use keywords::{normalize_capability, KeywordTable};
pub use plan::{ExecutionPlan, Phase};
pub use skill::{SkillCandidate, SkillDefinition};
