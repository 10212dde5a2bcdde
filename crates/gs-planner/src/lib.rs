//! # gs-planner
//!
//! Objective planning for Goalsmith: turns a [`GoalDefinition`] into an
//! [`ExecutionPlan`].
//!
//! - The number of phases follows the goal's complexity ([`PhaseCounts`]).
//! - Phase templates come from a fixed per-domain ontology ([`ontology_for`]).
//! - Dependencies are linear, except where a template runs in parallel with
//!   its predecessor.
//! - Required capabilities come from the [`CAPABILITY_KEYWORDS`] table, using
//!   the same keyword matcher as domain classification.
//! - The duration estimate ([`DurationModel`]) and the risk list are advisory.

pub mod capability;
pub mod config;
pub mod error;
pub mod ontology;
pub mod planner;

pub use capability::{derive_capabilities, CAPABILITY_KEYWORDS};
pub use config::{DurationModel, PhaseCounts, PhaseRange, PlannerConfig};
pub use error::PlannerError;
pub use ontology::{ontology_for, PhaseTemplate, ONTOLOGY_SIZE};
pub use planner::{plan, ObjectivePlanner};

pub use gs_model::{ExecutionPlan, GoalDefinition};
