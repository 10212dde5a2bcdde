//! # gs-pipeline
//!
//! Drives a goal document through the Goalsmith synthesis stages:
//!
//! ```text
//! Received → Analyzed → Planned → SkillsResolved → Assembled
//! ```
//!
//! Each stage consumes the previous stage's output and produces a new,
//! immutable value. A failure stops the run and surfaces a [`PipelineError`]
//! naming the stage reached and carrying everything produced so far.
//!
//! [`Pipeline`] holds nothing but its [`PipelineConfig`], so one instance can
//! serve any number of independent runs, on any number of threads.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod stage;

pub use config::{PipelineConfig, CONFIG_FILE_NAME};
pub use error::{ConfigError, PartialState, PipelineError, StageError};
pub use pipeline::{Pipeline, PlannedGoal};
pub use stage::PipelineStage;

pub use gs_model::GoalAgentBundle;
