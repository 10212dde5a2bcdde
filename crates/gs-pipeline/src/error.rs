// error.rs - Stage-tagged pipeline errors and configuration errors.

use gs_analyzer::AnalyzerError;
use gs_assembler::AssemblerError;
use gs_model::{ExecutionPlan, GoalDefinition, SkillDefinition};
use gs_planner::PlannerError;
use gs_skills::SkillError;
use thiserror::Error;

use crate::stage::PipelineStage;

/// The error raised by an individual stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalyzerError),

    #[error("planning failed: {0}")]
    Planning(#[from] PlannerError),

    #[error("skill resolution failed: {0}")]
    Skills(#[from] SkillError),

    #[error("assembly failed: {0}")]
    Assembly(#[from] AssemblerError),

    /// The driver tried to move the run backwards or skip a stage.
    #[error("invalid stage transition: {from} -> {to}")]
    InvalidTransition {
        from: PipelineStage,
        to: PipelineStage,
    },
}

impl StageError {
    /// The stage the failing step was trying to reach.
    pub fn target_stage(&self) -> PipelineStage {
        match self {
            StageError::Analysis(_) => PipelineStage::Analyzed,
            StageError::Planning(_) => PipelineStage::Planned,
            StageError::Skills(_) => PipelineStage::SkillsResolved,
            StageError::Assembly(_) => PipelineStage::Assembled,
            StageError::InvalidTransition { to, .. } => *to,
        }
    }
}

/// Everything a run had produced when it stopped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialState {
    pub goal: Option<GoalDefinition>,
    pub plan: Option<ExecutionPlan>,
    pub skills: Option<Vec<SkillDefinition>>,
}

/// A failed pipeline run.
///
/// `stage` is the last stage the run reached. [`PipelineError::failed_stage`]
/// names the stage whose step failed.
#[derive(Debug, Error)]
#[error(
    "pipeline failed at stage '{failed}' after reaching '{stage}': {source}",
    failed = .source.target_stage()
)]
pub struct PipelineError {
    pub stage: PipelineStage,
    pub partial: Box<PartialState>,
    #[source]
    pub source: StageError,
}

impl PipelineError {
    /// The stage where the error originated: `analyzed` for an analyzer
    /// failure, `planned` for a planner failure, and so on.
    pub fn failed_stage(&self) -> PipelineStage {
        self.source.target_stage()
    }
}

/// Errors loading goalsmith.toml.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}
