// assembler.rs - AgentAssembler: goal + plan + skills → GoalAgentBundle.
//
// Assembly never copies skill content; the bundle holds the same references
// the synthesizer produced. The only decision made here is whether the
// bundle is complete. In default mode an incomplete bundle is flagged
// `uses_generic_fallback`; in strict mode it is an error.

use serde::{Deserialize, Serialize};

use gs_model::{ExecutionPlan, GoalAgentBundle, GoalDefinition, SkillDefinition};

use crate::auto_config::{build_auto_config, IterationBudget};
use crate::coverage::compute_coverage;
use crate::error::AssemblerError;

/// The `[assembler]` section of goalsmith.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Reject incomplete bundles instead of flagging them.
    pub strict: bool,
    pub iterations: IterationBudget,
}

/// Builds bundles. Holds configuration only, so one assembler can serve any
/// number of runs.
#[derive(Debug, Clone, Default)]
pub struct AgentAssembler {
    config: AssemblerConfig,
}

impl AgentAssembler {
    /// An assembler applying `config` to every bundle it builds.
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// The strictness and iteration budget this assembler applies.
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Combine the inputs into a bundle, carrying `skills` through unchanged.
    ///
    /// A bundle with no skills, or with a phase whose required capabilities
    /// no skill covers, is flagged `uses_generic_fallback`. With `strict`
    /// set it is rejected instead: [`AssemblerError::IncompleteBundle`]
    /// lists the uncovered phases, and [`AssemblerError::NoSkillsSelected`]
    /// reports an empty selection when nothing is uncovered.
    pub fn assemble(
        &self,
        goal: &GoalDefinition,
        plan: &ExecutionPlan,
        skills: &[SkillDefinition],
    ) -> Result<GoalAgentBundle, AssemblerError> {
        let coverage = compute_coverage(plan, skills);
        let uses_generic_fallback = skills.is_empty() || !coverage.is_complete();

        if uses_generic_fallback {
            let uncovered: Vec<String> = coverage
                .uncovered_phases()
                .into_iter()
                .map(String::from)
                .collect();
            if self.config.strict {
                return Err(if uncovered.is_empty() {
                    AssemblerError::NoSkillsSelected {
                        phases: plan.phases.len(),
                    }
                } else {
                    AssemblerError::IncompleteBundle { uncovered }
                });
            }
            tracing::warn!(
                skills = skills.len(),
                uncovered = ?uncovered,
                "bundle uses the generic executor for uncovered work"
            );
        }

        let auto_config = build_auto_config(goal, plan, &self.config.iterations);
        tracing::info!(
            goal = %goal.primary_goal,
            phases = plan.phases.len(),
            skills = skills.len(),
            coverage = coverage.ratio(),
            max_iterations = auto_config.max_iterations,
            "assembled bundle"
        );

        Ok(GoalAgentBundle {
            goal: goal.clone(),
            plan: plan.clone(),
            skills: skills.to_vec(),
            auto_config,
            uses_generic_fallback,
            coverage,
        })
    }
}

/// Assemble with the default (non-strict) configuration.
pub fn assemble(
    goal: &GoalDefinition,
    plan: &ExecutionPlan,
    skills: &[SkillDefinition],
) -> Result<GoalAgentBundle, AssemblerError> {
    AgentAssembler::default().assemble(goal, plan, skills)
}
