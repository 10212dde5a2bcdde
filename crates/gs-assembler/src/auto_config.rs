// auto_config.rs - The auto-execution settings carried by a bundle.
//
// The iteration budget scales with complexity:
//   simple   → 5
//   moderate → 8 + 2 per phase beyond four, clamped to 8..=12
//   complex  → 15
// Every number is configurable through `[assembler.iterations]`.

use serde::{Deserialize, Serialize};

use gs_model::{AutoConfig, Complexity, ExecutionPlan, GoalDefinition};

/// How many iterations the generated agent may run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IterationBudget {
    pub simple: u32,
    pub moderate_base: u32,
    pub moderate_per_extra_phase: u32,
    /// Phases covered by `moderate_base` before extra phases count.
    pub moderate_base_phases: usize,
    pub moderate_max: u32,
    pub complex: u32,
}

impl Default for IterationBudget {
    fn default() -> Self {
        Self {
            simple: 5,
            moderate_base: 8,
            moderate_per_extra_phase: 2,
            moderate_base_phases: 4,
            moderate_max: 12,
            complex: 15,
        }
    }
}

impl IterationBudget {
    /// The budget for a plan of `phases` phases at `complexity`. The moderate
    /// budget never drops below `moderate_base`, even if `moderate_max` is
    /// configured lower.
    pub fn max_iterations(&self, complexity: Complexity, phases: usize) -> u32 {
        match complexity {
            Complexity::Simple => self.simple,
            Complexity::Moderate => {
                let extra = phases.saturating_sub(self.moderate_base_phases);
                let extra = u32::try_from(extra).unwrap_or(u32::MAX);
                self.moderate_base
                    .saturating_add(extra.saturating_mul(self.moderate_per_extra_phase))
                    .clamp(self.moderate_base, self.moderate_max.max(self.moderate_base))
            }
            Complexity::Complex => self.complex,
        }
    }
}

/// The goal statement followed by a numbered list of the plan's phases.
pub fn initial_prompt(goal: &GoalDefinition, plan: &ExecutionPlan) -> String {
    let mut prompt = format!("Goal: {}\n\nPhases:", goal.primary_goal);
    for (i, phase) in plan.phases.iter().enumerate() {
        prompt.push_str(&format!("\n{}. {}", i + 1, phase.name));
    }
    prompt
}

/// Auto-execution settings for `plan`. Completion signals and guardrails are
/// the goal's success criteria and constraints, copied in order.
pub fn build_auto_config(
    goal: &GoalDefinition,
    plan: &ExecutionPlan,
    budget: &IterationBudget,
) -> AutoConfig {
    AutoConfig {
        max_iterations: budget.max_iterations(goal.complexity, plan.phases.len()),
        initial_prompt: initial_prompt(goal, plan),
        completion_signals: goal.success_criteria.clone(),
        guardrails: goal.constraints.clone(),
    }
}
