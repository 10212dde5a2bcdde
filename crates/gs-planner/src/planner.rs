// planner.rs - ObjectivePlanner: GoalDefinition → ExecutionPlan.
//
// Steps:
//   1. phase count   = distinct success criteria clamped to the complexity's range
//   2. templates     = the `count` most essential templates of the domain ontology
//   3. dependencies  = linear, or shared predecessor for parallel templates
//   4. capabilities  = capability keywords in phase name + description
//   5. estimate      = complexity-weighted total, split evenly
//   6. risks         = ambiguous phases and multi-dependency phases
//
// The finished plan is validated before it is returned; a failure there is
// a planner bug, reported as `PlannerError::InvariantViolation`.

use std::collections::BTreeSet;

use gs_model::{ExecutionPlan, GoalDefinition, Phase};

use crate::capability::derive_capabilities;
use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::ontology::{ontology_for, select_templates, PhaseTemplate, ONTOLOGY_SIZE};

/// Builds execution plans from goal definitions.
#[derive(Debug, Clone, Default)]
pub struct ObjectivePlanner {
    config: PlannerConfig,
}

impl ObjectivePlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan one goal.
    pub fn plan(&self, goal: &GoalDefinition) -> Result<ExecutionPlan, PlannerError> {
        let count = self.phase_count(goal)?;
        let templates = select_templates(ontology_for(goal.domain), count);

        let total = self
            .config
            .duration
            .total_minutes(goal.complexity, goal.distinct_criteria());
        let per_phase = total / templates.len() as f64;

        let phases = build_phases(&templates, goal, per_phase);
        let risks = assess_risks(&phases);

        let plan = ExecutionPlan {
            domain: goal.domain,
            complexity: goal.complexity,
            phases,
            estimated_duration: total,
            risks,
        };
        plan.validate()?;

        tracing::debug!(
            domain = %plan.domain,
            complexity = %plan.complexity,
            phases = plan.phases.len(),
            estimated_minutes = plan.estimated_duration,
            risks = plan.risks.len(),
            "planned goal"
        );
        Ok(plan)
    }

    fn phase_count(&self, goal: &GoalDefinition) -> Result<usize, PlannerError> {
        let range = self.config.phase_counts.range_for(goal.complexity);
        let unmapped = |reason: String| PlannerError::UnmappedComplexity {
            complexity: goal.complexity,
            reason,
        };

        if range.min == 0 {
            return Err(unmapped("phase range must start at 1".to_string()));
        }
        if range.min > range.max {
            return Err(unmapped(format!(
                "phase range {}..={} is empty",
                range.min, range.max
            )));
        }
        if range.max > ONTOLOGY_SIZE {
            return Err(unmapped(format!(
                "phase range {}..={} exceeds the {} available templates",
                range.min, range.max, ONTOLOGY_SIZE
            )));
        }

        Ok(range.clamp(goal.distinct_criteria()))
    }
}

/// Plan a goal with the default configuration.
pub fn plan(goal: &GoalDefinition) -> Result<ExecutionPlan, PlannerError> {
    ObjectivePlanner::default().plan(goal)
}

fn build_phases(
    templates: &[&'static PhaseTemplate],
    goal: &GoalDefinition,
    per_phase: f64,
) -> Vec<Phase> {
    let mut phases: Vec<Phase> = Vec::with_capacity(templates.len());
    // What the next sequential phase must wait for.
    let mut frontier: BTreeSet<String> = BTreeSet::new();

    for template in templates {
        let depends_on = match phases.last() {
            Some(previous) if template.parallel => {
                frontier.insert(template.name.to_string());
                previous.depends_on.clone()
            }
            _ => std::mem::replace(
                &mut frontier,
                BTreeSet::from([template.name.to_string()]),
            ),
        };

        let description = if template.carries_goal {
            format!("{} Goal: {}", template.description, goal.primary_goal)
        } else {
            template.description.to_string()
        };

        let required_capabilities =
            derive_capabilities(&format!("{}\n{}", template.name, description));

        phases.push(Phase {
            name: template.name.to_string(),
            description,
            depends_on,
            required_capabilities,
            estimated_minutes: per_phase,
        });
    }

    phases
}

fn assess_risks(phases: &[Phase]) -> Vec<String> {
    let mut risks = Vec::new();
    for phase in phases {
        if phase.required_capabilities.is_empty() {
            risks.push(format!(
                "phase '{}' has no required capabilities (ambiguous phase)",
                phase.name
            ));
        }
        if phase.depends_on.len() > 1 {
            risks.push(format!(
                "phase '{}' depends on {} phases (coordination risk)",
                phase.name,
                phase.depends_on.len()
            ));
        }
    }
    risks
}
