// bundle.rs - GoalAgentBundle: the terminal artifact of the pipeline.
//
// A bundle is pure data. It carries no timestamps, so two runs over the same
// document and catalog snapshot produce equal bundles; time-stamped metadata
// belongs to the packaging manifest.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::goal::GoalDefinition;
use crate::plan::ExecutionPlan;
use crate::skill::SkillDefinition;

/// Settings the generated agent uses to drive itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoConfig {
    pub max_iterations: u32,

    /// Goal statement followed by the numbered phase list.
    pub initial_prompt: String,

    /// The goal's success criteria, verbatim.
    pub completion_signals: Vec<String>,

    /// The goal's constraints, verbatim.
    pub guardrails: Vec<String>,
}

/// Coverage of one phase by the selected skills.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseCoverage {
    pub phase: String,
    pub required: BTreeSet<String>,
    pub covered: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

impl PhaseCoverage {
    pub fn is_covered(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Per-phase coverage for a whole plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoverageReport {
    pub phases: Vec<PhaseCoverage>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.phases.iter().all(PhaseCoverage::is_covered)
    }

    /// Names of phases with at least one missing capability, in plan order.
    pub fn uncovered_phases(&self) -> Vec<&str> {
        self.phases
            .iter()
            .filter(|p| !p.is_covered())
            .map(|p| p.phase.as_str())
            .collect()
    }

    /// Number of required capability slots (summed over phases) that are covered.
    pub fn covered_count(&self) -> usize {
        self.phases.iter().map(|p| p.covered.len()).sum()
    }

    pub fn required_count(&self) -> usize {
        self.phases.iter().map(|p| p.required.len()).sum()
    }

    /// Fraction of required capability slots that are covered; 1.0 when
    /// nothing is required.
    pub fn ratio(&self) -> f64 {
        let required = self.required_count();
        if required == 0 {
            return 1.0;
        }
        self.covered_count() as f64 / required as f64
    }
}

/// Everything the packaging collaborator needs to materialize an agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalAgentBundle {
    pub goal: GoalDefinition,
    pub plan: ExecutionPlan,
    pub skills: Vec<SkillDefinition>,
    pub auto_config: AutoConfig,

    /// Set when some phase must be carried out by a generic executor because
    /// no selected skill covers it.
    pub uses_generic_fallback: bool,

    pub coverage: CoverageReport,
}

impl GoalAgentBundle {
    /// Complete means every phase is covered by a selected skill.
    pub fn is_complete(&self) -> bool {
        !self.uses_generic_fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn coverage(phase: &str, required: &[&str], covered: &[&str]) -> PhaseCoverage {
        let required = set(required);
        let covered = set(covered);
        let missing = required.difference(&covered).cloned().collect();
        PhaseCoverage {
            phase: phase.to_string(),
            required,
            covered,
            missing,
        }
    }

    #[test]
    fn report_lists_uncovered_phases_in_order() {
        let report = CoverageReport {
            phases: vec![
                coverage("A", &["x"], &["x"]),
                coverage("B", &["y", "z"], &["y"]),
                coverage("C", &["w"], &[]),
            ],
        };
        assert!(!report.is_complete());
        assert_eq!(report.uncovered_phases(), vec!["B", "C"]);
        assert_eq!(report.required_count(), 4);
        assert_eq!(report.covered_count(), 2);
        assert!((report.ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_requirements_are_fully_covered() {
        let report = CoverageReport {
            phases: vec![coverage("A", &[], &[])],
        };
        assert!(report.is_complete());
        assert_eq!(report.ratio(), 1.0);
    }
}
