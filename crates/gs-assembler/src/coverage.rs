// coverage.rs - Which required capabilities the selected skills cover.

use std::collections::BTreeSet;

use gs_model::{CoverageReport, ExecutionPlan, PhaseCoverage, SkillDefinition};

/// Coverage of every phase by the union of the skills' matched capabilities.
///
/// The union is taken across all skills, not just the ones a phase selected:
/// a capability matched anywhere in the bundle is available to every phase.
pub fn compute_coverage(plan: &ExecutionPlan, skills: &[SkillDefinition]) -> CoverageReport {
    let available: BTreeSet<&String> = skills
        .iter()
        .flat_map(|s| s.matched_capabilities.iter())
        .collect();

    let phases = plan
        .phases
        .iter()
        .map(|phase| {
            let (covered, missing): (BTreeSet<String>, BTreeSet<String>) = phase
                .required_capabilities
                .iter()
                .cloned()
                .partition(|cap| available.contains(cap));
            PhaseCoverage {
                phase: phase.name.clone(),
                required: phase.required_capabilities.clone(),
                covered,
                missing,
            }
        })
        .collect();

    CoverageReport { phases }
}
