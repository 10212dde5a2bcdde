// synthesizer.rs - SkillSynthesizer: ExecutionPlan + catalog → ranked skills.
//
// For every phase:
//   1. score each candidate with `relevance(tags, required)`
//   2. rank candidates above RELEVANCE_FLOOR by score, catalog order on ties
//   3. select every candidate tied at the top score
//   4. keep walking the ranking and select any candidate that covers a
//      required capability nothing selected so far covers
//
// Step 4 makes the covered set of a phase equal to `required ∩ ⋃ tags`,
// which can only grow when candidates are added to the catalog.
//
// Selections are then merged by id: the highest score wins, matched
// capabilities and selecting phases accumulate. Final order is descending
// relevance with catalog order on ties.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use gs_model::{ExecutionPlan, Phase, SkillCandidate, SkillDefinition};

use crate::catalog::{CatalogSnapshot, SkillCatalog};
use crate::error::SkillError;
use crate::scoring::relevance;

/// Candidates must score strictly above this to be considered for a phase.
pub const RELEVANCE_FLOOR: f64 = 0.0;

/// Selects and ranks skills for an execution plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillSynthesizer;

/// A selection in progress, keyed by skill id.
struct Selection {
    catalog_index: usize,
    definition: SkillDefinition,
}

impl SkillSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Read the catalog once, then synthesize against the snapshot.
    pub fn synthesize_from(
        &self,
        plan: &ExecutionPlan,
        catalog: &dyn SkillCatalog,
    ) -> Result<Vec<SkillDefinition>, SkillError> {
        let snapshot = CatalogSnapshot::capture(catalog)?;
        Ok(self.synthesize(plan, &snapshot))
    }

    /// Rank and deduplicate skills for every phase of `plan`.
    pub fn synthesize(
        &self,
        plan: &ExecutionPlan,
        snapshot: &CatalogSnapshot,
    ) -> Vec<SkillDefinition> {
        let candidates = snapshot.candidates();
        let mut selected: BTreeMap<String, Selection> = BTreeMap::new();

        for phase in &plan.phases {
            for (index, score) in select_for_phase(phase, candidates) {
                let candidate = &candidates[index];
                let matched: BTreeSet<String> = candidate
                    .capability_tags
                    .intersection(&phase.required_capabilities)
                    .cloned()
                    .collect();

                let entry = selected
                    .entry(candidate.id.clone())
                    .or_insert_with(|| Selection {
                        catalog_index: index,
                        definition: SkillDefinition {
                            id: candidate.id.clone(),
                            name: candidate.name.clone(),
                            source_path: candidate.source_path.clone(),
                            relevance_score: score,
                            matched_capabilities: BTreeSet::new(),
                            selected_for: Vec::new(),
                        },
                    });

                let definition = &mut entry.definition;
                if score > definition.relevance_score {
                    definition.relevance_score = score;
                }
                definition.matched_capabilities.extend(matched);
                definition.selected_for.push(phase.name.clone());
            }
        }

        let mut ranked: Vec<Selection> = selected.into_values().collect();
        ranked.sort_by(|a, b| {
            by_score_then_index(
                (a.definition.relevance_score, a.catalog_index),
                (b.definition.relevance_score, b.catalog_index),
            )
        });

        let skills: Vec<SkillDefinition> = ranked.into_iter().map(|s| s.definition).collect();
        tracing::debug!(
            phases = plan.phases.len(),
            candidates = candidates.len(),
            selected = skills.len(),
            "synthesized skills"
        );
        skills
    }
}

/// Synthesize with the default synthesizer.
pub fn synthesize(plan: &ExecutionPlan, snapshot: &CatalogSnapshot) -> Vec<SkillDefinition> {
    SkillSynthesizer::new().synthesize(plan, snapshot)
}

/// `(catalog index, score)` of the candidates selected for one phase.
fn select_for_phase(phase: &Phase, candidates: &[SkillCandidate]) -> Vec<(usize, f64)> {
    let required = &phase.required_capabilities;
    let mut ranked: Vec<(usize, f64)> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| (i, relevance(&c.capability_tags, required)))
        .filter(|&(_, score)| score > RELEVANCE_FLOOR)
        .collect();
    ranked.sort_by(|a, b| by_score_then_index((a.1, a.0), (b.1, b.0)));

    let Some(&(_, top)) = ranked.first() else {
        return Vec::new();
    };

    let mut uncovered: BTreeSet<&String> = required.iter().collect();
    let mut picks = Vec::new();
    for (index, score) in ranked {
        let tags = &candidates[index].capability_tags;
        let at_top = score == top;
        let completes = uncovered.iter().any(|cap| tags.contains(*cap));
        if at_top || completes {
            uncovered.retain(|cap| !tags.contains(*cap));
            picks.push((index, score));
        }
    }
    picks
}

/// Descending score, then ascending catalog index.
fn by_score_then_index(a: (f64, usize), b: (f64, usize)) -> Ordering {
    b.0.partial_cmp(&a.0)
        .unwrap_or(Ordering::Equal)
        .then(a.1.cmp(&b.1))
}
