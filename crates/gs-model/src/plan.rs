// plan.rs - ExecutionPlan: ordered phases with dependencies and capabilities.
//
// Invariants (checked by `ExecutionPlan::validate`):
// - phase names are unique within a plan;
// - every `depends_on` entry names a phase of the same plan;
// - the dependency graph is acyclic.
//
// `estimated_duration` and `risks` are advisory and never validated.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::goal::{Complexity, Domain};

/// One ordered step of an execution plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Phase {
    pub name: String,
    pub description: String,

    /// Names of phases that must finish before this one starts.
    #[serde(default)]
    pub depends_on: BTreeSet<String>,

    /// Capabilities a skill must provide to carry out this phase.
    #[serde(default)]
    pub required_capabilities: BTreeSet<String>,

    /// This phase's share of the plan's duration estimate, in minutes.
    #[serde(default)]
    pub estimated_minutes: f64,
}

/// The Objective Planner's output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecutionPlan {
    pub domain: Domain,
    pub complexity: Complexity,
    pub phases: Vec<Phase>,

    /// Total estimate in minutes (advisory).
    pub estimated_duration: f64,

    /// Human-readable warnings about ambiguous or coordination-heavy phases.
    #[serde(default)]
    pub risks: Vec<String>,
}

impl ExecutionPlan {
    /// Look up a phase by name.
    pub fn phase(&self, name: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.name == name)
    }

    pub fn phase_names(&self) -> Vec<&str> {
        self.phases.iter().map(|p| p.name.as_str()).collect()
    }

    /// Union of every phase's required capabilities.
    pub fn required_capabilities(&self) -> BTreeSet<String> {
        self.phases
            .iter()
            .flat_map(|p| p.required_capabilities.iter().cloned())
            .collect()
    }

    /// Check the structural invariants of the plan.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut index: BTreeMap<&str, usize> = BTreeMap::new();
        for (i, phase) in self.phases.iter().enumerate() {
            if index.insert(phase.name.as_str(), i).is_some() {
                return Err(ModelError::DuplicatePhase(phase.name.clone()));
            }
        }

        for phase in &self.phases {
            for dep in &phase.depends_on {
                if !index.contains_key(dep.as_str()) {
                    return Err(ModelError::UnknownDependency {
                        phase: phase.name.clone(),
                        dependency: dep.clone(),
                    });
                }
            }
        }

        // Iterative three-colour DFS; plans are small but may be deserialized
        // from anywhere, so no ordering assumption is made.
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }
        let mut marks = vec![Mark::Unvisited; self.phases.len()];

        for root in 0..self.phases.len() {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            let mut stack: Vec<(usize, Vec<usize>)> = vec![(root, self.dep_indices(root, &index))];
            marks[root] = Mark::InProgress;

            while let Some((node, pending)) = stack.last_mut() {
                match pending.pop() {
                    Some(next) => match marks[next] {
                        Mark::InProgress => {
                            return Err(ModelError::DependencyCycle(
                                self.phases[next].name.clone(),
                            ));
                        }
                        Mark::Unvisited => {
                            marks[next] = Mark::InProgress;
                            let deps = self.dep_indices(next, &index);
                            stack.push((next, deps));
                        }
                        Mark::Done => {}
                    },
                    None => {
                        marks[*node] = Mark::Done;
                        stack.pop();
                    }
                }
            }
        }

        Ok(())
    }

    fn dep_indices(&self, phase: usize, index: &BTreeMap<&str, usize>) -> Vec<usize> {
        self.phases[phase]
            .depends_on
            .iter()
            .filter_map(|dep| index.get(dep.as_str()).copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(name: &str, deps: &[&str], caps: &[&str]) -> Phase {
        Phase {
            name: name.to_string(),
            description: format!("{} phase", name),
            depends_on: deps.iter().map(|s| s.to_string()).collect(),
            required_capabilities: caps.iter().map(|s| s.to_string()).collect(),
            estimated_minutes: 1.0,
        }
    }

    fn plan(phases: Vec<Phase>) -> ExecutionPlan {
        ExecutionPlan {
            domain: Domain::Unknown,
            complexity: Complexity::Simple,
            phases,
            estimated_duration: 3.0,
            risks: vec![],
        }
    }

    #[test]
    fn linear_plan_is_valid() {
        let p = plan(vec![
            phase("A", &[], &["x"]),
            phase("B", &["A"], &["y"]),
            phase("C", &["B"], &[]),
        ]);
        assert!(p.validate().is_ok());
        assert_eq!(p.phase_names(), vec!["A", "B", "C"]);
        assert_eq!(p.required_capabilities().len(), 2);
    }

    #[test]
    fn unknown_dependency_is_rejected() {
        let p = plan(vec![phase("A", &[], &[]), phase("B", &["Z"], &[])]);
        assert_eq!(
            p.validate(),
            Err(ModelError::UnknownDependency {
                phase: "B".to_string(),
                dependency: "Z".to_string(),
            })
        );
    }

    #[test]
    fn duplicate_phase_is_rejected() {
        let p = plan(vec![phase("A", &[], &[]), phase("A", &[], &[])]);
        assert_eq!(p.validate(), Err(ModelError::DuplicatePhase("A".to_string())));
    }

    #[test]
    fn cycle_is_rejected() {
        let p = plan(vec![
            phase("A", &["C"], &[]),
            phase("B", &["A"], &[]),
            phase("C", &["B"], &[]),
        ]);
        assert!(matches!(p.validate(), Err(ModelError::DependencyCycle(_))));
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let p = plan(vec![phase("A", &["A"], &[])]);
        assert!(matches!(p.validate(), Err(ModelError::DependencyCycle(_))));
    }

    #[test]
    fn diamond_is_acyclic() {
        let p = plan(vec![
            phase("A", &[], &[]),
            phase("B", &["A"], &[]),
            phase("C", &["A"], &[]),
            phase("D", &["B", "C"], &[]),
        ]);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn plan_json_round_trip() {
        let p = plan(vec![phase("A", &[], &["x"]), phase("B", &["A"], &[])]);
        let json = serde_json::to_string(&p).unwrap();
        let restored: ExecutionPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(p, restored);
    }
}
