// stage.rs - PipelineStage: the one-way lifecycle of a single run.
//
//   Received → Analyzed → Planned → SkillsResolved → Assembled
//
// There is no failed state: a failure ends the run and is reported through
// `PipelineError`, which records the last stage reached and the stage that
// failed.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// The document has been accepted, nothing derived yet.
    Received,
    /// A GoalDefinition exists.
    Analyzed,
    /// An ExecutionPlan exists.
    Planned,
    /// Skills have been selected from a catalog snapshot.
    SkillsResolved,
    /// The bundle is built. Terminal.
    Assembled,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Received => write!(f, "received"),
            PipelineStage::Analyzed => write!(f, "analyzed"),
            PipelineStage::Planned => write!(f, "planned"),
            PipelineStage::SkillsResolved => write!(f, "skills_resolved"),
            PipelineStage::Assembled => write!(f, "assembled"),
        }
    }
}

impl PipelineStage {
    /// Only the single forward step is valid; stages are never revisited.
    pub fn can_transition_to(&self, next: &PipelineStage) -> bool {
        matches!(
            (self, next),
            (PipelineStage::Received, PipelineStage::Analyzed)
                | (PipelineStage::Analyzed, PipelineStage::Planned)
                | (PipelineStage::Planned, PipelineStage::SkillsResolved)
                | (PipelineStage::SkillsResolved, PipelineStage::Assembled)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Assembled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PipelineStage; 5] = [
        PipelineStage::Received,
        PipelineStage::Analyzed,
        PipelineStage::Planned,
        PipelineStage::SkillsResolved,
        PipelineStage::Assembled,
    ];

    #[test]
    fn only_forward_single_steps_are_valid() {
        for (i, from) in ALL.iter().enumerate() {
            for (j, to) in ALL.iter().enumerate() {
                assert_eq!(
                    from.can_transition_to(to),
                    j == i + 1,
                    "{} -> {}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn assembled_is_terminal() {
        assert!(PipelineStage::Assembled.is_terminal());
        assert!(!PipelineStage::Planned.is_terminal());
    }

    #[test]
    fn display_matches_serde() {
        for stage in ALL {
            assert_eq!(parse_stage(&stage.to_string()), stage);
        }
    }

    fn parse_stage(name: &str) -> PipelineStage {
        #[derive(Deserialize)]
        struct Wrapper {
            stage: PipelineStage,
        }
        let wrapper: Wrapper = toml::from_str(&format!("stage = \"{}\"", name)).unwrap();
        wrapper.stage
    }
}
