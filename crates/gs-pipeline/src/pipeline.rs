// pipeline.rs - Pipeline: runs a document through every stage exactly once.
//
// A `Run` owns the stage cursor and the partial state of one invocation.
// Every step checks its transition before doing any work, so a stage can
// neither be skipped nor repeated. The catalog is read once, after planning.

use gs_analyzer::PromptAnalyzer;
use gs_assembler::AgentAssembler;
use gs_model::{ExecutionPlan, GoalAgentBundle, GoalDefinition, SkillDefinition};
use gs_planner::ObjectivePlanner;
use gs_skills::{CatalogSnapshot, SkillCatalog, SkillSynthesizer};

use crate::config::PipelineConfig;
use crate::error::{PartialState, PipelineError, StageError};
use crate::stage::PipelineStage;

/// A goal together with the plan derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedGoal {
    pub goal: GoalDefinition,
    pub plan: ExecutionPlan,
}

/// The synthesis pipeline. Holds configuration only.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
    analyzer: PromptAnalyzer,
    planner: ObjectivePlanner,
    synthesizer: SkillSynthesizer,
    assembler: AgentAssembler,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            analyzer: PromptAnalyzer::new(config.analyzer.clone()),
            planner: ObjectivePlanner::new(config.planner.clone()),
            synthesizer: SkillSynthesizer::new(),
            assembler: AgentAssembler::new(config.assembler.clone()),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run only the analysis stage.
    pub fn analyze(&self, document: &str) -> Result<GoalDefinition, PipelineError> {
        Run::new().analyze(&self.analyzer, document)
    }

    /// Run analysis and planning.
    pub fn plan(&self, document: &str) -> Result<PlannedGoal, PipelineError> {
        let mut run = Run::new();
        let goal = run.analyze(&self.analyzer, document)?;
        let plan = run.plan(&self.planner, &goal)?;
        Ok(PlannedGoal { goal, plan })
    }

    /// Run every stage, reading `catalog` once.
    pub fn run(
        &self,
        document: &str,
        catalog: &dyn SkillCatalog,
    ) -> Result<GoalAgentBundle, PipelineError> {
        let mut run = Run::new();
        let goal = run.analyze(&self.analyzer, document)?;
        let plan = run.plan(&self.planner, &goal)?;
        let snapshot = CatalogSnapshot::capture(catalog).map_err(|e| run.fail(e.into()))?;
        self.finish(run, &goal, &plan, &snapshot)
    }

    /// Run every stage against an already captured catalog snapshot.
    pub fn run_with_snapshot(
        &self,
        document: &str,
        snapshot: &CatalogSnapshot,
    ) -> Result<GoalAgentBundle, PipelineError> {
        let mut run = Run::new();
        let goal = run.analyze(&self.analyzer, document)?;
        let plan = run.plan(&self.planner, &goal)?;
        self.finish(run, &goal, &plan, snapshot)
    }

    fn finish(
        &self,
        mut run: Run,
        goal: &GoalDefinition,
        plan: &ExecutionPlan,
        snapshot: &CatalogSnapshot,
    ) -> Result<GoalAgentBundle, PipelineError> {
        let skills = run.resolve_skills(&self.synthesizer, plan, snapshot)?;
        run.assemble(&self.assembler, goal, plan, &skills)
    }
}

/// Cursor and partial state of one invocation.
struct Run {
    stage: PipelineStage,
    partial: PartialState,
}

impl Run {
    fn new() -> Self {
        Self {
            stage: PipelineStage::Received,
            partial: PartialState::default(),
        }
    }

    fn fail(&self, source: StageError) -> PipelineError {
        tracing::debug!(
            stage = %self.stage,
            failed = %source.target_stage(),
            error = %source,
            "pipeline run failed"
        );
        PipelineError {
            stage: self.stage,
            partial: Box::new(self.partial.clone()),
            source,
        }
    }

    /// Fail unless `next` directly follows the current stage.
    fn ensure(&self, next: PipelineStage) -> Result<(), PipelineError> {
        if self.stage.can_transition_to(&next) {
            Ok(())
        } else {
            Err(self.fail(StageError::InvalidTransition {
                from: self.stage,
                to: next,
            }))
        }
    }

    fn analyze(
        &mut self,
        analyzer: &PromptAnalyzer,
        document: &str,
    ) -> Result<GoalDefinition, PipelineError> {
        self.ensure(PipelineStage::Analyzed)?;
        let goal = analyzer.analyze(document).map_err(|e| self.fail(e.into()))?;
        tracing::info!(
            domain = %goal.domain,
            complexity = %goal.complexity,
            "analyzed goal document"
        );
        self.partial.goal = Some(goal.clone());
        self.stage = PipelineStage::Analyzed;
        Ok(goal)
    }

    fn plan(
        &mut self,
        planner: &ObjectivePlanner,
        goal: &GoalDefinition,
    ) -> Result<ExecutionPlan, PipelineError> {
        self.ensure(PipelineStage::Planned)?;
        let plan = planner.plan(goal).map_err(|e| self.fail(e.into()))?;
        tracing::info!(
            phases = plan.phases.len(),
            estimated_minutes = plan.estimated_duration,
            risks = plan.risks.len(),
            "planned goal"
        );
        self.partial.plan = Some(plan.clone());
        self.stage = PipelineStage::Planned;
        Ok(plan)
    }

    fn resolve_skills(
        &mut self,
        synthesizer: &SkillSynthesizer,
        plan: &ExecutionPlan,
        snapshot: &CatalogSnapshot,
    ) -> Result<Vec<SkillDefinition>, PipelineError> {
        self.ensure(PipelineStage::SkillsResolved)?;
        let skills = synthesizer.synthesize(plan, snapshot);
        tracing::info!(
            candidates = snapshot.len(),
            selected = skills.len(),
            "resolved skills"
        );
        self.partial.skills = Some(skills.clone());
        self.stage = PipelineStage::SkillsResolved;
        Ok(skills)
    }

    fn assemble(
        &mut self,
        assembler: &AgentAssembler,
        goal: &GoalDefinition,
        plan: &ExecutionPlan,
        skills: &[SkillDefinition],
    ) -> Result<GoalAgentBundle, PipelineError> {
        self.ensure(PipelineStage::Assembled)?;
        let bundle = assembler
            .assemble(goal, plan, skills)
            .map_err(|e| self.fail(e.into()))?;
        self.stage = PipelineStage::Assembled;
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_model::{Complexity, Domain, SkillCandidate};
    use gs_planner::PhaseRange;
    use gs_skills::{SkillError, StaticCatalog};
    use std::collections::BTreeSet;

    const DOC: &str = "# Goal: Analyze test coverage\n## Constraints\n- Complete within 10 minutes\n## Success Criteria\n- Identify untested functions\n- Calculate coverage percentage";

    struct BrokenCatalog;

    impl SkillCatalog for BrokenCatalog {
        fn list_candidates(&self) -> Result<Vec<SkillCandidate>, SkillError> {
            Err(SkillError::CatalogUnavailable {
                path: "/nowhere".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }

        fn location(&self) -> String {
            "/nowhere".to_string()
        }
    }

    /// A catalog with one skill tagged with everything the plan requires.
    fn covering_catalog(pipeline: &Pipeline) -> StaticCatalog {
        let planned = pipeline.plan(DOC).unwrap();
        let tags: BTreeSet<String> = planned.plan.required_capabilities();
        StaticCatalog::new(vec![
            SkillCandidate::new("everything", "Everything", "skills/everything/SKILL.md", tags),
            SkillCandidate::new("deployer", "Deployer", "skills/deployer.md", ["deployment"]),
        ])
    }

    #[test]
    fn scenario_document_end_to_end() {
        let pipeline = Pipeline::default();
        let catalog = covering_catalog(&pipeline);
        let bundle = pipeline.run(DOC, &catalog).unwrap();

        assert_eq!(bundle.goal.primary_goal, "Analyze test coverage");
        assert_eq!(bundle.goal.domain, Domain::Testing);
        assert_eq!(bundle.goal.complexity, Complexity::Simple);
        assert_eq!(bundle.plan.phases.len(), 3);
        assert!(!bundle.uses_generic_fallback);
        assert_eq!(bundle.skills.len(), 1);
        assert_eq!(bundle.skills[0].id, "everything");
        assert_eq!(
            bundle.auto_config.completion_signals,
            vec!["Identify untested functions", "Calculate coverage percentage"]
        );
        assert_eq!(bundle.auto_config.max_iterations, 5);
    }

    #[test]
    fn empty_catalog_falls_back() {
        let bundle = Pipeline::default()
            .run(DOC, &StaticCatalog::default())
            .unwrap();
        assert!(bundle.skills.is_empty());
        assert!(bundle.uses_generic_fallback);
    }

    #[test]
    fn runs_are_idempotent() {
        let pipeline = Pipeline::default();
        let snapshot = CatalogSnapshot::capture(&covering_catalog(&pipeline)).unwrap();
        let first = pipeline.run_with_snapshot(DOC, &snapshot).unwrap();
        let second = pipeline.run_with_snapshot(DOC, &snapshot).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn independent_runs_in_parallel_threads() {
        let pipeline = Pipeline::default();
        let catalog = covering_catalog(&pipeline);
        let expected = pipeline.run(DOC, &catalog).unwrap();

        let bundles: Vec<GoalAgentBundle> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| pipeline.run(DOC, &catalog).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(bundles.iter().all(|b| *b == expected));
    }

    #[test]
    fn analysis_failure_is_tagged_received() {
        let err = Pipeline::default()
            .run("", &StaticCatalog::default())
            .unwrap_err();
        assert_eq!(err.stage, PipelineStage::Received);
        assert_eq!(err.failed_stage(), PipelineStage::Analyzed);
        assert!(matches!(err.source, StageError::Analysis(_)));
        assert_eq!(*err.partial, PartialState::default());
    }

    #[test]
    fn planning_failure_keeps_the_goal() {
        let mut config = PipelineConfig::default();
        config.planner.phase_counts.simple = PhaseRange::new(0, 3);
        let err = Pipeline::new(config)
            .run(DOC, &StaticCatalog::default())
            .unwrap_err();
        assert_eq!(err.stage, PipelineStage::Analyzed);
        assert_eq!(err.failed_stage(), PipelineStage::Planned);
        assert!(matches!(err.source, StageError::Planning(_)));
        assert!(err.partial.goal.is_some());
        assert!(err.partial.plan.is_none());
    }

    #[test]
    fn unavailable_catalog_keeps_goal_and_plan() {
        let err = Pipeline::default().run(DOC, &BrokenCatalog).unwrap_err();
        assert_eq!(err.stage, PipelineStage::Planned);
        assert_eq!(err.failed_stage(), PipelineStage::SkillsResolved);
        assert!(matches!(err.source, StageError::Skills(_)));
        assert!(err.partial.plan.is_some());
        assert!(err.partial.skills.is_none());
        let message = err.to_string();
        assert!(message.contains("failed at stage 'skills_resolved'"), "{}", message);
        assert!(message.contains("after reaching 'planned'"), "{}", message);
    }

    #[test]
    fn strict_assembly_failure_keeps_everything() {
        let mut config = PipelineConfig::default();
        config.assembler.strict = true;
        let err = Pipeline::new(config)
            .run(DOC, &StaticCatalog::default())
            .unwrap_err();
        assert_eq!(err.stage, PipelineStage::SkillsResolved);
        assert_eq!(err.failed_stage(), PipelineStage::Assembled);
        assert!(matches!(err.source, StageError::Assembly(_)));
        assert_eq!(err.partial.skills, Some(vec![]));
    }

    #[test]
    fn stages_cannot_be_repeated() {
        let pipeline = Pipeline::default();
        let mut run = Run::new();
        let goal = run.analyze(&pipeline.analyzer, DOC).unwrap();
        let err = run.analyze(&pipeline.analyzer, DOC).unwrap_err();
        assert!(matches!(
            err.source,
            StageError::InvalidTransition {
                from: PipelineStage::Analyzed,
                to: PipelineStage::Analyzed
            }
        ));
        assert_eq!(err.partial.goal, Some(goal));
        assert_eq!(err.failed_stage(), PipelineStage::Analyzed);
    }

    #[test]
    fn pipeline_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pipeline>();
    }
}
