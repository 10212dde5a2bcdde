// analyzer.rs - PromptAnalyzer: goal document → GoalDefinition.

use gs_model::GoalDefinition;

use crate::complexity::{assess_complexity, ComplexityThresholds};
use crate::document::parse_document;
use crate::domain::classify_domain;
use crate::error::AnalyzerError;

/// Turns goal documents into [`GoalDefinition`]s.
///
/// Holds only its thresholds, so one analyzer can be shared freely between
/// threads and reused for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct PromptAnalyzer {
    thresholds: ComplexityThresholds,
}

impl PromptAnalyzer {
    pub fn new(thresholds: ComplexityThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ComplexityThresholds {
        &self.thresholds
    }

    /// Analyze one document.
    ///
    /// Fails with [`AnalyzerError::MalformedInput`] when no primary goal can be
    /// found; no partial definition is produced in that case.
    pub fn analyze(&self, document: &str) -> Result<GoalDefinition, AnalyzerError> {
        let parsed = parse_document(document)?;

        // Everything the author wrote feeds classification, the goal line first.
        let mut full_text = parsed.primary_goal.clone();
        for part in parsed
            .success_criteria
            .iter()
            .chain(&parsed.constraints)
            .chain(std::iter::once(&parsed.context))
        {
            full_text.push('\n');
            full_text.push_str(part);
        }

        let domain = classify_domain(&full_text);
        let complexity = assess_complexity(
            parsed.success_criteria.len(),
            parsed.constraints.len(),
            &full_text,
            &self.thresholds,
        );

        tracing::debug!(
            goal = %parsed.primary_goal,
            %domain,
            %complexity,
            constraints = parsed.constraints.len(),
            criteria = parsed.success_criteria.len(),
            "analyzed goal document"
        );

        Ok(GoalDefinition {
            primary_goal: parsed.primary_goal,
            domain,
            constraints: parsed.constraints,
            success_criteria: parsed.success_criteria,
            complexity,
            raw_context: parsed.context,
        })
    }
}

/// Analyze a document with the default thresholds.
pub fn analyze(document: &str) -> Result<GoalDefinition, AnalyzerError> {
    PromptAnalyzer::default().analyze(document)
}
