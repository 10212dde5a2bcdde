// analyze.rs - `goalsmith analyze`: print the GoalDefinition as JSON.

use std::path::Path;

use gs_pipeline::{Pipeline, PipelineConfig};

pub fn execute(config: &PipelineConfig, document: &Path) -> anyhow::Result<()> {
    let text = super::read_document(document)?;
    let goal = Pipeline::new(config.clone()).analyze(&text)?;
    println!("{}", serde_json::to_string_pretty(&goal)?);
    Ok(())
}
