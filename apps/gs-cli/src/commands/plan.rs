// plan.rs - `goalsmith plan`: show the execution plan for a goal document.

use std::path::Path;

use gs_model::ExecutionPlan;
use gs_pipeline::{Pipeline, PipelineConfig};

pub fn execute(config: &PipelineConfig, document: &Path, json: bool) -> anyhow::Result<()> {
    let text = super::read_document(document)?;
    let planned = Pipeline::new(config.clone()).plan(&text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&planned.plan)?);
        return Ok(());
    }

    println!("Goal: {}", planned.goal.primary_goal);
    println!(
        "Domain: {}  Complexity: {}",
        planned.goal.domain, planned.goal.complexity
    );
    println!();
    print_plan(&planned.plan);
    Ok(())
}

/// Numbered phase listing, shared with `generate`.
pub fn print_plan(plan: &ExecutionPlan) {
    for (i, phase) in plan.phases.iter().enumerate() {
        println!("{}. {}", i + 1, phase.name);
        if !phase.depends_on.is_empty() {
            let deps: Vec<&str> = phase.depends_on.iter().map(String::as_str).collect();
            println!("   after: {}", deps.join(", "));
        }
        if !phase.required_capabilities.is_empty() {
            let caps: Vec<&str> = phase
                .required_capabilities
                .iter()
                .map(String::as_str)
                .collect();
            println!("   needs: {}", caps.join(", "));
        }
    }
    println!();
    println!("Estimated duration: {:.0} min", plan.estimated_duration);
    for risk in &plan.risks {
        println!("Risk: {}", risk);
    }
}
