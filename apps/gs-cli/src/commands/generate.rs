// generate.rs - `goalsmith generate`: document + skill library → bundle.
//
// Without --output the bundle is only printed. With --output it is also
// packaged (bundle.json + manifest.json) into that directory.

use std::path::Path;

use anyhow::Context;
use gs_package::BundlePackager;
use gs_pipeline::{Pipeline, PipelineConfig};
use gs_skills::DirectoryCatalog;

pub fn execute(
    mut config: PipelineConfig,
    document: &Path,
    skills: &Path,
    output: Option<&Path>,
    strict: bool,
    json: bool,
) -> anyhow::Result<()> {
    if strict {
        config.assembler.strict = true;
    }

    let text = super::read_document(document)?;
    let catalog = DirectoryCatalog::new(skills);
    let bundle = Pipeline::new(config)
        .run(&text, &catalog)
        .with_context(|| format!("generating a bundle for {}", document.display()))?;

    tracing::info!(
        skills = bundle.skills.len(),
        fallback = bundle.uses_generic_fallback,
        "generated bundle"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
    } else {
        println!("Goal: {}", bundle.goal.primary_goal);
        println!(
            "Domain: {}  Complexity: {}  Max iterations: {}",
            bundle.goal.domain, bundle.goal.complexity, bundle.auto_config.max_iterations
        );
        println!();
        super::plan::print_plan(&bundle.plan);
        println!();
        if bundle.skills.is_empty() {
            println!("No matching skills.");
        }
        for skill in &bundle.skills {
            println!(
                "Skill {:<24} {:.2}  {}",
                skill.id,
                skill.relevance_score,
                skill.source_path.display()
            );
        }
        if bundle.uses_generic_fallback {
            let uncovered = bundle.coverage.uncovered_phases();
            if uncovered.is_empty() {
                println!("Generic fallback: no skills selected.");
            } else {
                println!("Generic fallback for: {}", uncovered.join(", "));
            }
        }
    }

    if let Some(out_dir) = output {
        let manifest = BundlePackager::new(out_dir)
            .package(&bundle)
            .with_context(|| format!("packaging bundle into {}", out_dir.display()))?;
        // Keep stdout pure JSON when --json is set.
        if json {
            tracing::info!(
                package_id = %manifest.package_id,
                "packaged into {}",
                out_dir.display()
            );
        } else {
            println!();
            println!(
                "Packaged {} ({}) into {}",
                manifest.agent_name,
                manifest.package_id,
                out_dir.display()
            );
        }
    }
    Ok(())
}
