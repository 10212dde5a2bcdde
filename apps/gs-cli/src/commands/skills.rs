// skills.rs - `goalsmith skills`: list a skill library.

use std::path::Path;

use anyhow::Context;
use gs_skills::{DirectoryCatalog, SkillCatalog};

pub fn execute(root: &Path) -> anyhow::Result<()> {
    let catalog = DirectoryCatalog::new(root);
    let candidates = catalog
        .list_candidates()
        .with_context(|| format!("reading skill library {}", root.display()))?;

    if candidates.is_empty() {
        println!("No skills found in {}", root.display());
        return Ok(());
    }

    println!("{} skill(s) in {}:", candidates.len(), root.display());
    for candidate in &candidates {
        let tags: Vec<&str> = candidate.capability_tags.iter().map(String::as_str).collect();
        println!("  {:<24} {}", candidate.id, candidate.name);
        if !tags.is_empty() {
            println!("  {:<24} [{}]", "", tags.join(", "));
        }
    }
    Ok(())
}
