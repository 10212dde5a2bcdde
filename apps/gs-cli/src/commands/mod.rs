pub mod analyze;
pub mod generate;
pub mod plan;
pub mod skills;

use std::path::Path;

use anyhow::Context;

/// Read a goal document as UTF-8 text.
pub fn read_document(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("reading goal document {}", path.display()))
}
