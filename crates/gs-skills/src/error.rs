// error.rs - Error types for skill catalogs and synthesis.

use thiserror::Error;

/// Errors that can occur while reading a skill catalog.
#[derive(Debug, Error)]
pub enum SkillError {
    /// The catalog location cannot be read at all. Distinct from an empty
    /// catalog, which is not an error.
    #[error("skill catalog unavailable at {path}: {source}")]
    CatalogUnavailable {
        path: String,
        source: std::io::Error,
    },

    /// The catalog location could not be turned into a discovery pattern.
    #[error("invalid skill catalog pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// One skill definition is unreadable or has bad front matter.
    /// Directory catalogs skip these entries with a warning.
    #[error("invalid skill definition at {path}: {reason}")]
    InvalidSkill { path: String, reason: String },
}
