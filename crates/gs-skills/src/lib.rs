//! # gs-skills
//!
//! Skill catalogs and skill synthesis for Goalsmith.
//!
//! A [`SkillCatalog`] lists candidate skills from an external library; the
//! pipeline reads it once per run into a [`CatalogSnapshot`] so scoring is
//! consistent even if the library changes underneath. The
//! [`SkillSynthesizer`] scores every candidate against every phase of an
//! [`ExecutionPlan`] and returns a ranked, deduplicated list of
//! [`SkillDefinition`] references.
//!
//! ## Key invariants
//!
//! - **Reference, not copy**: selected skills carry an id and a path into the
//!   library, never the skill body.
//! - **Empty is not unavailable**: an empty catalog yields an empty selection;
//!   only an unreadable catalog is an error ([`SkillError::CatalogUnavailable`]).
//! - **Deterministic order**: descending relevance, catalog order on ties.

pub mod catalog;
pub mod directory;
pub mod error;
pub mod scoring;
pub mod synthesizer;

pub use catalog::{CatalogSnapshot, SkillCatalog, StaticCatalog};
pub use directory::DirectoryCatalog;
pub use error::SkillError;
pub use scoring::relevance;
pub use synthesizer::{synthesize, SkillSynthesizer, RELEVANCE_FLOOR};

pub use gs_model::{ExecutionPlan, SkillCandidate, SkillDefinition};
