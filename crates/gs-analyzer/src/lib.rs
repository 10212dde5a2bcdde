//! # gs-analyzer
//!
//! Prompt analysis for Goalsmith: turns a free-form goal document into a
//! [`GoalDefinition`].
//!
//! A goal document looks like this:
//!
//! ```text
//! # Goal: Analyze test coverage
//! ## Constraints
//! - Complete within 10 minutes
//! ## Success Criteria
//! - Identify untested functions
//! - Calculate coverage percentage
//! ```
//!
//! The first substantive line is the objective. Labeled sections supply
//! constraints and success criteria. Everything else is kept as context.
//! Domain and complexity are derived by rule, never by a model: the domain
//! from the ordered [`DOMAIN_KEYWORDS`] table, the complexity from
//! [`ComplexityThresholds`].
//!
//! Analysis is a pure function of the text.

pub mod analyzer;
pub mod complexity;
pub mod document;
pub mod domain;
pub mod error;

pub use analyzer::{analyze, PromptAnalyzer};
pub use complexity::{assess_complexity, stated_duration_minutes, ComplexityThresholds};
pub use domain::{classify_domain, domain_scores, DOMAIN_KEYWORDS};
pub use error::AnalyzerError;

pub use gs_model::GoalDefinition;
