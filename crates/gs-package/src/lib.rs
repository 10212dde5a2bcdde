//! # gs-package
//!
//! Materializes a [`GoalAgentBundle`] on disk:
//!
//! ```text
//! <out_dir>/
//!   bundle.json     the bundle, byte-for-byte reproducible
//!   manifest.json   package id, timestamp, generator, checksum, skill refs
//! ```
//!
//! Everything time- or run-specific lives in the [`PackageManifest`], so two
//! packages of the same bundle differ only in their manifests. The manifest's
//! `bundle_sha256` lets a consumer check that `bundle.json` is the file the
//! manifest describes ([`BundlePackager::verify`]).
//!
//! Skills are written as references (id and source path). Skill bodies are
//! never copied into a package.

pub mod error;
pub mod hasher;
pub mod manifest;
pub mod packager;

pub use error::PackageError;
pub use hasher::{hash_bytes, hash_file};
pub use manifest::{slugify, GeneratorInfo, PackageManifest, SkillReference};
pub use packager::{BundlePackager, BUNDLE_FILE, MANIFEST_FILE};

pub use gs_model::GoalAgentBundle;
