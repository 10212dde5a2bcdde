// config.rs - goalsmith.toml: one section per configurable stage.
//
//   [analyzer]            complexity thresholds
//   [planner]             phase counts and duration model
//   [assembler]           strict mode and iteration budget
//
// Every key is optional; an absent file or section means the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use gs_analyzer::ComplexityThresholds;
use gs_assembler::AssemblerConfig;
use gs_planner::PlannerConfig;

use crate::error::ConfigError;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "goalsmith.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub analyzer: ComplexityThresholds,
    pub planner: PlannerConfig,
    pub assembler: AssemblerConfig,
}

impl PipelineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a config file. A missing file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded pipeline config");
        Ok(config)
    }

    /// Load a config file, falling back to defaults if it does not exist.
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
