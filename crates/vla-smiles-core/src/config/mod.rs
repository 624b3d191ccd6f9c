//! VLA-SMILES configuration types.
//!
//! This module defines the configuration for the encoding pipeline and for the
//! artifact collaborator that persists encoded batches and VLA matrices.
//!
//! The encoding itself has no tunable parameters: every character expands to
//! exactly 8 bits and every divisor of the common length produces a matrix.

mod artifacts;
mod pipeline;


pub use self::artifacts::ArtifactConfig;
pub use self::pipeline::PipelineConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{VlaError, VlaResult};

/// Top-level configuration aggregating pipeline and artifact settings.
///
/// # Example
///
/// ```
/// use vla_smiles_core::config::VlaConfig;
///
/// let config = VlaConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.artifacts.binary_file_name, "binary_output.dat");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct VlaConfig {
    /// Pipeline execution settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Output artifact settings.
    #[serde(default)]
    pub artifacts: ArtifactConfig,
}

impl VlaConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> VlaResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            VlaError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate().map_err(VlaError::ConfigError)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.pipeline.validate()?;
        self.artifacts.validate()?;
        Ok(())
    }
}
