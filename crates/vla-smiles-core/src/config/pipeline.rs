//! Pipeline execution settings.

use serde::{Deserialize, Serialize};

/// Pipeline execution settings.
///
/// Matrices for distinct divisors are independent of each other, so they may
/// be computed concurrently. Output order is ascending by divisor either way.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Compute per-divisor matrices on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
}

impl PipelineConfig {
    /// Configuration with parallel matrix computation enabled.
    pub fn parallel() -> Self {
        Self { parallel: true }
    }

    /// Validate the pipeline configuration.
    pub fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
