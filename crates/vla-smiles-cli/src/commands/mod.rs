//! CLI command handlers
//!
//! # Modules
//!
//! - `convert`: Full SMILES → binary → VLA matrices conversion
//! - `encode`: Binary encoding only
//! - `divisors`: Sequence length and divisor listing

pub mod convert;
pub mod divisors;
pub mod encode;

use std::path::{Path, PathBuf};

use vla_smiles_core::{VlaConfig, VlaResult};

/// Load the configuration file if given, then apply command-line overrides.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    output_dir: Option<PathBuf>,
) -> VlaResult<VlaConfig> {
    let mut config = match config_path {
        Some(path) => VlaConfig::from_json_file(path)?,
        None => VlaConfig::default(),
    };
    if let Some(dir) = output_dir {
        config.artifacts.output_dir = dir;
    }
    Ok(config)
}
