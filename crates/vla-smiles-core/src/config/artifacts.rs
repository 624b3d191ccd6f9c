//! Output artifact settings.
//!
//! Controls where the encoded batch and the per-divisor VLA matrices are
//! written and how the files are named.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Output artifact settings.
///
/// Matrix files are named `<matrix_file_prefix><k>.<matrix_file_extension>`
/// inside `output_dir`, so that each file is tagged with its divisor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Directory receiving every artifact. Created if missing.
    pub output_dir: PathBuf,

    /// File name for the newline-joined encoded batch.
    pub binary_file_name: String,

    /// File name prefix for matrices.
    pub matrix_file_prefix: String,

    /// File extension for matrices, without the leading dot.
    pub matrix_file_extension: String,

    /// Write the encoded batch alongside the matrices.
    pub write_binary: bool,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            binary_file_name: "binary_output.dat".to_string(),
            matrix_file_prefix: "vla_output_".to_string(),
            matrix_file_extension: "dat".to_string(),
            write_binary: true,
        }
    }
}

impl ArtifactConfig {
    /// Default settings writing into `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
            ..Default::default()
        }
    }

    /// Validate the artifact configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.binary_file_name.is_empty() {
            return Err("binary_file_name must not be empty".to_string());
        }
        if self.matrix_file_extension.is_empty() {
            return Err("matrix_file_extension must not be empty".to_string());
        }
        if self.matrix_file_extension.starts_with('.') {
            return Err(format!(
                "matrix_file_extension must not start with '.', got {:?}",
                self.matrix_file_extension
            ));
        }
        for (name, value) in [
            ("binary_file_name", &self.binary_file_name),
            ("matrix_file_prefix", &self.matrix_file_prefix),
            ("matrix_file_extension", &self.matrix_file_extension),
        ] {
            if value.contains(['/', '\\']) {
                return Err(format!(
                    "{} must not contain path separators, got {:?}",
                    name, value
                ));
            }
        }
        Ok(())
    }
}
