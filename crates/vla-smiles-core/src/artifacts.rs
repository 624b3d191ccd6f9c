//! Artifact I/O: read SMILES batches and write encoded batches and matrices.
//!
//! Input files hold one SMILES string per line. Matrices are written as plain
//! text, whitespace-separated, one row per line, in files tagged with their
//! group size.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ArtifactConfig;
use crate::encoder::EncodedBatch;
use crate::error::{VlaError, VlaResult};
use crate::pipeline::VlaOutput;
use crate::transform::VlaMatrix;

/// Read a batch of raw strings from `path`, one per line.
///
/// Lines end at `\n`, `\r\n` or a bare `\r`; terminators are stripped and no
/// other whitespace is touched. Blank lines are kept as empty strings.
///
/// # Errors
///
/// - [`VlaError::InputNotFound`] if the file does not exist
/// - [`VlaError::InputRead`] for any other read failure, including invalid UTF-8
pub fn read_batch(path: impl AsRef<Path>) -> VlaResult<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => VlaError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => VlaError::InputRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;

    let lines = split_lines(&contents);
    debug!(path = %path.display(), lines = lines.len(), "Read input batch");
    Ok(lines)
}

/// Split on `\n`, `\r\n` and bare `\r`. A final terminator does not start
/// an extra empty line.
fn split_lines(contents: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = contents;
    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(idx) => {
                lines.push(rest[..idx].to_owned());
                let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + terminator..];
            }
            None => {
                lines.push(rest.to_owned());
                break;
            }
        }
    }
    lines
}

/// Writes pipeline artifacts according to an [`ArtifactConfig`].
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    config: ArtifactConfig,
}

impl ArtifactWriter {
    /// Create a writer, validating the configuration.
    pub fn new(config: ArtifactConfig) -> VlaResult<Self> {
        config.validate().map_err(VlaError::ConfigError)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ArtifactConfig {
        &self.config
    }

    /// Destination of the encoded batch.
    pub fn binary_path(&self) -> PathBuf {
        self.config.output_dir.join(&self.config.binary_file_name)
    }

    /// Destination of the matrix for group size `k`.
    pub fn matrix_path(&self, k: usize) -> PathBuf {
        self.config.output_dir.join(format!(
            "{}{}.{}",
            self.config.matrix_file_prefix, k, self.config.matrix_file_extension
        ))
    }

    /// Write the newline-joined encoded batch.
    pub fn write_binary(&self, encoded: &EncodedBatch) -> VlaResult<PathBuf> {
        self.ensure_output_dir()?;
        let path = self.binary_path();
        fs::write(&path, encoded.to_artifact()).map_err(|e| VlaError::artifact_write(&path, &e))?;
        debug!(path = %path.display(), rows = encoded.len(), "Wrote encoded batch");
        Ok(path)
    }

    /// Write one matrix as whitespace-separated integers.
    pub fn write_matrix(&self, matrix: &VlaMatrix) -> VlaResult<PathBuf> {
        self.ensure_output_dir()?;
        let path = self.matrix_path(matrix.group_size());
        let file = File::create(&path).map_err(|e| VlaError::artifact_write(&path, &e))?;
        matrix
            .write_text(BufWriter::new(file))
            .map_err(|e| VlaError::artifact_write(&path, &e))?;
        debug!(path = %path.display(), k = matrix.group_size(), "Wrote VLA matrix");
        Ok(path)
    }

    /// Write every artifact of a pipeline run.
    ///
    /// The encoded batch is written first when `write_binary` is set, followed
    /// by the matrices in ascending group-size order.
    pub fn write_output(&self, output: &VlaOutput) -> VlaResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(output.matrices.len() + 1);
        if self.config.write_binary {
            written.push(self.write_binary(&output.encoded)?);
        }
        for matrix in &output.matrices {
            written.push(self.write_matrix(matrix)?);
        }
        info!(
            dir = %self.config.output_dir.display(),
            files = written.len(),
            "Wrote VLA artifacts"
        );
        Ok(written)
    }

    fn ensure_output_dir(&self) -> VlaResult<()> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|e| VlaError::artifact_write(dir, &e))
    }
}
