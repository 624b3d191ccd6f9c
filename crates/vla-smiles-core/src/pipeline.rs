//! VlaPipeline - encode a batch and regroup it for every divisor.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::divisors::divisors;
use crate::encoder::{encode, EncodedBatch};
use crate::error::VlaResult;
use crate::transform::{transform, VlaMatrix};

/// Result of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VlaOutput {
    /// The equal-length encoded batch every matrix was derived from.
    pub encoded: EncodedBatch,
    /// One matrix per divisor of L, ascending by group size.
    pub matrices: Vec<VlaMatrix>,
}

impl VlaOutput {
    /// Group sizes in output order.
    pub fn divisors(&self) -> Vec<usize> {
        self.matrices.iter().map(VlaMatrix::group_size).collect()
    }

    /// Matrix computed for group size `k`.
    pub fn matrix_for(&self, k: usize) -> Option<&VlaMatrix> {
        self.matrices
            .binary_search_by_key(&k, VlaMatrix::group_size)
            .ok()
            .map(|idx| &self.matrices[idx])
    }
}

/// Raw strings → encoded batch → divisors → one VLA matrix per divisor.
///
/// # Example
///
/// ```
/// use vla_smiles_core::{PipelineConfig, VlaPipeline};
///
/// let pipeline = VlaPipeline::new(PipelineConfig::default());
/// let output = pipeline.run(&["A", "AB"]).unwrap();
/// assert_eq!(output.divisors(), vec![1, 2, 4, 8, 16]);
/// assert_eq!(output.matrix_for(8).unwrap().shape(), (2, 2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct VlaPipeline {
    config: PipelineConfig,
}

impl VlaPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full pipeline over `raw`.
    ///
    /// Any failure aborts the run; no partial set of matrices is returned.
    pub fn run<S: AsRef<str>>(&self, raw: &[S]) -> VlaResult<VlaOutput> {
        let start = Instant::now();

        let encoded = encode(raw)?;
        let matrices = self.transform_all(&encoded)?;

        info!(
            rows = encoded.len(),
            sequence_length = encoded.sequence_length(),
            matrices = matrices.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "VLA pipeline complete"
        );
        Ok(VlaOutput { encoded, matrices })
    }

    /// Compute the matrix for every divisor of the batch's common length.
    pub fn transform_all(&self, encoded: &EncodedBatch) -> VlaResult<Vec<VlaMatrix>> {
        let ks = divisors(encoded.sequence_length())?;
        debug!(
            divisors = ks.len(),
            parallel = self.config.parallel,
            "Transforming encoded batch"
        );

        let rows = encoded.rows();
        if self.config.parallel {
            // collect() on Result keeps divisor order and stops at the first error.
            ks.par_iter().map(|&k| transform(rows, k)).collect()
        } else {
            ks.iter().map(|&k| transform(rows, k)).collect()
        }
    }
}
