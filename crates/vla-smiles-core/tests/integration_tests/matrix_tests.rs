//! Matrix shape, bounds and zero-group policy tests

use num_bigint::BigUint;
use num_traits::{One, Zero};
use vla_smiles_core::{PipelineConfig, VlaPipeline};

use super::helpers::drug_batch;

#[test]
fn test_shape_and_bounds_for_every_divisor() {
    let output = VlaPipeline::default().run(&drug_batch()).unwrap();
    let n = output.encoded.len();
    let l = output.encoded.sequence_length();

    for m in &output.matrices {
        let k = m.group_size();
        assert_eq!(m.shape(), (n, l / k), "shape for k={}", k);
        let bound = BigUint::one() << k;
        assert!(m.cells().iter().all(|c| *c < bound), "bound for k={}", k);
    }
}

#[test]
fn test_padding_groups_are_zero() {
    let output = VlaPipeline::default().run(&drug_batch()).unwrap();
    let encoded = &output.encoded;

    for m in &output.matrices {
        let k = m.group_size();
        for i in 0..m.nrows() {
            for j in 0..m.ncols() {
                if encoded.group_is_padding(i, j, k) {
                    assert!(m.get(i, j).unwrap().is_zero(), "k={} cell ({}, {})", k, i, j);
                }
            }
        }
    }
}

#[test]
fn test_genuine_zero_data_group_is_indistinguishable_from_padding() {
    // NUL encodes to an all-zero byte inside the data region.
    let output = VlaPipeline::default().run(&["\0A", "A"]).unwrap();
    let k8 = output.matrix_for(8).unwrap();
    assert_eq!(k8.to_text(), "0 65\n65 0\n");
    assert!(!output.encoded.group_is_padding(0, 0, 8));
    assert!(output.encoded.group_is_padding(1, 1, 8));
}

#[test]
fn test_k8_recovers_code_points() {
    let batch = drug_batch();
    let output = VlaPipeline::default().run(&batch).unwrap();
    let k8 = output.matrix_for(8).unwrap().to_u64().unwrap();

    for (i, raw) in batch.iter().enumerate() {
        for (j, b) in raw.bytes().enumerate() {
            assert_eq!(k8[[i, j]], u64::from(b));
        }
    }
}

#[test]
fn test_parallel_and_sequential_agree() {
    let batch = drug_batch();
    let sequential = VlaPipeline::default().run(&batch).unwrap();
    let parallel = VlaPipeline::new(PipelineConfig::parallel()).run(&batch).unwrap();
    assert_eq!(sequential.matrices, parallel.matrices);
}
