//! Artifact round trip and idempotence tests

use std::fs;

use tempfile::TempDir;
use vla_smiles_core::{read_batch, ArtifactConfig, ArtifactWriter, VlaError, VlaPipeline};

use super::helpers::drug_batch;

fn run_into(dir: &std::path::Path, input: &std::path::Path) -> Vec<std::path::PathBuf> {
    let batch = read_batch(input).unwrap();
    let output = VlaPipeline::default().run(&batch).unwrap();
    ArtifactWriter::new(ArtifactConfig::in_dir(dir))
        .unwrap()
        .write_output(&output)
        .unwrap()
}

#[test]
fn test_rerun_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input.dat");
    fs::write(&input, drug_batch().join("\n")).unwrap();

    let first = run_into(&tmp.path().join("a"), &input);
    let second = run_into(&tmp.path().join("b"), &input);
    assert_eq!(first.len(), second.len());

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.file_name(), b.file_name());
        assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
    }
}

#[test]
fn test_reference_files() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input.dat");
    fs::write(&input, "A\nAB\n").unwrap();
    let out = tmp.path().join("out");

    let written = run_into(&out, &input);
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "binary_output.dat",
            "vla_output_1.dat",
            "vla_output_2.dat",
            "vla_output_4.dat",
            "vla_output_8.dat",
            "vla_output_16.dat",
        ]
    );

    assert_eq!(
        fs::read_to_string(out.join("binary_output.dat")).unwrap(),
        "0100000100000000\n0100000101000010\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("vla_output_16.dat")).unwrap(),
        "16640\n16706\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("vla_output_2.dat")).unwrap(),
        "1 0 0 1 0 0 0 0\n1 0 0 1 1 0 0 2\n"
    );
}

#[test]
fn test_empty_input_file_is_empty_batch() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("empty.dat");
    fs::write(&input, "").unwrap();

    let batch = read_batch(&input).unwrap();
    let err = VlaPipeline::default().run(&batch).unwrap_err();
    assert!(matches!(err, VlaError::EmptyBatch));
}
