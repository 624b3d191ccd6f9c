//! Exit code and error message tests.

use tempfile::TempDir;

use super::helpers::{
    assert_exit_code, invoke, write_input, EXIT_INPUT_MISSING, EXIT_INVALID_INPUT,
};

#[test]
fn test_missing_input_is_informative() {
    let tmp = TempDir::new().unwrap();

    let result = invoke(tmp.path(), &["convert", "nope.dat"]);
    assert_exit_code(&result, EXIT_INPUT_MISSING, "missing input");
    assert!(result.stderr.contains("Error: The file nope.dat was not found."));
    assert_eq!(result.stderr.matches("was not found").count(), 1);
    assert!(!result.stderr.contains("WARN"));
    assert!(!tmp.path().join("binary_output.dat").exists());
}

#[test]
fn test_empty_input_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("empty.dat"), "").unwrap();

    let result = invoke(tmp.path(), &["convert", "empty.dat"]);
    assert_exit_code(&result, EXIT_INVALID_INPUT, "empty input");
    assert!(result.stderr.contains("Empty batch"));
}

#[test]
fn test_out_of_range_character_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    write_input(tmp.path(), "input.dat", &["CCO", "C\u{2192}N"]);

    let result = invoke(tmp.path(), &["convert", "input.dat"]);
    assert_exit_code(&result, EXIT_INVALID_INPUT, "encoding range");
    assert!(result.stderr.contains("U+2192"));
    assert!(!tmp.path().join("binary_output.dat").exists());
    assert!(!tmp.path().join("vla_output_1.dat").exists());
}

#[test]
fn test_invalid_config_file() {
    let tmp = TempDir::new().unwrap();
    write_input(tmp.path(), "input.dat", &["C"]);
    std::fs::write(tmp.path().join("config.json"), "{ not json").unwrap();

    let result = invoke(tmp.path(), &["convert", "input.dat", "--config", "config.json"]);
    assert_exit_code(&result, EXIT_INVALID_INPUT, "invalid config");
}

#[test]
fn test_missing_argument_is_usage_error() {
    let tmp = TempDir::new().unwrap();
    let result = invoke(tmp.path(), &["convert"]);
    assert_exit_code(&result, EXIT_INVALID_INPUT, "usage");
    assert!(result.stderr.contains("Usage"));
}
