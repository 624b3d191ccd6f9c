//! Integration test helpers for spawning the CLI binary.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT_MISSING: i32 = 1;
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Result of a CLI invocation
#[derive(Debug)]
pub struct CliResult {
    /// Exit code from the process
    pub exit_code: i32,
    /// Captured stdout
    pub stdout: String,
    /// Captured stderr
    pub stderr: String,
}

impl CliResult {
    /// Parse stdout as JSON Value
    pub fn parse_stdout(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.stdout)
    }
}

fn cli_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_vla-smiles"))
}

/// Run the CLI with `args` from working directory `cwd`.
pub fn invoke(cwd: &Path, args: &[&str]) -> CliResult {
    let output = Command::new(cli_binary())
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to spawn vla-smiles");

    CliResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Write an input batch into `dir` and return its path.
pub fn write_input(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = lines.join("\n");
    contents.push('\n');
    std::fs::write(&path, contents).expect("Failed to write input");
    path
}

/// Assert the exit code, printing captured output on mismatch.
pub fn assert_exit_code(result: &CliResult, expected: i32, context: &str) {
    assert_eq!(
        result.exit_code, expected,
        "{}: expected exit {}, got {}\nstdout: {}\nstderr: {}",
        context, expected, result.exit_code, result.stdout, result.stderr
    );
}
