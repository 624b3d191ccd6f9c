//! CLI exit code handling.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input file missing (informative, non-fatal)
//! - 2: Invalid input batch or configuration
//! - 3: Internal failure (precondition violation or artifact write failure)

use std::process::ExitCode;

use tracing::{error, info};
use vla_smiles_core::VlaError;

/// Exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    /// All artifacts produced
    Success = 0,
    /// Input file not found; nothing was processed
    Warning = 1,
    /// The batch or configuration was rejected
    InvalidInput = 2,
    /// Programming error or I/O failure while writing
    Failure = 3,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

impl From<&VlaError> for CliExitCode {
    fn from(err: &VlaError) -> Self {
        match err {
            VlaError::InputNotFound { .. } => CliExitCode::Warning,

            VlaError::EmptyBatch
            | VlaError::EncodingRange { .. }
            | VlaError::InputRead { .. }
            | VlaError::ConfigError(_)
            | VlaError::SerializationError(_) => CliExitCode::InvalidInput,

            VlaError::InvalidLength(_)
            | VlaError::GroupSizeMismatch { .. }
            | VlaError::RaggedBatch { .. }
            | VlaError::InvalidBit { .. }
            | VlaError::ArtifactWrite { .. } => CliExitCode::Failure,
        }
    }
}

/// Report `err` on stderr and return the matching exit code.
pub fn report_error(err: &VlaError) -> CliExitCode {
    let code = CliExitCode::from(err);
    // A missing input is reported once through the `Error:` line below.
    match code {
        CliExitCode::Warning => info!("{}", err),
        _ => error!(precondition = err.is_precondition_violation(), "{}", err),
    }
    eprintln!("Error: {}", err);
    code
}
