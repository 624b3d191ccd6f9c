//! VLA-SMILES error types.
//!
//! This module defines the error taxonomy for the encoding pipeline: batch
//! encoding failures, internal precondition violations between the encoder,
//! divisor enumerator and transformer, and the I/O collaborator's file errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while encoding or regrouping a batch.
#[derive(Debug, Error)]
pub enum VlaError {
    /// The raw batch has no entries, so the common length is undefined.
    #[error("Empty batch: at least one SMILES string is required")]
    EmptyBatch,

    /// A character's code point does not fit in 8 bits.
    #[error("Character {character:?} (U+{code_point:04X}) at row {row}, position {position} cannot be encoded in 8 bits")]
    EncodingRange {
        /// Row index within the batch
        row: usize,
        /// Character index within the row
        position: usize,
        /// The offending character
        character: char,
        /// Its Unicode code point
        code_point: u32,
    },

    /// Sequence length must be a positive integer.
    #[error("Invalid sequence length {0}: must be > 0")]
    InvalidLength(usize),

    /// Group size does not evenly divide the sequence length.
    #[error("Group size {group_size} does not divide sequence length {sequence_length}")]
    GroupSizeMismatch {
        /// Requested group size k
        group_size: usize,
        /// Common bit-string length L
        sequence_length: usize,
    },

    /// Encoded rows do not share a common length.
    #[error("Ragged batch: row {row} has length {actual}, expected {expected}")]
    RaggedBatch {
        /// Row index
        row: usize,
        /// Length of row 0
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Character outside the bit alphabet.
    #[error("Invalid bit {found:?} at row {row}, position {position}")]
    InvalidBit {
        /// Row index
        row: usize,
        /// Bit position within the row
        position: usize,
        /// The offending character
        found: char,
    },

    /// Input file does not exist.
    #[error("The file {} was not found.", .path.display())]
    InputNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Input file exists but could not be read.
    #[error("Failed to read {}: {reason}", .path.display())]
    InputRead {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error message
        reason: String,
    },

    /// An output artifact could not be written.
    #[error("Failed to write artifact {}: {reason}", .path.display())]
    ArtifactWrite {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error message
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for VLA-SMILES operations.
pub type VlaResult<T> = Result<T, VlaError>;

impl From<serde_json::Error> for VlaError {
    fn from(err: serde_json::Error) -> Self {
        VlaError::SerializationError(err.to_string())
    }
}

impl VlaError {
    /// Create an artifact write error from an I/O error.
    pub fn artifact_write(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        VlaError::ArtifactWrite {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Check if this error is an internal precondition violation.
    ///
    /// These are unreachable when encoder, enumerator and transformer are
    /// composed correctly, and indicate a programming error rather than bad
    /// user input.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            VlaError::InvalidLength(_)
                | VlaError::GroupSizeMismatch { .. }
                | VlaError::RaggedBatch { .. }
                | VlaError::InvalidBit { .. }
        )
    }

    /// Check if this error was caused by the input batch itself.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            VlaError::EmptyBatch
                | VlaError::EncodingRange { .. }
                | VlaError::InputNotFound { .. }
                | VlaError::InputRead { .. }
        )
    }
}
