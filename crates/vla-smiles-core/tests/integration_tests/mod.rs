//! Integration tests for the VLA-SMILES pipeline.
//!
//! These tests exercise the public API end to end with real SMILES batches:
//! - Encoding length and padding properties
//! - Divisor enumeration exactness
//! - Matrix shapes, cell bounds and the zero-group policy
//! - Artifact files and run idempotence

mod encoding_tests;
mod matrix_tests;
mod artifact_tests;
