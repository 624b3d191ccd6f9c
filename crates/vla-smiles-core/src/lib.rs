//! VLA-SMILES descriptor engine.
//!
//! This crate converts a batch of SMILES strings into fixed-width binary
//! strings and regroups them into integer feature matrices ("VLA-SMILES"),
//! one matrix for every group size that evenly divides the binary length.
//!
//! # Modules
//!
//! - [`encoder`]: 8-bit-per-character expansion with batch-wide zero padding
//! - [`divisors`]: divisor enumeration of the common bit length
//! - [`transform`]: regrouping of bit strings into VLA matrices
//! - [`pipeline`]: encoder → divisors → transformer orchestration
//! - [`artifacts`]: reading input batches and writing text artifacts
//! - [`config`]: configuration types
//! - [`error`]: error types and result aliases
//!
//! # Reference
//!
//! Nazarova, A.L.; Nakano, A. "VLA-SMILES: Variable-Length-Array SMILES
//! Descriptors in Neural Network-Based QSAR Modeling." Machine Learning and
//! Knowledge Extraction, 2022, 4, 715-737.
//!
//! # Example
//!
//! ```
//! use vla_smiles_core::{VlaPipeline, PipelineConfig};
//!
//! let output = VlaPipeline::new(PipelineConfig::default())
//!     .run(&["A", "AB"])
//!     .unwrap();
//!
//! // "A" is padded to 16 bits: 01000001 00000000
//! let k8 = output.matrix_for(8).unwrap();
//! assert_eq!(k8.to_text(), "65 0\n65 66\n");
//! ```

pub mod artifacts;
pub mod config;
pub mod divisors;
pub mod encoder;
pub mod error;
pub mod pipeline;
pub mod transform;

pub use artifacts::{read_batch, ArtifactWriter};
pub use config::{ArtifactConfig, PipelineConfig, VlaConfig};
pub use divisors::divisors;
pub use encoder::{encode, encode_char, EncodedBatch, BITS_PER_CHAR};
pub use error::{VlaError, VlaResult};
pub use pipeline::{VlaOutput, VlaPipeline};
pub use transform::{transform, GroupBit, VlaMatrix};
