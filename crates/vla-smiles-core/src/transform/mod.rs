//! VLA transformer: regroup equal-length bit strings into integer matrices.
//!
//! For a group size `k` dividing the common length `L`, each row is split into
//! `L / k` consecutive groups of `k` bits and each group is reduced to its
//! unsigned positional value `Σ bits[i] · 2^(k - i - 1)`.
//!
//! # Zero groups
//!
//! A group whose raw value is zero keeps the matrix default of 0 and is not
//! reduced further. With the current encoder this covers both genuine
//! all-zero data groups and groups made entirely of padding; the two are
//! indistinguishable in the output. Use
//! [`EncodedBatch::group_is_padding`](crate::EncodedBatch::group_is_padding)
//! when the distinction matters.
//!
//! # Unknown bits
//!
//! Rows may carry the `'2'` symbol ([`GroupBit::Unknown`]). An unknown bit
//! makes the raw group value non-zero, and is rewritten to `0` before the
//! stored value is recomputed. The binary encoder never emits it.

mod bits;
mod matrix;


pub use self::bits::{parse_row, GroupBit};
pub use self::matrix::VlaMatrix;

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::trace;

use crate::error::{VlaError, VlaResult};

/// Regroup `encoded` rows into a VLA matrix with group size `k`.
///
/// # Errors
///
/// - [`VlaError::EmptyBatch`] if `encoded` has no rows
/// - [`VlaError::InvalidBit`] if a row contains a symbol other than `0`, `1`, `2`
/// - [`VlaError::RaggedBatch`] if rows differ in length
/// - [`VlaError::InvalidLength`] if rows are empty
/// - [`VlaError::GroupSizeMismatch`] if `k` is zero or does not divide `L`
///
/// # Example
///
/// ```
/// use vla_smiles_core::transform;
/// use num_bigint::BigUint;
///
/// let m = transform(&["0100000100000000", "0100000101000010"], 8).unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.get(0, 0), Some(&BigUint::from(65u32)));
/// assert_eq!(m.get(1, 1), Some(&BigUint::from(66u32)));
/// ```
pub fn transform<S: AsRef<str>>(encoded: &[S], k: usize) -> VlaResult<VlaMatrix> {
    if encoded.is_empty() {
        return Err(VlaError::EmptyBatch);
    }

    let rows = encoded
        .iter()
        .enumerate()
        .map(|(row, bits)| parse_row(row, bits.as_ref()))
        .collect::<VlaResult<Vec<_>>>()?;

    let sequence_length = rows[0].len();
    if let Some((row, actual)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != sequence_length)
    {
        return Err(VlaError::RaggedBatch {
            row,
            expected: sequence_length,
            actual,
        });
    }
    if sequence_length == 0 {
        return Err(VlaError::InvalidLength(0));
    }
    if k == 0 || sequence_length % k != 0 {
        return Err(VlaError::GroupSizeMismatch {
            group_size: k,
            sequence_length,
        });
    }

    let groups = sequence_length / k;
    let mut matrix = VlaMatrix::zeros(k, rows.len(), groups);
    for (i, row) in rows.iter().enumerate() {
        for (j, group) in row.chunks_exact(k).enumerate() {
            if let Some(value) = reduce_group(group) {
                matrix.set(i, j, value);
            }
        }
    }

    trace!(k, rows = rows.len(), groups, "Transformed batch");
    Ok(matrix)
}

/// Reduce one group, or `None` when its raw value is zero.
///
/// Raw digits are non-negative, so the raw value is zero exactly when every
/// bit is [`GroupBit::Zero`].
fn reduce_group(group: &[GroupBit]) -> Option<BigUint> {
    if group.iter().all(|&bit| bit == GroupBit::Zero) {
        return None;
    }
    let value = positional_value(group.iter().map(|bit| bit.resolved().value()), group.len());
    Some(value)
}

/// `Σ digits[i] · 2^(len - i - 1)` for binary digits.
fn positional_value(digits: impl Iterator<Item = u8>, len: usize) -> BigUint {
    if len <= u64::BITS as usize {
        BigUint::from(digits.fold(0u64, |acc, d| (acc << 1) | u64::from(d)))
    } else {
        digits.fold(BigUint::zero(), |acc, d| (acc << 1u32) + d)
    }
}
