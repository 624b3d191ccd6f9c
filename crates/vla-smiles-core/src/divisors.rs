//! Divisor enumeration for the common bit-string length.

use crate::error::{VlaError, VlaResult};

/// All positive divisors of `length` in ascending order.
///
/// Always contains `1` and `length`. Pairs `(i, length / i)` are collected up
/// to `√length`, so enumeration is `O(√L)`.
///
/// # Errors
///
/// [`VlaError::InvalidLength`] if `length` is zero.
///
/// # Example
///
/// ```
/// use vla_smiles_core::divisors;
///
/// assert_eq!(divisors(16).unwrap(), vec![1, 2, 4, 8, 16]);
/// ```
pub fn divisors(length: usize) -> VlaResult<Vec<usize>> {
    if length == 0 {
        return Err(VlaError::InvalidLength(length));
    }

    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut i = 1usize;
    while i <= length / i {
        if length % i == 0 {
            low.push(i);
            let pair = length / i;
            if pair != i {
                high.push(pair);
            }
        }
        i += 1;
    }
    low.extend(high.into_iter().rev());

    tracing::trace!(length, count = low.len(), "Enumerated divisors");
    Ok(low)
}
