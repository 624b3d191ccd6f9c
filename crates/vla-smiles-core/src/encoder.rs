//! Binary encoder: SMILES strings to equal-length bit strings.
//!
//! Every character expands to its 8-bit big-endian code point. Rows shorter
//! than the longest row in the batch are right-padded with `'0'` so that all
//! rows share the common length `L = 8 × max(character length)`.

use tracing::debug;

use crate::error::{VlaError, VlaResult};

/// Bits emitted per input character.
pub const BITS_PER_CHAR: usize = 8;

/// A batch of equal-length bit strings produced by [`encode`].
///
/// Each row keeps track of how many of its bits are data and how many are
/// padding, so callers can tell an all-padding group from a genuine all-zero
/// group. The VLA matrices themselves do not make that distinction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBatch {
    rows: Vec<String>,
    content_bits: Vec<usize>,
    sequence_length: usize,
}

impl EncodedBatch {
    /// Encoded rows, all of length [`sequence_length`](Self::sequence_length).
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows (N).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a batch produced by [`encode`].
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Common bit length L of every row.
    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    /// Number of unpadded data bits in `row`, or `None` if out of range.
    pub fn content_bits(&self, row: usize) -> Option<usize> {
        self.content_bits.get(row).copied()
    }

    /// Whether group `group` of size `k` in `row` lies entirely in padding.
    ///
    /// Returns false for out-of-range rows or groups.
    pub fn group_is_padding(&self, row: usize, group: usize, k: usize) -> bool {
        let Some(content) = self.content_bits(row) else {
            return false;
        };
        let start = group.saturating_mul(k);
        k > 0 && start >= content && start < self.sequence_length
    }

    /// Newline-joined rows, one per line, each terminated by `'\n'`.
    pub fn to_artifact(&self) -> String {
        let mut out = String::with_capacity(self.rows.len() * (self.sequence_length + 1));
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }

    /// Consume the batch and return the rows.
    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }
}

/// Expand one character into its 8-bit big-endian binary form.
///
/// `row` and `position` are only used to locate the character in the error.
pub fn encode_char(row: usize, position: usize, c: char) -> VlaResult<String> {
    let code_point = u32::from(c);
    let byte = u8::try_from(code_point).map_err(|_| VlaError::EncodingRange {
        row,
        position,
        character: c,
        code_point,
    })?;
    Ok(format!("{:08b}", byte))
}

/// Encode a batch of raw strings into equal-length bit strings.
///
/// # Errors
///
/// - [`VlaError::EmptyBatch`] if `raw` is empty or holds only empty strings
/// - [`VlaError::EncodingRange`] if any character is above U+00FF
///
/// # Example
///
/// ```
/// use vla_smiles_core::encode;
///
/// let batch = encode(&["A", "AB"]).unwrap();
/// assert_eq!(batch.sequence_length(), 16);
/// assert_eq!(batch.rows()[0], "0100000100000000");
/// assert_eq!(batch.rows()[1], "0100000101000010");
/// ```
pub fn encode<S: AsRef<str>>(raw: &[S]) -> VlaResult<EncodedBatch> {
    if raw.is_empty() {
        return Err(VlaError::EmptyBatch);
    }

    let max_chars = raw
        .iter()
        .map(|s| s.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    if max_chars == 0 {
        // Only empty lines: no bits to regroup.
        return Err(VlaError::EmptyBatch);
    }
    let sequence_length = max_chars * BITS_PER_CHAR;

    let mut rows = Vec::with_capacity(raw.len());
    let mut content_bits = Vec::with_capacity(raw.len());
    for (row, s) in raw.iter().enumerate() {
        let mut bits = String::with_capacity(sequence_length);
        for (position, c) in s.as_ref().chars().enumerate() {
            bits.push_str(&encode_char(row, position, c)?);
        }
        content_bits.push(bits.len());
        let padding = sequence_length - bits.len();
        bits.extend(std::iter::repeat('0').take(padding));
        rows.push(bits);
    }

    debug!(
        rows = rows.len(),
        sequence_length, "Encoded batch to binary"
    );

    Ok(EncodedBatch {
        rows,
        content_bits,
        sequence_length,
    })
}
