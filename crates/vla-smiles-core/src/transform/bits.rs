//! Bit alphabet for VLA group reduction.

use crate::error::{VlaError, VlaResult};

/// One symbol of an encoded row.
///
/// The binary encoder only emits `Zero` and `One`. `Unknown` (written as
/// `'2'`) marks a bit whose value is not known; it counts as non-zero when
/// deciding whether a group is empty and is resolved to `Zero` before the
/// group value is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupBit {
    /// `'0'`
    Zero,
    /// `'1'`
    One,
    /// `'2'`
    Unknown,
}

impl GroupBit {
    /// Parse a bit symbol, locating failures by `row` and `position`.
    pub fn parse(row: usize, position: usize, c: char) -> VlaResult<Self> {
        match c {
            '0' => Ok(GroupBit::Zero),
            '1' => Ok(GroupBit::One),
            '2' => Ok(GroupBit::Unknown),
            found => Err(VlaError::InvalidBit {
                row,
                position,
                found,
            }),
        }
    }

    /// Numeric value of the symbol before resolution.
    #[inline]
    pub fn value(self) -> u8 {
        match self {
            GroupBit::Zero => 0,
            GroupBit::One => 1,
            GroupBit::Unknown => 2,
        }
    }

    /// The symbol with `Unknown` rewritten to `Zero`.
    #[inline]
    pub fn resolved(self) -> Self {
        match self {
            GroupBit::Unknown => GroupBit::Zero,
            bit => bit,
        }
    }
}

/// Parse a whole row into bit symbols.
pub fn parse_row(row: usize, bits: &str) -> VlaResult<Vec<GroupBit>> {
    bits.chars()
        .enumerate()
        .map(|(position, c)| GroupBit::parse(row, position, c))
        .collect()
}
