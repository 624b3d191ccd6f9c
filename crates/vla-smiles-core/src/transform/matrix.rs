//! VLA matrix type.

use std::fmt::{self, Write as _};
use std::io::{self, Write as _};

use ndarray::Array2;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Integer feature matrix for one group size k.
///
/// Shape is `N × (L / k)`. Cells are arbitrary-precision so that group sizes
/// above 64 bits are represented exactly; every cell is `< 2^k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VlaMatrix {
    group_size: usize,
    cells: Array2<BigUint>,
}

impl VlaMatrix {
    /// Zero-initialized matrix with `rows × cols` cells.
    pub fn zeros(group_size: usize, rows: usize, cols: usize) -> Self {
        Self {
            group_size,
            cells: Array2::from_elem((rows, cols), BigUint::zero()),
        }
    }

    /// Group size k this matrix was computed for.
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        self.cells.dim()
    }

    pub fn nrows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.cells.ncols()
    }

    /// Cell `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&BigUint> {
        self.cells.get((row, col))
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: BigUint) {
        self.cells[[row, col]] = value;
    }

    /// Underlying array.
    pub fn cells(&self) -> &Array2<BigUint> {
        &self.cells
    }

    /// Narrow every cell to `u64`.
    ///
    /// Returns `None` if any cell does not fit, which can only happen for
    /// group sizes above 64.
    pub fn to_u64(&self) -> Option<Array2<u64>> {
        let values = self
            .cells
            .iter()
            .map(ToPrimitive::to_u64)
            .collect::<Option<Vec<u64>>>()?;
        Array2::from_shape_vec(self.cells.dim(), values).ok()
    }

    /// Write the matrix as text: one row per line, cells separated by a single
    /// space.
    pub fn write_text<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }

    /// Text form of the matrix, as written by [`write_text`](Self::write_text).
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VlaMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{}", cell)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
