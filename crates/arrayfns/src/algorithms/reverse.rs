//! Mirroring a matrix along one axis.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Axis along which [`reverse_axis`] mirrors a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Reverse along the first dimension: each column is flipped top to bottom.
    Rows,

    /// Reverse along the second dimension: each row is flipped left to right.
    Columns,
}

impl Axis {
    /// Axis for a host selector, `0` or `1`.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Rows),
            1 => Some(Self::Columns),
            _ => None,
        }
    }
}

/// Copy of the `rows x cols` matrix `x` mirrored along `axis`.
pub fn reverse_axis<T: Copy>(x: &[T], rows: usize, cols: usize, axis: Axis) -> Vec<T> {
    let mut out = Vec::with_capacity(rows * cols);
    if cols == 0 {
        return out;
    }

    match axis {
        Axis::Rows => {
            for row in x.chunks_exact(cols).rev() {
                out.extend_from_slice(row);
            }
        }
        Axis::Columns => {
            for row in x.chunks_exact(cols) {
                out.extend(row.iter().rev().copied());
            }
        }
    }

    out
}
