//! Vertex sign patterns of a cell type.
//!
//! Row `r` of the pattern grid describes the sign combination whose binary
//! number is `r + 1`: vertex `v` is on the negative side when bit `v` is set.
//! The all-positive and all-negative combinations cut no edge and are left
//! out, which is why a cell with `V` vertices has `2^V - 2` rows.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::topology::cells::CellType;

/// Whether vertex `v` is negative in pattern row `row`.
#[inline]
pub fn is_below(row: usize, v: usize) -> bool {
    (row + 1) & (1 << v) != 0
}

/// The `patterns x V` 0/1 grid of all mixed sign patterns, flattened.
pub fn sign_patterns(cell: CellType) -> Vec<i32> {
    let nv = cell.vertex_count();
    (0..cell.pattern_count())
        .flat_map(|row| (0..nv).map(move |v| is_below(row, v) as i32))
        .collect()
}
