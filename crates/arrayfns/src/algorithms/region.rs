//! Value bounds over a tagged region of a structured mesh.
//!
//! ## Purpose
//!
//! A 2-D mesh carries a region-tag grid `ireg` alongside its values `z`. By
//! convention the first row and column of `ireg` are zero and a zero tag
//! excludes a zone. This module finds the smallest and largest `z` on the
//! nodes touched by included zones.
//!
//! ## Key concepts
//!
//! A node `(i, j)` counts when its own tag is non-zero, or, for nodes off the
//! last row and last column, when any of the tags at `(i+1, j)`, `(i, j+1)`,
//! `(i+1, j+1)` is non-zero.
//!
//! ## Invariants
//!
//! * `z.len() == ireg.len() == rows * cols`.
//! * Nodes on the last row or last column are included only by their own tag.

// External dependencies
use num_traits::Float;

/// Whether node `k = i * cols + j` borders an included zone.
#[inline]
fn touches_region(ireg: &[i32], rows: usize, cols: usize, i: usize, j: usize) -> bool {
    let k = i * cols + j;
    if ireg[k] != 0 {
        return true;
    }
    i + 1 != rows
        && j + 1 != cols
        && (ireg[k + cols] != 0 || ireg[k + 1] != 0 || ireg[k + cols + 1] != 0)
}

/// Smallest and largest `z` over the nodes touched by the tagged region.
///
/// Returns `None` when no node qualifies.
pub fn region_bounds<T: Float>(z: &[T], ireg: &[i32], rows: usize, cols: usize) -> Option<(T, T)> {
    let mut bounds: Option<(T, T)> = None;

    for i in 0..rows {
        for j in 0..cols {
            if !touches_region(ireg, rows, cols, i, j) {
                continue;
            }
            let v = z[i * cols + j];
            bounds = Some(match bounds {
                None => (v, v),
                Some((lo, hi)) if v < lo => (v, hi),
                Some((lo, hi)) if v > hi => (lo, v),
                Some(b) => b,
            });
        }
    }

    bounds
}
