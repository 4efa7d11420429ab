//! Expanding cell-centered values to cell corners.
//!
//! ## Purpose
//!
//! Unstructured meshes store one value per cell but draw per vertex. This
//! module repeats each cell's value once for every vertex of that cell, in
//! cell order, producing a node-centered buffer.
//!
//! ## Invariants
//!
//! * `values.len() == counts.len()`, every count is non-negative, and the
//!   counts sum to `total`.
//! * The output has exactly `total` elements.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::ArrayError;

/// Repeat `values[i]` `counts[i]` times, consecutively.
///
/// Fails with [`ArrayError::AllocationFailed`] when `total` elements cannot
/// be reserved.
pub fn repeat_by_counts<T: Copy>(
    values: &[T],
    counts: &[i32],
    total: usize,
) -> Result<Vec<T>, ArrayError> {
    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| ArrayError::AllocationFailed { requested: total })?;

    for (&v, &n) in values.iter().zip(counts) {
        out.extend(core::iter::repeat(v).take(n.max(0) as usize));
    }

    Ok(out)
}
