//! Index sorting by heap sort.
//!
//! ## Purpose
//!
//! This module computes the permutation that sorts a buffer without moving
//! the buffer itself. Callers use it to visit values in ascending order or to
//! reorder parallel buffers consistently.
//!
//! ## Design notes
//!
//! * **Worst case**: Heap sort keeps O(n log n) on every input, where a
//!   partitioning sort degrades to O(n^2) on adversarial orderings.
//! * **Not stable**: Equal keys may come out in any relative order.
//! * **Read-only input**: Only the index list is permuted.
//!
//! ## Key concepts
//!
//! ### Heap over indices
//! 1. **Build**: Sift every internal node down so the value under each parent
//!    index is at least the values under its children.
//! 2. **Drain**: Swap the root index to the end of the active range, shrink
//!    the range, and sift the new root down.
//!
//! ## Invariants
//!
//! * The result is a permutation of `0..n`.
//! * `values[result[i]] <= values[result[i + 1]]` for finite inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Heap Maintenance
// ============================================================================

/// Restore the heap property for the subtree rooted at `list[root]`.
///
/// Both child subtrees must already be heaps. Only positions `< n` take part.
#[inline]
fn sift_down<T: Float>(keys: &[T], list: &mut [usize], root: usize, n: usize) {
    let moving = list[root];
    let key = keys[moving];
    let mut hole = root;
    let mut child = 2 * root + 1;

    while child < n {
        // point at the larger child
        if child + 1 < n && keys[list[child]] < keys[list[child + 1]] {
            child += 1;
        }

        if key >= keys[list[child]] {
            break;
        }

        list[hole] = list[child];
        hole = child;
        child = 2 * child + 1;
    }

    list[hole] = moving;
}

// ============================================================================
// Index Sort
// ============================================================================

/// Return the indices of `values` arranged so the values are non-decreasing.
pub fn index_sort<T: Float>(values: &[T]) -> Vec<usize> {
    let n = values.len();
    let mut list: Vec<usize> = (0..n).collect();
    if n < 2 {
        return list;
    }

    for root in (0..=n / 2).rev() {
        sift_down(values, &mut list, root, n);
    }

    for end in (1..n).rev() {
        list.swap(0, end);
        sift_down(values, &mut list, 0, end);
    }

    list
}

/// Invert a permutation: `result[perm[i]] = i`.
///
/// Used to turn a sort order into per-element ranks.
pub fn invert_permutation(perm: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; perm.len()];
    for (i, &p) in perm.iter().enumerate() {
        inverse[p] = i;
    }
    inverse
}
