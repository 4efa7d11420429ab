//! Order utilities: extreme-element scans and bisection.
//!
//! ## Purpose
//!
//! Leaf routines shared by the kernels. Scatter assignment locates the
//! smallest and largest subscript once per call, and interpolation locates
//! the segment containing each query point by bisection.
//!
//! ## Invariants
//!
//! * `min_index`/`max_index` return the first position of the extreme value.
//! * `binary_search` assumes ascending input and returns the index of the
//!   largest element `<= value`, or `None` when `value` is below the first
//!   element.

// External dependencies
use core::cmp::Ordering;

/// Position of the first smallest element, or `None` for an empty slice.
pub fn min_index<T: PartialOrd>(values: &[T]) -> Option<usize> {
    let first = values.first()?;
    let mut best = (0, first);
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v < *best.1 {
            best = (i, v);
        }
    }
    Some(best.0)
}

/// Position of the first largest element, or `None` for an empty slice.
pub fn max_index<T: PartialOrd>(values: &[T]) -> Option<usize> {
    let first = values.first()?;
    let mut best = (0, first);
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > *best.1 {
            best = (i, v);
        }
    }
    Some(best.0)
}

/// Index of the largest element of the ascending slice `sorted` that is
/// `<= value`.
///
/// Returns `None` when `value` is below `sorted[0]` (or `sorted` is empty).
/// An exact hit returns its position directly, so with duplicate keys the
/// result may be any of the equal positions bisection lands on first.
pub fn binary_search<T: PartialOrd>(value: T, sorted: &[T]) -> Option<usize> {
    let first = sorted.first()?;
    if value < *first {
        return None;
    }

    let mut bottom: isize = 0;
    let mut top: isize = sorted.len() as isize - 1;

    while bottom < top {
        let middle = (top + bottom) / 2;
        match sorted[middle as usize].partial_cmp(&value) {
            Some(Ordering::Less) => bottom = middle + 1,
            Some(Ordering::Greater) => top = middle - 1,
            _ => return Some(middle as usize),
        }
    }

    // bottom may have overshot by one past an element greater than value
    if sorted[bottom as usize] > value {
        (bottom as usize).checked_sub(1)
    } else {
        Some(bottom as usize)
    }
}
