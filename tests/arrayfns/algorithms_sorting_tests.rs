#![cfg(feature = "dev")]
//! Tests for the index heap sort and rank computation.
//!
//! ## Test Organization
//!
//! 1. **Index Sort** - Permutation and ordering
//! 2. **Ranks** - Inverse permutations
//! 3. **Engine Entry Points** - `index_sort` and `rank_order`

use arrayfns::internals::algorithms::sorting::{index_sort, invert_permutation};
use arrayfns::internals::engine::kernels;

// ============================================================================
// Helper Functions
// ============================================================================

fn is_permutation(p: &[usize]) -> bool {
    let mut seen = vec![false; p.len()];
    for &i in p {
        if i >= p.len() || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

fn is_sorted_by(values: &[f64], p: &[usize]) -> bool {
    p.windows(2).all(|w| values[w[0]] <= values[w[1]])
}

// ============================================================================
// Index Sort Tests
// ============================================================================

/// Test a small unsorted input.
///
/// Verifies the permutation orders the values ascending.
#[test]
fn test_index_sort_basic() {
    let v = [3.0, 1.0, 2.0];
    let p = index_sort(&v);
    assert_eq!(p, vec![1, 2, 0]);
}

/// Test trivial lengths return the identity.
#[test]
fn test_index_sort_trivial() {
    let empty: [f64; 0] = [];
    assert!(index_sort(&empty).is_empty());
    assert_eq!(index_sort(&[4.2]), vec![0]);
}

/// Test already-sorted and reversed inputs.
#[test]
fn test_index_sort_sorted_and_reversed() {
    let sorted: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let p = index_sort(&sorted);
    assert_eq!(p, (0..20).collect::<Vec<_>>());

    let reversed: Vec<f64> = sorted.iter().rev().copied().collect();
    let p = index_sort(&reversed);
    assert_eq!(p, (0..20).rev().collect::<Vec<_>>());
}

/// Test inputs with duplicates and negatives.
///
/// Verifies:
/// - Output is a permutation
/// - Indexed values are non-decreasing
#[test]
fn test_index_sort_duplicates() {
    let v = [2.0, -1.0, 2.0, 0.0, -1.0, 7.5, 0.0, 2.0];
    let p = index_sort(&v);
    assert!(is_permutation(&p));
    assert!(is_sorted_by(&v, &p));
}

/// Test a larger pseudo-random input.
#[test]
fn test_index_sort_scrambled() {
    let v: Vec<f64> = (0..257).map(|i| ((i * 7919) % 263) as f64 - 100.0).collect();
    let p = index_sort(&v);
    assert!(is_permutation(&p));
    assert!(is_sorted_by(&v, &p));
}

/// Test single-precision input.
#[test]
fn test_index_sort_f32() {
    let v = [0.5f32, -0.25, 3.0, 0.0];
    assert_eq!(index_sort(&v), vec![1, 3, 0, 2]);
}

// ============================================================================
// Rank Tests
// ============================================================================

/// Test inverting a permutation.
#[test]
fn test_invert_permutation() {
    assert_eq!(invert_permutation(&[1, 2, 0]), vec![2, 0, 1]);
    assert_eq!(invert_permutation(&[]), Vec::<usize>::new());
}

/// Test ranks place each value at its sorted position.
#[test]
fn test_rank_order() {
    let v = [30.0, 10.0, 20.0];
    assert_eq!(kernels::rank_order(&v), vec![2, 0, 1]);
}

/// Test ranks compose with the sort order to the identity.
#[test]
fn test_rank_order_inverts_index_sort() {
    let v: Vec<f64> = (0..50).map(|i| ((i * 31) % 17) as f64).collect();
    let p = kernels::index_sort(&v);
    let r = kernels::rank_order(&v);
    for (i, &pi) in p.iter().enumerate() {
        assert_eq!(r[pi], i);
    }
}
