#![cfg(feature = "dev")]
//! Tests for piecewise linear interpolation.
//!
//! These tests verify `interp` and its building blocks for:
//! - Values inside, at and beyond the knots
//! - Single and double precision selection by type code
//! - Query arrays of several dimensions
//! - Validation of knots and type codes
//!
//! ## Test Organization
//!
//! 1. **Evaluation** - Segment formula and clamping
//! 2. **Precision** - Type codes and result kinds
//! 3. **Shapes** - Multi-dimensional queries
//! 4. **Validation** - Error handling

use approx::assert_relative_eq;

use arrayfns::internals::algorithms::interpolation::{
    evaluate, interpolate, segment_slopes, Precision,
};
use arrayfns::internals::engine::kernels::{interp, interp_with};
use arrayfns::internals::primitives::errors::ArrayError;
use arrayfns::internals::primitives::shape::{ArrayView, Shape};

// ============================================================================
// Evaluation Tests
// ============================================================================

/// Test the reference example.
///
/// Verifies clamping below and above and interpolation inside.
#[test]
fn test_interp_reference_example() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 10.0, 20.0];
    let z = [-1.0, 0.5, 1.5, 3.0];

    let out = interpolate(&y, &x, &z);
    assert_eq!(out, vec![0.0, 5.0, 15.0, 20.0]);
}

/// Test knots map exactly to their ordinates.
#[test]
fn test_interp_at_knots() {
    let x = [0.0, 1.0, 3.0, 7.0];
    let y = [2.0, -1.0, 4.0, 0.5];

    let out = interpolate(&y, &x, &x);
    assert_eq!(out, y.to_vec());
}

/// Test uneven spacing uses each segment's own slope.
#[test]
fn test_interp_uneven_segments() {
    let x = [0.0, 1.0, 5.0];
    let y = [0.0, 2.0, 0.0];

    let out = interpolate(&y, &x, &[0.25, 2.0, 4.0]);
    assert_relative_eq!(out[0], 0.5);
    assert_relative_eq!(out[1], 1.5);
    assert_relative_eq!(out[2], 0.5);
}

/// Test a single knot is a constant function.
#[test]
fn test_interp_single_knot() {
    let out = interpolate(&[3.0], &[1.0], &[-5.0, 1.0, 9.0]);
    assert_eq!(out, vec![3.0, 3.0, 3.0]);
}

/// Test slopes and single-point evaluation.
#[test]
fn test_segment_slopes_and_evaluate() {
    let x = [0.0, 2.0, 3.0];
    let y = [1.0, 5.0, 2.0];

    let slopes = segment_slopes(&x, &y);
    assert_eq!(slopes, vec![2.0, -3.0]);

    assert_eq!(evaluate(&x, &y, &slopes, 1.0), 3.0);
    assert_eq!(evaluate(&x, &y, &slopes, 2.5), 3.5);
    assert_eq!(evaluate(&x, &y, &slopes, 3.0), 2.0);
    assert_eq!(evaluate(&x, &y, &slopes, -1.0), 1.0);
}

// ============================================================================
// Precision Tests
// ============================================================================

/// Test type code parsing.
///
/// Verifies:
/// - No code and `'d'` select double precision
/// - `'f'` selects single precision
/// - Other codes fail
#[test]
fn test_precision_from_typecode() {
    assert_eq!(Precision::from_typecode(None).unwrap(), Precision::Double);
    assert_eq!(Precision::from_typecode(Some('d')).unwrap(), Precision::Double);
    assert_eq!(Precision::from_typecode(Some('f')).unwrap(), Precision::Single);
    assert_eq!(
        Precision::from_typecode(Some('i')).unwrap_err(),
        ArrayError::UnknownTypecode('i')
    );
    assert_eq!(Precision::default(), Precision::Double);
}

/// Test double-precision results.
#[test]
fn test_interp_double() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 10.0, 20.0];
    let z = [0.5, 1.5];

    let out = interp(&y, &x, ArrayView::vector(&z), Some('d')).unwrap();
    assert_eq!(out.precision(), Precision::Double);
    assert_eq!(out.as_double().unwrap().as_slice(), &[5.0, 15.0]);
    assert!(out.as_single().is_none());
}

/// Test single-precision results.
#[test]
fn test_interp_single() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 10.0, 20.0];
    let z = [0.25, 1.75];

    let out = interp(&y, &x, ArrayView::vector(&z), Some('f')).unwrap();
    assert_eq!(out.precision(), Precision::Single);
    let values = out.as_single().unwrap().as_slice();
    assert_relative_eq!(values[0], 2.5f32);
    assert_relative_eq!(values[1], 17.5f32);
    assert_eq!(out.to_f64_vec(), vec![2.5, 17.5]);
}

/// Test generic interpolation in single precision directly.
#[test]
fn test_interp_with_f32() {
    let x = [0.0f32, 4.0];
    let y = [0.0f32, 1.0];
    let z = [1.0f32, 8.0];

    let out = interp_with(&y, &x, ArrayView::vector(&z)).unwrap();
    assert_eq!(out.as_slice(), &[0.25, 1.0]);
}

// ============================================================================
// Shape Tests
// ============================================================================

/// Test results take the shape of the queries.
#[test]
fn test_interp_preserves_query_shape() {
    let x = [0.0, 10.0];
    let y = [0.0, 1.0];
    let z: Vec<f64> = (0..24).map(|i| i as f64 * 0.5).collect();
    let shape = Shape::new(&[2, 3, 4]).unwrap();

    let out = interp(&y, &x, ArrayView::new(&z, shape).unwrap(), None).unwrap();
    assert_eq!(out.shape(), shape);

    let values = out.to_f64_vec();
    for (q, v) in z.iter().zip(&values) {
        let expected = if *q >= 10.0 { 1.0 } else { q / 10.0 };
        assert_relative_eq!(*v, expected, epsilon = 1e-12);
    }
}

/// Test six-dimensional queries.
#[test]
fn test_interp_six_dimensions() {
    let x = [0.0, 1.0];
    let y = [1.0, 3.0];
    let z = vec![0.5; 64];
    let shape = Shape::new(&[2, 2, 2, 2, 2, 2]).unwrap();

    let out = interp(&y, &x, ArrayView::new(&z, shape).unwrap(), None).unwrap();
    assert_eq!(out.shape().ndim(), 6);
    assert!(out.to_f64_vec().iter().all(|&v| v == 2.0));
}

/// Test empty queries give an empty result.
#[test]
fn test_interp_empty_queries() {
    let z: [f64; 0] = [];
    let out = interp(&[1.0], &[0.0], ArrayView::vector(&z), None).unwrap();
    assert_eq!(out.shape(), Shape::vector(0));
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test knot lengths must agree.
#[test]
fn test_interp_length_mismatch() {
    let err = interp(&[0.0, 1.0], &[0.0], ArrayView::vector(&[0.5]), None).unwrap_err();
    assert!(matches!(
        err,
        ArrayError::LengthMismatch {
            operation: "interp",
            expected: 2,
            got: 1
        }
    ));
}

/// Test knots must not be empty.
#[test]
fn test_interp_empty_knots() {
    let err = interp(&[], &[], ArrayView::vector(&[0.5]), None).unwrap_err();
    assert_eq!(
        err,
        ArrayError::EmptyInput {
            operation: "interp"
        }
    );
}

/// Test unknown type codes are rejected.
#[test]
fn test_interp_unknown_typecode() {
    let err = interp(&[0.0], &[0.0], ArrayView::vector(&[0.5]), Some('l')).unwrap_err();
    assert_eq!(err, ArrayError::UnknownTypecode('l'));
}
