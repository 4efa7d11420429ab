//! Piecewise linear interpolation.
//!
//! ## Purpose
//!
//! This module evaluates the piecewise linear function through the points
//! `(x[i], y[i])` at arbitrary query abscissae, holding the end ordinates
//! constant outside `[x[0], x[n-1]]`.
//!
//! ## Design notes
//!
//! * **Slopes once**: Segment slopes are computed once per call and reused for
//!   every query.
//! * **Bisection**: Each query locates its segment with
//!   [`binary_search`](crate::primitives::order::binary_search).
//! * **Generics**: Generic over `Float`, so the same code serves single and
//!   double precision.
//!
//! ## Key concepts
//!
//! * **Below range**: `q < x[0]` yields `y[0]`.
//! * **At or past the last knot**: a located index `>= n-1` yields `y[n-1]`.
//! * **Inside**: `slope[i] * (q - x[i]) + y[i]`.
//!
//! ## Invariants
//!
//! * `x` is ascending; `x` and `y` have the same non-zero length.
//! * The output has exactly one value per query.
//!
//! ## Non-goals
//!
//! * This module does not sort `x` or validate its monotonicity.
//! * This module does not provide higher-order interpolation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ArrayError;
use crate::primitives::order::binary_search;

// ============================================================================
// Precision
// ============================================================================

/// Floating precision of an interpolation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// 32-bit float (type code `'f'`).
    Single,

    /// 64-bit double (type code `'d'`).
    #[default]
    Double,
}

impl Precision {
    /// Parse a host type code. `None` selects the default, double precision.
    pub fn from_typecode(code: Option<char>) -> Result<Self, ArrayError> {
        match code {
            None | Some('d') => Ok(Self::Double),
            Some('f') => Ok(Self::Single),
            Some(other) => Err(ArrayError::UnknownTypecode(other)),
        }
    }

    /// The host type code.
    pub fn typecode(self) -> char {
        match self {
            Self::Single => 'f',
            Self::Double => 'd',
        }
    }
}

// ============================================================================
// Linear Interpolation
// ============================================================================

/// Slope of each of the `n - 1` segments.
///
/// Coincident abscissae give non-finite slopes; those segments can only be
/// selected by a query equal to the repeated knot.
pub fn segment_slopes<T: Float>(x: &[T], y: &[T]) -> Vec<T> {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (ys[1] - ys[0]) / (xs[1] - xs[0]))
        .collect()
}

/// Evaluate the piecewise linear function through `(x, y)` at `q`.
#[inline]
pub fn evaluate<T: Float>(x: &[T], y: &[T], slopes: &[T], q: T) -> T {
    let last = y.len() - 1;
    match binary_search(q, x) {
        None => y[0],
        Some(left) if left >= last => y[last],
        Some(left) => slopes[left] * (q - x[left]) + y[left],
    }
}

/// Interpolate every query in `z`.
pub fn interpolate<T: Float>(y: &[T], x: &[T], z: &[T]) -> Vec<T> {
    let slopes = segment_slopes(x, y);
    z.iter().map(|&q| evaluate(x, y, &slopes, q)).collect()
}
