//! High-level API for the array kernels.
//!
//! ## Purpose
//!
//! This module is the user-facing surface of the crate. It re-exports the
//! validated kernels and their operand types, and provides a fluent builder
//! for configuring interpolation precision once and reusing it.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Kernels are free functions over slices and views; the
//!   builder only exists for the one kernel with a configuration knob.
//! * **Validated**: Builder parameters are validated when `.build()` is
//!   called, including parameters set more than once.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`InterpBuilder`] via `InterpBuilder::new()`.
//! 2. Optionally choose a precision (`.typecode('f')` or `.precision(..)`).
//! 3. Call `.build()` to get an [`Interpolator`], then `.apply(..)` it.

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::interpolation::Precision;
pub use crate::algorithms::reverse::Axis;
pub use crate::algorithms::scatter::Source;
pub use crate::engine::kernels::{
    array_set, construct3, find_mask, index_sort, interp, interp_with, node_edges,
    poly_permutations, rank_order, reverse, sign_patterns, to_corners, zmin_zmax,
};
pub use crate::engine::output::{Array, Interpolated};
pub use crate::primitives::buffer::{ArrayMut, ArrayRef, Element, Scalar, ScalarKind};
pub use crate::primitives::errors::{ArrayError, ErrorKind};
pub use crate::primitives::order::{binary_search, max_index, min_index};
pub use crate::primitives::shape::{ArrayView, Shape, MAX_DIMS};
pub use crate::topology::cells::{CellType, MAX_EDGES, MAX_VERTICES};
pub use crate::topology::mask::{cut_edges, EdgeMask};
pub use crate::topology::walk::{walk, EdgeRanks};

// ============================================================================
// Interpolation Builder
// ============================================================================

/// Fluent builder for a reusable interpolation configuration.
#[derive(Debug, Clone, Default)]
pub struct InterpBuilder {
    /// Host type code of the result precision; `None` means double.
    pub typecode: Option<char>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl InterpBuilder {
    /// Create a builder with default (double) precision.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the result precision by host type code (`'f'` or `'d'`).
    pub fn typecode(mut self, code: char) -> Self {
        if self.typecode.is_some() {
            self.duplicate_param = Some("typecode");
        }
        self.typecode = Some(code);
        self
    }

    /// Set the result precision.
    pub fn precision(self, precision: Precision) -> Self {
        self.typecode(precision.typecode())
    }

    /// Validate the configuration.
    pub fn build(self) -> Result<Interpolator, ArrayError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let precision = Precision::from_typecode(self.typecode)?;
        Ok(Interpolator { precision })
    }
}

/// Validated interpolation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpolator {
    precision: Precision,
}

impl Interpolator {
    /// Precision the results are computed in.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Interpolate the piecewise linear function through `(x, y)` at `z`.
    pub fn apply(
        &self,
        y: &[f64],
        x: &[f64],
        z: ArrayView<'_, f64>,
    ) -> Result<Interpolated, ArrayError> {
        interp(y, x, z, Some(self.precision.typecode()))
    }
}
