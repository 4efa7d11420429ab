//! Owned kernel results.
//!
//! ## Purpose
//!
//! This module defines [`Array`], the owned row-major buffer with a shape
//! that kernels return, and [`Interpolated`], the precision-tagged result of
//! linear interpolation.
//!
//! ## Design notes
//!
//! * **Ownership**: Results are fresh buffers, never aliases of an input.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `array.as_slice().len() == array.shape().size()`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::algorithms::interpolation::Precision;
use crate::engine::validator::Validator;
use crate::primitives::errors::ArrayError;
use crate::primitives::shape::{ArrayView, Shape};

// ============================================================================
// Array
// ============================================================================

/// Owned row-major buffer with a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Array<T> {
    data: Vec<T>,
    shape: Shape,
}

impl<T> Array<T> {
    /// Pair `data` with `shape`; the lengths must agree.
    pub fn new(data: Vec<T>, shape: Shape) -> Result<Self, ArrayError> {
        Validator::validate_buffer_len("array", &shape, data.len())?;
        Ok(Self { data, shape })
    }

    /// One-dimensional array over the whole vector.
    pub fn from_vec(data: Vec<T>) -> Self {
        let shape = Shape::vector(data.len());
        Self { data, shape }
    }

    /// Two-dimensional array. Callers guarantee `data.len() == rows * cols`.
    pub(crate) fn from_matrix(data: Vec<T>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self {
            data,
            shape: Shape::matrix(rows, cols),
        }
    }

    /// Same elements under another shape of equal size.
    pub(crate) fn with_shape(data: Vec<T>, shape: Shape) -> Self {
        debug_assert_eq!(data.len(), shape.size());
        Self { data, shape }
    }

    /// The elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the array and return its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// The shape.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow as a view.
    pub fn view(&self) -> ArrayView<'_, T> {
        ArrayView::from_parts(&self.data, self.shape)
    }

    /// Element at a multi-dimensional index, or `None` when out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        let dims = self.shape.dims();
        if index.len() != dims.len() {
            return None;
        }
        let mut flat = 0;
        for (&i, &d) in index.iter().zip(dims) {
            if i >= d {
                return None;
            }
            flat = flat * d + i;
        }
        self.data.get(flat)
    }

    /// Row `r` of a 2-D array.
    pub fn row(&self, r: usize) -> Option<&[T]> {
        if self.ndim() != 2 || r >= self.shape.dim(0) {
            return None;
        }
        let w = self.shape.dim(1);
        Some(&self.data[r * w..(r + 1) * w])
    }
}

impl<T: Display> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Array {}:", self.shape)?;

        let width = if self.ndim() == 2 {
            self.shape.dim(1)
        } else {
            self.shape.size()
        };
        if width == 0 {
            return writeln!(f, "  []");
        }

        for row in self.data.chunks(width) {
            write!(f, "  [")?;
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

// ============================================================================
// Interpolation Result
// ============================================================================

/// Interpolated values at the precision the caller asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpolated {
    /// Single precision.
    Single(Array<f32>),

    /// Double precision.
    Double(Array<f64>),
}

impl Interpolated {
    /// Precision of the values.
    pub fn precision(&self) -> Precision {
        match self {
            Self::Single(_) => Precision::Single,
            Self::Double(_) => Precision::Double,
        }
    }

    /// Shape of the values; always the shape of the queries.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Single(a) => a.shape(),
            Self::Double(a) => a.shape(),
        }
    }

    /// Single-precision values, if that is the precision.
    pub fn as_single(&self) -> Option<&Array<f32>> {
        match self {
            Self::Single(a) => Some(a),
            Self::Double(_) => None,
        }
    }

    /// Double-precision values, if that is the precision.
    pub fn as_double(&self) -> Option<&Array<f64>> {
        match self {
            Self::Double(a) => Some(a),
            Self::Single(_) => None,
        }
    }

    /// The values widened to double precision.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Self::Single(a) => a.as_slice().iter().map(|&v| v as f64).collect(),
            Self::Double(a) => a.as_slice().to_vec(),
        }
    }
}

impl Display for Interpolated {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Interpolated ({}):", self.precision().typecode())?;
        match self {
            Self::Single(a) => write!(f, "{a}"),
            Self::Double(a) => write!(f, "{a}"),
        }
    }
}
