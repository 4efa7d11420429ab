//! Shapes and borrowed array views.
//!
//! ## Purpose
//!
//! Kernels receive flat, row-major buffers together with shape metadata.
//! [`Shape`] stores up to [`MAX_DIMS`] extents inline, and [`ArrayView`] pairs
//! a borrowed slice with a shape that is checked against the slice length at
//! construction.
//!
//! ## Invariants
//!
//! * A shape has between 1 and [`MAX_DIMS`] dimensions.
//! * `view.as_slice().len() == view.shape().size()` for every view.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::errors::ArrayError;

/// Maximum number of dimensions of a query array.
pub const MAX_DIMS: usize = 6;

// ============================================================================
// Shape
// ============================================================================

/// Row-major shape of a flat buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: [usize; MAX_DIMS],
    ndim: usize,
}

impl Shape {
    /// Build a shape from its extents.
    pub fn new(dims: &[usize]) -> Result<Self, ArrayError> {
        if dims.is_empty() {
            return Err(ArrayError::InvalidRank {
                operation: "shape",
                min: 1,
                max: MAX_DIMS,
                got: 0,
            });
        }
        if dims.len() > MAX_DIMS {
            return Err(ArrayError::TooManyDimensions {
                got: dims.len(),
                max: MAX_DIMS,
            });
        }

        let mut stored = [0; MAX_DIMS];
        stored[..dims.len()].copy_from_slice(dims);
        Ok(Self {
            dims: stored,
            ndim: dims.len(),
        })
    }

    /// One-dimensional shape.
    pub fn vector(len: usize) -> Self {
        let mut dims = [0; MAX_DIMS];
        dims[0] = len;
        Self { dims, ndim: 1 }
    }

    /// Two-dimensional shape.
    pub fn matrix(rows: usize, cols: usize) -> Self {
        let mut dims = [0; MAX_DIMS];
        dims[0] = rows;
        dims[1] = cols;
        Self { dims, ndim: 2 }
    }

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// The extents.
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims[..self.ndim]
    }

    /// Extent along `axis`, or 0 past the last dimension.
    #[inline]
    pub fn dim(&self, axis: usize) -> usize {
        if axis < self.ndim {
            self.dims[axis]
        } else {
            0
        }
    }

    /// Total number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.dims().iter().product()
    }

    /// Width of one row: the second extent of a 2-D shape, otherwise 1.
    #[inline]
    pub fn row_width(&self) -> usize {
        if self.ndim == 2 {
            self.dims[1]
        } else {
            1
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "(")?;
        for (i, d) in self.dims().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        if self.ndim == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

// ============================================================================
// Borrowed View
// ============================================================================

/// Borrowed row-major buffer with a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayView<'a, T> {
    data: &'a [T],
    shape: Shape,
}

impl<'a, T> ArrayView<'a, T> {
    /// Pair `data` with `shape`; the lengths must agree.
    pub fn new(data: &'a [T], shape: Shape) -> Result<Self, ArrayError> {
        if data.len() != shape.size() {
            return Err(ArrayError::LengthMismatch {
                operation: "view",
                expected: shape.size(),
                got: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Pair `data` with a shape the caller knows to match.
    pub(crate) fn from_parts(data: &'a [T], shape: Shape) -> Self {
        debug_assert_eq!(data.len(), shape.size());
        Self { data, shape }
    }

    /// One-dimensional view over the whole slice.
    pub fn vector(data: &'a [T]) -> Self {
        Self {
            data,
            shape: Shape::vector(data.len()),
        }
    }

    /// Two-dimensional view.
    pub fn matrix(data: &'a [T], rows: usize, cols: usize) -> Result<Self, ArrayError> {
        Self::new(data, Shape::matrix(rows, cols))
    }

    /// The underlying elements.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
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

    /// Whether the view holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
