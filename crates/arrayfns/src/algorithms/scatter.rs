//! Scatter assignment through a subscript array.
//!
//! ## Purpose
//!
//! This module writes source rows into a target buffer at the rows named by
//! a subscript array: `target[width * subs[i] + j] = source[width * i + j]`.
//! A scalar source is broadcast to every addressed element.
//!
//! ## Design notes
//!
//! * **One generic path**: Each scalar kind shares the same loops; the
//!   target kind is fixed by the caller's dispatch and the source kind is
//!   dispatched here, once per call.
//! * **Conversion once**: A scalar source is converted to the target kind
//!   before the loop; buffer sources are converted element by element through
//!   [`Element::from_scalar`].
//! * **Unchecked core**: Subscript ranges and source lengths are validated by
//!   the engine before these routines run.
//!
//! ## Key concepts
//!
//! * **Row width**: 1 for a 1-D target, the second extent of a 2-D target.
//!   Subscripts address rows, not elements.
//!
//! ## Invariants
//!
//! * Every subscript is in `[0, target.len() / width)`.
//! * A buffer source holds at least `width * subs.len()` elements.

// Internal dependencies
use crate::primitives::buffer::{ArrayRef, Element, Scalar};
use crate::primitives::errors::ArrayError;
use crate::primitives::shape::Shape;

// ============================================================================
// Source
// ============================================================================

/// Right-hand side of a scatter assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source<'a> {
    /// A host scalar broadcast to every addressed element.
    Scalar(Scalar),

    /// A buffer of any kind, read row by row.
    Array {
        /// The elements.
        data: ArrayRef<'a>,
        /// Shape of the elements.
        shape: Shape,
    },
}

impl<'a> Source<'a> {
    /// Scalar source.
    pub fn scalar(value: impl Into<Scalar>) -> Self {
        Self::Scalar(value.into())
    }

    /// One-dimensional buffer source.
    pub fn array(data: impl Into<ArrayRef<'a>>) -> Self {
        let data = data.into();
        Self::Array {
            shape: Shape::vector(data.len()),
            data,
        }
    }

    /// Two-dimensional buffer source.
    pub fn matrix(
        data: impl Into<ArrayRef<'a>>,
        rows: usize,
        cols: usize,
    ) -> Result<Self, ArrayError> {
        let data = data.into();
        let shape = Shape::matrix(rows, cols);
        if data.len() != shape.size() {
            return Err(ArrayError::LengthMismatch {
                operation: "array_set",
                expected: shape.size(),
                got: data.len(),
            });
        }
        Ok(Self::Array { data, shape })
    }
}

// ============================================================================
// Assignment Loops
// ============================================================================

/// Broadcast `value` to every row named in `subs`.
pub fn broadcast<T: Element>(target: &mut [T], width: usize, subs: &[i32], value: T) {
    for &s in subs {
        let start = width * s as usize;
        target[start..start + width].fill(value);
    }
}

/// Copy row `i` of `source` to row `subs[i]` of `target`, converting kinds.
pub fn copy_rows<S: Element, T: Element>(
    target: &mut [T],
    width: usize,
    subs: &[i32],
    source: &[S],
) {
    if width == 0 {
        return;
    }
    for (&s, row) in subs.iter().zip(source.chunks_exact(width)) {
        let start = width * s as usize;
        for (dst, &src) in target[start..start + width].iter_mut().zip(row) {
            *dst = T::from_scalar(src.to_scalar());
        }
    }
}

/// Perform the assignment into a target of element type `T`.
pub fn assign<T: Element>(target: &mut [T], width: usize, subs: &[i32], source: &Source<'_>) {
    match *source {
        Source::Scalar(value) => broadcast(target, width, subs, T::from_scalar(value)),
        Source::Array { data, .. } => match data {
            ArrayRef::UByte(s) => copy_rows(target, width, subs, s),
            ArrayRef::Byte(s) => copy_rows(target, width, subs, s),
            ArrayRef::Short(s) => copy_rows(target, width, subs, s),
            ArrayRef::Int(s) => copy_rows(target, width, subs, s),
            ArrayRef::Long(s) => copy_rows(target, width, subs, s),
            ArrayRef::Float(s) => copy_rows(target, width, subs, s),
            ArrayRef::Double(s) => copy_rows(target, width, subs, s),
            ArrayRef::Bool(s) => copy_rows(target, width, subs, s),
        },
    }
}
