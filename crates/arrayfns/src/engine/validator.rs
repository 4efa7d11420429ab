//! Input validation for kernel operands.
//!
//! ## Purpose
//!
//! This module collects the precondition checks every kernel runs before it
//! touches a buffer: ranks and shapes, subscript ranges, source and mask
//! lengths, supported kinds, and argument domains.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Before mutation**: Kernels run every check before their first write,
//!   so a failed call leaves caller buffers untouched.
//! * **Efficiency**: Subscripts are scanned once for their minimum and once
//!   for their maximum.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::algorithms::reverse::Axis;
use crate::primitives::buffer::ScalarKind;
use crate::primitives::errors::ArrayError;
use crate::primitives::order::{max_index, min_index};
use crate::primitives::shape::Shape;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for kernel operands.
///
/// Provides static methods that return `Result<_, ArrayError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Shapes
    // ========================================================================

    /// Validate that a shape has between `min` and `max` dimensions.
    pub fn validate_rank(
        operation: &'static str,
        shape: &Shape,
        min: usize,
        max: usize,
    ) -> Result<(), ArrayError> {
        let got = shape.ndim();
        if got < min || got > max {
            return Err(ArrayError::InvalidRank {
                operation,
                min,
                max,
                got,
            });
        }
        Ok(())
    }

    /// Validate that a shape is 2-D and return `(rows, cols)`.
    pub fn validate_matrix(
        operation: &'static str,
        shape: &Shape,
    ) -> Result<(usize, usize), ArrayError> {
        Self::validate_rank(operation, shape, 2, 2)?;
        Ok((shape.dim(0), shape.dim(1)))
    }

    /// Validate that a buffer holds the number of elements its shape names.
    pub fn validate_buffer_len(
        operation: &'static str,
        shape: &Shape,
        len: usize,
    ) -> Result<(), ArrayError> {
        Self::validate_same_length(operation, shape.size(), len)
    }

    /// Validate that two lengths are equal.
    pub fn validate_same_length(
        operation: &'static str,
        expected: usize,
        got: usize,
    ) -> Result<(), ArrayError> {
        if expected != got {
            return Err(ArrayError::LengthMismatch {
                operation,
                expected,
                got,
            });
        }
        Ok(())
    }

    /// Validate that two cooperating dimensions are equal.
    pub fn validate_same_dim(
        operation: &'static str,
        left: usize,
        right: usize,
    ) -> Result<(), ArrayError> {
        if left != right {
            return Err(ArrayError::DimensionMismatch {
                operation,
                left,
                right,
            });
        }
        Ok(())
    }

    /// Validate that two 2-D shapes are identical.
    pub fn validate_same_shape(
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Result<(), ArrayError> {
        if left != right {
            return Err(ArrayError::ShapeMismatch {
                operation,
                left,
                right,
            });
        }
        Ok(())
    }

    /// Validate that an input is not empty.
    pub fn validate_not_empty(operation: &'static str, len: usize) -> Result<(), ArrayError> {
        if len == 0 {
            return Err(ArrayError::EmptyInput { operation });
        }
        Ok(())
    }

    // ========================================================================
    // Scatter Assignment
    // ========================================================================

    /// Validate that no subscript is negative.
    pub fn validate_nonnegative_subscripts(subscripts: &[i32]) -> Result<(), ArrayError> {
        if let Some(mn) = min_index(subscripts) {
            if subscripts[mn] < 0 {
                return Err(ArrayError::NegativeSubscript {
                    position: mn,
                    value: subscripts[mn] as i64,
                });
            }
        }
        Ok(())
    }

    /// Validate that every subscript addresses a whole row of the target.
    ///
    /// Subscripts must already be non-negative.
    pub fn validate_subscript_range(
        subscripts: &[i32],
        width: usize,
        size: usize,
    ) -> Result<(), ArrayError> {
        if width == 0 {
            return Ok(());
        }
        let rows = size / width;
        if let Some(mx) = max_index(subscripts) {
            if subscripts[mx] as usize >= rows {
                return Err(ArrayError::SubscriptOutOfRange {
                    value: subscripts[mx] as i64,
                    limit: rows,
                });
            }
        }
        Ok(())
    }

    /// Validate that a buffer source supplies `need` elements.
    pub fn validate_source_len(got: usize, need: usize) -> Result<(), ArrayError> {
        if got < need {
            return Err(ArrayError::SourceTooShort { got, need });
        }
        Ok(())
    }

    /// Validate that scatter assignment is implemented for a target kind.
    pub fn validate_scatter_kind(kind: ScalarKind) -> Result<(), ArrayError> {
        match kind {
            ScalarKind::UByte
            | ScalarKind::Byte
            | ScalarKind::Int
            | ScalarKind::Long
            | ScalarKind::Float
            | ScalarKind::Double => Ok(()),
            ScalarKind::Short | ScalarKind::Bool => Err(ArrayError::UnsupportedKind {
                operation: "array_set",
                kind,
            }),
        }
    }

    // ========================================================================
    // Argument Domains
    // ========================================================================

    /// Validate an axis selector.
    pub fn validate_axis(axis: i64) -> Result<Axis, ArrayError> {
        Axis::from_index(axis).ok_or(ArrayError::InvalidAxis(axis))
    }

    /// Validate that every flag is 0 or 1.
    pub fn validate_binary_flags(
        operation: &'static str,
        flags: &[i32],
    ) -> Result<(), ArrayError> {
        if let Some((i, v)) = flags.iter().enumerate().find(|&(_, &v)| v != 0 && v != 1) {
            return Err(ArrayError::InvalidInput(format!(
                "{}: flag [{}]={} is not 0 or 1",
                operation, i, v
            )));
        }
        Ok(())
    }

    /// Validate per-cell vertex counts against their declared total.
    pub fn validate_counts(counts: &[i32], total: usize) -> Result<(), ArrayError> {
        let mut sum: u64 = 0;
        for (i, &n) in counts.iter().enumerate() {
            if n < 0 {
                return Err(ArrayError::InvalidInput(format!(
                    "to_corners: nv[{}]={} is negative",
                    i, n
                )));
            }
            sum += n as u64;
        }
        if sum != total as u64 {
            return Err(ArrayError::LengthMismatch {
                operation: "to_corners",
                expected: total,
                got: sum as usize,
            });
        }
        Ok(())
    }

    /// Validate the length of a flattened permutation mask.
    pub fn validate_mask_len(got: usize, expected: usize) -> Result<(), ArrayError> {
        if got != expected {
            return Err(ArrayError::MaskLengthMismatch { got, expected });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ArrayError> {
        if let Some(param) = duplicate_param {
            return Err(ArrayError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
