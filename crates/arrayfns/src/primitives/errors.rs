//! Error types for array kernel operations.
//!
//! ## Purpose
//!
//! This module defines every failure a kernel can report: operand shapes that
//! disagree, subscripts outside the target, sources or masks that are too
//! short, scalar kinds a kernel does not implement, reductions with nothing
//! to reduce, and output buffers that could not be allocated.
//!
//! ## Design notes
//!
//! * **Contextual**: Variants carry the offending values (actual vs. expected).
//! * **Atomic**: Errors are raised before any caller buffer is written.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Classified**: [`ArrayError::kind`] maps each variant onto a coarse [`ErrorKind`].
//!
//! ## Invariants
//!
//! * Every variant names the operation or value needed to diagnose it.
//! * Error messages are prefixed with the failing operation where one applies.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retries.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::buffer::ScalarKind;

// ============================================================================
// Error Classification
// ============================================================================

/// Coarse classification of [`ArrayError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operand shapes or ranks disagree.
    ShapeMismatch,

    /// A subscript is negative or past the end of the target.
    RangeViolation,

    /// A source or mask buffer holds the wrong number of elements.
    LengthViolation,

    /// The scalar kind or type code is not implemented for the operation.
    UnsupportedKind,

    /// No element satisfied the inclusion predicate of a reduction.
    EmptyResult,

    /// The output buffer could not be allocated.
    AllocationFailure,

    /// An argument is outside its accepted domain.
    InvalidArgument,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for array kernel operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayError {
    /// Input buffers are empty where at least one element is required.
    EmptyInput {
        /// Name of the operation.
        operation: &'static str,
    },

    /// Generic invalid input with a descriptive message.
    InvalidInput(String),

    /// An operand has an unsupported number of dimensions.
    InvalidRank {
        /// Name of the operation.
        operation: &'static str,
        /// Smallest accepted rank.
        min: usize,
        /// Largest accepted rank.
        max: usize,
        /// Rank that was supplied.
        got: usize,
    },

    /// A shape was requested with more dimensions than supported.
    TooManyDimensions {
        /// Number of dimensions requested.
        got: usize,
        /// Maximum number of dimensions.
        max: usize,
    },

    /// Two cooperating dimensions must be equal.
    DimensionMismatch {
        /// Name of the operation.
        operation: &'static str,
        /// Dimension of the first operand.
        left: usize,
        /// Dimension of the second operand.
        right: usize,
    },

    /// Two 2-D operands must have identical shapes.
    ShapeMismatch {
        /// Name of the operation.
        operation: &'static str,
        /// Shape of the first operand (rows, columns).
        left: (usize, usize),
        /// Shape of the second operand (rows, columns).
        right: (usize, usize),
    },

    /// Two buffers must hold the same number of elements.
    LengthMismatch {
        /// Name of the operation.
        operation: &'static str,
        /// Expected number of elements.
        expected: usize,
        /// Number of elements supplied.
        got: usize,
    },

    /// A subscript is negative.
    NegativeSubscript {
        /// Position of the subscript in the subscript array.
        position: usize,
        /// The offending subscript.
        value: i64,
    },

    /// A subscript addresses past the end of the target.
    SubscriptOutOfRange {
        /// The offending subscript.
        value: i64,
        /// Number of addressable rows in the target.
        limit: usize,
    },

    /// A source buffer is too short for the number of subscripts.
    SourceTooShort {
        /// Number of elements supplied.
        got: usize,
        /// Number of elements required.
        need: usize,
    },

    /// A flattened permutation mask does not match the cell type.
    MaskLengthMismatch {
        /// Number of mask entries supplied.
        got: usize,
        /// Edge count times pattern count of the cell type.
        expected: usize,
    },

    /// The operation is not implemented for this scalar kind.
    UnsupportedKind {
        /// Name of the operation.
        operation: &'static str,
        /// The rejected kind.
        kind: ScalarKind,
    },

    /// A precision type code other than `'f'` or `'d'`.
    UnknownTypecode(char),

    /// An axis selector other than 0 or 1.
    InvalidAxis(i64),

    /// A cell type code other than 0 through 3.
    InvalidCellType(i64),

    /// No cell of the region qualified for the reduction.
    EmptyRegion,

    /// The output buffer could not be reserved.
    AllocationFailed {
        /// Number of elements requested.
        requested: usize,
    },

    /// Parameter was set multiple times in a builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl ArrayError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRank { .. }
            | Self::TooManyDimensions { .. }
            | Self::DimensionMismatch { .. }
            | Self::ShapeMismatch { .. }
            | Self::LengthMismatch { .. } => ErrorKind::ShapeMismatch,
            Self::NegativeSubscript { .. } | Self::SubscriptOutOfRange { .. } => {
                ErrorKind::RangeViolation
            }
            Self::SourceTooShort { .. } | Self::MaskLengthMismatch { .. } => {
                ErrorKind::LengthViolation
            }
            Self::UnsupportedKind { .. } | Self::UnknownTypecode(_) => ErrorKind::UnsupportedKind,
            Self::EmptyRegion => ErrorKind::EmptyResult,
            Self::AllocationFailed { .. } => ErrorKind::AllocationFailure,
            Self::EmptyInput { .. }
            | Self::InvalidInput(_)
            | Self::InvalidAxis(_)
            | Self::InvalidCellType(_)
            | Self::DuplicateParameter { .. } => ErrorKind::InvalidArgument,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ArrayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput { operation } => write!(f, "{operation}: input arrays are empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidRank {
                operation,
                min,
                max,
                got,
            } => {
                if min == max {
                    write!(f, "{operation}: expected {min} dimensions, got {got}")
                } else {
                    write!(
                        f,
                        "{operation}: expected between {min} and {max} dimensions, got {got}"
                    )
                }
            }
            Self::TooManyDimensions { got, max } => {
                write!(f, "Too many dimensions: {got} (at most {max} supported)")
            }
            Self::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(f, "{operation}: dimension mismatch ({left} vs {right})"),
            Self::ShapeMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "{operation}: shapes ({}, {}) and ({}, {}) differ",
                left.0, left.1, right.0, right.1
            ),
            Self::LengthMismatch {
                operation,
                expected,
                got,
            } => write!(
                f,
                "{operation}: length mismatch, expected {expected} elements, got {got}"
            ),
            Self::NegativeSubscript { position, value } => {
                write!(f, "array_set: negative subscript {value} at position {position}")
            }
            Self::SubscriptOutOfRange { value, limit } => write!(
                f,
                "array_set: subscript {value} is out of range (target has {limit} rows)"
            ),
            Self::SourceTooShort { got, need } => write!(
                f,
                "array_set: source is too short for number of subscripts ({got} < {need})"
            ),
            Self::MaskLengthMismatch { got, expected } => write!(
                f,
                "construct3: permute and mask must have same number of elements ({got} vs {expected})"
            ),
            Self::UnsupportedKind { operation, kind } => {
                write!(f, "{operation}: not implemented for type {kind}")
            }
            Self::UnknownTypecode(code) => write!(f, "interp: unimplemented typecode '{code}'"),
            Self::InvalidAxis(axis) => write!(f, "reverse: axis must be 0 or 1, got {axis}"),
            Self::InvalidCellType(code) => {
                write!(f, "Invalid cell type code: {code} (must be in [0, 3])")
            }
            Self::EmptyRegion => write!(f, "zmin_zmax: unable to calculate zmin and zmax"),
            Self::AllocationFailed { requested } => {
                write!(f, "Unable to allocate result array of {requested} elements")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ArrayError {}
