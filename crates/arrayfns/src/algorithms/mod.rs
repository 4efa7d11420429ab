//! Layer 2: Algorithms
//!
//! This layer implements the core loops of the buffer kernels: index sort,
//! scatter assignment, interpolation, region bounds, axis reversal, and
//! cell-value expansion. Inputs are assumed validated; the engine layer
//! checks shapes and ranges before calling in.

// Heap sort over indices.
pub mod sorting;

// Scatter assignment through subscripts.
pub mod scatter;

// Piecewise linear interpolation.
pub mod interpolation;

// Min/max over a tagged mesh region.
pub mod region;

// Axis reversal of matrices.
pub mod reverse;

// Cell-to-corner value expansion.
pub mod expand;
