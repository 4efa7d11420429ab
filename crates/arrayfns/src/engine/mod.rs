//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer turns the unchecked loops of the lower layers into safe,
//! host-callable kernels. It validates operand shapes, kinds and ranges,
//! dispatches on scalar kind and precision, and packages results.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Topology
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validated kernel entry points.
pub mod kernels;

/// Validation utilities.
pub mod validator;

/// Output types for kernel results.
pub mod output;
