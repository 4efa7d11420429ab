//! Layer 3: Topology
//!
//! # Purpose
//!
//! This layer holds the fixed connectivity of the polyhedral cell types and
//! the iso-surface slicing routines built on it: edge-cut masks and the walk
//! that orders cut edges into drawable polygons.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Topology ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Static cell topology tables.
pub mod cells;

/// Edge-cut masks and edge bit sets.
pub mod mask;

/// Polygon edge-order walk.
pub mod walk;

/// Vertex sign patterns.
pub mod patterns;
