//! # arrayfns — Array kernels for plotting and mesh slicing
//!
//! Small, allocation-light kernels over flat row-major numeric buffers: the
//! pieces a plotting front end needs when its host arrays are too slow to
//! loop over element by element.
//!
//! ## What is in the box?
//!
//! * **Indexed assignment**: `array_set` writes rows (or a broadcast scalar)
//!   through a subscript array, converting between eight scalar kinds.
//! * **Ordering**: `index_sort` (heap sort over indices), `rank_order`,
//!   `binary_search`, `min_index` and `max_index`.
//! * **Interpolation**: `interp`, piecewise linear, single or double
//!   precision, over queries of up to six dimensions.
//! * **Mesh kernels**: `zmin_zmax` over a tagged region, `reverse` along an
//!   axis, `to_corners` cell-to-vertex expansion.
//! * **Iso-surface slicing**: `find_mask` edge-cut masks, `walk` and
//!   `construct3` polygon edge orders, and the static topology of the
//!   tetrahedron, pyramid, prism and hexahedron.
//!
//! ## Quick Start
//!
//! ### Interpolation
//!
//! ```rust
//! use arrayfns::prelude::*;
//!
//! let x = [0.0, 1.0, 2.0];
//! let y = [0.0, 10.0, 20.0];
//! let z = [-1.0, 0.5, 1.5, 3.0];
//!
//! let result = interp(&y, &x, ArrayView::vector(&z), None)?;
//! assert_eq!(result.to_f64_vec(), vec![0.0, 5.0, 15.0, 20.0]);
//! # Result::<(), ArrayError>::Ok(())
//! ```
//!
//! ### Indexed assignment
//!
//! ```rust
//! use arrayfns::prelude::*;
//!
//! let mut target = [0.0_f64; 5];
//! array_set(
//!     ArrayMut::from(&mut target[..]),
//!     Shape::vector(5),
//!     &[1, 3],
//!     Source::scalar(7.0),
//! )?;
//! assert_eq!(target, [0.0, 7.0, 0.0, 7.0, 0.0]);
//! # Result::<(), ArrayError>::Ok(())
//! ```
//!
//! ### Slicing a cell
//!
//! ```rust
//! use arrayfns::prelude::*;
//!
//! // Vertex 0 of a tetrahedron is below the iso-value: three edges are cut.
//! let cell = CellType::Tetrahedron;
//! let mut mask = cut_edges(cell, &[true, false, false, false])?;
//! assert_eq!(mask.count(), 3);
//!
//! let ranks = walk(&mut mask, cell);
//! assert!(mask.is_empty());
//! let mut cut: Vec<i32> = ranks[..3].to_vec();
//! cut.sort();
//! assert_eq!(cut, vec![0, 1, 2]);
//! # Result::<(), ArrayError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every validated kernel returns `Result<_, ArrayError>`. Validation runs
//! before any write, so a failed call leaves caller buffers untouched:
//!
//! ```rust
//! use arrayfns::prelude::*;
//!
//! let mut target = [0_i32; 5];
//! let err = array_set(
//!     ArrayMut::from(&mut target[..]),
//!     Shape::vector(5),
//!     &[10],
//!     Source::scalar(1),
//! )
//! .unwrap_err();
//!
//! assert_eq!(err.kind(), ErrorKind::RangeViolation);
//! assert_eq!(target, [0; 5]);
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! arrayfns = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Kernels report operand sizes through the [`log`](https://docs.rs/log)
//! facade at `debug` level, and the polygon walk traces its steps at `trace`
//! level. Install any `log` backend to see them.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - scalar kinds, shapes, errors and scans.
mod primitives;

// Layer 2: Algorithms - unchecked kernel loops.
mod algorithms;

// Layer 3: Topology - cell tables, edge masks and the polygon walk.
mod topology;

// Layer 4: Engine - validation, dispatch and results.
mod engine;

// High-level API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        array_set, binary_search, construct3, cut_edges, find_mask, index_sort, interp,
        interp_with, max_index, min_index, node_edges, poly_permutations, rank_order, reverse,
        sign_patterns, to_corners, walk, zmin_zmax, Array, ArrayError, ArrayMut, ArrayRef,
        ArrayView, Axis, CellType, EdgeMask, EdgeRanks, Element, ErrorKind, InterpBuilder,
        Interpolated, Interpolator, Precision, Scalar, ScalarKind, Shape, Source, MAX_DIMS,
        MAX_EDGES, MAX_VERTICES,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod topology {
        pub use crate::topology::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
