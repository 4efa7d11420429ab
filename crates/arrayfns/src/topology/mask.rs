//! Edge-cut masks.
//!
//! ## Purpose
//!
//! An iso-surface cuts a cell edge exactly when the edge's two endpoints lie
//! on opposite sides of it. Given a 0/1 flag per vertex (1 = negative side),
//! XOR-ing together the incidence rows of the flagged vertices leaves a 1 on
//! precisely those edges with one flagged and one unflagged endpoint.
//!
//! ## Key concepts
//!
//! * **Flat mask**: [`xor_incidence`] produces one `ne`-long 0/1 row per cell
//!   for whole batches of cells.
//! * **Bit set**: [`EdgeMask`] holds one cell's cut edges as bits; the
//!   permutation walk consumes it edge by edge.
//!
//! ## Invariants
//!
//! * Vertex flags are 0 or 1.
//! * An [`EdgeMask`] never holds bits at or above [`MAX_EDGES`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::errors::ArrayError;
use crate::topology::cells::{CellType, MAX_EDGES};

// ============================================================================
// Edge Mask
// ============================================================================

/// Set of edges of one cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EdgeMask(u16);

impl EdgeMask {
    /// The empty set.
    pub const EMPTY: EdgeMask = EdgeMask(0);

    /// Set of the edges whose entry in `flags` is non-zero.
    ///
    /// Entries past [`MAX_EDGES`] are ignored.
    pub fn from_flags(flags: &[i32]) -> Self {
        let bits = flags
            .iter()
            .take(MAX_EDGES)
            .enumerate()
            .filter(|&(_, &f)| f != 0)
            .fold(0u16, |acc, (e, _)| acc | (1 << e));
        Self(bits)
    }

    /// Raw bits, edge `e` at bit `e`.
    #[inline]
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Whether `edge` is in the set.
    #[inline]
    pub fn contains(self, edge: usize) -> bool {
        edge < MAX_EDGES && self.0 & (1 << edge) != 0
    }

    /// Add `edge`.
    #[inline]
    pub fn insert(&mut self, edge: usize) {
        debug_assert!(edge < MAX_EDGES);
        self.0 |= 1 << edge;
    }

    /// Remove `edge`.
    #[inline]
    pub fn remove(&mut self, edge: usize) {
        debug_assert!(edge < MAX_EDGES);
        self.0 &= !(1 << edge);
    }

    /// Lowest edge in the set.
    #[inline]
    pub fn first(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    /// Number of edges in the set.
    #[inline]
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Drop every edge at or past `ne`.
    #[inline]
    pub fn truncate(&mut self, ne: usize) {
        if ne < MAX_EDGES {
            self.0 &= (1u16 << ne) - 1;
        }
    }

    /// Edges in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..MAX_EDGES).filter(move |&e| self.contains(e))
    }

    /// The set as an `ne`-long 0/1 row.
    pub fn to_flags(self, ne: usize) -> Vec<i32> {
        (0..ne).map(|e| self.contains(e) as i32).collect()
    }
}

impl Debug for EdgeMask {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.iter()).finish()
    }
}

// ============================================================================
// Mask Construction
// ============================================================================

/// XOR the incidence rows of flagged vertices, cell by cell.
///
/// `fs` is `ntotal x nv`, `node_edges` is `nv x ne`; the result is
/// `ntotal x ne`, flattened. Cells without vertices cut nothing.
pub fn xor_incidence(
    fs: &[i32],
    node_edges: &[i32],
    ntotal: usize,
    nv: usize,
    ne: usize,
) -> Vec<i32> {
    let mut mask = vec![0; ntotal * ne];
    if nv == 0 || ne == 0 {
        return mask;
    }

    for (flags, out) in fs.chunks_exact(nv).zip(mask.chunks_exact_mut(ne)) {
        for (v, _) in flags.iter().enumerate().filter(|&(_, &f)| f != 0) {
            let incidence = &node_edges[v * ne..(v + 1) * ne];
            for (m, &bit) in out.iter_mut().zip(incidence) {
                *m ^= bit;
            }
        }
    }

    mask
}

/// Edges of `cell` whose endpoints disagree in `below`.
///
/// `below[v]` is `true` when vertex `v` lies on the negative side; there must
/// be one flag per vertex.
pub fn cut_edges(cell: CellType, below: &[bool]) -> Result<EdgeMask, ArrayError> {
    if below.len() != cell.vertex_count() {
        return Err(ArrayError::LengthMismatch {
            operation: "cut_edges",
            expected: cell.vertex_count(),
            got: below.len(),
        });
    }

    let mut mask = EdgeMask::EMPTY;
    for edge in 0..cell.edge_count() {
        let (lo, hi) = cell.edge_vertices(edge);
        if below[lo] != below[hi] {
            mask.insert(edge);
        }
    }
    Ok(mask)
}
