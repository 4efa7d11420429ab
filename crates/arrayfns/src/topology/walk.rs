//! Ordering the cut edges of a cell into polygons.
//!
//! ## Purpose
//!
//! When an iso-surface slices a polyhedral cell, the cut points on the cut
//! edges are the vertices of one or more polygons. To draw them, the cut
//! edges must be visited in boundary order. This module walks a cell's cut
//! edges face by face and assigns each a rank in that order.
//!
//! ## Design notes
//!
//! * **Local state**: The walk consumes an [`EdgeMask`] passed by exclusive
//!   reference; nothing is shared between calls.
//! * **Fixed preference**: Leaving a face, the walk tries the edge across
//!   the face first, then the two others, in a fixed order. This makes two
//!   crossing cut pairs on a quadrilateral face form an X rather than two
//!   parallel strokes, and keeps the output reproducible bit for bit.
//!
//! ## Key concepts
//!
//! ### The walk
//! 1. Start at the lowest cut edge, on that edge's start face.
//! 2. Record the edge's rank and clear it from the mask.
//! 3. On the current face's ring, find the current edge's position `p` and
//!    try positions `p + 2`, `p + 1`, `p + 3` (mod ring length).
//! 4. If none is still cut, the polygon is closed: bump `split` and restart
//!    at the lowest remaining cut edge.
//! 5. Move to the next edge's other face and repeat.
//!
//! ### Splits
//! Edges of the `s`-th disjoint polygon get `s * edge_count` added to their
//! rank, so ranks of different polygons fall in disjoint ranges.
//!
//! ## Invariants
//!
//! * The mask is empty when the walk returns, including any bits past the
//!   cell's edge count.
//! * Ranks of cut edges, taken modulo the edge count, are `0..count`.
//! * Uncut edges have rank 0.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::topology::cells::{CellType, MAX_EDGES};
use crate::topology::mask::EdgeMask;

/// Rank of every edge of a cell in drawing order.
pub type EdgeRanks = [i32; MAX_EDGES];

// ============================================================================
// Walk
// ============================================================================

/// Position on `ring` of the entry closest in index to `edge`.
///
/// `edge` lies on the ring, so this is its own position.
#[inline]
fn ring_position(ring: &[usize], edge: usize) -> usize {
    let mut now = 0;
    for j in 1..ring.len() {
        if ring[now].abs_diff(edge) > ring[j].abs_diff(edge) {
            now = j;
        }
    }
    now
}

/// Next cut edge on `face` after leaving `edge`, in preference order.
#[inline]
fn next_on_face(cell: CellType, face: usize, edge: usize, mask: EdgeMask) -> Option<usize> {
    let ring = cell.topology().face_edges[face];
    let len = ring.len();
    let now = ring_position(ring, edge) + 1;

    [(now + 1) % len, now % len, (now + 2) % len]
        .into_iter()
        .map(|p| ring[p])
        .find(|&e| mask.contains(e))
}

/// Rank the cut edges in `mask` in polygon drawing order, clearing `mask`.
///
/// Edges the cell does not have are ignored.
pub fn walk(mask: &mut EdgeMask, cell: CellType) -> EdgeRanks {
    let topo = cell.topology();
    let ne = cell.edge_count();
    mask.truncate(ne);
    let mut ranks: EdgeRanks = [0; MAX_EDGES];
    let mut splits = [0i32; MAX_EDGES];

    let count = mask.count();
    let Some(mut edge) = mask.first() else {
        return ranks;
    };

    let mut split = 0;
    let mut face = topo.start_face[edge];

    for rank in 0..count - 1 {
        ranks[edge] = rank as i32;
        splits[edge] = split;
        mask.remove(edge);

        edge = match next_on_face(cell, face, edge, *mask) {
            Some(next) => next,
            None => {
                split += 1;
                log::trace!("{cell}: polygon closed after {} edges, split {split}", rank + 1);
                match mask.first() {
                    Some(next) => next,
                    None => break,
                }
            }
        };

        let [a, b] = topo.edge_faces[edge];
        face = if face == a { b } else { a };
        log::trace!("{cell}: edge {edge} on face {face}");
    }

    ranks[edge] = count as i32 - 1;
    splits[edge] = split;
    mask.remove(edge);
    debug_assert!(mask.is_empty());

    if split != 0 {
        for (r, s) in ranks.iter_mut().zip(&splits).take(ne) {
            *r += ne as i32 * s;
        }
    }

    ranks
}

// ============================================================================
// Batch
// ============================================================================

/// Walk every `ne`-long row of the flattened `mask` and write the ranks by
/// column into an `ne x rows` buffer.
pub fn permutation_table(mask: &[i32], cell: CellType) -> Vec<i32> {
    let ne = cell.edge_count();
    let rows = if ne == 0 { 0 } else { mask.len() / ne };
    let mut permute = vec![0; ne * rows];

    for (row, flags) in mask.chunks_exact(ne).enumerate() {
        let mut bits = EdgeMask::from_flags(flags);
        let ranks = walk(&mut bits, cell);
        for (e, &r) in ranks.iter().take(ne).enumerate() {
            permute[e * rows + row] = r;
        }
    }

    permute
}
