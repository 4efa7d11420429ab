#![cfg(feature = "dev")]
//! Tests for the cell topology tables, sign patterns and edge-cut masks.
//!
//! These tests verify:
//! - Counts and codes of the four cell types
//! - Internal consistency of every topology table
//! - Sign pattern enumeration
//! - `find_mask` against direct endpoint comparison
//!
//! ## Test Organization
//!
//! 1. **Cell Types** - Codes and counts
//! 2. **Table Consistency** - Faces, edges and incidence agree
//! 3. **Sign Patterns** - Enumeration order and exclusions
//! 4. **Edge-Cut Masks** - `find_mask`, `cut_edges` and `EdgeMask`

use arrayfns::internals::engine::kernels::{find_mask, node_edges, sign_patterns};
use arrayfns::internals::primitives::errors::{ArrayError, ErrorKind};
use arrayfns::internals::primitives::shape::{ArrayView, Shape};
use arrayfns::internals::topology::cells::{CellType, MAX_EDGES, MAX_VERTICES};
use arrayfns::internals::topology::mask::{cut_edges, xor_incidence, EdgeMask};
use arrayfns::internals::topology::patterns::is_below;

// ============================================================================
// Cell Type Tests
// ============================================================================

/// Test vertex, edge, face and pattern counts.
///
/// Verifies:
/// - Counts match the four polyhedra
/// - Every cell satisfies Euler's formula `V - E + F = 2`
#[test]
fn test_cell_counts() {
    let expected = [
        (CellType::Tetrahedron, 4, 6, 4, 14),
        (CellType::Pyramid, 5, 8, 5, 30),
        (CellType::Prism, 6, 9, 5, 62),
        (CellType::Hexahedron, 8, 12, 6, 254),
    ];

    for (cell, v, e, f, p) in expected {
        assert_eq!(cell.vertex_count(), v, "{cell}");
        assert_eq!(cell.edge_count(), e, "{cell}");
        assert_eq!(cell.face_count(), f, "{cell}");
        assert_eq!(cell.pattern_count(), p, "{cell}");
        assert_eq!(p, (1 << v) - 2);
        assert_eq!(v as i64 - e as i64 + f as i64, 2, "{cell}");
        assert!(v <= MAX_VERTICES && e <= MAX_EDGES);
    }
}

/// Test host codes round-trip and invalid codes fail.
#[test]
fn test_cell_codes() {
    for (i, cell) in CellType::ALL.iter().enumerate() {
        assert_eq!(cell.code(), i);
        assert_eq!(CellType::from_code(i as i64).unwrap(), *cell);
    }
    assert_eq!(
        CellType::from_code(4).unwrap_err(),
        ArrayError::InvalidCellType(4)
    );
    assert!(CellType::from_code(-1).is_err());
}

/// Test cell type names.
#[test]
fn test_cell_display() {
    assert_eq!(CellType::Tetrahedron.to_string(), "tetrahedron");
    assert_eq!(CellType::Hexahedron.to_string(), "hexahedron");
}

// ============================================================================
// Table Consistency Tests
// ============================================================================

/// Test every edge lies on both of its faces and on its start face.
#[test]
fn test_edge_faces_contain_edge() {
    for cell in CellType::ALL {
        let topo = cell.topology();
        for e in 0..cell.edge_count() {
            let [a, b] = topo.edge_faces[e];
            assert_ne!(a, b, "{cell} edge {e}");
            assert!(topo.face_edges[a].contains(&e), "{cell} edge {e}");
            assert!(topo.face_edges[b].contains(&e), "{cell} edge {e}");
            assert!(
                topo.edge_faces[e].contains(&topo.start_face[e]),
                "{cell} edge {e}"
            );
        }
    }
}

/// Test every face edge lists that face among its two faces.
#[test]
fn test_face_edges_match_edge_faces() {
    for cell in CellType::ALL {
        let topo = cell.topology();
        let mut incidences = 0;
        for f in 0..cell.face_count() {
            assert_eq!(cell.face_len(f), topo.face_edges[f].len());
            for &e in topo.face_edges[f] {
                assert!(topo.edge_faces[e].contains(&f), "{cell} face {f}");
                incidences += 1;
            }
        }
        assert_eq!(incidences, 2 * cell.edge_count(), "{cell}");
    }
}

/// Test consecutive edges of a face ring share a vertex.
///
/// Verifies the rings are in boundary order, which the polygon walk relies on.
#[test]
fn test_face_rings_are_cycles() {
    for cell in CellType::ALL {
        for (f, ring) in cell.topology().face_edges.iter().enumerate() {
            for i in 0..ring.len() {
                let (a0, a1) = cell.edge_vertices(ring[i]);
                let (b0, b1) = cell.edge_vertices(ring[(i + 1) % ring.len()]);
                let shared = [a0, a1].iter().filter(|v| **v == b0 || **v == b1).count();
                assert_eq!(shared, 1, "{cell} face {f} position {i}");
            }
        }
    }
}

/// Test the incidence grid marks exactly each edge's two endpoints.
#[test]
fn test_node_edges_match_endpoints() {
    for cell in CellType::ALL {
        let grid = node_edges(cell);
        assert_eq!(
            grid.shape().dims(),
            &[cell.vertex_count(), cell.edge_count()]
        );

        for e in 0..cell.edge_count() {
            let (lo, hi) = cell.edge_vertices(e);
            assert!(lo < hi, "{cell} edge {e}");
            for v in 0..cell.vertex_count() {
                let expected = (v == lo || v == hi) as i32;
                assert_eq!(*grid.get(&[v, e]).unwrap(), expected, "{cell} ({v}, {e})");
            }
        }
    }
}

/// Test no two edges join the same pair of vertices.
#[test]
fn test_edges_are_distinct() {
    for cell in CellType::ALL {
        let mut pairs: Vec<(usize, usize)> =
            (0..cell.edge_count()).map(|e| cell.edge_vertices(e)).collect();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), cell.edge_count(), "{cell}");
    }
}

// ============================================================================
// Sign Pattern Tests
// ============================================================================

/// Test the pattern grid enumerates binary numbers `1..2^V - 1`.
///
/// Verifies:
/// - Row `r` encodes `r + 1` with vertex `v` at bit `v`
/// - All-positive and all-negative patterns are absent
#[test]
fn test_sign_patterns_enumeration() {
    for cell in CellType::ALL {
        let nv = cell.vertex_count();
        let grid = sign_patterns(cell);
        assert_eq!(grid.shape().dims(), &[cell.pattern_count(), nv]);

        for r in 0..cell.pattern_count() {
            let row = grid.row(r).unwrap();
            let value: usize = row
                .iter()
                .enumerate()
                .map(|(v, &b)| (b as usize) << v)
                .sum();
            assert_eq!(value, r + 1, "{cell} row {r}");
            assert!(row.iter().any(|&b| b == 0));
            assert!(row.iter().any(|&b| b == 1));
        }
    }
}

/// Test the first tetrahedron patterns.
#[test]
fn test_sign_patterns_tetrahedron_head() {
    let grid = sign_patterns(CellType::Tetrahedron);
    assert_eq!(grid.row(0).unwrap(), &[1, 0, 0, 0]);
    assert_eq!(grid.row(1).unwrap(), &[0, 1, 0, 0]);
    assert_eq!(grid.row(2).unwrap(), &[1, 1, 0, 0]);
    assert_eq!(grid.row(13).unwrap(), &[0, 1, 1, 1]);
    assert!(is_below(0, 0) && !is_below(0, 1));
}

// ============================================================================
// Edge-Cut Mask Tests
// ============================================================================

/// Test all-zero flags cut nothing regardless of incidence.
#[test]
fn test_find_mask_all_zero_flags() {
    let fs = [0i32; 12];
    let incidence = [1i32, 0, 1, 1, 1, 0, 0, 1, 1];

    let mask = find_mask(
        ArrayView::matrix(&fs, 4, 3).unwrap(),
        ArrayView::matrix(&incidence, 3, 3).unwrap(),
    )
    .unwrap();

    assert_eq!(mask.shape().dims(), &[4, 3]);
    assert!(mask.as_slice().iter().all(|&m| m == 0));
}

/// Test one flagged tetrahedron vertex cuts its three edges.
#[test]
fn test_find_mask_single_vertex() {
    let cell = CellType::Tetrahedron;
    let incidence = node_edges(cell);
    let fs = [1, 0, 0, 0, 0, 0, 1, 1];

    let mask = find_mask(ArrayView::matrix(&fs, 2, 4).unwrap(), incidence.view()).unwrap();

    assert_eq!(mask.row(0).unwrap(), &[1, 1, 1, 0, 0, 0]);
    // vertices 2 and 3: edges touching exactly one of them
    assert_eq!(mask.row(1).unwrap(), &[0, 1, 1, 1, 0, 1]);
}

/// Test `find_mask` agrees with direct endpoint comparison on every pattern.
#[test]
fn test_find_mask_matches_cut_edges() {
    for cell in CellType::ALL {
        let signs = sign_patterns(cell);
        let mask = find_mask(signs.view(), node_edges(cell).view()).unwrap();

        for r in 0..cell.pattern_count() {
            let below: Vec<bool> = signs.row(r).unwrap().iter().map(|&b| b == 1).collect();
            let direct = cut_edges(cell, &below).unwrap();
            let row = mask.row(r).unwrap();
            assert_eq!(EdgeMask::from_flags(row), direct, "{cell} row {r}");
            assert_eq!(direct.to_flags(cell.edge_count()), row.to_vec());
            assert!(!direct.is_empty(), "{cell} row {r}");
        }
    }
}

/// Test complementary patterns cut the same edges.
#[test]
fn test_complement_cuts_same_edges() {
    for cell in CellType::ALL {
        let nv = cell.vertex_count();
        for bits in 1..(1usize << nv) - 1 {
            let below: Vec<bool> = (0..nv).map(|v| bits & (1 << v) != 0).collect();
            let above: Vec<bool> = below.iter().map(|b| !b).collect();
            assert_eq!(cut_edges(cell, &below), cut_edges(cell, &above));
        }
    }
}

/// Test `cut_edges` needs one flag per vertex.
#[test]
fn test_cut_edges_flag_count() {
    let err = cut_edges(CellType::Hexahedron, &[true, false]).unwrap_err();
    assert_eq!(
        err,
        ArrayError::LengthMismatch {
            operation: "cut_edges",
            expected: 8,
            got: 2
        }
    );
    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);

    assert!(cut_edges(CellType::Tetrahedron, &[true; 5]).is_err());
    assert!(cut_edges(CellType::Tetrahedron, &[]).is_err());
}

/// Test `find_mask` validation.
///
/// Verifies:
/// - Vertex counts of the operands must agree
/// - Flags other than 0 and 1 are rejected
/// - Operands must be 2-D
#[test]
fn test_find_mask_errors() {
    let incidence = node_edges(CellType::Tetrahedron);

    let fs = [0i32; 10];
    let err = find_mask(ArrayView::matrix(&fs, 2, 5).unwrap(), incidence.view()).unwrap_err();
    assert!(matches!(
        err,
        ArrayError::DimensionMismatch {
            left: 5,
            right: 4,
            ..
        }
    ));

    let fs = [0, 2, 0, 0];
    let err = find_mask(ArrayView::matrix(&fs, 1, 4).unwrap(), incidence.view()).unwrap_err();
    assert!(matches!(err, ArrayError::InvalidInput(_)));

    let fs = [0, 1, 0, 0];
    let err = find_mask(ArrayView::vector(&fs), incidence.view()).unwrap_err();
    assert!(matches!(err, ArrayError::InvalidRank { got: 1, .. }));
}

/// Test the flat XOR loop directly.
#[test]
fn test_xor_incidence_loop() {
    // two vertices, two edges; both edges touch both vertices
    let incidence = [1, 1, 1, 1];
    assert_eq!(xor_incidence(&[1, 1], &incidence, 1, 2, 2), vec![0, 0]);
    assert_eq!(xor_incidence(&[1, 0], &incidence, 1, 2, 2), vec![1, 1]);
    assert!(xor_incidence(&[], &incidence, 0, 2, 2).is_empty());

    // cells without vertices still get a row each
    assert_eq!(xor_incidence(&[], &[], 3, 0, 2), vec![0; 6]);
}

/// Test cells without vertices give an all-zero mask of full shape.
#[test]
fn test_find_mask_zero_vertices() {
    let fs: [i32; 0] = [];
    let incidence: [i32; 0] = [];

    let mask = find_mask(
        ArrayView::matrix(&fs, 3, 0).unwrap(),
        ArrayView::matrix(&incidence, 0, 6).unwrap(),
    )
    .unwrap();

    assert_eq!(mask.shape(), Shape::matrix(3, 6));
    assert_eq!(mask.as_slice(), &[0; 18]);
    assert_eq!(mask.row(2).unwrap(), &[0; 6]);
}

/// Test bit set operations.
#[test]
fn test_edge_mask_operations() {
    let mut mask = EdgeMask::from_flags(&[0, 1, 0, 1, 1]);
    assert_eq!(mask.count(), 3);
    assert_eq!(mask.first(), Some(1));
    assert_eq!(mask.iter().collect::<Vec<_>>(), vec![1, 3, 4]);

    mask.remove(1);
    assert_eq!(mask.first(), Some(3));
    mask.insert(11);
    assert!(mask.contains(11));
    assert!(!mask.contains(12));
    assert_eq!(mask.bits(), (1 << 3) | (1 << 4) | (1 << 11));
    assert_eq!(format!("{mask:?}"), "{3, 4, 11}");

    assert!(EdgeMask::EMPTY.is_empty());
    assert_eq!(EdgeMask::EMPTY.first(), None);
}
