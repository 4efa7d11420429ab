//! Static topology of the polyhedral cell types.
//!
//! ## Purpose
//!
//! Slicing an unstructured mesh with an iso-surface needs, for each cell
//! shape, how its vertices, edges and faces are numbered and connected. This
//! module holds those tables for tetrahedra, pyramids, prisms and hexahedra.
//!
//! ## Design notes
//!
//! * **Immutable**: All tables are `static` data, read concurrently without
//!   synchronization and never modified.
//! * **Exact numbering**: The vertex, edge and face numbering is a wire
//!   format shared with precomputed permutation tables and must not change.
//!
//! ## Key concepts
//!
//! * **Edge faces**: Every edge borders exactly two faces.
//! * **Face edges**: Each face lists its edges in ring order; the ring length
//!   is the face's edge count.
//! * **Start face**: The face on which a polygon walk starting at an edge
//!   begins.
//! * **Pattern count**: `2^V - 2` sign patterns, excluding all-positive and
//!   all-negative.
//!
//! ## Invariants
//!
//! * `edge_faces[e]` contains `start_face[e]`, and `face_edges[f]` contains
//!   `e` for both faces `f` of `edge_faces[e]`.
//! * `node_edges[v][e] == 1` exactly when `v` is `lower_vertex[e]` or
//!   `upper_vertex[e]`.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::errors::ArrayError;

/// Largest edge count of any cell type.
pub const MAX_EDGES: usize = 12;

/// Largest vertex count of any cell type.
pub const MAX_VERTICES: usize = 8;

// ============================================================================
// Cell Type
// ============================================================================

/// Shape of a polyhedral mesh cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    /// 4 vertices, 6 edges, 4 faces.
    Tetrahedron,

    /// 5 vertices, 8 edges, 5 faces.
    Pyramid,

    /// 6 vertices, 9 edges, 5 faces.
    Prism,

    /// 8 vertices, 12 edges, 6 faces.
    Hexahedron,
}

impl CellType {
    /// All cell types in code order.
    pub const ALL: [CellType; 4] = [
        CellType::Tetrahedron,
        CellType::Pyramid,
        CellType::Prism,
        CellType::Hexahedron,
    ];

    /// Cell type for a host code in `0..=3`.
    pub fn from_code(code: i64) -> Result<Self, ArrayError> {
        match code {
            0 => Ok(Self::Tetrahedron),
            1 => Ok(Self::Pyramid),
            2 => Ok(Self::Prism),
            3 => Ok(Self::Hexahedron),
            _ => Err(ArrayError::InvalidCellType(code)),
        }
    }

    /// Host code of this cell type.
    pub fn code(self) -> usize {
        self as usize
    }

    /// The static topology tables.
    #[inline]
    pub fn topology(self) -> &'static CellTopology {
        &TOPOLOGY[self.code()]
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(self) -> usize {
        self.topology().vertices
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(self) -> usize {
        self.topology().edge_faces.len()
    }

    /// Number of faces.
    #[inline]
    pub fn face_count(self) -> usize {
        self.topology().face_edges.len()
    }

    /// Number of mixed sign patterns, `2^V - 2`.
    #[inline]
    pub fn pattern_count(self) -> usize {
        self.topology().patterns
    }

    /// Lower and upper endpoint vertices of `edge`.
    #[inline]
    pub fn edge_vertices(self, edge: usize) -> (usize, usize) {
        let topo = self.topology();
        (topo.lower_vertex[edge], topo.upper_vertex[edge])
    }

    /// Number of edges on `face`.
    #[inline]
    pub fn face_len(self, face: usize) -> usize {
        self.topology().face_edges[face].len()
    }
}

impl Display for CellType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Tetrahedron => "tetrahedron",
            Self::Pyramid => "pyramid",
            Self::Prism => "prism",
            Self::Hexahedron => "hexahedron",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// Topology Tables
// ============================================================================

/// Connectivity tables of one cell type.
#[derive(Debug)]
pub struct CellTopology {
    /// Number of vertices.
    pub vertices: usize,

    /// Number of mixed sign patterns, `2^vertices - 2`.
    pub patterns: usize,

    /// Face a walk entering at each edge starts on.
    pub start_face: &'static [usize],

    /// The two faces bordering each edge.
    pub edge_faces: &'static [[usize; 2]],

    /// Edges of each face, in ring order.
    pub face_edges: &'static [&'static [usize]],

    /// Lower endpoint vertex of each edge.
    pub lower_vertex: &'static [usize],

    /// Upper endpoint vertex of each edge.
    pub upper_vertex: &'static [usize],

    /// Vertex-by-edge incidence: row `v` has 1 at every edge touching `v`.
    pub node_edges: &'static [&'static [i32]],
}

static TOPOLOGY: [CellTopology; 4] = [
    // tetrahedron
    CellTopology {
        vertices: 4,
        patterns: 14,
        start_face: &[0, 0, 1, 0, 2, 1],
        edge_faces: &[[0, 1], [0, 2], [1, 2], [0, 3], [2, 3], [1, 3]],
        face_edges: &[&[0, 1, 3], &[0, 5, 2], &[1, 2, 4], &[3, 4, 5]],
        lower_vertex: &[0, 0, 0, 1, 2, 3],
        upper_vertex: &[1, 2, 3, 2, 3, 1],
        node_edges: &[
            &[1, 1, 1, 0, 0, 0],
            &[1, 0, 0, 1, 0, 1],
            &[0, 1, 0, 1, 1, 0],
            &[0, 0, 1, 0, 1, 1],
        ],
    },
    // pyramid
    CellTopology {
        vertices: 5,
        patterns: 30,
        start_face: &[0, 0, 1, 2, 0, 1, 2, 3],
        edge_faces: &[
            [0, 3],
            [0, 1],
            [1, 2],
            [2, 3],
            [0, 4],
            [1, 4],
            [2, 4],
            [3, 4],
        ],
        face_edges: &[&[0, 1, 4], &[1, 2, 5], &[2, 3, 6], &[0, 7, 3], &[4, 5, 6, 7]],
        lower_vertex: &[0, 0, 0, 0, 1, 2, 3, 4],
        upper_vertex: &[1, 2, 3, 4, 2, 3, 4, 1],
        node_edges: &[
            &[1, 1, 1, 1, 0, 0, 0, 0],
            &[1, 0, 0, 0, 1, 0, 0, 1],
            &[0, 1, 0, 0, 1, 1, 0, 0],
            &[0, 0, 1, 0, 0, 1, 1, 0],
            &[0, 0, 0, 1, 0, 0, 1, 1],
        ],
    },
    // prism
    CellTopology {
        vertices: 6,
        patterns: 62,
        start_face: &[1, 1, 0, 0, 2, 2, 0, 0, 1],
        edge_faces: &[
            [1, 3],
            [1, 4],
            [0, 3],
            [0, 4],
            [2, 3],
            [2, 4],
            [0, 1],
            [0, 2],
            [1, 2],
        ],
        face_edges: &[
            &[2, 7, 3, 6],
            &[0, 6, 1, 8],
            &[4, 8, 5, 7],
            &[0, 4, 2],
            &[1, 3, 5],
        ],
        lower_vertex: &[0, 1, 0, 1, 2, 3, 0, 2, 4],
        upper_vertex: &[4, 5, 2, 3, 4, 5, 1, 3, 5],
        node_edges: &[
            &[1, 0, 1, 0, 0, 0, 1, 0, 0],
            &[0, 1, 0, 1, 0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 1, 0, 0, 1, 0],
            &[0, 0, 0, 1, 0, 1, 0, 1, 0],
            &[1, 0, 0, 0, 1, 0, 0, 0, 1],
            &[0, 1, 0, 0, 0, 1, 0, 0, 1],
        ],
    },
    // hexahedron
    CellTopology {
        vertices: 8,
        patterns: 254,
        start_face: &[0, 1, 0, 1, 0, 1, 0, 1, 2, 3, 2, 3],
        edge_faces: &[
            [0, 2],
            [1, 2],
            [0, 3],
            [1, 3],
            [0, 4],
            [1, 4],
            [0, 5],
            [1, 5],
            [2, 4],
            [3, 4],
            [2, 5],
            [3, 5],
        ],
        face_edges: &[
            &[0, 6, 2, 4],
            &[1, 5, 3, 7],
            &[0, 8, 1, 10],
            &[2, 11, 3, 9],
            &[4, 9, 5, 8],
            &[6, 10, 7, 11],
        ],
        lower_vertex: &[0, 1, 2, 3, 0, 1, 4, 5, 0, 2, 4, 6],
        upper_vertex: &[4, 5, 6, 7, 2, 3, 6, 7, 1, 3, 5, 7],
        node_edges: &[
            &[1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0],
            &[0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0],
            &[0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0],
            &[0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0],
            &[1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0],
            &[0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0],
            &[0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1],
            &[0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1],
        ],
    },
];
