//! Validated kernel entry points.
//!
//! ## Purpose
//!
//! Each function here is one host-callable kernel: it validates its operands
//! with [`Validator`], then hands the raw slices to the unchecked loops of
//! the algorithms and topology layers and wraps the result.
//!
//! ## Design notes
//!
//! * **Validate, then run**: Every check completes before the first write to
//!   a caller buffer.
//! * **Fresh outputs**: Results are newly allocated [`Array`]s; only
//!   [`array_set`] mutates a caller buffer.
//! * **Logging**: Each kernel emits one `debug` record with its operand
//!   sizes.
//!
//! ## Invariants
//!
//! * A failed call leaves every caller buffer untouched.
//! * Output shapes are fully determined by input shapes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::expand::repeat_by_counts;
use crate::algorithms::interpolation::{interpolate, Precision};
use crate::algorithms::region::region_bounds;
use crate::algorithms::reverse::reverse_axis;
use crate::algorithms::scatter::{assign, Source};
use crate::algorithms::sorting;
use crate::engine::output::{Array, Interpolated};
use crate::engine::validator::Validator;
use crate::primitives::buffer::ArrayMut;
use crate::primitives::errors::ArrayError;
use crate::primitives::shape::{ArrayView, Shape};
use crate::topology::cells::CellType;
use crate::topology::mask::xor_incidence;
use crate::topology::patterns;
use crate::topology::walk::permutation_table;

// ============================================================================
// Scatter Assignment
// ============================================================================

/// Write `source` into the rows of `target` named by `subscripts`.
///
/// `target` is a flat buffer of shape `shape` (1-D, or 2-D whose second
/// extent is the row width). A scalar source is broadcast to every addressed
/// element; a buffer source supplies one row per subscript, converted to the
/// target's kind. Subscripts always address whole rows: a scalar broadcast
/// into a 2-D target fills every element of each named row.
pub fn array_set(
    target: ArrayMut<'_>,
    shape: Shape,
    subscripts: &[i32],
    source: Source<'_>,
) -> Result<(), ArrayError> {
    Validator::validate_rank("array_set", &shape, 1, 2)?;
    Validator::validate_buffer_len("array_set", &shape, target.len())?;

    let width = shape.row_width();
    if let Source::Array { shape: src, .. } = &source {
        if shape.ndim() == 2 {
            Validator::validate_rank("array_set", src, 2, 2)?;
            Validator::validate_same_dim("array_set", width, src.dim(1))?;
        }
    }

    let kind = target.kind();
    Validator::validate_nonnegative_subscripts(subscripts)?;
    Validator::validate_scatter_kind(kind)?;
    Validator::validate_subscript_range(subscripts, width, shape.size())?;
    if let Source::Array { data, .. } = &source {
        Validator::validate_source_len(data.len(), width * subscripts.len())?;
    }

    log::debug!(
        "array_set: {} rows of width {} into {} target {}",
        subscripts.len(),
        width,
        kind,
        shape
    );

    match target {
        ArrayMut::UByte(t) => assign(t, width, subscripts, &source),
        ArrayMut::Byte(t) => assign(t, width, subscripts, &source),
        ArrayMut::Int(t) => assign(t, width, subscripts, &source),
        ArrayMut::Long(t) => assign(t, width, subscripts, &source),
        ArrayMut::Float(t) => assign(t, width, subscripts, &source),
        ArrayMut::Double(t) => assign(t, width, subscripts, &source),
        ArrayMut::Short(_) | ArrayMut::Bool(_) => {
            return Err(ArrayError::UnsupportedKind {
                operation: "array_set",
                kind,
            });
        }
    }

    Ok(())
}

// ============================================================================
// Ordering
// ============================================================================

/// Permutation of `0..values.len()` that sorts `values` ascending.
pub fn index_sort<T: Float>(values: &[T]) -> Vec<usize> {
    log::debug!("index_sort: {} values", values.len());
    sorting::index_sort(values)
}

/// Rank of every element of `values` in ascending order.
///
/// `rank_order(v)[i]` is the position `v[i]` takes once `v` is sorted.
pub fn rank_order<T: Float>(values: &[T]) -> Vec<usize> {
    sorting::invert_permutation(&index_sort(values))
}

// ============================================================================
// Interpolation
// ============================================================================

/// Interpolate the piecewise linear function through `(x, y)` at every
/// query in `z`, at the precision of `T`.
pub fn interp_with<T: Float>(
    y: &[T],
    x: &[T],
    z: ArrayView<'_, T>,
) -> Result<Array<T>, ArrayError> {
    Validator::validate_not_empty("interp", y.len())?;
    Validator::validate_same_length("interp", y.len(), x.len())?;

    log::debug!(
        "interp: {} knots, {} queries of shape {}",
        y.len(),
        z.len(),
        z.shape()
    );

    let values = interpolate(y, x, z.as_slice());
    Ok(Array::with_shape(values, z.shape()))
}

/// Interpolate at the precision named by a host type code.
///
/// `'d'` or `None` computes in double precision; `'f'` narrows the inputs to
/// single precision and computes there.
pub fn interp(
    y: &[f64],
    x: &[f64],
    z: ArrayView<'_, f64>,
    typecode: Option<char>,
) -> Result<Interpolated, ArrayError> {
    match Precision::from_typecode(typecode)? {
        Precision::Double => interp_with(y, x, z).map(Interpolated::Double),
        Precision::Single => {
            let narrow = |v: &[f64]| v.iter().map(|&e| e as f32).collect::<Vec<f32>>();
            let (ys, xs, zs) = (narrow(y), narrow(x), narrow(z.as_slice()));
            let zv = ArrayView::from_parts(&zs, z.shape());
            interp_with(&ys, &xs, zv).map(Interpolated::Single)
        }
    }
}

// ============================================================================
// Mesh Kernels
// ============================================================================

/// Smallest and largest `z` over the nodes touched by the zones `ireg` tags.
pub fn zmin_zmax<T: Float>(
    z: ArrayView<'_, T>,
    ireg: ArrayView<'_, i32>,
) -> Result<(T, T), ArrayError> {
    let dims = Validator::validate_matrix("zmin_zmax", &z.shape())?;
    let tag_dims = Validator::validate_matrix("zmin_zmax", &ireg.shape())?;
    Validator::validate_same_shape("zmin_zmax", dims, tag_dims)?;

    let (rows, cols) = dims;
    log::debug!("zmin_zmax: {rows} x {cols} grid");

    region_bounds(z.as_slice(), ireg.as_slice(), rows, cols).ok_or(ArrayError::EmptyRegion)
}

/// Copy of the matrix `x` mirrored along `axis` (0 flips columns, 1 flips
/// rows).
pub fn reverse<T: Copy>(x: ArrayView<'_, T>, axis: i64) -> Result<Array<T>, ArrayError> {
    let axis = Validator::validate_axis(axis)?;
    let (rows, cols) = Validator::validate_matrix("reverse", &x.shape())?;

    log::debug!("reverse: {rows} x {cols} along {axis:?}");

    let out = reverse_axis(x.as_slice(), rows, cols, axis);
    Ok(Array::from_matrix(out, rows, cols))
}

/// Repeat each cell value once per vertex of that cell.
///
/// `nv[i]` is the vertex count of cell `i`; the counts must sum to `sum_nv`.
pub fn to_corners<T: Copy>(
    values: &[T],
    nv: &[i32],
    sum_nv: usize,
) -> Result<Array<T>, ArrayError> {
    Validator::validate_same_length("to_corners", values.len(), nv.len())?;
    Validator::validate_counts(nv, sum_nv)?;

    log::debug!("to_corners: {} cells, {} corners", values.len(), sum_nv);

    repeat_by_counts(values, nv, sum_nv).map(Array::from_vec)
}

// ============================================================================
// Slicing Kernels
// ============================================================================

/// Edge-cut mask of every cell: the XOR of the incidence rows of its
/// flagged vertices.
///
/// `fs` is `ntotal x nv` with 0/1 entries and `node_edges` is `nv x ne`; the
/// result is `ntotal x ne`.
pub fn find_mask(
    fs: ArrayView<'_, i32>,
    node_edges: ArrayView<'_, i32>,
) -> Result<Array<i32>, ArrayError> {
    let (ntotal, nv) = Validator::validate_matrix("find_mask", &fs.shape())?;
    let (rows, ne) = Validator::validate_matrix("find_mask", &node_edges.shape())?;
    Validator::validate_same_dim("find_mask", nv, rows)?;
    Validator::validate_binary_flags("find_mask", fs.as_slice())?;

    log::debug!("find_mask: {ntotal} cells, {nv} vertices, {ne} edges");

    let mask = xor_incidence(fs.as_slice(), node_edges.as_slice(), ntotal, nv, ne);
    Ok(Array::from_matrix(mask, ntotal, ne))
}

/// Edge ranks of every sign pattern of `cell`, as an `ne x patterns` table.
///
/// `mask` is the flattened `patterns x ne` edge-cut mask of the cell type.
pub fn construct3(mask: &[i32], cell: CellType) -> Result<Array<i32>, ArrayError> {
    let ne = cell.edge_count();
    let rows = cell.pattern_count();
    Validator::validate_mask_len(mask.len(), ne * rows)?;

    log::debug!("construct3: {rows} patterns of a {cell}");

    Ok(Array::from_matrix(permutation_table(mask, cell), ne, rows))
}

/// Vertex-by-edge incidence grid of `cell`.
pub fn node_edges(cell: CellType) -> Array<i32> {
    let table = cell.topology().node_edges;
    let data: Vec<i32> = table.iter().flat_map(|row| row.iter().copied()).collect();
    Array::from_matrix(data, cell.vertex_count(), cell.edge_count())
}

/// All mixed sign patterns of `cell`, one 0/1 row of vertex flags each.
pub fn sign_patterns(cell: CellType) -> Array<i32> {
    Array::from_matrix(
        patterns::sign_patterns(cell),
        cell.pattern_count(),
        cell.vertex_count(),
    )
}

/// Polygon permutation table of `cell` over every mixed sign pattern.
pub fn poly_permutations(cell: CellType) -> Result<Array<i32>, ArrayError> {
    let signs = sign_patterns(cell);
    let incidence = node_edges(cell);
    let mask = find_mask(signs.view(), incidence.view())?;
    construct3(mask.as_slice(), cell)
}
