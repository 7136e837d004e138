//! Dropping an axis to go from 3D to the plane, and putting it back.

use crate::{
    axis::Axis,
    utils::types::{Vertex2, Vertex3},
};

/// Build the flat planar buffer `[u0, v0, u1, v1, ...]` for `points` with `axis` dropped.
///
/// Pair `i` belongs to `points[i]`; `u`/`v` are the two remaining components in ascending axis
/// order, so the buffer always has length `2 * points.len()`.
pub fn build_planar_coords(points: &[Vertex3], axis: Axis) -> Vec<f64> {
    let [u, v] = axis.surviving();

    let mut coords = Vec::with_capacity(points.len() * 2);
    for p in points {
        coords.push(p[u]);
        coords.push(p[v]);
    }

    coords
}

/// Project a single point onto the plane orthogonal to `axis`.
pub const fn project(point: &Vertex3, axis: Axis) -> Vertex2 {
    let [u, v] = axis.surviving();
    [point[u], point[v]]
}

/// Lift a planar point back to 3D, inserting `value` at the slot of `axis`.
pub const fn lift_to_3d(uv: Vertex2, axis: Axis, value: f64) -> Vertex3 {
    let [u, v] = axis.surviving();

    let mut p = [value; 3];
    p[u] = uv[0];
    p[v] = uv[1];
    p
}
