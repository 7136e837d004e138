//! Output side of the pipeline.

use nalgebra::Vector3;

use crate::utils::types::{Triangle3, Vertex3, VertexIdx};

/// An append-only mesh the pipeline writes into, usually owned by the host.
pub trait MeshSink {
    /// Append a point and return the index it was assigned.
    fn add_point(&mut self, position: Vertex3) -> VertexIdx;

    /// Append a triangle over three previously added points.
    fn add_triangle(&mut self, a: VertexIdx, b: VertexIdx, c: VertexIdx);
}

/// An in-memory triangle soup.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TriangleMesh {
    points: Vec<Vertex3>,
    triangles: Vec<[VertexIdx; 3]>,
}

impl TriangleMesh {
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            triangles: Vec::new(),
        }
    }

    pub fn points(&self) -> &[Vertex3] {
        &self.points
    }

    pub fn triangles(&self) -> &[[VertexIdx; 3]] {
        &self.triangles
    }

    pub const fn num_points(&self) -> usize {
        self.points.len()
    }

    pub const fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.points.is_empty() && self.triangles.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.triangles.clear();
    }

    /// The corner positions of triangle `tri_idx`.
    pub fn triangle_positions(&self, tri_idx: usize) -> Option<Triangle3> {
        let [a, b, c] = *self.triangles.get(tri_idx)?;
        Some([
            *self.points.get(a)?,
            *self.points.get(b)?,
            *self.points.get(c)?,
        ])
    }

    /// Unit normal of triangle `tri_idx` following its winding, `None` for degenerate triangles.
    pub fn face_normal(&self, tri_idx: usize) -> Option<Vector3<f64>> {
        let [a, b, c] = self.triangle_positions(tri_idx)?.map(Vector3::from);
        (b - a).cross(&(c - a)).try_normalize(f64::EPSILON)
    }

    /// Area of triangle `tri_idx`.
    pub fn area(&self, tri_idx: usize) -> Option<f64> {
        let [a, b, c] = self.triangle_positions(tri_idx)?.map(Vector3::from);
        Some(0.5 * (b - a).cross(&(c - a)).norm())
    }

    /// Check if every triangle indexes existing points.
    pub fn is_sound(&self) -> bool {
        self.triangles
            .iter()
            .flatten()
            .all(|&idx| idx < self.points.len())
    }
}

impl MeshSink for TriangleMesh {
    fn add_point(&mut self, position: Vertex3) -> VertexIdx {
        self.points.push(position);
        self.points.len() - 1
    }

    fn add_triangle(&mut self, a: VertexIdx, b: VertexIdx, c: VertexIdx) {
        self.triangles.push([a, b, c]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        let a = mesh.add_point([0.0, 0.0, 1.0]);
        let b = mesh.add_point([1.0, 0.0, 1.0]);
        let c = mesh.add_point([0.0, 1.0, 1.0]);
        mesh.add_triangle(a, b, c);
        mesh
    }

    #[test]
    fn test_add_assigns_indices() {
        let mesh = unit_triangle();

        assert_eq!(mesh.num_points(), 3);
        assert_eq!(mesh.num_triangles(), 1);
        assert_eq!(mesh.triangles(), &[[0, 1, 2]]);
        assert!(mesh.is_sound());
    }

    #[test]
    fn test_face_normal_and_area() {
        let mesh = unit_triangle();

        assert_eq!(mesh.face_normal(0), Some(Vector3::new(0.0, 0.0, 1.0)));
        assert_eq!(mesh.area(0), Some(0.5));
        assert_eq!(mesh.face_normal(1), None);
    }

    #[test]
    fn test_degenerate_face_normal() {
        let mut mesh = TriangleMesh::new();
        let a = mesh.add_point([0.0, 0.0, 0.0]);
        let b = mesh.add_point([1.0, 1.0, 1.0]);
        let c = mesh.add_point([2.0, 2.0, 2.0]);
        mesh.add_triangle(a, b, c);

        assert_eq!(mesh.face_normal(0), None);
        assert_eq!(mesh.area(0), Some(0.0));
    }

    #[test]
    fn test_unsound_mesh() {
        let mut mesh = unit_triangle();
        mesh.add_triangle(0, 1, 7);

        assert!(!mesh.is_sound());
        assert_eq!(mesh.triangle_positions(1), None);
    }

    #[test]
    fn test_clear() {
        let mut mesh = unit_triangle();
        mesh.clear();

        assert!(mesh.is_empty());
    }
}
