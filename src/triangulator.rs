//! The seam to the planar Delaunay triangulator.
//!
//! The construction itself is done by [delaunator]; this module guards it against input it cannot
//! make sense of and gives the pipeline a uniform result to lift back into 3D.

use anyhow::Result as HowResult;
use delaunator::Point;
use rayon::prelude::*;

use crate::{
    error::PlanarizeError,
    predicates::{in_circle_2d, orient_2d},
    utils::types::{CoordIdx, TriIdx, Triangle2, Vertex2},
};

/// A planar triangulation: the coordinates it was computed on and the triangles as index triples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangulationResult {
    /// Interleaved `[u0, v0, u1, v1, ...]`.
    coords: Vec<f64>,
    /// Consecutive triples of vertex indices into `coords` (pair index, not float index).
    triangles: Vec<CoordIdx>,
}

impl TriangulationResult {
    pub const fn new(coords: Vec<f64>, triangles: Vec<CoordIdx>) -> Self {
        Self { coords, triangles }
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    pub fn triangles(&self) -> &[CoordIdx] {
        &self.triangles
    }

    pub const fn num_vertices(&self) -> usize {
        self.coords.len() / 2
    }

    pub const fn num_tris(&self) -> usize {
        self.triangles.len() / 3
    }

    /// The planar position of vertex `idx`.
    pub fn vertex(&self, idx: CoordIdx) -> HowResult<Vertex2> {
        if idx >= self.num_vertices() {
            return Err(PlanarizeError::IndexOutOfBounds {
                index: idx,
                len: self.num_vertices(),
            }
            .into());
        }

        Ok([self.coords[2 * idx], self.coords[2 * idx + 1]])
    }

    /// The vertex indices of triangle `tri_idx`, in the triangulator's winding order.
    pub fn tri_idxs(&self, tri_idx: TriIdx) -> [CoordIdx; 3] {
        let i = 3 * tri_idx;
        [self.triangles[i], self.triangles[i + 1], self.triangles[i + 2]]
    }

    pub fn tri(&self, tri_idx: TriIdx) -> HowResult<Triangle2> {
        let [a, b, c] = self.tri_idxs(tri_idx);
        Ok([self.vertex(a)?, self.vertex(b)?, self.vertex(c)?])
    }

    /// Check if a triangle is flat or has a non-incident vertex strictly inside its circumcircle.
    fn is_tri_violated(&self, tri_idx: TriIdx) -> HowResult<bool> {
        let idxs = self.tri_idxs(tri_idx);
        let [a, mut b, mut c] = self.tri(tri_idx)?;

        let orientation = orient_2d(&a, &b, &c);
        if orientation == 0.0 {
            #[cfg(feature = "logging")]
            log::error!("Flat triangle: {tri_idx} {idxs:?}");
            return Ok(true);
        } else if orientation < 0.0 {
            core::mem::swap(&mut b, &mut c);
        }

        for v_idx in 0..self.num_vertices() {
            if idxs.contains(&v_idx) {
                continue;
            }

            // duplicates of a corner sit on the circle, geogram's SOS may count them as inside
            let p = self.vertex(v_idx)?;
            if p == a || p == b || p == c {
                continue;
            }

            if in_circle_2d(&a, &b, &c, &p) > 0.0 {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Check if the triangulation has the empty circumcircle property.
    ///
    /// Returns if it holds and the ratio of triangles that satisfy it.
    pub fn is_delaunay(&self) -> HowResult<(bool, f64)> {
        let mut num_violated_tris = 0;

        for tri_idx in 0..self.num_tris() {
            if self.is_tri_violated(tri_idx)? {
                num_violated_tris += 1;
            }
        }

        Ok((num_violated_tris == 0, self.satisfied_ratio(num_violated_tris)))
    }

    /// Checks the empty circumcircle property in a parallel manner using `rayon`s `par_iter()`.
    ///
    /// Returns the ratio of triangles that satisfy it. Triangles with invalid indices count as
    /// violated.
    #[must_use]
    pub fn par_is_delaunay(&self) -> f64 {
        let num_violated_tris = (0..self.num_tris())
            .into_par_iter()
            .filter(|&tri_idx| self.is_tri_violated(tri_idx).unwrap_or(true))
            .count();

        self.satisfied_ratio(num_violated_tris)
    }

    fn satisfied_ratio(&self, num_violated_tris: usize) -> f64 {
        if self.num_tris() == 0 {
            return 1.0;
        }
        1.0 - num_violated_tris as f64 / self.num_tris() as f64
    }
}

/// A planar triangulation algorithm.
pub trait Triangulator {
    /// Triangulate the interleaved planar buffer `coords`.
    ///
    /// Fails with [`PlanarizeError::DegenerateInput`] if no triangle can be formed.
    fn triangulate(&self, coords: Vec<f64>) -> HowResult<TriangulationResult>;
}

/// Delaunay triangulation via the sweep-hull algorithm of [delaunator].
#[derive(Debug, Default, Clone, Copy)]
pub struct DelaunatorTriangulator;

impl Triangulator for DelaunatorTriangulator {
    fn triangulate(&self, coords: Vec<f64>) -> HowResult<TriangulationResult> {
        check_planar_coords(&coords)?;

        let vertices: Vec<Vertex2> = coords.chunks_exact(2).map(|c| [c[0], c[1]]).collect();
        if !spans_plane(&vertices) {
            return Err(PlanarizeError::DegenerateInput {
                num_points: vertices.len(),
            }
            .into());
        }

        let points: Vec<Point> = vertices.iter().map(|v| Point { x: v[0], y: v[1] }).collect();
        let triangulation = delaunator::triangulate(&points);

        if triangulation.triangles.is_empty() {
            return Err(PlanarizeError::DegenerateInput {
                num_points: vertices.len(),
            }
            .into());
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "Triangulated {} points into {} triangles",
            vertices.len(),
            triangulation.triangles.len() / 3
        );

        Ok(TriangulationResult::new(coords, triangulation.triangles))
    }
}

/// Reject buffers the triangulator cannot digest: odd lengths and non-finite values.
pub fn check_planar_coords(coords: &[f64]) -> HowResult<()> {
    if coords.len() % 2 != 0 {
        return Err(PlanarizeError::OddCoordinateCount { len: coords.len() }.into());
    }

    if let Some(index) = coords.iter().position(|c| !c.is_finite()) {
        return Err(PlanarizeError::NonFiniteCoordinate { index }.into());
    }

    Ok(())
}

/// Check if at least three of `vertices` are distinct and not aligned.
pub fn spans_plane(vertices: &[Vertex2]) -> bool {
    let Some((v0, rest)) = vertices.split_first() else {
        return false;
    };

    let Some(pos) = rest.iter().position(|v| v != v0) else {
        return false;
    };
    let v1 = rest[pos];

    rest[pos + 1..]
        .iter()
        .any(|v2| orient_2d(v0, &v1, v2) != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use projected_delaunay_test_utils::sample_vertices_2d;

    fn flatten(vertices: &[Vertex2]) -> Vec<f64> {
        vertices.iter().flatten().copied().collect()
    }

    fn degenerate_num_points(result: HowResult<TriangulationResult>) -> Option<usize> {
        match result.unwrap_err().downcast_ref::<PlanarizeError>() {
            Some(PlanarizeError::DegenerateInput { num_points }) => Some(*num_points),
            _ => None,
        }
    }

    const NUM_VERTICES_LIST: [usize; 6] = [3, 5, 10, 50, 100, 500];

    #[test]
    fn test_delaunay_2d() {
        for n in NUM_VERTICES_LIST {
            let vertices = sample_vertices_2d(n, None);

            let result = DelaunatorTriangulator.triangulate(flatten(&vertices)).unwrap();

            assert!(result.num_tris() >= 1);
            assert_eq!(result.num_vertices(), n);
            assert!(result.triangles().iter().all(|&idx| idx < n));
            assert_eq!(result.is_delaunay().unwrap(), (true, 1.0));
        }
    }

    #[test]
    fn test_par_is_delaunay() {
        let vertices = sample_vertices_2d(300, Some(-10.0..=10.0));
        let result = DelaunatorTriangulator.triangulate(flatten(&vertices)).unwrap();

        assert_eq!(result.par_is_delaunay(), 1.0);
    }

    #[test]
    fn test_detects_non_delaunay() {
        // the diagonal 0-2 is the wrong one for this kite, 3 lies in the circumcircle of 0-1-2
        let coords = flatten(&[[0.0, 0.0], [2.0, -0.2], [4.0, 0.0], [2.0, 0.2]]);
        let result = TriangulationResult::new(coords, vec![0, 1, 2, 0, 2, 3]);

        let (delaunay, ratio) = result.is_delaunay().unwrap();
        assert!(!delaunay);
        assert!(ratio < 1.0);
        assert_eq!(result.par_is_delaunay(), ratio);
    }

    #[test]
    fn test_square() {
        let coords = flatten(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        let result = DelaunatorTriangulator.triangulate(coords).unwrap();

        assert_eq!(result.num_tris(), 2);
    }

    #[test]
    fn test_too_few_points() {
        assert_eq!(degenerate_num_points(DelaunatorTriangulator.triangulate(vec![])), Some(0));
        assert_eq!(
            degenerate_num_points(DelaunatorTriangulator.triangulate(vec![0.0, 0.0, 1.0, 1.0])),
            Some(2)
        );
    }

    #[test]
    fn test_collinear_points() {
        let coords = flatten(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]);
        assert_eq!(degenerate_num_points(DelaunatorTriangulator.triangulate(coords)), Some(4));
    }

    #[test]
    fn test_duplicate_points() {
        let coords = flatten(&[[1.0, 2.0], [1.0, 2.0], [1.0, 2.0], [3.0, 0.0]]);
        assert_eq!(degenerate_num_points(DelaunatorTriangulator.triangulate(coords)), Some(4));
    }

    #[test]
    fn test_rejects_malformed_buffers() {
        let err = DelaunatorTriangulator.triangulate(vec![0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PlanarizeError>(),
            Some(&PlanarizeError::OddCoordinateCount { len: 3 })
        );

        let err = DelaunatorTriangulator
            .triangulate(vec![0.0, 0.0, 1.0, f64::NAN, 0.0, 1.0])
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<PlanarizeError>(),
            Some(&PlanarizeError::NonFiniteCoordinate { index: 3 })
        );
    }

    #[test]
    fn test_vertex_out_of_bounds() {
        let result = TriangulationResult::new(vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0], vec![0, 1, 3]);

        assert!(result.vertex(2).is_ok());
        assert!(result.tri(0).is_err());
        assert!(result.is_delaunay().is_err());
        assert_eq!(result.par_is_delaunay(), 0.0);
    }

    #[test]
    fn test_spans_plane() {
        assert!(!spans_plane(&[]));
        assert!(!spans_plane(&[[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]]));
        assert!(!spans_plane(&[[0.0, 0.0], [0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]));
        assert!(spans_plane(&[[0.0, 0.0], [0.0, 0.0], [1.0, 0.0], [2.0, 0.1]]));
    }
}
