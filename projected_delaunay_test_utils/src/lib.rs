//! utils for projected_delaunay tests and fuzzing
#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::all, clippy::missing_const_for_fn)]

use rand::{distr::Uniform, prelude::Distribution};
use rand_distr::Normal;
use std::ops::RangeInclusive;

pub type Vertex2 = [f64; 2];
pub type Vertex3 = [f64; 3];

/// Samples `n` vertices in 2D space from the [Uniform] distribution.
///
/// If no range is specified, the unit-square centered around the origin is used, `[-0.5, 0.5]`.
pub fn sample_vertices_2d(n: usize, range: Option<RangeInclusive<f64>>) -> Vec<Vertex2> {
    let mut rng = rand::rng();
    let range = range.unwrap_or(-0.5..=0.5);
    let uniform = Uniform::try_from(range).expect("Expected range with a greater start then end");

    (0..n)
        .map(|_| [uniform.sample(&mut rng), uniform.sample(&mut rng)])
        .collect()
}

/// Samples `n` vertices in 3D space from the [Uniform] distribution.
///
/// If no range is specified, the unit-cube centered around the origin is used, `[-0.5, 0.5]`.
pub fn sample_vertices_3d(n: usize, range: Option<RangeInclusive<f64>>) -> Vec<Vertex3> {
    let mut rng = rand::rng();
    let range = range.unwrap_or(-0.5..=0.5);
    let uniform = Uniform::try_from(range).expect("Expected range with a greater start then end");

    let mut vertices: Vec<Vertex3> = Vec::with_capacity(n);
    for _ in 0..n {
        let x = uniform.sample(&mut rng);
        let y = uniform.sample(&mut rng);
        let z = uniform.sample(&mut rng);

        vertices.push([x, y, z]);
    }

    vertices
}

/// Samples `n` vertices scattered around the plane through the origin orthogonal to the axis
/// with index `axis_slot`, like a noisy scan of a flat surface.
///
/// The in-plane components are uniform in `[-0.5, 0.5]`. The offset from the plane is drawn from
/// a [Normal] distribution, by default `μ = 0.0` and `σ = 0.005`; parameters can be passed as an
/// optional tuple `(μ, σ)`.
pub fn sample_vertices_near_plane(
    n: usize,
    axis_slot: usize,
    params: Option<(f64, f64)>,
) -> Vec<Vertex3> {
    assert!(axis_slot < 3, "Expected an axis slot of 0, 1 or 2");

    let mut rng = rand::rng();
    let (mean, std_dev) = params.unwrap_or((0.0, 0.005));
    let normal = Normal::new(mean, std_dev).unwrap();

    let mut vertices = sample_vertices_3d(n, None);
    for v in &mut vertices {
        v[axis_slot] = normal.sample(&mut rng);
    }

    vertices
}
