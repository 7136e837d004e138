//! Project, triangulate, lift.
//!
//! One [`ProjectedDelaunay::run`] is one cook: the limited axis and value are derived from the
//! config and the input cloud, the cloud is flattened onto the plane, triangulated, and every
//! planar triangle is written back to the sink as a fresh 3D triangle lying in the plane
//! `axis = value`.

use core::fmt;

use anyhow::Result as HowResult;

use crate::{
    axis::{Axis, compute_limit_value},
    config::{LimitMode, PipelineConfig},
    error::PlanarizeError,
    mesh::{MeshSink, TriangleMesh},
    projection::{build_planar_coords, lift_to_3d},
    triangulator::{DelaunatorTriangulator, TriangulationResult, Triangulator},
    utils::types::{Triangle3, Vertex3},
};

/// How a run ended, given it did not fail.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Triangulated,
    /// No input points; nothing was emitted.
    EmptyInput,
    /// The projected points do not span a triangle; nothing was emitted.
    DegenerateInput,
}

/// What a run did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineStats {
    pub outcome: Outcome,
    pub num_input_points: usize,
    pub limited_axis: Axis,
    pub limited_value: f64,
    pub num_triangles: usize,
    pub num_points: usize,

    #[cfg(feature = "timing")]
    pub time_projecting: u128,
    #[cfg(feature = "timing")]
    pub time_triangulating: u128,
    #[cfg(feature = "timing")]
    pub time_emitting: u128,
}

impl PipelineStats {
    const fn new(num_input_points: usize, limited_axis: Axis) -> Self {
        Self {
            outcome: Outcome::Triangulated,
            num_input_points,
            limited_axis,
            limited_value: 0.0,
            num_triangles: 0,
            num_points: 0,
            #[cfg(feature = "timing")]
            time_projecting: 0,
            #[cfg(feature = "timing")]
            time_triangulating: 0,
            #[cfg(feature = "timing")]
            time_emitting: 0,
        }
    }

    /// Check if the run emitted nothing because of its input.
    pub const fn is_empty_result(&self) -> bool {
        !matches!(self.outcome, Outcome::Triangulated)
    }

    #[cfg(all(feature = "logging", feature = "timing"))]
    fn log_time(&self) {
        log::debug!("-------------------------------------------");
        log::debug!("Time elapsed:");
        log::debug!("Projection computed in {} μs", self.time_projecting);
        log::debug!("Triangulation computed in {} μs", self.time_triangulating);
        log::debug!("Emission computed in {} μs", self.time_emitting);
    }
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}: {} input points -> {} triangles, {} points ({} = {})",
            self.outcome,
            self.num_input_points,
            self.num_triangles,
            self.num_points,
            self.limited_axis,
            self.limited_value
        )
    }
}

/// The projection/triangulation pipeline.
///
/// ```
/// use projected_delaunay::{LimitMode, PipelineConfig, PlaneOrientation, ProjectedDelaunay, TriangleMesh};
///
/// let points = vec![
///     [0.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [1.0, 1.0, 0.0],
///     [0.0, 1.0, 0.0],
/// ];
///
/// let pipeline = ProjectedDelaunay::new(PipelineConfig::new(PlaneOrientation::XY, LimitMode::Zero));
/// let mut mesh = TriangleMesh::new();
/// let stats = pipeline.run(&points, &mut mesh).unwrap();
///
/// assert_eq!(stats.num_triangles, 2);
/// assert_eq!(mesh.num_points(), 6);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ProjectedDelaunay<T = DelaunatorTriangulator> {
    config: PipelineConfig,
    triangulator: T,
}

impl ProjectedDelaunay {
    pub const fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            triangulator: DelaunatorTriangulator,
        }
    }
}

impl<T: Triangulator> ProjectedDelaunay<T> {
    pub const fn with_triangulator(config: PipelineConfig, triangulator: T) -> Self {
        Self {
            config,
            triangulator,
        }
    }

    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }

    /// Triangulate `points` and append the result to `sink`.
    ///
    /// Empty and degenerate input is not an error: nothing is emitted and the returned stats say
    /// why. All other failures leave `sink` untouched. Unless the limit mode is
    /// [`LimitMode::Zero`], a NaN or infinite component on the dropped axis fails the run with
    /// [`PlanarizeError::NonFiniteLimitValue`].
    pub fn run<S: MeshSink + ?Sized>(
        &self,
        points: &[Vertex3],
        sink: &mut S,
    ) -> HowResult<PipelineStats> {
        let axis = self.config.limited_axis();
        let mut stats = PipelineStats::new(points.len(), axis);

        if points.is_empty() {
            #[cfg(feature = "logging")]
            log::debug!("{}", PlanarizeError::EmptyInput);
            stats.outcome = Outcome::EmptyInput;
            return Ok(stats);
        }

        #[cfg(feature = "timing")]
        let now = std::time::Instant::now();

        if self.config.limit_mode != LimitMode::Zero
            && points.iter().any(|p| !p[axis.slot()].is_finite())
        {
            return Err(PlanarizeError::NonFiniteLimitValue { axis }.into());
        }

        let value = compute_limit_value(points, axis, self.config.limit_mode, self.config.scan);
        if !value.is_finite() {
            return Err(PlanarizeError::NonFiniteLimitValue { axis }.into());
        }
        stats.limited_value = value;

        let coords = build_planar_coords(points, axis);

        #[cfg(feature = "timing")]
        {
            stats.time_projecting = now.elapsed().as_micros();
        }
        #[cfg(feature = "timing")]
        let now = std::time::Instant::now();

        let result = match self.triangulator.triangulate(coords) {
            Ok(result) => result,
            Err(e) => match e.downcast_ref::<PlanarizeError>() {
                Some(err) if err.is_empty_result() => {
                    #[cfg(feature = "logging")]
                    log::debug!("{err}");
                    stats.outcome = Outcome::DegenerateInput;
                    return Ok(stats);
                }
                _ => return Err(e),
            },
        };

        #[cfg(feature = "timing")]
        {
            stats.time_triangulating = now.elapsed().as_micros();
        }
        #[cfg(feature = "timing")]
        let now = std::time::Instant::now();

        let triangles = reconstruct_triangles(&result, axis, value)?;
        emit_triangles(&triangles, sink);

        stats.num_triangles = triangles.len();
        stats.num_points = 3 * triangles.len();

        #[cfg(feature = "timing")]
        {
            stats.time_emitting = now.elapsed().as_micros();
        }

        #[cfg(feature = "logging")]
        log::trace!("{stats}");
        #[cfg(all(feature = "logging", feature = "timing"))]
        stats.log_time();

        Ok(stats)
    }

    /// Run into a fresh [`TriangleMesh`].
    pub fn triangulate(&self, points: &[Vertex3]) -> HowResult<TriangleMesh> {
        let mut mesh = TriangleMesh::new();
        self.run(points, &mut mesh)?;
        Ok(mesh)
    }
}

/// Lift every triangle of `result` into the plane `axis = value`.
///
/// Corners keep the triangulator's winding. Fails without a partial result if the index list has
/// a trailing partial triple or any triangle references a vertex `result` does not have.
pub fn reconstruct_triangles(
    result: &TriangulationResult,
    axis: Axis,
    value: f64,
) -> HowResult<Vec<Triangle3>> {
    let len = result.triangles().len();
    if len % 3 != 0 {
        return Err(PlanarizeError::PartialTriangle { len }.into());
    }

    let mut triangles = Vec::with_capacity(result.num_tris());

    for tri_idx in 0..result.num_tris() {
        let tri = result.tri(tri_idx)?;
        triangles.push(tri.map(|uv| lift_to_3d(uv, axis, value)));
    }

    Ok(triangles)
}

/// Append each triangle to `sink` as three new points and one triangle over them.
pub fn emit_triangles<S: MeshSink + ?Sized>(triangles: &[Triangle3], sink: &mut S) {
    for [a, b, c] in triangles {
        let idx_a = sink.add_point(*a);
        let idx_b = sink.add_point(*b);
        let idx_c = sink.add_point(*c);
        sink.add_triangle(idx_a, idx_b, idx_c);
    }
}
