//! Failure cases of a pipeline run.
//!
//! Fallible operations return [`anyhow::Result`]; the concrete cause is always a
//! [`PlanarizeError`] and can be recovered with [`anyhow::Error::downcast_ref`].

use thiserror::Error;

use crate::axis::Axis;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanarizeError {
    /// The point cloud holds no points at all.
    #[error("input point cloud is empty")]
    EmptyInput,
    /// Fewer than three distinct, non-collinear points remain after projection.
    #[error("cannot triangulate {num_points} projected points: fewer than 3 distinct non-collinear points")]
    DegenerateInput { num_points: usize },
    /// A coordinate is NaN or infinite.
    #[error("coordinate {index} of the planar buffer is not finite")]
    NonFiniteCoordinate { index: usize },
    /// The value reinstated on the dropped axis is NaN or infinite.
    #[error("limit value on axis {axis} is not finite")]
    NonFiniteLimitValue { axis: Axis },
    /// A planar buffer must hold `(u, v)` pairs.
    #[error("planar buffer has odd length {len}")]
    OddCoordinateCount { len: usize },
    /// The triangulator returned an index list that is not made of whole triples.
    #[error("triangle index list has length {len}, which is not a multiple of 3")]
    PartialTriangle { len: usize },
    /// The triangulator referenced a vertex it does not have.
    #[error("triangle references vertex {index}, but only {len} vertices exist")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl PlanarizeError {
    /// Errors that the pipeline maps to an empty mesh instead of failing the run.
    pub const fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::DegenerateInput { .. })
    }
}
