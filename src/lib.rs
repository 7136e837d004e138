//! # projected_delaunay
//!
//! Delaunay triangulation of 3D point clouds on an axis-aligned plane.
//!
//! The cloud is flattened onto the XY, YZ or ZX plane, triangulated in 2D, and every triangle is
//! lifted back into 3D with the dropped coordinate set to a single value derived from the cloud
//! (its minimum, mean or maximum on that axis, or zero).
#![forbid(unsafe_code)]
#![deny(unused, clippy::incompatible_msrv)]
#![warn(clippy::all, clippy::missing_const_for_fn)]

pub use axis::{Axis, compute_limit_value, select_axis};
pub use config::{LimitMode, PipelineConfig, PlaneOrientation, ScanMode};
pub use error::PlanarizeError;
pub use host::DelaunaySop;
pub use mesh::{MeshSink, TriangleMesh};
pub use pipeline::{Outcome, PipelineStats, ProjectedDelaunay};
pub use projection::build_planar_coords;
pub use triangulator::{DelaunatorTriangulator, TriangulationResult, Triangulator};

pub mod axis;
pub mod config;
pub mod error;
pub mod host;
pub mod mesh;
pub mod pipeline;
mod predicates;
pub mod projection;
pub mod triangulator;
mod utils;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use utils::types::{Vertex2, Vertex3};
