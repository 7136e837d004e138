//! WASM bindings for the projected Delaunay triangulation.
//!
//! Provides a single function `triangulate` that takes flat 3D coordinates and the two menu labels,
//! and returns the mesh as flat typed arrays.

use crate::{
    config::PipelineConfig,
    mesh::MeshSink,
    pipeline::ProjectedDelaunay,
    utils::types::{Vertex3, VertexIdx},
};
use wasm_bindgen::prelude::*;

/// Mesh sink writing straight into the buffers handed to JS.
#[derive(Default)]
struct FlatMesh {
    points: Vec<f64>,
    triangles: Vec<u32>,
}

impl MeshSink for FlatMesh {
    fn add_point(&mut self, position: Vertex3) -> VertexIdx {
        self.points.extend_from_slice(&position);
        self.points.len() / 3 - 1
    }

    fn add_triangle(&mut self, a: VertexIdx, b: VertexIdx, c: VertexIdx) {
        self.triangles.extend([a as u32, b as u32, c as u32]);
    }
}

/// Projected 2D Delaunay triangulation of a 3D point cloud.
///
/// # Arguments
/// * `points` - Flat array of 3D coordinates: [x1, y1, z1, x2, y2, z2, ...]
/// * `orientation` - `"XY"`, `"YZ"` or `"ZX"`; anything else is treated as `"XY"`
/// * `limit_mode` - `"Min"`, `"Center"`, `"Max"` or `"Zero"`; anything else is treated as `"Min"`
///
/// # Returns
/// A JavaScript object with:
/// * `points` - `Float64Array` of flat 3D coordinates, three fresh points per triangle
/// * `triangles` - `Uint32Array` of point indices, three per triangle
/// * `outcome` - `"Triangulated"`, `"EmptyInput"` or `"DegenerateInput"`
#[wasm_bindgen(js_name = triangulate)]
pub fn triangulate_projected(
    points: &[f64],
    orientation: &str,
    limit_mode: &str,
) -> Result<JsValue, JsValue> {
    let vertices = parse_vertices_3d(points)?;

    let pipeline = ProjectedDelaunay::new(PipelineConfig::from_labels(orientation, limit_mode));
    let mut mesh = FlatMesh::default();
    let stats = pipeline
        .run(&vertices, &mut mesh)
        .map_err(|e| JsValue::from_str(&format!("triangulation failed: {}", e)))?;

    let result = js_sys::Object::new();
    js_sys::Reflect::set(
        &result,
        &"points".into(),
        &js_sys::Float64Array::from(mesh.points.as_slice()),
    )?;
    js_sys::Reflect::set(
        &result,
        &"triangles".into(),
        &js_sys::Uint32Array::from(mesh.triangles.as_slice()),
    )?;
    js_sys::Reflect::set(
        &result,
        &"outcome".into(),
        &format!("{:?}", stats.outcome).into(),
    )?;
    Ok(result.into())
}

fn parse_vertices_3d(flat: &[f64]) -> Result<Vec<Vertex3>, JsValue> {
    if flat.len() % 3 != 0 {
        return Err(JsValue::from_str(
            "Points must have a length divisible by 3 (triples of x, y, z)",
        ));
    }
    Ok(flat.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect())
}
