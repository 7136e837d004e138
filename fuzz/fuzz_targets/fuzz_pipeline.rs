#![no_main]

use libfuzzer_sys::fuzz_target;
use projected_delaunay::{PipelineConfig, ProjectedDelaunay, TriangleMesh};

fuzz_target!(|data: (Vec<[f64; 3]>, PipelineConfig)| {
    let (points, config) = data;

    let mut mesh = TriangleMesh::new();
    let result = ProjectedDelaunay::new(config).run(&points, &mut mesh);

    match result {
        Ok(stats) => {
            assert_eq!(mesh.num_points(), 3 * mesh.num_triangles());
            assert_eq!(stats.num_triangles, mesh.num_triangles());
            assert!(mesh.is_sound());
        }
        Err(_) => assert!(mesh.is_empty()),
    }
});
