//! Per-instance state of the node living in the host.
//!
//! The host creates one [`DelaunaySop`] per node, pushes the menu values into it whenever they
//! change, and calls [`DelaunaySop::cook`] once per frame with the input points and the output
//! mesh. A cook never fails from the host's point of view.

use crate::{
    config::{LimitMode, PipelineConfig, PlaneOrientation},
    mesh::TriangleMesh,
    pipeline::{PipelineStats, ProjectedDelaunay},
    utils::types::Vertex3,
};

/// Menu parameter holding the plane orientation.
pub const PLANE_ORIENTATION_PAR: &str = "Planeorientation";
/// Menu parameter holding the limit mode.
pub const LIMIT_MODE_PAR: &str = "Limitmode";

#[derive(Debug, Default, Clone)]
pub struct DelaunaySop {
    pipeline: ProjectedDelaunay,
    execute_count: u64,
    last_stats: Option<PipelineStats>,
    last_error: Option<String>,
}

impl DelaunaySop {
    pub const fn new(config: PipelineConfig) -> Self {
        Self {
            pipeline: ProjectedDelaunay::new(config),
            execute_count: 0,
            last_stats: None,
            last_error: None,
        }
    }

    pub const fn config(&self) -> &PipelineConfig {
        self.pipeline.config()
    }

    /// Update the config from the menu labels; unknown labels fall back to the defaults.
    pub fn set_parameters(&mut self, orientation: &str, limit_mode: &str) {
        let scan = self.config().scan;
        self.pipeline
            .set_config(PipelineConfig::from_labels(orientation, limit_mode).with_scan(scan));
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.pipeline.set_config(config);
    }

    /// Replace the content of `output` with the triangulation of `points`.
    ///
    /// Failures are logged and leave `output` empty; the reason is kept in [`Self::last_error`].
    pub fn cook(&mut self, points: &[Vertex3], output: &mut TriangleMesh) -> Option<PipelineStats> {
        self.execute_count += 1;
        output.clear();

        match self.pipeline.run(points, output) {
            Ok(stats) => {
                self.last_stats = Some(stats);
                self.last_error = None;
            }
            Err(e) => {
                #[cfg(feature = "logging")]
                log::error!("Cook {} failed: {e}", self.execute_count);
                output.clear();
                self.last_stats = None;
                self.last_error = Some(e.to_string());
            }
        }

        self.last_stats
    }

    /// Number of cooks so far, failed ones included.
    pub const fn execute_count(&self) -> u64 {
        self.execute_count
    }

    pub const fn last_stats(&self) -> Option<&PipelineStats> {
        self.last_stats.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// `(name, label)` pairs of the orientation menu, default first.
    pub fn orientation_menu() -> Vec<(&'static str, &'static str)> {
        PlaneOrientation::ALL
            .iter()
            .map(|o| (o.name(), o.label()))
            .collect()
    }

    /// `(name, label)` pairs of the limit mode menu, in menu order.
    pub fn limit_mode_menu() -> Vec<(&'static str, &'static str)> {
        LimitMode::ALL.iter().map(|m| (m.name(), m.label())).collect()
    }
}
