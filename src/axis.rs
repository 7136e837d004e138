//! Axis selection and the value the dropped axis is reinstated with.

use core::fmt;

use crate::{
    config::{LimitMode, PlaneOrientation, ScanMode},
    utils::types::Vertex3,
};

/// A coordinate axis of the input point cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Index of this axis in a `[x, y, z]` position.
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// The two slots that survive when this axis is dropped, in ascending order.
    pub const fn surviving(self) -> [usize; 2] {
        match self {
            Self::X => [1, 2],
            Self::Y => [0, 2],
            Self::Z => [0, 1],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::Y => f.write_str("Y"),
            Self::Z => f.write_str("Z"),
        }
    }
}

/// Map a plane orientation label to the axis it drops.
///
/// `"XY" -> Z`, `"YZ" -> X`, `"ZX" -> Y`; any other label drops `Z`.
pub fn select_axis(orientation_label: &str) -> Axis {
    PlaneOrientation::from_name_or_fallback(orientation_label).limited_axis()
}

/// Compute the value every reconstructed vertex gets on `axis`.
///
/// [`LimitMode::Zero`] returns `0.0` without looking at `points`. For the other modes an empty
/// cloud also yields `0.0`.
///
/// With [`ScanMode::Corrected`] `Min`/`Max`/`Center` are the minimum, maximum and mean of the
/// `axis` component over all points. [`ScanMode::Legacy`] reproduces the scan the first node
/// shipped with, see [`legacy_limit_value`].
pub fn compute_limit_value(points: &[Vertex3], axis: Axis, mode: LimitMode, scan: ScanMode) -> f64 {
    if mode == LimitMode::Zero || points.is_empty() {
        return 0.0;
    }

    match scan {
        ScanMode::Corrected => corrected_limit_value(points, axis, mode),
        ScanMode::Legacy => legacy_limit_value(points, axis, mode),
    }
}

fn corrected_limit_value(points: &[Vertex3], axis: Axis, mode: LimitMode) -> f64 {
    let slot = axis.slot();
    let components = points.iter().map(|p| p[slot]);

    match mode {
        LimitMode::Min => components.fold(f64::INFINITY, f64::min),
        LimitMode::Max => components.fold(f64::NEG_INFINITY, f64::max),
        LimitMode::Center => mean(components, points.len()),
        LimitMode::Zero => 0.0,
    }
}

/// Sum of `components` divided by `n`, rescaled when the plain sum overflows.
fn mean<I: Iterator<Item = f64> + Clone>(components: I, n: usize) -> f64 {
    let n = n as f64;
    let sum: f64 = components.clone().sum();
    if sum.is_finite() {
        sum / n
    } else {
        components.map(|c| c / n).sum()
    }
}

/// The scan treats the cloud as a flat `[x0, y0, z0, x1, ...]` buffer and visits the flat indices
/// `axis, axis + 3, ...` below `num_points / 3`, so only the first ninth of the cloud is seen.
/// `Min`/`Max` are seeded with the first point's component, `Center` divides the partial sum by
/// `num_points`.
///
/// `points` must not be empty.
fn legacy_limit_value(points: &[Vertex3], axis: Axis, mode: LimitMode) -> f64 {
    let num_points = points.len();
    let flat = |i: usize| points[i / 3][i % 3];
    let visited = (axis.slot()..num_points / 3).step_by(3).map(flat);

    match mode {
        LimitMode::Min => visited.fold(flat(axis.slot()), |value, c| c.min(value)),
        LimitMode::Max => visited.fold(flat(axis.slot()), f64::max),
        LimitMode::Center => mean(visited, num_points),
        LimitMode::Zero => 0.0,
    }
}
