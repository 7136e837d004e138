//! Pipeline configuration as supplied by the host.
//!
//! The host hands over two menu labels per cook. Labels are resolved through the lookup tables
//! below; an unknown label never fails a cook, it falls back to a fixed default.

use core::{fmt, str::FromStr};

use crate::axis::Axis;

/// Plane the point cloud is projected onto.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum PlaneOrientation {
    #[default]
    XY,
    YZ,
    ZX,
}

/// `(menu name, menu label, value)`
const ORIENTATION_TABLE: [(&str, &str, PlaneOrientation); 3] = [
    ("XY", "XY Plane", PlaneOrientation::XY),
    ("YZ", "YZ Plane", PlaneOrientation::YZ),
    ("ZX", "ZX Plane", PlaneOrientation::ZX),
];

impl PlaneOrientation {
    pub const ALL: [Self; 3] = [Self::XY, Self::YZ, Self::ZX];

    /// Orientation used for labels missing from the table.
    pub const FALLBACK: Self = Self::XY;

    /// The menu name, e.g. `"XY"`.
    pub const fn name(self) -> &'static str {
        ORIENTATION_TABLE[self as usize].0
    }

    /// The human readable menu label, e.g. `"XY Plane"`.
    pub const fn label(self) -> &'static str {
        ORIENTATION_TABLE[self as usize].1
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ORIENTATION_TABLE
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|&(_, _, orientation)| orientation)
    }

    /// Resolve a menu name, falling back to [`Self::FALLBACK`] (i.e. dropping `Z`) for unknown names.
    pub fn from_name_or_fallback(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            #[cfg(feature = "logging")]
            log::warn!(
                "Unknown plane orientation {name:?}, falling back to {}",
                Self::FALLBACK
            );
            Self::FALLBACK
        })
    }

    /// The axis that is dropped for this plane.
    pub const fn limited_axis(self) -> Axis {
        match self {
            Self::XY => Axis::Z,
            Self::YZ => Axis::X,
            Self::ZX => Axis::Y,
        }
    }
}

impl fmt::Display for PlaneOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlaneOrientation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| anyhow::Error::msg(format!("Unknown plane orientation {s:?}")))
    }
}

/// How the value of the dropped axis is reinstated after triangulation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum LimitMode {
    Min,
    #[default]
    Center,
    Max,
    Zero,
}

const LIMIT_MODE_TABLE: [(&str, LimitMode); 4] = [
    ("Min", LimitMode::Min),
    ("Center", LimitMode::Center),
    ("Max", LimitMode::Max),
    ("Zero", LimitMode::Zero),
];

impl LimitMode {
    pub const ALL: [Self; 4] = [Self::Min, Self::Center, Self::Max, Self::Zero];

    /// Mode used for labels missing from the table.
    ///
    /// Note this differs from [`LimitMode::default`], which is the preset of a fresh menu.
    pub const FALLBACK: Self = Self::Min;

    pub const fn name(self) -> &'static str {
        LIMIT_MODE_TABLE[self as usize].0
    }

    /// Menu label; identical to the name for limit modes.
    pub const fn label(self) -> &'static str {
        self.name()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        LIMIT_MODE_TABLE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, mode)| mode)
    }

    /// Resolve a menu name, falling back to [`Self::FALLBACK`] for unknown names.
    pub fn from_name_or_fallback(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            #[cfg(feature = "logging")]
            log::warn!("Unknown limit mode {name:?}, falling back to {}", Self::FALLBACK);
            Self::FALLBACK
        })
    }
}

impl fmt::Display for LimitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LimitMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| anyhow::Error::msg(format!("Unknown limit mode {s:?}")))
    }
}

/// Which scan computes the limit value, see [`crate::axis::compute_limit_value`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum ScanMode {
    /// Scan every point's component on the limited axis; the mean divides by the point count.
    #[default]
    Corrected,
    /// Bit-for-bit the scan of the first released node: it walks the flat component buffer from
    /// the axis offset up to `num_points / 3` only.
    Legacy,
}

/// Everything a cook needs besides the points.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct PipelineConfig {
    pub orientation: PlaneOrientation,
    pub limit_mode: LimitMode,
    pub scan: ScanMode,
}

impl PipelineConfig {
    pub const fn new(orientation: PlaneOrientation, limit_mode: LimitMode) -> Self {
        Self {
            orientation,
            limit_mode,
            scan: ScanMode::Corrected,
        }
    }

    /// Build a config from the host's menu labels; unknown labels fall back silently.
    pub fn from_labels(orientation: &str, limit_mode: &str) -> Self {
        Self::new(
            PlaneOrientation::from_name_or_fallback(orientation),
            LimitMode::from_name_or_fallback(limit_mode),
        )
    }

    #[must_use]
    pub const fn with_scan(mut self, scan: ScanMode) -> Self {
        self.scan = scan;
        self
    }

    pub const fn limited_axis(&self) -> Axis {
        self.orientation.limited_axis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_table() {
        for orientation in PlaneOrientation::ALL {
            assert_eq!(
                PlaneOrientation::from_name(orientation.name()),
                Some(orientation)
            );
            assert!(orientation.label().starts_with(orientation.name()));
        }
        assert_eq!(PlaneOrientation::XY.label(), "XY Plane");
        assert_eq!(PlaneOrientation::from_name("xy"), None);
    }

    #[test]
    fn test_limit_mode_table() {
        for mode in LimitMode::ALL {
            assert_eq!(LimitMode::from_name(mode.name()), Some(mode));
            assert_eq!(mode.to_string(), mode.label());
        }
    }

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.orientation, PlaneOrientation::XY);
        assert_eq!(config.limit_mode, LimitMode::Center);
        assert_eq!(config.scan, ScanMode::Corrected);
        assert_eq!(config.limited_axis(), Axis::Z);
    }

    #[test]
    fn test_unknown_labels_fall_back() {
        let config = PipelineConfig::from_labels("XZ", "Median");
        assert_eq!(config.orientation, PlaneOrientation::XY);
        assert_eq!(config.limit_mode, LimitMode::Min);

        let config = PipelineConfig::from_labels("", "");
        assert_eq!(config.limited_axis(), Axis::Z);
        assert_eq!(config.limit_mode, LimitMode::Min);
    }

    #[test]
    fn test_from_labels() {
        let config = PipelineConfig::from_labels("ZX", "Zero");
        assert_eq!(config.limited_axis(), Axis::Y);
        assert_eq!(config.limit_mode, LimitMode::Zero);

        let config = PipelineConfig::from_labels("YZ", "Max").with_scan(ScanMode::Legacy);
        assert_eq!(config.limited_axis(), Axis::X);
        assert_eq!(config.limit_mode, LimitMode::Max);
        assert_eq!(config.scan, ScanMode::Legacy);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("YZ".parse::<PlaneOrientation>().unwrap(), PlaneOrientation::YZ);
        assert_eq!("Center".parse::<LimitMode>().unwrap(), LimitMode::Center);
        assert!("Plane".parse::<PlaneOrientation>().is_err());
        assert!("zero".parse::<LimitMode>().is_err());
    }
}
