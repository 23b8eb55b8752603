//! Machine configuration - root configuration structure.

use serde::Deserialize;

use super::axis::AxisConfig;
use super::units::FeedRate;

/// Root configuration structure from TOML.
///
/// ```toml
/// [axes.x]
/// steps_per_mm = 80.0
///
/// [axes.y]
/// steps_per_mm = 80.0
///
/// [motion]
/// default_feedrate_mm_min = 600.0
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    /// The two controlled axes.
    pub axes: AxesConfig,

    /// Motion defaults.
    pub motion: MotionConfig,
}

/// Calibration for both axes.
#[derive(Debug, Clone, Deserialize)]
pub struct AxesConfig {
    /// X axis calibration.
    pub x: AxisConfig,

    /// Y axis calibration.
    pub y: AxisConfig,
}

/// Motion defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct MotionConfig {
    /// Feedrate used when a move does not carry an F word.
    #[serde(rename = "default_feedrate_mm_min")]
    pub default_feedrate: FeedRate,
}
