//! Calibration constants derived from machine configuration.

use super::machine::MachineConfig;
use super::units::{FeedRate, Millimeters, Steps};

/// Derived calibration computed once from [`MachineConfig`].
///
/// Set at construction, immutable thereafter, shared read-only by the motion
/// planner and the G-code translator.
#[derive(Debug, Clone, Copy)]
pub struct Calibration {
    /// Steps per millimetre of X travel.
    pub steps_per_mm_x: f32,

    /// Steps per millimetre of Y travel.
    pub steps_per_mm_y: f32,

    /// Feedrate applied when a move requests none.
    pub default_feedrate: FeedRate,
}

impl Calibration {
    /// Compute calibration from machine configuration.
    pub fn from_config(config: &MachineConfig) -> Self {
        Self {
            steps_per_mm_x: config.axes.x.steps_per_mm,
            steps_per_mm_y: config.axes.y.steps_per_mm,
            default_feedrate: config.motion.default_feedrate,
        }
    }

    /// Build calibration directly from raw constants.
    pub fn new(steps_per_mm_x: f32, steps_per_mm_y: f32, default_feedrate: FeedRate) -> Self {
        Self {
            steps_per_mm_x,
            steps_per_mm_y,
            default_feedrate,
        }
    }

    /// Convert an X target in millimetres to whole steps.
    #[inline]
    pub fn x_steps(&self, mm: Millimeters) -> Steps {
        Steps::from_millimeters(mm, self.steps_per_mm_x)
    }

    /// Convert a Y target in millimetres to whole steps.
    #[inline]
    pub fn y_steps(&self, mm: Millimeters) -> Steps {
        Steps::from_millimeters(mm, self.steps_per_mm_y)
    }

    /// Convert an X step position to millimetres.
    #[inline]
    pub fn x_millimeters(&self, steps: Steps) -> Millimeters {
        steps.to_millimeters(self.steps_per_mm_x)
    }

    /// Convert a Y step position to millimetres.
    #[inline]
    pub fn y_millimeters(&self, steps: Steps) -> Millimeters {
        steps.to_millimeters(self.steps_per_mm_y)
    }
}
