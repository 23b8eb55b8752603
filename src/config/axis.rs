//! Per-axis configuration from TOML.

use serde::Deserialize;

/// Configuration for a single linear axis.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Full steps per millimetre of travel (leadscrew pitch × motor
    /// resolution, after any microstepping set on the driver).
    pub steps_per_mm: f32,
}

impl AxisConfig {
    /// Whether the calibration value is usable.
    pub fn is_valid(&self) -> bool {
        self.steps_per_mm.is_finite() && self.steps_per_mm > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        assert!(AxisConfig { steps_per_mm: 80.0 }.is_valid());
        assert!(!AxisConfig { steps_per_mm: 0.0 }.is_valid());
        assert!(!AxisConfig { steps_per_mm: -4.0 }.is_valid());
        assert!(!AxisConfig { steps_per_mm: f32::NAN }.is_valid());
    }
}
