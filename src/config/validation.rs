//! Configuration validation.

use crate::error::{Error, Result};

use super::MachineConfig;

/// Validate a machine configuration.
///
/// Checks:
/// - Both steps-per-mm calibrations are finite and > 0
/// - The default feedrate is > 0
pub fn validate_config(config: &MachineConfig) -> Result<()> {
    if !config.axes.x.is_valid() {
        return Err(Error::InvalidStepsPerMm {
            axis: 'X',
            value: config.axes.x.steps_per_mm,
        });
    }

    if !config.axes.y.is_valid() {
        return Err(Error::InvalidStepsPerMm {
            axis: 'Y',
            value: config.axes.y.steps_per_mm,
        });
    }

    if !config.motion.default_feedrate.is_positive() {
        return Err(Error::InvalidFeedrate(config.motion.default_feedrate.value()));
    }

    Ok(())
}
