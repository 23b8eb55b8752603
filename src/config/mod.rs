//! Configuration module for jog-trainer.
//!
//! Provides types for loading and validating axis calibration and motion
//! defaults from TOML files (with `std` feature) or pre-parsed data.

mod axis;
mod calibration;
#[cfg(feature = "std")]
mod loader;
mod machine;
pub mod units;
mod validation;

pub use axis::AxisConfig;
pub use calibration::Calibration;
pub use machine::{AxesConfig, MachineConfig, MotionConfig};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{FeedRate, Millimeters, Steps};
