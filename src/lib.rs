//! # jog-trainer
//!
//! Two-axis jog trainer controller with a minimal G-code linear-move dialect
//! and embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Line protocol**: one command per line, diagnostics plus an `ok`
//!   acknowledgment for every handled linear move
//! - **Configuration-driven**: per-axis calibration and default feedrate in TOML
//! - **embedded-hal 1.0**: `OutputPin`/`InputPin` for STEP/DIR/EN and limit
//!   switches, `DelayNs` for timing
//! - **no_std compatible**: core library works without standard library
//! - **Cooperative safety gating**: feed hold, pause, reset and homing flags
//!   re-checked once per interpolation step
//! - **Capability injection**: actuators, limit switches, indicator, clock and
//!   console are traits, so the core runs against simulated hardware in tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jog_trainer::{JogTrainer, SafetyState};
//!
//! // Load calibration from TOML
//! let config = jog_trainer::load_config("trainer.toml")?;
//!
//! // Safety flags live behind a shared reference so a realtime path
//! // (serial ISR, panic button) can assert them mid-move.
//! let safety = SafetyState::new();
//!
//! let mut trainer = JogTrainer::builder()
//!     .stepper_x(stepper_x)
//!     .stepper_y(stepper_y)
//!     .limit_x(limit_x)
//!     .limit_y(limit_y)
//!     .buzzer(buzzer)
//!     .clock(clock)
//!     .delay(delay)
//!     .console(console)
//!     .calibration_from(&config)
//!     .safety(&safety)
//!     .build()?;
//!
//! // One line in, zero or more lines out
//! trainer.handle_line("G1 X10 Y10 F600");
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and the stdout console
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod hal;
pub mod machine;

// Re-exports for ergonomic API
pub use config::{Calibration, MachineConfig, validate_config};
pub use error::{Error, Result};
pub use hal::{Actuator, Clock, Console, DateTime, Direction, Indicator, LimitSwitch};
pub use machine::{JogTrainer, JogTrainerBuilder, MoveRequest, Position, SafetyState};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{FeedRate, Millimeters, Steps};
