//! Error types for the jog-trainer library.
//!
//! Only configuration loading and controller construction fail structurally.
//! The command layer reports every runtime condition as operator-visible text
//! on the console capability, never as an `Err`.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for configuration and construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Failed to parse TOML configuration
    Parse(heapless::String<128>),
    /// Steps-per-millimeter must be finite and > 0
    InvalidStepsPerMm {
        /// Axis letter ('X' or 'Y')
        axis: char,
        /// Offending configured value
        value: f32,
    },
    /// Default feedrate must be > 0 mm/min
    InvalidFeedrate(f32),
    /// A required hardware capability was not supplied to the builder
    MissingComponent(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    Io(heapless::String<128>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::InvalidStepsPerMm { axis, value } => {
                write!(f, "Invalid steps_per_mm for {} axis: {}. Must be finite and > 0", axis, value)
            }
            Error::InvalidFeedrate(v) => {
                write!(f, "Invalid default feedrate: {}. Must be > 0 mm/min", v)
            }
            Error::MissingComponent(name) => write!(f, "{} is required", name),
            #[cfg(feature = "std")]
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
