//! Hardware capability traits for jog-trainer.
//!
//! The controller core never touches pins directly: each piece of hardware is
//! a small trait injected at construction, so the core runs unchanged against
//! real drivers or simulated hardware in tests.

mod buzzer;
mod stepper;
mod switch;

pub use buzzer::GpioBuzzer;
pub use stepper::PulseActuator;
pub use switch::ActiveLowSwitch;

use core::fmt;

/// Direction of travel along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward increasing step counts.
    Positive,
    /// Toward decreasing step counts (and the homing switch).
    Negative,
}

impl Direction {
    /// Get direction from a signed step delta.
    #[inline]
    pub fn from_delta(delta: i64) -> Self {
        if delta >= 0 {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }
}

/// One axis drive: enable, disable, emit a directional pulse train.
pub trait Actuator {
    /// Energize the motor driver.
    fn enable(&mut self);

    /// De-energize the motor driver.
    fn disable(&mut self);

    /// Emit `count` pulses in `direction`, waiting `pulse_delay_us`
    /// microseconds on each half-period of the STEP signal.
    fn step(&mut self, direction: Direction, count: u32, pulse_delay_us: u32);
}

/// Travel-boundary sensor for one axis.
pub trait LimitSwitch {
    /// Whether the axis is currently at its physical travel boundary.
    fn is_pressed(&mut self) -> bool;
}

/// Audible indicator.
pub trait Indicator {
    /// Sound the indicator for the given duration.
    fn beep(&mut self, duration_ms: u32);
}

/// Calendar clock.
pub trait Clock {
    /// Current calendar timestamp.
    fn now(&mut self) -> DateTime;
}

/// Response side of the operator's character stream.
///
/// Every diagnostic and every `ok` acknowledgment goes through here, one call
/// per output line.
pub trait Console {
    /// Emit one line of text (without trailing newline).
    fn line(&mut self, text: &str);
}

/// Calendar timestamp reported by a [`Clock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    /// Calendar year.
    pub year: u16,
    /// Month, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{} {}:{}:{}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Console writing to stdout (std only).
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct StdoutConsole;

#[cfg(feature = "std")]
impl Console for StdoutConsole {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}
