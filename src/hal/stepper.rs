//! STEP/DIR/EN pulse-train actuator.
//!
//! Generic over embedded-hal 1.0 pin types.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::{Actuator, Direction};

/// Stepper driver actuator pulsing STEP/DIR/EN pins.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `EN`: ENABLE pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
///
/// The enable pin is treated as active low (TB6600-style drivers).
pub struct PulseActuator<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (high = positive travel, or inverted).
    dir_pin: DIR,

    /// ENABLE pin (low = energized).
    enable_pin: EN,

    /// Delay provider for pulse timing.
    delay: DELAY,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,
}

impl<STEP, DIR, EN, DELAY> PulseActuator<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new actuator. The driver starts disabled.
    pub fn new(step_pin: STEP, dir_pin: DIR, enable_pin: EN, delay: DELAY) -> Self {
        let mut actuator = Self {
            step_pin,
            dir_pin,
            enable_pin,
            delay,
            invert_direction: false,
        };
        actuator.disable();
        actuator
    }

    /// Invert the DIR pin logic.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    fn set_direction(&mut self, direction: Direction) {
        let pin_high = match direction {
            Direction::Positive => !self.invert_direction,
            Direction::Negative => self.invert_direction,
        };

        if pin_high {
            let _ = self.dir_pin.set_high();
        } else {
            let _ = self.dir_pin.set_low();
        }
    }
}

impl<STEP, DIR, EN, DELAY> Actuator for PulseActuator<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    fn enable(&mut self) {
        // LOW to enable TB6600-style drivers
        let _ = self.enable_pin.set_low();
    }

    fn disable(&mut self) {
        let _ = self.enable_pin.set_high();
    }

    fn step(&mut self, direction: Direction, count: u32, pulse_delay_us: u32) {
        self.set_direction(direction);
        self.enable();
        for _ in 0..count {
            let _ = self.step_pin.set_high();
            self.delay.delay_us(pulse_delay_us);
            let _ = self.step_pin.set_low();
            self.delay.delay_us(pulse_delay_us);
        }
        self.disable();
    }
}
