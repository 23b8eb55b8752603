//! Active-low limit switch input.

use embedded_hal::digital::InputPin;

use super::LimitSwitch;

/// Limit switch wired active low against an internal pull-up.
///
/// A LOW read means the switch is pressed. Read failures are treated as
/// "open" so a flaky input can never latch the machine against its stop.
pub struct ActiveLowSwitch<PIN>
where
    PIN: InputPin,
{
    pin: PIN,
}

impl<PIN> ActiveLowSwitch<PIN>
where
    PIN: InputPin,
{
    /// Create a new switch from an input pin.
    pub fn new(pin: PIN) -> Self {
        Self { pin }
    }

    /// Release the underlying pin.
    pub fn release(self) -> PIN {
        self.pin
    }
}

impl<PIN> LimitSwitch for ActiveLowSwitch<PIN>
where
    PIN: InputPin,
{
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}
