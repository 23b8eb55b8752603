//! Piezo buzzer indicator.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::Indicator;

/// Piezo buzzer driven from a GPIO pin.
pub struct GpioBuzzer<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    pin: PIN,
    delay: DELAY,
}

impl<PIN, DELAY> GpioBuzzer<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new buzzer. The pin is driven low (silent).
    pub fn new(pin: PIN, delay: DELAY) -> Self {
        let mut buzzer = Self { pin, delay };
        let _ = buzzer.pin.set_low();
        buzzer
    }
}

impl<PIN, DELAY> Indicator for GpioBuzzer<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    fn beep(&mut self, duration_ms: u32) {
        let _ = self.pin.set_high();
        self.delay.delay_ms(duration_ms);
        let _ = self.pin.set_low();
    }
}
