//! Builder pattern for JogTrainer.

use embedded_hal::delay::DelayNs;

use crate::config::{Calibration, MachineConfig};
use crate::error::{Error, Result};
use crate::hal::{Actuator, Clock, Console, Indicator, LimitSwitch};

use super::{JogTrainer, SafetyState};

/// Builder for creating [`JogTrainer`] instances.
pub struct JogTrainerBuilder<'s, A, L, B, C, D, W>
where
    A: Actuator,
    L: LimitSwitch,
    B: Indicator,
    C: Clock,
    D: DelayNs,
    W: Console,
{
    stepper_x: Option<A>,
    stepper_y: Option<A>,
    limit_x: Option<L>,
    limit_y: Option<L>,
    buzzer: Option<B>,
    clock: Option<C>,
    delay: Option<D>,
    console: Option<W>,
    safety: Option<&'s SafetyState>,
    calibration: Option<Calibration>,
}

impl<'s, A, L, B, C, D, W> Default for JogTrainerBuilder<'s, A, L, B, C, D, W>
where
    A: Actuator,
    L: LimitSwitch,
    B: Indicator,
    C: Clock,
    D: DelayNs,
    W: Console,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'s, A, L, B, C, D, W> JogTrainerBuilder<'s, A, L, B, C, D, W>
where
    A: Actuator,
    L: LimitSwitch,
    B: Indicator,
    C: Clock,
    D: DelayNs,
    W: Console,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            stepper_x: None,
            stepper_y: None,
            limit_x: None,
            limit_y: None,
            buzzer: None,
            clock: None,
            delay: None,
            console: None,
            safety: None,
            calibration: None,
        }
    }

    /// Set the X axis actuator.
    pub fn stepper_x(mut self, actuator: A) -> Self {
        self.stepper_x = Some(actuator);
        self
    }

    /// Set the Y axis actuator.
    pub fn stepper_y(mut self, actuator: A) -> Self {
        self.stepper_y = Some(actuator);
        self
    }

    /// Set the X limit switch.
    pub fn limit_x(mut self, switch: L) -> Self {
        self.limit_x = Some(switch);
        self
    }

    /// Set the Y limit switch.
    pub fn limit_y(mut self, switch: L) -> Self {
        self.limit_y = Some(switch);
        self
    }

    /// Set the audible indicator.
    pub fn buzzer(mut self, indicator: B) -> Self {
        self.buzzer = Some(indicator);
        self
    }

    /// Set the calendar clock.
    pub fn clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the inter-step delay provider.
    pub fn delay(mut self, delay: D) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the operator console.
    pub fn console(mut self, console: W) -> Self {
        self.console = Some(console);
        self
    }

    /// Set the shared safety flags.
    pub fn safety(mut self, safety: &'s SafetyState) -> Self {
        self.safety = Some(safety);
        self
    }

    /// Set the axis calibration directly.
    pub fn calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = Some(calibration);
        self
    }

    /// Derive calibration from a machine configuration.
    pub fn calibration_from(self, config: &MachineConfig) -> Self {
        self.calibration(Calibration::from_config(config))
    }

    /// Build the controller.
    ///
    /// # Errors
    ///
    /// Returns an error if any capability, the safety state, or the
    /// calibration is missing.
    pub fn build(self) -> Result<JogTrainer<'s, A, L, B, C, D, W>> {
        let stepper_x = self.stepper_x.ok_or(Error::MissingComponent("stepper_x"))?;
        let stepper_y = self.stepper_y.ok_or(Error::MissingComponent("stepper_y"))?;
        let limit_x = self.limit_x.ok_or(Error::MissingComponent("limit_x"))?;
        let limit_y = self.limit_y.ok_or(Error::MissingComponent("limit_y"))?;
        let buzzer = self.buzzer.ok_or(Error::MissingComponent("buzzer"))?;
        let clock = self.clock.ok_or(Error::MissingComponent("clock"))?;
        let delay = self.delay.ok_or(Error::MissingComponent("delay"))?;
        let console = self.console.ok_or(Error::MissingComponent("console"))?;
        let safety = self.safety.ok_or(Error::MissingComponent("safety"))?;
        let calibration = self
            .calibration
            .ok_or(Error::MissingComponent("calibration"))?;

        Ok(JogTrainer::new(
            stepper_x,
            stepper_y,
            limit_x,
            limit_y,
            buzzer,
            clock,
            delay,
            console,
            safety,
            calibration,
        ))
    }
}
