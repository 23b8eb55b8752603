//! Sequential homing routine.

use embedded_hal::delay::DelayNs;

use crate::config::units::Steps;
use crate::hal::{Actuator, Clock, Console, Direction, Indicator, LimitSwitch};

use super::{JogTrainer, SafetyState};

/// STEP half-period while seeking the switch, microseconds.
const HOMING_PULSE_DELAY_US: u32 = 500;

/// Wait between homing steps, milliseconds. Also the cancellation-check
/// cadence for the pass.
const HOMING_STEP_INTERVAL_MS: u32 = 2;

impl<'s, A, L, B, C, D, W> JogTrainer<'s, A, L, B, C, D, W>
where
    A: Actuator,
    L: LimitSwitch,
    B: Indicator,
    C: Clock,
    D: DelayNs,
    W: Console,
{
    /// Run the homing routine: X fully, then Y, never simultaneously.
    ///
    /// Each axis seeks its switch in the negative direction and is zeroed on
    /// loop exit whether the switch fired or the pass was cancelled; the two
    /// outcomes are indistinguishable afterwards. Y is attempted even when X
    /// was cancelled.
    pub(crate) fn home(&mut self) {
        if !self.safety.begin_homing() {
            self.console.line("Already homing.");
            return;
        }
        self.console.line("Homing started...");

        home_axis(
            &mut self.stepper_x,
            &mut self.limit_x,
            self.safety,
            &mut self.delay,
            &mut self.console,
        );
        self.position.x = Steps::ZERO;

        home_axis(
            &mut self.stepper_y,
            &mut self.limit_y,
            self.safety,
            &mut self.delay,
            &mut self.console,
        );
        self.position.y = Steps::ZERO;

        self.safety.end_homing();
        self.console.line("Homing complete.");
    }
}

/// Drive one axis toward its switch until it reports pressed or the pass is
/// cancelled. The homing flag itself is excluded from the cancellation check
/// since it is set by the call in progress.
fn home_axis<A, L, D, W>(
    stepper: &mut A,
    limit: &mut L,
    safety: &SafetyState,
    delay: &mut D,
    console: &mut W,
) where
    A: Actuator,
    L: LimitSwitch,
    D: DelayNs,
    W: Console,
{
    stepper.enable();
    while !limit.is_pressed() {
        if safety.homing_interrupted() {
            console.line("Homing interrupted.");
            break;
        }
        stepper.step(Direction::Negative, 1, HOMING_PULSE_DELAY_US);
        delay.delay_ms(HOMING_STEP_INTERVAL_MS);
    }
    stepper.disable();
}
