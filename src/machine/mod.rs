//! Machine controller core.
//!
//! Command dispatch, safety gating, the linear-interpolation motion planner
//! and the homing routine. Everything hardware-shaped is reached through the
//! capability traits in [`crate::hal`].

mod builder;
mod dispatch;
mod gcode;
mod homing;
mod planner;
mod position;
mod safety;

pub use builder::JogTrainerBuilder;
pub use dispatch::{Command, JogDirection};
pub use planner::MoveRequest;
pub use position::Position;
pub use safety::SafetyState;

use embedded_hal::delay::DelayNs;

use crate::config::Calibration;
use crate::hal::{Actuator, Clock, Console, Indicator, LimitSwitch};

/// Two-axis jog trainer controller.
///
/// Owns the hardware capabilities and all mutable machine state except the
/// safety flags, which are borrowed so an external realtime path can assert
/// them while a move is in progress.
///
/// Generic over:
/// - `A`: axis actuator (one per axis, same driver type)
/// - `L`: limit switch
/// - `B`: audible indicator
/// - `C`: calendar clock
/// - `D`: delay provider for inter-step timing
/// - `W`: console for diagnostics and acknowledgments
pub struct JogTrainer<'s, A, L, B, C, D, W>
where
    A: Actuator,
    L: LimitSwitch,
    B: Indicator,
    C: Clock,
    D: DelayNs,
    W: Console,
{
    /// X axis drive.
    stepper_x: A,

    /// Y axis drive.
    stepper_y: A,

    /// X travel-boundary sensor.
    limit_x: L,

    /// Y travel-boundary sensor.
    limit_y: L,

    /// Audible indicator.
    buzzer: B,

    /// Calendar clock.
    clock: C,

    /// Inter-step delay provider.
    delay: D,

    /// Operator response stream.
    console: W,

    /// Shared motion-gating flags.
    safety: &'s SafetyState,

    /// Axis calibration, immutable after construction.
    calibration: Calibration,

    /// Current machine position in steps.
    position: Position,
}

impl<'s, A, L, B, C, D, W> JogTrainer<'s, A, L, B, C, D, W>
where
    A: Actuator,
    L: LimitSwitch,
    B: Indicator,
    C: Clock,
    D: DelayNs,
    W: Console,
{
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        stepper_x: A,
        stepper_y: A,
        limit_x: L,
        limit_y: L,
        buzzer: B,
        clock: C,
        delay: D,
        console: W,
        safety: &'s SafetyState,
        calibration: Calibration,
    ) -> Self {
        Self {
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
            position: Position::ORIGIN,
        }
    }

    /// Start building a controller.
    pub fn builder() -> JogTrainerBuilder<'s, A, L, B, C, D, W> {
        JogTrainerBuilder::new()
    }

    /// Current machine position in steps.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The axis calibration in use.
    #[inline]
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// The shared safety flags.
    #[inline]
    pub fn safety(&self) -> &'s SafetyState {
        self.safety
    }
}
