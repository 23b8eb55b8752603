//! Coordinated two-axis linear moves.
//!
//! One move runs to completion (or cooperative termination) before the next
//! input line is read. The per-step wait doubles as the cancellation-check
//! cadence: safety flags and limit switches are re-polled once per generated
//! interpolation step, so termination granularity is one step interval.

use embedded_hal::delay::DelayNs;
use libm::sqrtf;

use crate::config::units::{FeedRate, Steps};
use crate::hal::{Actuator, Clock, Console, Direction, Indicator, LimitSwitch};

use super::{JogTrainer, Position};

/// Moves shorter than this are acknowledged without motion.
const MIN_MOVE_MM: f32 = 0.001;

/// Lower bound on the per-step wait, milliseconds.
const MIN_STEP_DELAY_MS: f32 = 1.0;

/// One requested linear move: absolute step target plus feedrate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveRequest {
    /// Absolute target in steps.
    pub target: Position,
    /// Requested feedrate; non-positive values fall back to the default.
    pub feedrate: FeedRate,
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
    /// Execute one coordinated linear move from the current position.
    ///
    /// Commit is non-transactional: whatever position was reached when the
    /// loop ends (completion, limit stop, or cancellation) is kept, and a
    /// handled move always ends with `ok`. Only the guard and the limit
    /// pre-check reject the command without acknowledgment.
    pub fn execute_move(&mut self, request: MoveRequest) {
        if self.safety.motion_blocked() {
            self.console.line("Motion paused/held/homing/reset. Move ignored.");
            return;
        }

        let dx = request.target.x.0 - self.position.x.0;
        let dy = request.target.y.0 - self.position.y.0;

        // Pre-check: a pressed switch blocks the whole move when its axis
        // has any travel, regardless of direction (stricter than jog).
        if dx != 0 && self.limit_x.is_pressed() {
            self.console.line("X limit reached! Move blocked.");
            return;
        }
        if dy != 0 && self.limit_y.is_pressed() {
            self.console.line("Y limit reached! Move blocked.");
            return;
        }

        let fx = dx as f32 / self.calibration.steps_per_mm_x;
        let fy = dy as f32 / self.calibration.steps_per_mm_y;
        let dist_mm = sqrtf(fx * fx + fy * fy);

        if dist_mm < MIN_MOVE_MM {
            self.console.line("No move");
            self.console.line("ok");
            return;
        }

        let feedrate = if request.feedrate.is_positive() {
            request.feedrate
        } else {
            self.calibration.default_feedrate
        };

        let abs_dx = dx.abs();
        let abs_dy = dy.abs();
        let total_steps = abs_dx.max(abs_dy).max(1);

        let move_time_ms = dist_mm / feedrate.value() * 60_000.0;
        let mut step_delay_ms = move_time_ms / total_steps as f32;
        if step_delay_ms < MIN_STEP_DELAY_MS {
            step_delay_ms = MIN_STEP_DELAY_MS;
        }
        let step_delay_us = (step_delay_ms * 1000.0) as u32;

        let mut x = self.position.x.0;
        let mut y = self.position.y.0;
        let step_x = if dx > 0 { 1 } else { -1 };
        let step_y = if dy > 0 { 1 } else { -1 };
        let dir_x = Direction::from_delta(dx);
        let dir_y = Direction::from_delta(dy);
        let mut err = abs_dx - abs_dy;

        for _ in 0..total_steps {
            if self.safety.motion_blocked() {
                self.console
                    .line("Motion interrupted by feed hold/pause/reset/homing.");
                break;
            }

            let e2 = 2 * err;
            if e2 > -abs_dy {
                // Limit is re-polled before the axis advances; a pressed
                // switch ends the entire move, not just this axis.
                if self.limit_x.is_pressed() {
                    break;
                }
                err -= abs_dy;
                x += step_x;
                self.stepper_x.step(dir_x, 1, 0);
            }
            if e2 < abs_dx {
                if self.limit_y.is_pressed() {
                    break;
                }
                err += abs_dx;
                y += step_y;
                self.stepper_y.step(dir_y, 1, 0);
            }

            self.delay.delay_us(step_delay_us);
        }

        self.position.x = Steps(x);
        self.position.y = Steps(y);
        self.console.line("ok");
    }
}
