//! Command classification and line dispatch.

use core::fmt::Write as _;

use embedded_hal::delay::DelayNs;

use crate::hal::{Actuator, Clock, Console, Direction, Indicator, LimitSwitch};

use super::JogTrainer;

/// Steps moved by one jog command.
pub(crate) const JOG_STEPS: i64 = 200;

/// STEP half-period during a jog pulse train, microseconds.
pub(crate) const JOG_PULSE_DELAY_US: u32 = 500;

/// Indicator duration for the BUZ command, milliseconds.
const BEEP_MS: u32 = 200;

/// Jog direction, one cardinal direction per command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JogDirection {
    /// `X+`
    XPlus,
    /// `X-`
    XMinus,
    /// `Y+`
    YPlus,
    /// `Y-`
    YMinus,
}

/// A classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Fixed-distance jog in one cardinal direction.
    Jog(JogDirection),
    /// `LIM?` limit switch query.
    LimitQuery,
    /// `BUZ` indicator test.
    Buzz,
    /// `CLOCK` timestamp query.
    Clock,
    /// `FEEDHOLD` / `HOLD`.
    FeedHold,
    /// `PAUSE`.
    Pause,
    /// `CYCLE` / `START` / `RESUME`.
    CycleStart,
    /// `RESET`.
    Reset,
    /// `HOME`.
    Home,
    /// Any line beginning with `G`, handed to the translator verbatim.
    Gcode(&'a str),
    /// Anything else.
    Unknown,
}

impl<'a> Command<'a> {
    /// Classify one trimmed input line. Matching is case-insensitive; fixed
    /// tokens match exactly, G-code is recognized by its leading letter only.
    pub fn parse(line: &'a str) -> Self {
        if line.eq_ignore_ascii_case("X+") {
            Command::Jog(JogDirection::XPlus)
        } else if line.eq_ignore_ascii_case("X-") {
            Command::Jog(JogDirection::XMinus)
        } else if line.eq_ignore_ascii_case("Y+") {
            Command::Jog(JogDirection::YPlus)
        } else if line.eq_ignore_ascii_case("Y-") {
            Command::Jog(JogDirection::YMinus)
        } else if line.eq_ignore_ascii_case("LIM?") {
            Command::LimitQuery
        } else if line.eq_ignore_ascii_case("BUZ") {
            Command::Buzz
        } else if line.eq_ignore_ascii_case("CLOCK") {
            Command::Clock
        } else if line.eq_ignore_ascii_case("FEEDHOLD") || line.eq_ignore_ascii_case("HOLD") {
            Command::FeedHold
        } else if line.eq_ignore_ascii_case("PAUSE") {
            Command::Pause
        } else if line.eq_ignore_ascii_case("CYCLE")
            || line.eq_ignore_ascii_case("START")
            || line.eq_ignore_ascii_case("RESUME")
        {
            Command::CycleStart
        } else if line.eq_ignore_ascii_case("RESET") {
            Command::Reset
        } else if line.eq_ignore_ascii_case("HOME") {
            Command::Home
        } else if line.as_bytes().first().is_some_and(|b| b.eq_ignore_ascii_case(&b'G')) {
            Command::Gcode(line)
        } else {
            Command::Unknown
        }
    }
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
    /// Process one input line.
    ///
    /// An empty line is a no-op with no output. Every other line produces
    /// zero or more diagnostic lines; handled motion commands additionally
    /// end with `ok`.
    pub fn handle_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }

        match Command::parse(line.trim()) {
            Command::Jog(direction) => self.jog(direction),
            Command::LimitQuery => self.report_limits(),
            Command::Buzz => {
                self.console.line("Buzzer test");
                self.buzzer.beep(BEEP_MS);
            }
            Command::Clock => self.report_time(),
            Command::FeedHold => {
                self.safety.hold();
                self.console.line("Feed hold activated. Motion paused.");
            }
            Command::Pause => {
                self.safety.pause();
                self.console.line("Pause activated. Motion paused.");
            }
            Command::CycleStart => self.cycle_start(),
            Command::Reset => self.reset(),
            Command::Home => self.home(),
            Command::Gcode(gcode_line) => self.handle_gcode(gcode_line),
            Command::Unknown => self.console.line(
                "Unknown command. Use X+/X-/Y+/Y-/LIM?/BUZ/CLOCK/FEEDHOLD/PAUSE/CYCLE/RESET/HOME or G-code",
            ),
        }
    }

    /// Fixed-distance jog. "+" directions are blocked by a pressed limit
    /// switch; "-" directions are never limit-checked (they travel away
    /// from the only switch the axis has).
    fn jog(&mut self, direction: JogDirection) {
        if self.safety.motion_blocked() {
            self.console.line("Motion paused/held/homing/reset. Jog ignored.");
            return;
        }

        match direction {
            JogDirection::XPlus => {
                if self.limit_x.is_pressed() {
                    self.console.line("X+ limit reached! Movement blocked.");
                } else {
                    self.console.line("Jog X+");
                    self.stepper_x
                        .step(Direction::Positive, JOG_STEPS as u32, JOG_PULSE_DELAY_US);
                    self.position.move_x(JOG_STEPS);
                }
            }
            JogDirection::XMinus => {
                self.console.line("Jog X-");
                self.stepper_x
                    .step(Direction::Negative, JOG_STEPS as u32, JOG_PULSE_DELAY_US);
                self.position.move_x(-JOG_STEPS);
            }
            JogDirection::YPlus => {
                if self.limit_y.is_pressed() {
                    self.console.line("Y+ limit reached! Movement blocked.");
                } else {
                    self.console.line("Jog Y+");
                    self.stepper_y
                        .step(Direction::Positive, JOG_STEPS as u32, JOG_PULSE_DELAY_US);
                    self.position.move_y(JOG_STEPS);
                }
            }
            JogDirection::YMinus => {
                self.console.line("Jog Y-");
                self.stepper_y
                    .step(Direction::Negative, JOG_STEPS as u32, JOG_PULSE_DELAY_US);
                self.position.move_y(-JOG_STEPS);
            }
        }
    }

    fn report_limits(&mut self) {
        let x = if self.limit_x.is_pressed() { "PRESSED" } else { "OPEN" };
        let y = if self.limit_y.is_pressed() { "PRESSED" } else { "OPEN" };

        let mut msg: heapless::String<48> = heapless::String::new();
        let _ = write!(msg, "X limit: {} | Y limit: {}", x, y);
        self.console.line(&msg);
    }

    fn report_time(&mut self) {
        let now = self.clock.now();

        let mut msg: heapless::String<48> = heapless::String::new();
        let _ = write!(msg, "Current time: {}", now);
        self.console.line(&msg);
    }

    fn cycle_start(&mut self) {
        if self.safety.resume() {
            self.console.line("Cycle start. Motion resumed.");
        } else {
            self.console.line("Not paused or held. Nothing to resume.");
        }
    }

    /// Synchronous reset: clears hold/pause, zeroes both axes. The resetting
    /// flag is only observable from an interrupt-style path during the call.
    fn reset(&mut self) {
        self.safety.begin_reset();
        self.console
            .line("Resetting system. All motion stopped. State reset.");
        self.position.reset();
        self.safety.end_reset();
    }
}
