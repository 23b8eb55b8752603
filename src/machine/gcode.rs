//! Minimal G-code translator.
//!
//! `G0` and `G1` are handled identically as linear moves in absolute machine
//! millimetres. Everything else answers with a diagnostic but keeps the
//! request/response cadence alive by still acknowledging the line.

use embedded_hal::delay::DelayNs;

use crate::config::units::{FeedRate, Millimeters};
use crate::hal::{Actuator, Clock, Console, Indicator, LimitSwitch};

use super::planner::MoveRequest;
use super::{JogTrainer, Position};

impl<'s, A, L, B, C, D, W> JogTrainer<'s, A, L, B, C, D, W>
where
    A: Actuator,
    L: LimitSwitch,
    B: Indicator,
    C: Clock,
    D: DelayNs,
    W: Console,
{
    /// Translate one G-code line and delegate to the motion planner.
    pub(crate) fn handle_gcode(&mut self, line: &str) {
        if !has_linear_prefix(line) {
            self.console.line("Unknown or unsupported G-code");
            self.console.line("ok");
            return;
        }

        // A missing X or Y keeps the axis exactly where it is (converting
        // the current step count through millimetres would re-round it).
        let target_x = match parse_field(line, 'X') {
            Some(mm) => self.calibration.x_steps(Millimeters(mm)),
            None => self.position.x,
        };
        let target_y = match parse_field(line, 'Y') {
            Some(mm) => self.calibration.y_steps(Millimeters(mm)),
            None => self.position.y,
        };
        let feedrate = parse_field(line, 'F')
            .map(FeedRate)
            .unwrap_or(self.calibration.default_feedrate);

        self.execute_move(MoveRequest {
            target: Position {
                x: target_x,
                y: target_y,
            },
            feedrate,
        });
    }
}

/// Whether the line is a linear move (`G0` or `G1`, case-insensitive).
fn has_linear_prefix(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= 2
        && bytes[0].eq_ignore_ascii_case(&b'G')
        && (bytes[1] == b'0' || bytes[1] == b'1')
}

/// Extract a numeric field: scan for the field letter, consume the following
/// run of digits, `.` and `-`. An empty or malformed run reads as 0.0.
fn parse_field(line: &str, letter: char) -> Option<f32> {
    let start = line
        .char_indices()
        .find(|(_, c)| c.eq_ignore_ascii_case(&letter))
        .map(|(i, _)| i + 1)?;

    let rest = &line[start..];
    let end = rest
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == '-'))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    Some(rest[..end].parse::<f32>().unwrap_or(0.0))
}
