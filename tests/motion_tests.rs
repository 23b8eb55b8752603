//! Integration tests for the motion planner, G-code translation and homing,
//! run against fully simulated hardware.

mod common;

use common::{rig, rig_with, SimSwitch};
use jog_trainer::{Direction, FeedRate, MoveRequest, Position, SafetyState};
use proptest::prelude::*;

// =============================================================================
// Linear moves
// =============================================================================

#[test]
fn diagonal_move_advances_both_axes_equally() {
    // 80 steps/mm on both axes: G1 X10 Y10 is a pure diagonal of 800 steps
    // per axis over 10*sqrt(2) mm.
    let safety = SafetyState::new();
    let (mut trainer, handles) = rig(&safety);

    trainer.handle_line("G1 X10 Y10 F600");

    assert_eq!(trainer.position(), Position::new(800, 800));
    assert_eq!(handles.x_log.borrow().pulses(Direction::Positive), 800);
    assert_eq!(handles.y_log.borrow().pulses(Direction::Positive), 800);
    assert_eq!(handles.console.last(), Some("ok".to_string()));
}

#[test]
fn zero_distance_move_still_acknowledges() {
    let safety = SafetyState::new();
    let (mut trainer, handles) = rig(&safety);

    trainer.handle_line("G1 X0 Y0");

    assert_eq!(trainer.position(), Position::ORIGIN);
    assert_eq!(handles.x_log.borrow().total_pulses(), 0);
    assert_eq!(handles.y_log.borrow().total_pulses(), 0);
    assert_eq!(
        handles.console.lines(),
        vec!["No move".to_string(), "ok".to_string()]
    );
}

#[test]
fn missing_axis_field_keeps_that_axis_still() {
    let safety = SafetyState::new();
    let (mut trainer, handles) = rig(&safety);

    trainer.handle_line("G1 X10 F600");
    assert_eq!(trainer.position(), Position::new(800, 0));
    handles.console.clear();

    let x_polls_before = handles.limit_x.polls();
    trainer.handle_line("G1 Y5");

    assert_eq!(trainer.position(), Position::new(800, 400));
    assert_eq!(handles.x_log.borrow().pulses(Direction::Positive), 800);
    assert_eq!(handles.y_log.borrow().pulses(Direction::Positive), 400);
    // A still axis is not limit-checked, not even by the pre-check
    assert_eq!(handles.limit_x.polls(), x_polls_before);
    assert_eq!(handles.console.last(), Some("ok".to_string()));
}

#[test]
fn zero_feedrate_falls_back_to_default() {
    let safety = SafetyState::new();
    let (mut trainer, handles) = rig(&safety);

    trainer.handle_line("G1 X1 F0");

    assert_eq!(trainer.position(), Position::new(80, 0));
    assert_eq!(handles.console.last(), Some("ok".to_string()));
}

#[test]
fn unsupported_gcode_word_still_acknowledges() {
    let safety = SafetyState::new();
    let (mut trainer, handles) = rig(&safety);

    trainer.handle_line("G92 X0");

    assert_eq!(
        handles.console.lines(),
        vec![
            "Unknown or unsupported G-code".to_string(),
            "ok".to_string(),
        ]
    );
    assert_eq!(trainer.position(), Position::ORIGIN);
}

#[test]
fn precheck_blocks_pressed_axis_regardless_of_direction() {
    // Stricter than jog: even travel away from the switch is refused.
    let safety = SafetyState::new();
    let (mut trainer, handles) = rig_with(&safety, SimSwitch::pressed(), SimSwitch::open());

    trainer.handle_line("G1 X-10 F600");

    assert_eq!(
        handles.console.lines(),
        vec!["X limit reached! Move blocked.".to_string()]
    );
    assert!(!handles.console.contains("ok"));
    assert_eq!(trainer.position(), Position::ORIGIN);
    assert_eq!(handles.x_log.borrow().total_pulses(), 0);
}

#[test]
fn guarded_move_is_rejected_without_acknowledgment() {
    let safety = SafetyState::new();
    let (mut trainer, handles) = rig(&safety);

    trainer.handle_line("FEEDHOLD");
    handles.console.clear();

    trainer.handle_line("G1 X10 Y10 F600");

    assert_eq!(
        handles.console.lines(),
        vec!["Motion paused/held/homing/reset. Move ignored.".to_string()]
    );
    assert_eq!(trainer.position(), Position::ORIGIN);
}

#[test]
fn feed_hold_mid_move_stops_within_one_step() {
    // The X switch stands in for a realtime path: its fourth poll (pre-check
    // plus three in-loop polls) asserts feed hold while reporting open. The
    // third step completes, the fourth iteration sees the flag and stops.
    let safety = SafetyState::new();
    let limit_x = SimSwitch::open().hold_on_poll(4, &safety);
    let (mut trainer, handles) = rig_with(&safety, limit_x, SimSwitch::open());

    trainer.handle_line("G1 X10 F600");

    assert_eq!(trainer.position(), Position::new(3, 0));
    assert_eq!(handles.x_log.borrow().pulses(Direction::Positive), 3);
    assert!(handles
        .console
        .contains("Motion interrupted by feed hold/pause/reset/homing."));
    // Partial moves are still handled moves
    assert_eq!(handles.console.last(), Some("ok".to_string()));
    assert!(safety.is_feed_hold());
}

#[test]
fn limit_hit_mid_move_stops_the_entire_move() {
    // X reports pressed on its fourth poll (pre-check + three in-loop).
    // On a pure diagonal both axes advance each iteration, so Y must stop
    // with X even though its own switch never fired.
    let safety = SafetyState::new();
    let (mut trainer, handles) = rig_with(&safety, SimSwitch::press_after(3), SimSwitch::open());

    trainer.handle_line("G1 X10 Y10 F600");

    assert_eq!(trainer.position(), Position::new(2, 2));
    assert_eq!(handles.x_log.borrow().pulses(Direction::Positive), 2);
    assert_eq!(handles.y_log.borrow().pulses(Direction::Positive), 2);
    assert_eq!(handles.console.last(), Some("ok".to_string()));
}

// =============================================================================
// Homing
// =============================================================================

#[test]
fn homing_zeroes_pressed_axis_without_pulses_then_homes_the_other() {
    let safety = SafetyState::new();
    let (mut trainer, handles) = rig_with(&safety, SimSwitch::pressed(), SimSwitch::press_after(3));

    trainer.handle_line("X-");
    trainer.handle_line("Y-");
    assert_eq!(trainer.position(), Position::new(-200, -200));
    handles.console.clear();

    trainer.handle_line("HOME");

    assert_eq!(trainer.position(), Position::ORIGIN);
    assert!(handles.console.contains("Homing started..."));
    assert!(handles.console.contains("Homing complete."));
    assert!(!safety.is_homing());

    // X was already at its switch: only the earlier jog appears in its log.
    let x_log = handles.x_log.borrow();
    assert_eq!(x_log.calls.len(), 1);
    assert_eq!(x_log.calls[0].count, 200);

    // Y seeks the switch in single negative steps until the third poll.
    let y_log = handles.y_log.borrow();
    let seek_steps: Vec<_> = y_log.calls.iter().filter(|c| c.count == 1).collect();
    assert_eq!(seek_steps.len(), 3);
    assert!(seek_steps
        .iter()
        .all(|c| c.direction == Direction::Negative && c.pulse_delay_us == 500));

    // Each axis is enabled for its pass and disabled at its exit.
    assert_eq!(x_log.enable_count, 1);
    assert_eq!(x_log.disable_count, 1);
    assert!(!x_log.enabled);
    assert!(!y_log.enabled);
}

#[test]
fn cancelled_homing_still_zeroes_both_axes() {
    // A hold asserted before HOME cancels each axis pass immediately, but
    // cancellation and a real limit hit converge on a zeroed position.
    let safety = SafetyState::new();
    let (mut trainer, handles) = rig(&safety);

    trainer.handle_line("X+");
    trainer.handle_line("FEEDHOLD");
    handles.console.clear();

    trainer.handle_line("HOME");

    assert_eq!(trainer.position(), Position::ORIGIN);
    assert_eq!(handles.console.count("Homing interrupted."), 2);
    assert!(handles.console.contains("Homing complete."));
    assert!(!safety.is_homing());

    // No seek pulses were emitted on either axis.
    let x_seek = handles
        .x_log
        .borrow()
        .calls
        .iter()
        .filter(|c| c.count == 1)
        .count();
    assert_eq!(x_seek, 0);
    assert_eq!(handles.y_log.borrow().total_pulses(), 0);
}

// =============================================================================
// Interpolator property
// =============================================================================

proptest! {
    /// A move that runs to completion lands exactly on its target and emits
    /// one pulse per step of each axis delta.
    #[test]
    fn completed_move_lands_exactly_on_target(tx in -300i64..=300, ty in -300i64..=300) {
        let safety = SafetyState::new();
        let (mut trainer, handles) = rig(&safety);

        trainer.execute_move(MoveRequest {
            target: Position::new(tx, ty),
            feedrate: FeedRate(60_000.0),
        });

        prop_assert_eq!(trainer.position(), Position::new(tx, ty));

        let x_log = handles.x_log.borrow();
        let y_log = handles.y_log.borrow();
        prop_assert_eq!(x_log.total_pulses(), tx.unsigned_abs());
        prop_assert_eq!(y_log.total_pulses(), ty.unsigned_abs());
        if tx != 0 {
            prop_assert_eq!(x_log.pulses(Direction::from_delta(tx)), tx.unsigned_abs());
        }
        if ty != 0 {
            prop_assert_eq!(y_log.pulses(Direction::from_delta(ty)), ty.unsigned_abs());
        }

        prop_assert_eq!(handles.console.count("ok"), 1);
    }
}
