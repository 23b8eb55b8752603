//! Simulated hardware capabilities for integration tests.
//!
//! Recorders share their state through `Rc` handles, so a test keeps a clone
//! of each capability while the controller owns the other.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal_mock::eh1::delay::NoopDelay;

use jog_trainer::{
    Actuator, Calibration, Clock, Console, DateTime, Direction, FeedRate, Indicator, JogTrainer,
    LimitSwitch, SafetyState,
};

/// One recorded pulse-train request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCall {
    pub direction: Direction,
    pub count: u32,
    pub pulse_delay_us: u32,
}

/// Everything a simulated actuator saw.
#[derive(Debug, Default)]
pub struct ActuatorLog {
    pub calls: Vec<StepCall>,
    pub enabled: bool,
    pub enable_count: u32,
    pub disable_count: u32,
}

impl ActuatorLog {
    /// Total pulses emitted in one direction.
    pub fn pulses(&self, direction: Direction) -> u64 {
        self.calls
            .iter()
            .filter(|c| c.direction == direction)
            .map(|c| c.count as u64)
            .sum()
    }

    /// Total pulses emitted in either direction.
    pub fn total_pulses(&self) -> u64 {
        self.calls.iter().map(|c| c.count as u64).sum()
    }
}

/// Recording actuator double.
#[derive(Clone, Default)]
pub struct SimActuator {
    log: Rc<RefCell<ActuatorLog>>,
}

impl SimActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Rc<RefCell<ActuatorLog>> {
        self.log.clone()
    }
}

impl Actuator for SimActuator {
    fn enable(&mut self) {
        let mut log = self.log.borrow_mut();
        log.enabled = true;
        log.enable_count += 1;
    }

    fn disable(&mut self) {
        let mut log = self.log.borrow_mut();
        log.enabled = false;
        log.disable_count += 1;
    }

    fn step(&mut self, direction: Direction, count: u32, pulse_delay_us: u32) {
        self.log.borrow_mut().calls.push(StepCall {
            direction,
            count,
            pulse_delay_us,
        });
    }
}

#[derive(Debug, Default)]
struct SwitchInner {
    pressed: bool,
    press_after_polls: Option<u32>,
    polls: u32,
}

/// Simulated limit switch.
///
/// Can report a fixed state, flip to pressed after a number of polls, or
/// assert feed hold as a side effect of a specific poll (standing in for a
/// realtime path that interrupts a move in progress).
#[derive(Clone)]
pub struct SimSwitch<'a> {
    inner: Rc<RefCell<SwitchInner>>,
    hold_on_poll: Option<(u32, &'a SafetyState)>,
}

impl<'a> SimSwitch<'a> {
    /// A switch that stays open.
    pub fn open() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SwitchInner::default())),
            hold_on_poll: None,
        }
    }

    /// A switch that is already pressed.
    pub fn pressed() -> Self {
        let switch = Self::open();
        switch.set_pressed(true);
        switch
    }

    /// A switch that reports open for `polls` polls, then pressed.
    pub fn press_after(polls: u32) -> Self {
        let switch = Self::open();
        switch.inner.borrow_mut().press_after_polls = Some(polls);
        switch
    }

    /// Assert feed hold on the `poll`-th poll (1-based), still reporting open.
    pub fn hold_on_poll(mut self, poll: u32, safety: &'a SafetyState) -> Self {
        self.hold_on_poll = Some((poll, safety));
        self
    }

    pub fn set_pressed(&self, pressed: bool) {
        self.inner.borrow_mut().pressed = pressed;
    }

    pub fn polls(&self) -> u32 {
        self.inner.borrow().polls
    }
}

impl LimitSwitch for SimSwitch<'_> {
    fn is_pressed(&mut self) -> bool {
        let mut inner = self.inner.borrow_mut();
        inner.polls += 1;

        if let Some((poll, safety)) = self.hold_on_poll {
            if inner.polls == poll {
                safety.hold();
            }
        }
        if let Some(limit) = inner.press_after_polls {
            if inner.polls > limit {
                inner.pressed = true;
            }
        }

        inner.pressed
    }
}

/// Recording indicator double.
#[derive(Clone, Default)]
pub struct SimBuzzer {
    beeps: Rc<RefCell<Vec<u32>>>,
}

impl SimBuzzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn beeps(&self) -> Vec<u32> {
        self.beeps.borrow().clone()
    }
}

impl Indicator for SimBuzzer {
    fn beep(&mut self, duration_ms: u32) {
        self.beeps.borrow_mut().push(duration_ms);
    }
}

/// Clock that always reports the same instant.
#[derive(Clone, Copy)]
pub struct FixedClock(pub DateTime);

impl Clock for FixedClock {
    fn now(&mut self) -> DateTime {
        self.0
    }
}

/// The instant every test rig reports.
pub fn test_time() -> DateTime {
    DateTime {
        year: 2025,
        month: 6,
        day: 1,
        hour: 12,
        minute: 30,
        second: 45,
    }
}

/// Recording console double.
#[derive(Clone, Default)]
pub struct SimConsole {
    lines: Rc<RefCell<Vec<String>>>,
}

impl SimConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.lines.borrow().iter().any(|l| l == text)
    }

    pub fn count(&self, text: &str) -> usize {
        self.lines.borrow().iter().filter(|l| *l == text).count()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.borrow().last().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Console for SimConsole {
    fn line(&mut self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}

/// Fully simulated controller type.
pub type SimTrainer<'a> =
    JogTrainer<'a, SimActuator, SimSwitch<'a>, SimBuzzer, FixedClock, NoopDelay, SimConsole>;

/// Shared handles into a rig's capabilities.
pub struct RigHandles<'a> {
    pub x_log: Rc<RefCell<ActuatorLog>>,
    pub y_log: Rc<RefCell<ActuatorLog>>,
    pub limit_x: SimSwitch<'a>,
    pub limit_y: SimSwitch<'a>,
    pub buzzer: SimBuzzer,
    pub console: SimConsole,
}

/// Standard test calibration: 80 steps/mm on both axes, 600 mm/min default.
pub fn test_calibration() -> Calibration {
    Calibration::new(80.0, 80.0, FeedRate(600.0))
}

/// Build a controller around the given switches with recording doubles
/// everywhere else.
pub fn rig_with<'a>(
    safety: &'a SafetyState,
    limit_x: SimSwitch<'a>,
    limit_y: SimSwitch<'a>,
) -> (SimTrainer<'a>, RigHandles<'a>) {
    let stepper_x = SimActuator::new();
    let stepper_y = SimActuator::new();
    let buzzer = SimBuzzer::new();
    let console = SimConsole::new();

    let handles = RigHandles {
        x_log: stepper_x.log(),
        y_log: stepper_y.log(),
        limit_x: limit_x.clone(),
        limit_y: limit_y.clone(),
        buzzer: buzzer.clone(),
        console: console.clone(),
    };

    let trainer = JogTrainer::builder()
        .stepper_x(stepper_x)
        .stepper_y(stepper_y)
        .limit_x(limit_x)
        .limit_y(limit_y)
        .buzzer(buzzer)
        .clock(FixedClock(test_time()))
        .delay(NoopDelay::new())
        .console(console)
        .safety(safety)
        .calibration(test_calibration())
        .build()
        .expect("rig should build");

    (trainer, handles)
}

/// Build a controller with both switches open.
pub fn rig(safety: &SafetyState) -> (SimTrainer<'_>, RigHandles<'_>) {
    rig_with(safety, SimSwitch::open(), SimSwitch::open())
}
