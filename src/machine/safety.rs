//! Safety gating flags.
//!
//! Four independent flags, not an exclusive state enum: feed hold and pause
//! can co-exist, and homing/resetting are scoped to their own routines. Any
//! set flag blocks new motion and cooperatively stops a move in progress.
//!
//! Flags are atomics behind a shared reference so a realtime path (serial
//! interrupt, panic button) can assert them while a stepping loop runs; the
//! loops re-check once per generated step.

use core::sync::atomic::{AtomicBool, Ordering};

/// The four motion-gating flags.
#[derive(Debug, Default)]
pub struct SafetyState {
    feed_hold: AtomicBool,
    paused: AtomicBool,
    homing: AtomicBool,
    resetting: AtomicBool,
}

impl SafetyState {
    /// Create a new state with all flags clear.
    pub const fn new() -> Self {
        Self {
            feed_hold: AtomicBool::new(false),
            paused: AtomicBool::new(false),
            homing: AtomicBool::new(false),
            resetting: AtomicBool::new(false),
        }
    }

    /// Enter feed hold.
    pub fn hold(&self) {
        self.feed_hold.store(true, Ordering::Relaxed);
    }

    /// Enter pause.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Relaxed);
    }

    /// Clear feed hold and pause together.
    ///
    /// Returns `true` if either flag was set.
    pub fn resume(&self) -> bool {
        let was_held = self.feed_hold.swap(false, Ordering::Relaxed);
        let was_paused = self.paused.swap(false, Ordering::Relaxed);
        was_held || was_paused
    }

    /// Begin a reset: clears feed hold and pause, marks resetting.
    pub fn begin_reset(&self) {
        self.feed_hold.store(false, Ordering::Relaxed);
        self.paused.store(false, Ordering::Relaxed);
        self.resetting.store(true, Ordering::Relaxed);
    }

    /// Finish a reset.
    pub fn end_reset(&self) {
        self.resetting.store(false, Ordering::Relaxed);
    }

    /// Try to begin homing. Returns `false` if a homing pass is already
    /// marked in progress.
    pub fn begin_homing(&self) -> bool {
        !self.homing.swap(true, Ordering::Relaxed)
    }

    /// Finish homing.
    pub fn end_homing(&self) {
        self.homing.store(false, Ordering::Relaxed);
    }

    /// Whether any flag currently blocks motion.
    pub fn motion_blocked(&self) -> bool {
        self.is_feed_hold() || self.is_paused() || self.is_resetting() || self.is_homing()
    }

    /// Cancellation check used inside the homing loops.
    ///
    /// The homing flag itself is excluded: it is set by the very routine
    /// performing the check.
    pub fn homing_interrupted(&self) -> bool {
        self.is_feed_hold() || self.is_paused() || self.is_resetting()
    }

    /// Whether feed hold is set.
    pub fn is_feed_hold(&self) -> bool {
        self.feed_hold.load(Ordering::Relaxed)
    }

    /// Whether pause is set.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    /// Whether a homing pass is in progress.
    pub fn is_homing(&self) -> bool {
        self.homing.load(Ordering::Relaxed)
    }

    /// Whether a reset is in progress.
    pub fn is_resetting(&self) -> bool {
        self.resetting.load(Ordering::Relaxed)
    }
}
