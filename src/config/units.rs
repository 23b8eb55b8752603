//! Unit types for physical quantities.
//!
//! Provides type-safe representations of millimetre distances, feedrates and
//! motor steps to prevent unit confusion at compile time.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Linear position in millimetres.
///
/// Used for configuration and the G-code dialect. Internally converted to
/// [`Steps`] via the axis calibration.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f32);

impl Millimeters {
    /// Create a new Millimeters value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Add for Millimeters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Millimeters {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Travel speed in millimetres per minute.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct FeedRate(pub f32);

impl FeedRate {
    /// Create a new FeedRate value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Whether this is a usable feedrate (strictly positive).
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

/// Axis position in steps (absolute from origin).
///
/// Uses i64 for unlimited range in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Steps(pub i64);

impl Steps {
    /// Zero steps.
    pub const ZERO: Self = Self(0);

    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Get absolute value as u64.
    #[inline]
    pub fn abs(self) -> u64 {
        self.0.unsigned_abs()
    }

    /// Convert to millimetres using a steps-per-mm ratio.
    #[inline]
    pub fn to_millimeters(self, steps_per_mm: f32) -> Millimeters {
        Millimeters(self.0 as f32 / steps_per_mm)
    }

    /// Create from millimetres using a steps-per-mm ratio, rounding to the
    /// nearest whole step.
    #[inline]
    pub fn from_millimeters(mm: Millimeters, steps_per_mm: f32) -> Self {
        Self(libm::roundf(mm.0 * steps_per_mm) as i64)
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
