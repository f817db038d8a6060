// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall-clock instants and durations.
//!
//! [`WallTime`] is a point on the civil timeline expressed as signed
//! milliseconds since the Unix epoch, which is what `Date.now()` reports in a
//! browser. It is deliberately not monotonic: the launch moment is a civil
//! timestamp and the page compares the user's clock against it.
//!
//! [`Duration`] is an unsigned span in the same millisecond units. Arithmetic
//! between the two saturates or returns `Option` rather than panicking.

use core::fmt;
use core::ops::{Add, Sub};

/// A point on the wall-clock timeline, in milliseconds since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WallTime(pub i64);

impl WallTime {
    /// The Unix epoch.
    pub const EPOCH: Self = Self(0);

    /// Creates a wall time from milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Signed milliseconds from `self` until `later`.
    ///
    /// Positive when `later` is in the future relative to `self`.
    #[inline]
    #[must_use]
    pub const fn millis_until(self, later: Self) -> i64 {
        later.0.saturating_sub(self.0)
    }

    /// Returns the duration between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        let diff = self.0.saturating_sub(earlier.0);
        if diff > 0 {
            Duration(diff as u64)
        } else {
            Duration::ZERO
        }
    }

    /// Checked addition of a duration.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, duration: Duration) -> Option<Self> {
        let Some(delta) = duration.signed_millis() else {
            return None;
        };
        match self.0.checked_add(delta) {
            Some(t) => Some(Self(t)),
            None => None,
        }
    }

    /// Checked subtraction of a duration.
    #[inline]
    #[must_use]
    pub const fn checked_sub(self, duration: Duration) -> Option<Self> {
        let Some(delta) = duration.signed_millis() else {
            return None;
        };
        match self.0.checked_sub(delta) {
            Some(t) => Some(Self(t)),
            None => None,
        }
    }

    /// Addition that clamps at the end of the representable timeline.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, duration: Duration) -> Self {
        match self.checked_add(duration) {
            Some(t) => t,
            None => Self(i64::MAX),
        }
    }

    /// Subtraction that clamps at the start of the representable timeline.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, duration: Duration) -> Self {
        match self.checked_sub(duration) {
            Some(t) => t,
            None => Self(i64::MIN),
        }
    }
}

impl Add<Duration> for WallTime {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        self.saturating_add(rhs)
    }
}

impl Sub<Duration> for WallTime {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Duration) -> Self {
        self.saturating_sub(rhs)
    }
}

impl fmt::Debug for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WallTime({}ms)", self.0)
    }
}

/// A span of time in milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// A zero-length duration.
    pub const ZERO: Self = Self(0);

    /// One second.
    pub const SECOND: Self = Self(1_000);

    /// One minute.
    pub const MINUTE: Self = Self(60_000);

    /// One hour.
    pub const HOUR: Self = Self(3_600_000);

    /// One day.
    pub const DAY: Self = Self(86_400_000);

    /// Creates a duration from milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Creates a duration from whole seconds.
    #[inline]
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs.saturating_mul(1_000))
    }

    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as whole seconds, rounding down.
    #[inline]
    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.0 / 1_000
    }

    /// Returns the millisecond value as `i64`, or `None` if it does not fit.
    #[inline]
    #[must_use]
    pub const fn signed_millis(self) -> Option<i64> {
        if self.0 > i64::MAX as u64 {
            None
        } else {
            Some(self.0 as i64)
        }
    }

    /// Saturating addition.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Duration {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl Sub for Duration {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({}ms)", self.0)
    }
}
