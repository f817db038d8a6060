// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Days/hours/minutes/seconds remaining until the launch.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::time::{Duration, WallTime};

/// Time left until the launch, split into display fields.
///
/// Only exists while the launch is strictly in the future, so every field is
/// non-negative; `hours` is below 24 and `minutes`/`seconds` below 60.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CountdownRemaining {
    /// Whole days.
    pub days: u64,
    /// Hours past the whole days, `0..24`.
    pub hours: u8,
    /// Minutes past the whole hours, `0..60`.
    pub minutes: u8,
    /// Seconds past the whole minutes, `0..60`.
    pub seconds: u8,
}

impl CountdownRemaining {
    /// Splits the time from `now` until `launch`.
    ///
    /// Returns `None` once `now >= launch`. Partial seconds are dropped.
    #[must_use]
    pub fn until(now: WallTime, launch: WallTime) -> Option<Self> {
        let diff = now.millis_until(launch);
        if diff <= 0 {
            return None;
        }
        Some(Self::from_duration(launch.saturating_duration_since(now)))
    }

    /// Splits a positive duration into display fields.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "each remainder is bounded below 60 or 24 before narrowing"
    )]
    pub fn from_duration(left: Duration) -> Self {
        let ms = left.millis();
        let day = Duration::DAY.millis();
        let hour = Duration::HOUR.millis();
        let minute = Duration::MINUTE.millis();
        let second = Duration::SECOND.millis();
        Self {
            days: ms / day,
            hours: ((ms % day) / hour) as u8,
            minutes: ((ms % hour) / minute) as u8,
            seconds: ((ms % minute) / second) as u8,
        }
    }

    /// The four fields zero-padded to two digits, in display order.
    #[must_use]
    pub fn padded(&self) -> [String; 4] {
        [
            format!("{:02}", self.days),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

impl fmt::Display for CountdownRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02} {:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
