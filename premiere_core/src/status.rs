// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stream status derived from wall-clock time.
//!
//! The timeline around the launch moment `L` with live window `W` is split
//! into three states:
//!
//! ```text
//!   Offline        StartingSoon        Live            Offline
//! ──────────────[L-W ─────────── L)[L ────────── L+W](──────────►
//! ```
//!
//! [`compute_status`] is the pure mapping. [`StatusTracker`] layers the
//! launch sequencer's override on top: once forced live, it stays live for
//! the rest of the session, regardless of what the clock says.

use crate::time::{Duration, WallTime};

/// The three-valued indicator shown to viewers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamStatus {
    /// Outside the window around the launch.
    Offline,
    /// Within the window before the launch.
    StartingSoon,
    /// From the launch until the end of the live window.
    Live,
}

impl StreamStatus {
    /// Text shown next to the indicator.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Offline => "Stream Offline",
            Self::StartingSoon => "Stream Starting Soon",
            Self::Live => "\u{1f534} LIVE NOW",
        }
    }

    /// CSS color of the label.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Offline => "#a0a0b8",
            Self::StartingSoon => "#f59e0b",
            Self::Live => "#4ade80",
        }
    }

    /// Whether the indicator is lit.
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }
}

/// Computes the status at `now` for a launch at `launch` with the given
/// window on either side.
///
/// Boundary instants belong to the later-starting state: `launch - window`
/// is already [`StartingSoon`](StreamStatus::StartingSoon) and `launch` is
/// already [`Live`](StreamStatus::Live). The live window is closed, so
/// `launch + window` is still live.
#[must_use]
pub fn compute_status(now: WallTime, launch: WallTime, window: Duration) -> StreamStatus {
    let soon_from = launch.saturating_sub(window);
    let live_until = launch.saturating_add(window);

    if now >= launch && now <= live_until {
        StreamStatus::Live
    } else if now >= soon_from && now < launch {
        StreamStatus::StartingSoon
    } else {
        StreamStatus::Offline
    }
}

/// Time-based status with a sticky live override.
#[derive(Clone, Copy, Debug)]
pub struct StatusTracker {
    launch: WallTime,
    window: Duration,
    forced_live: bool,
    last: Option<StreamStatus>,
}

impl StatusTracker {
    /// Creates a tracker for a launch at `launch` with `window` on each side.
    #[must_use]
    pub const fn new(launch: WallTime, window: Duration) -> Self {
        Self {
            launch,
            window,
            forced_live: false,
            last: None,
        }
    }

    /// Recomputes the status at `now`.
    ///
    /// After [`force_live`](Self::force_live) this always returns
    /// [`StreamStatus::Live`].
    pub fn poll(&mut self, now: WallTime) -> StreamStatus {
        let status = if self.forced_live {
            StreamStatus::Live
        } else {
            compute_status(now, self.launch, self.window)
        };
        if self.last != Some(status) {
            tracing::info!(?status, "stream status changed");
        }
        self.last = Some(status);
        status
    }

    /// Pins the status to live for the remainder of the session.
    pub fn force_live(&mut self) -> StreamStatus {
        if !self.forced_live {
            tracing::info!("stream status pinned live");
        }
        self.forced_live = true;
        self.last = Some(StreamStatus::Live);
        StreamStatus::Live
    }

    /// Whether [`force_live`](Self::force_live) has been called.
    #[must_use]
    pub const fn is_forced_live(&self) -> bool {
        self.forced_live
    }

    /// The status most recently produced, if any.
    #[must_use]
    pub const fn last(&self) -> Option<StreamStatus> {
        self.last
    }
}
