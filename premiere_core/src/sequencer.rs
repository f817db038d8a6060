// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Countdown and launch sequence state machine.
//!
//! ```text
//!  Counting ──(launch reached)──► Celebrating{n..=1} ──(n == 0)──► Complete
//! ```
//!
//! The machine is linear and never re-enters a phase. It performs no I/O:
//! each tick returns a step that tells the caller what to render or which
//! effects to issue. The transition effects themselves are issued by the
//! caller in the same turn as the final celebration tick, which is why there
//! is no stored "transitioning" phase.

use crate::countdown::CountdownRemaining;
use crate::time::WallTime;

/// Where the launch sequence is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SequencePhase {
    /// Showing time remaining until launch. A sequencer that has not ticked
    /// yet (not started) is also here.
    Counting,
    /// Showing the final celebration count.
    Celebrating {
        /// Number the next celebration tick shows; `0` means the next tick
        /// transitions.
        remaining: u8,
    },
    /// Transition effects issued. Terminal.
    Complete,
}

/// Outcome of a countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownStep {
    /// Render the remaining time.
    Render(CountdownRemaining),
    /// Launch reached: stop the countdown timer and start celebrating.
    Launch,
    /// Not counting any more; do nothing.
    Idle,
}

/// Outcome of a celebration tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CelebrationStep {
    /// Show this number in the title.
    Show(u8),
    /// Transitioning: stop the celebration timer and issue the transition
    /// effects. The phase is already [`SequencePhase::Complete`] when this is
    /// returned.
    Transition,
    /// Not celebrating; do nothing.
    Idle,
}

/// The launch sequence for one page session.
#[derive(Clone, Copy, Debug)]
pub struct LaunchSequencer {
    launch: WallTime,
    celebration_from: u8,
    phase: SequencePhase,
}

impl LaunchSequencer {
    /// Starts counting towards `launch`, celebrating from `celebration_from`.
    #[must_use]
    pub const fn new(launch: WallTime, celebration_from: u8) -> Self {
        Self {
            launch,
            celebration_from,
            phase: SequencePhase::Counting,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> SequencePhase {
        self.phase
    }

    /// Whether the transition has been issued.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.phase, SequencePhase::Complete)
    }

    /// Advances on a countdown tick at `now`.
    pub fn on_countdown_tick(&mut self, now: WallTime) -> CountdownStep {
        if self.phase != SequencePhase::Counting {
            return CountdownStep::Idle;
        }
        match CountdownRemaining::until(now, self.launch) {
            Some(left) => CountdownStep::Render(left),
            None => {
                self.phase = SequencePhase::Celebrating {
                    remaining: self.celebration_from,
                };
                tracing::info!(from = self.celebration_from, "launch reached, celebrating");
                CountdownStep::Launch
            }
        }
    }

    /// Advances on a celebration tick.
    pub fn on_celebration_tick(&mut self) -> CelebrationStep {
        match self.phase {
            SequencePhase::Celebrating { remaining: 0 } => {
                self.phase = SequencePhase::Complete;
                tracing::info!("launch sequence complete");
                CelebrationStep::Transition
            }
            SequencePhase::Celebrating { remaining } => {
                self.phase = SequencePhase::Celebrating {
                    remaining: remaining - 1,
                };
                CelebrationStep::Show(remaining)
            }
            SequencePhase::Counting | SequencePhase::Complete => CelebrationStep::Idle,
        }
    }
}
