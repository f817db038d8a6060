// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scheduled work: repeating timers, one-shot delayed effects, and their
//! ownership.
//!
//! The host environment provides the actual timer facility through the
//! [`Timers`] trait (e.g. `setInterval`/`setTimeout` in a browser). Every timer
//! carries a [`TimerEvent`] payload that the host hands back to the
//! controller when it fires.
//!
//! [`TaskSet`] owns a [`Timers`] implementation and remembers every timer
//! that is still outstanding, so that [`TaskSet::cancel_all`] can tear
//! everything down at unload. Delayed effects are therefore cancellable even
//! though nothing ever waits on them.

use alloc::vec::Vec;

use crate::time::Duration;

/// Handle for a scheduled timer, unique for the lifetime of a [`TaskSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// One-shot UI effects scheduled with a delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Deferred {
    /// Hide the faded countdown digits and show the live banner.
    RevealLiveBanner,
    /// Smooth-scroll the page to the video section.
    ScrollToVideo,
    /// Start fading out the whole countdown container.
    CollapseContainer,
    /// Remove the faded countdown container from layout.
    HideContainer,
    /// Unmute after a successful autoplay.
    Unmute,
    /// Remove the error message with this generation, if still shown.
    DismissError(u32),
    /// A touch was held long enough to toggle the overlay.
    LongPress,
}

/// Payload handed back to the controller when a timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// Periodic stream status poll.
    StatusPoll,
    /// Periodic countdown tick.
    CountdownTick,
    /// Periodic celebration tick.
    CelebrationTick,
    /// A delayed one-shot effect is due.
    Deferred(Deferred),
}

impl TimerEvent {
    /// Whether this event comes from a repeating timer.
    #[must_use]
    pub const fn is_repeating(self) -> bool {
        !matches!(self, Self::Deferred(_))
    }
}

/// Host timer facility.
///
/// Implementations must deliver `(id, event)` back to the owner of the
/// [`TaskSet`] every time a timer fires, and must never deliver for an id that
/// has been cancelled.
pub trait Timers {
    /// Fires `event` every `period` until cancelled.
    fn set_interval(&mut self, id: TimerId, period: Duration, event: TimerEvent);

    /// Fires `event` once after `delay`.
    fn set_timeout(&mut self, id: TimerId, delay: Duration, event: TimerEvent);

    /// Cancels a timer. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Owner of a [`Timers`] implementation and of every outstanding timer.
#[derive(Debug)]
pub struct TaskSet<T> {
    timers: T,
    next_id: u64,
    outstanding: Vec<(TimerId, TimerEvent)>,
}

impl<T: Timers> TaskSet<T> {
    /// Wraps a host timer facility.
    pub fn new(timers: T) -> Self {
        Self {
            timers,
            next_id: 1,
            outstanding: Vec::new(),
        }
    }

    fn allocate(&mut self, event: TimerEvent) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.outstanding.push((id, event));
        id
    }

    /// Schedules a repeating timer.
    pub fn every(&mut self, period: Duration, event: TimerEvent) -> TimerId {
        let id = self.allocate(event);
        self.timers.set_interval(id, period, event);
        id
    }

    /// Schedules a one-shot effect.
    pub fn after(&mut self, delay: Duration, effect: Deferred) -> TimerId {
        let event = TimerEvent::Deferred(effect);
        let id = self.allocate(event);
        self.timers.set_timeout(id, delay, event);
        id
    }

    /// Cancels one timer. No-op if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) {
        if let Some(pos) = self.outstanding.iter().position(|(i, _)| *i == id) {
            self.outstanding.swap_remove(pos);
            self.timers.cancel(id);
        }
    }

    /// Records that `id` fired and returns whether it was still outstanding.
    ///
    /// One-shot timers are forgotten; repeating timers stay outstanding.
    pub fn fired(&mut self, id: TimerId) -> bool {
        let Some(pos) = self.outstanding.iter().position(|(i, _)| *i == id) else {
            return false;
        };
        if !self.outstanding[pos].1.is_repeating() {
            self.outstanding.swap_remove(pos);
        }
        true
    }

    /// Cancels every outstanding timer.
    pub fn cancel_all(&mut self) {
        for (id, _) in self.outstanding.drain(..) {
            self.timers.cancel(id);
        }
    }
}

impl<T> TaskSet<T> {
    /// Number of timers that have neither fired (one-shot) nor been cancelled.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }

    /// Whether `id` is still outstanding.
    #[must_use]
    pub fn is_outstanding(&self, id: TimerId) -> bool {
        self.outstanding.iter().any(|(i, _)| *i == id)
    }

    /// Borrows the host facility.
    pub fn host(&self) -> &T {
        &self.timers
    }

    /// Mutably borrows the host facility.
    pub fn host_mut(&mut self) -> &mut T {
        &mut self.timers
    }
}
