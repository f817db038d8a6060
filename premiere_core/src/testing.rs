// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test doubles for the backend contract.

use alloc::string::{String, ToString as _};
use alloc::vec::Vec;

use crate::backend::{LaunchView, MediaEngine, PlaybackView};
use crate::countdown::CountdownRemaining;
use crate::playback::{BufferProfile, PlayGlyph, PlayIntent};
use crate::status::StreamStatus;
use crate::time::Duration;
use crate::timers::{TimerEvent, TimerId, Timers};

#[derive(Debug)]
struct Armed {
    id: TimerId,
    due: u64,
    period: Option<u64>,
    event: TimerEvent,
}

/// Timer queue on a virtual millisecond clock that only moves when popped.
#[derive(Debug, Default)]
pub(crate) struct ManualTimers {
    now: u64,
    armed: Vec<Armed>,
    cancelled: usize,
}

impl ManualTimers {
    /// Virtual milliseconds since creation.
    pub(crate) fn now(&self) -> u64 {
        self.now
    }

    /// Number of timers waiting to fire.
    pub(crate) fn armed(&self) -> usize {
        self.armed.len()
    }

    /// Number of successful cancellations.
    pub(crate) fn cancelled(&self) -> usize {
        self.cancelled
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its due time. Ties fire in arming order.
    pub(crate) fn pop_due(&mut self, until: u64) -> Option<(TimerId, TimerEvent)> {
        let pos = self
            .armed
            .iter()
            .enumerate()
            .filter(|(_, a)| a.due <= until)
            .min_by_key(|(_, a)| (a.due, a.id))
            .map(|(pos, _)| pos)?;
        let fired = &mut self.armed[pos];
        self.now = fired.due;
        let out = (fired.id, fired.event);
        match fired.period {
            Some(period) => fired.due += period,
            None => {
                self.armed.remove(pos);
            }
        }
        Some(out)
    }

    /// Moves the clock to `until` once nothing more is due.
    pub(crate) fn settle(&mut self, until: u64) {
        self.now = self.now.max(until);
    }
}

impl Timers for ManualTimers {
    fn set_interval(&mut self, id: TimerId, period: Duration, event: TimerEvent) {
        let period = period.millis().max(1);
        self.armed.push(Armed {
            id,
            due: self.now + period,
            period: Some(period),
            event,
        });
    }

    fn set_timeout(&mut self, id: TimerId, delay: Duration, event: TimerEvent) {
        self.armed.push(Armed {
            id,
            due: self.now + delay.millis(),
            period: None,
            event,
        });
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(pos) = self.armed.iter().position(|a| a.id == id) {
            self.armed.remove(pos);
            self.cancelled += 1;
        }
    }
}

/// One recorded view mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ViewCall {
    Status(StreamStatus),
    Countdown(CountdownRemaining),
    Celebration(u8),
    FadeCountdown(Duration),
    LiveBanner,
    Scroll,
    FadeContainer(Duration),
    HideContainer,
    Loading(bool),
    OverlayHidden(bool),
    ToggleOverlay,
    PlayButton(bool),
    Glyph(PlayGlyph),
    Error(String),
    ClearError,
    Poster(String),
    Fullscreen,
}

/// Records every call and mirrors the error area.
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    pub(crate) calls: Vec<ViewCall>,
    /// Message currently in the error area.
    pub(crate) error: Option<String>,
    /// How many messages have been put in the error area.
    pub(crate) shown_errors: usize,
}

impl LaunchView for RecordingView {
    fn render_status(&mut self, status: StreamStatus) {
        self.calls.push(ViewCall::Status(status));
    }

    fn render_countdown(&mut self, remaining: &CountdownRemaining) {
        self.calls.push(ViewCall::Countdown(*remaining));
    }

    fn render_celebration(&mut self, count: u8) {
        self.calls.push(ViewCall::Celebration(count));
    }

    fn fade_out_countdown(&mut self, over: Duration) {
        self.calls.push(ViewCall::FadeCountdown(over));
    }

    fn show_live_banner(&mut self) {
        self.calls.push(ViewCall::LiveBanner);
    }

    fn scroll_to_video(&mut self) {
        self.calls.push(ViewCall::Scroll);
    }

    fn fade_out_container(&mut self, over: Duration) {
        self.calls.push(ViewCall::FadeContainer(over));
    }

    fn hide_container(&mut self) {
        self.calls.push(ViewCall::HideContainer);
    }
}

impl PlaybackView for RecordingView {
    fn set_loading_visible(&mut self, visible: bool) {
        self.calls.push(ViewCall::Loading(visible));
    }

    fn set_overlay_hidden(&mut self, hidden: bool) {
        self.calls.push(ViewCall::OverlayHidden(hidden));
    }

    fn toggle_overlay(&mut self) {
        self.calls.push(ViewCall::ToggleOverlay);
    }

    fn set_play_button_visible(&mut self, visible: bool) {
        self.calls.push(ViewCall::PlayButton(visible));
    }

    fn set_play_glyph(&mut self, glyph: PlayGlyph) {
        self.calls.push(ViewCall::Glyph(glyph));
    }

    fn show_error(&mut self, message: &str) {
        self.calls.push(ViewCall::Error(message.to_string()));
        self.error = Some(message.to_string());
        self.shown_errors += 1;
    }

    fn clear_error(&mut self) {
        self.calls.push(ViewCall::ClearError);
        self.error = None;
    }

    fn set_poster(&mut self, url: &str) {
        self.calls.push(ViewCall::Poster(url.to_string()));
    }

    fn toggle_fullscreen(&mut self) {
        self.calls.push(ViewCall::Fullscreen);
    }
}

/// Media stand-in. Play requests optimistically start playback; their
/// outcome is delivered by the test as a `PlaySettled` event.
#[derive(Debug)]
pub(crate) struct ScriptedMedia {
    pub(crate) paused: bool,
    pub(crate) ended: bool,
    pub(crate) muted: bool,
    pub(crate) play_requests: Vec<PlayIntent>,
    pub(crate) pauses: u32,
    pub(crate) loads: u32,
    pub(crate) profiles: Vec<BufferProfile>,
    pub(crate) released: bool,
    pub(crate) releases: u32,
}

impl Default for ScriptedMedia {
    fn default() -> Self {
        Self {
            paused: true,
            ended: false,
            muted: true,
            play_requests: Vec::new(),
            pauses: 0,
            loads: 0,
            profiles: Vec::new(),
            released: false,
            releases: 0,
        }
    }
}

impl MediaEngine for ScriptedMedia {
    fn request_play(&mut self, intent: PlayIntent) {
        self.play_requests.push(intent);
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
        self.pauses += 1;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_ended(&self) -> bool {
        self.ended
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn start_load(&mut self) {
        self.loads += 1;
    }

    fn apply_buffer_profile(&mut self, profile: BufferProfile) {
        self.profiles.push(profile);
    }

    fn release(&mut self) {
        self.released = true;
        self.releases += 1;
    }
}
