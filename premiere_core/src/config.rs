// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-lifetime configuration.
//!
//! [`LaunchConfig`] carries the launch moment and every cadence and delay of
//! the countdown and launch sequence. [`PlaybackConfig`] carries the stream
//! source and the playback adapter's tuning. Both are plain data, built once
//! at startup and never mutated afterwards.

use alloc::string::String;

use crate::playback::{BufferProfile, EngineConfig};
use crate::time::{Duration, WallTime};

/// Timing configuration for the status poller and the launch sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchConfig {
    /// The scheduled start of the live event.
    pub launch_moment: WallTime,
    /// Width of the "starting soon" window before launch and of the "live"
    /// window after it.
    pub live_window: Duration,
    /// Period of the stream status poll.
    pub status_poll_interval: Duration,
    /// Period of the countdown tick (and of each celebration tick).
    pub countdown_interval: Duration,
    /// First number shown by the celebration countdown; it counts down to 1.
    pub celebration_from: u8,
    /// How long the countdown digits take to fade out at launch.
    pub countdown_fade: Duration,
    /// Delay between revealing the live banner and scrolling to the video.
    pub scroll_delay: Duration,
    /// Delay from the start of the transition until the countdown container
    /// starts collapsing.
    pub container_collapse_delay: Duration,
    /// How long the countdown container takes to fade out before it is hidden.
    pub container_fade: Duration,
}

impl LaunchConfig {
    /// Default cadence for a launch at `launch_moment`.
    #[must_use]
    pub const fn new(launch_moment: WallTime) -> Self {
        Self {
            launch_moment,
            live_window: Duration::HOUR,
            status_poll_interval: Duration::from_secs(30),
            countdown_interval: Duration::SECOND,
            celebration_from: 5,
            countdown_fade: Duration::SECOND,
            scroll_delay: Duration::from_secs(2),
            container_collapse_delay: Duration::from_secs(10),
            container_fade: Duration::from_secs(2),
        }
    }
}

/// Configuration for the playback adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// HLS playlist URL of the live stream.
    pub stream_url: String,
    /// Poster shown when the platform cannot play the stream at all.
    pub fallback_poster: String,
    /// Settings handed to the streaming engine on construction.
    pub engine: EngineConfig,
    /// Viewports narrower than this many CSS pixels get the compact buffer.
    pub mobile_width_threshold: u32,
    /// Buffer targets for narrow viewports.
    pub compact_buffer: BufferProfile,
    /// Buffer targets for wide viewports.
    pub roomy_buffer: BufferProfile,
    /// Delay between a successful autoplay and unmuting.
    pub unmute_delay: Duration,
    /// How long a transient error message stays on screen.
    pub error_dismiss_after: Duration,
    /// Touch hold time that toggles the video overlay.
    pub long_press: Duration,
}

impl PlaybackConfig {
    /// Live low-latency defaults for `stream_url`.
    #[must_use]
    pub fn live(stream_url: impl Into<String>) -> Self {
        Self {
            stream_url: stream_url.into(),
            fallback_poster: String::from("assets/fallback-poster.jpg"),
            engine: EngineConfig::LIVE,
            // Widths up to and including 768px count as mobile.
            mobile_width_threshold: 769,
            compact_buffer: BufferProfile::COMPACT,
            roomy_buffer: BufferProfile::ROOMY,
            unmute_delay: Duration::SECOND,
            error_dismiss_after: Duration::from_secs(10),
            long_press: Duration::from_millis(300),
        }
    }

    /// Picks the buffer profile for a viewport `width` in CSS pixels.
    #[must_use]
    pub fn buffer_profile_for(&self, width: u32) -> BufferProfile {
        if width < self.mobile_width_threshold {
            self.compact_buffer
        } else {
            self.roomy_buffer
        }
    }
}
