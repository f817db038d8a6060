// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for host integrations.
//!
//! Premiere splits host-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Clock**: a `now() -> WallTime` free function reading the host's wall
//!   clock. The controller never reads time itself; every entry point takes
//!   `now` as an argument.
//!
//! - **Timers**: an implementation of [`Timers`](crate::timers::Timers)
//!   that delivers fired timers back as
//!   [`HostEvent::Timer`](crate::controller::HostEvent::Timer).
//!
//! - **Views**: implementations of [`LaunchView`] and [`PlaybackView`] that
//!   apply state to the page's named UI surfaces (e.g. DOM elements).
//!
//! - **Media**: an implementation of [`MediaEngine`] wrapping the media
//!   element and the streaming engine instance selected at startup. The
//!   result of an asynchronous play request is delivered back as
//!   [`HostEvent::PlaySettled`](crate::controller::HostEvent::PlaySettled).
//!
//! # Crate boundaries
//!
//! `premiere_core` owns the state machines, the policies, and this contract
//! module. Backend crates depend on `premiere_core` and provide host glue.
//! The page crate depends on both and wires them together.
//!
//! View methods are infallible: a surface that cannot be updated is skipped.
//! Surfaces are located once at startup, which is where a missing element is
//! reported.

use crate::countdown::CountdownRemaining;
use crate::playback::{BufferProfile, PlayGlyph, PlayIntent};
use crate::status::StreamStatus;
use crate::time::Duration;

/// Countdown, launch banner, and status surfaces.
pub trait LaunchView {
    /// Lights or dims the status indicator and writes its label and color.
    fn render_status(&mut self, status: StreamStatus);

    /// Writes the four zero-padded countdown fields.
    fn render_countdown(&mut self, remaining: &CountdownRemaining);

    /// Writes the celebration count into the title and pulses it.
    fn render_celebration(&mut self, count: u8);

    /// Starts fading the countdown digits out over `over`.
    fn fade_out_countdown(&mut self, over: Duration);

    /// Hides the countdown digits and turns the title into the live banner.
    fn show_live_banner(&mut self);

    /// Smoothly scrolls the video section into view.
    fn scroll_to_video(&mut self);

    /// Starts fading and lifting the whole countdown container over `over`.
    fn fade_out_container(&mut self, over: Duration);

    /// Removes the countdown container from layout.
    fn hide_container(&mut self);
}

/// Player chrome: overlay, loading indicator, play button, error area.
pub trait PlaybackView {
    /// Shows or hides the loading indicator.
    fn set_loading_visible(&mut self, visible: bool);

    /// Hides or reveals the overlay that carries the play button.
    fn set_overlay_hidden(&mut self, hidden: bool);

    /// Flips the overlay between hidden and shown.
    fn toggle_overlay(&mut self);

    /// Shows or hides the play button.
    fn set_play_button_visible(&mut self, visible: bool);

    /// Swaps the play button glyph.
    fn set_play_glyph(&mut self, glyph: PlayGlyph);

    /// Replaces whatever message is in the error area with `message`.
    fn show_error(&mut self, message: &str);

    /// Empties the error area.
    fn clear_error(&mut self);

    /// Sets the poster image on the media surface.
    fn set_poster(&mut self, url: &str);

    /// Enters fullscreen on the player, or leaves it if already fullscreen.
    fn toggle_fullscreen(&mut self);
}

/// The media element plus whatever streaming engine drives it.
pub trait MediaEngine {
    /// Starts an asynchronous play request; the outcome comes back as a
    /// `PlaySettled` host event carrying the same `intent`.
    fn request_play(&mut self, intent: PlayIntent);

    /// Pauses playback.
    fn pause(&mut self);

    /// Whether the media element is paused.
    fn is_paused(&self) -> bool;

    /// Whether playback reached the end of the media.
    fn is_ended(&self) -> bool;

    /// Whether audio is muted.
    fn is_muted(&self) -> bool;

    /// Mutes or unmutes audio.
    fn set_muted(&mut self, muted: bool);

    /// Asks the streaming engine to (re)start fetching. No-op without one.
    fn start_load(&mut self);

    /// Applies new buffering targets. No-op without a streaming engine.
    fn apply_buffer_profile(&mut self, profile: BufferProfile);

    /// Releases the streaming engine and detaches the media element.
    fn release(&mut self);
}
