// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for premiere.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`Dispatcher`]: queued, non-reentrant delivery of host events
//! - [`WebTimers`]: `setInterval`/`setTimeout` timer facility
//! - [`DomView`]: DOM surfaces for the launch and playback views
//! - [`WebMedia`]: the `<video>` element plus an optional hls.js engine
//! - [`FullscreenApi`]: standard and vendor-prefixed fullscreen

#![no_std]

extern crate alloc;

mod dispatch;
mod dom;
mod error;
mod fullscreen;
mod hls;
mod media;
mod timers;

pub use dispatch::Dispatcher;
pub use dom::{DomTargets, DomView};
pub use error::DomError;
pub use fullscreen::FullscreenApi;
pub use media::{WebMedia, probe_caps};
pub use premiere_core::backend::{LaunchView, MediaEngine, PlaybackView};
pub use timers::WebTimers;

use premiere_core::time::WallTime;

/// Returns the current wall time from `Date.now()`.
#[must_use]
pub fn now() -> WallTime {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Date.now() is an integral millisecond count well inside i64"
    )]
    let ms = js_sys::Date::now() as i64;
    WallTime::from_millis(ms)
}

/// Returns the viewport width in CSS pixels, if there is a window.
#[must_use]
pub fn viewport_width() -> Option<u32> {
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    Some(clamp_width(width))
}

fn clamp_width(width: f64) -> u32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "clamped to the u32 range first"
    )]
    let px = width.clamp(0.0, f64::from(u32::MAX)) as u32;
    px
}
