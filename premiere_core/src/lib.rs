// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State machines and policies for a live launch-event page.
//!
//! `premiere_core` decides *what* the page shows and does: the stream status
//! indicator, the countdown to a fixed launch moment, the celebration and
//! post-launch transition, and the playback policy for the live stream. It is
//! `no_std` compatible (with `alloc`) and performs no I/O. Host crates supply
//! timers, views and the media element through the traits in [`backend`].
//!
//! # Architecture
//!
//! Everything flows through a single page-lifetime context object:
//!
//! ```text
//!   Host (timers, DOM events, media events, play() promises)
//!       │
//!       ▼
//!   HostEvent ──► LaunchController::handle(event, now)
//!                    │
//!        ┌───────────┼──────────────────┐
//!        ▼           ▼                  ▼
//!   StatusTracker  LaunchSequencer  PlaybackAdapter
//!        │           │                  │
//!        └───────────┼──────────────────┘
//!                    ▼
//!   LaunchView / PlaybackView / MediaEngine / TaskSet<Timers>
//! ```
//!
//! **[`status`]**: Pure mapping from wall time to
//! [`StreamStatus`](status::StreamStatus), plus a tracker with a sticky live
//! override.
//!
//! **[`countdown`]** and **[`sequencer`]**: Remaining-time fields and the
//! linear `Counting → Celebrating → Complete` launch machine.
//!
//! **[`playback`]**: Strategy selection, autoplay, error display and reactions
//! to media, engine and environment events.
//!
//! **[`timers`]**: Host timer trait and the [`TaskSet`](timers::TaskSet) that
//! tracks every outstanding timer so shutdown can cancel them.
//!
//! **[`controller`]**: [`LaunchController`](controller::LaunchController),
//! which owns all of the above.
//!
//! **[`config`]**: Launch timing and playback tuning.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod controller;
pub mod countdown;
pub mod error;
pub mod input;
pub mod playback;
pub mod sequencer;
pub mod status;
pub mod time;
pub mod timers;

#[cfg(test)]
mod testing;
