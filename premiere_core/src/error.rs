// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Playback error kinds and the copy shown for them.

use alloc::string::String;

/// Errors surfaced by the playback adapter.
///
/// None of these are retried automatically; the viewer retries by reloading
/// or pressing play.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    /// A play request was rejected by the media element.
    #[error("play request rejected: {reason}")]
    Failure {
        /// Reason reported by the platform.
        reason: String,
    },
    /// The streaming engine reported an unrecoverable error.
    #[error("fatal streaming engine error: {details}")]
    EngineFatal {
        /// Engine-specific description.
        details: String,
    },
    /// Neither the streaming engine nor native playback is available.
    #[error("no supported playback method on this platform")]
    UnsupportedPlatform,
}

impl PlaybackError {
    /// Message shown to the viewer.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Failure { .. } => "Unable to play stream. Please try again.",
            Self::EngineFatal { .. } => "Stream temporarily unavailable. Please refresh the page.",
            Self::UnsupportedPlatform => {
                "Your browser may not support live streaming. Please try a modern browser."
            }
        }
    }

    /// Whether the message stays until reload instead of dismissing itself.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(self, Self::UnsupportedPlatform)
    }
}
