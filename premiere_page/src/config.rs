// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page configuration: compiled-in defaults plus rehearsal overrides.

use alloc::string::{String, ToString as _};

use chrono::DateTime;
use premiere_core::config::{LaunchConfig, PlaybackConfig};
use premiere_core::time::WallTime;

/// The scheduled launch, in RFC 3339.
pub const LAUNCH_MOMENT: &str = "2025-10-18T11:00:00+01:00";

/// The live HLS stream.
pub const STREAM_URL: &str = "https://stream-hls.castr.net/669859478d4515508937865a/live_98c5c5e06bb711efa7fb7fc6a849f4ff/index.m3u8";

/// Query parameter overriding [`LAUNCH_MOMENT`].
pub const LAUNCH_PARAM: &str = "launch";

/// Query parameter overriding [`STREAM_URL`].
pub const STREAM_PARAM: &str = "stream";

/// A configuration value that cannot be used.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The launch moment is not an RFC 3339 timestamp.
    #[error("invalid launch moment {text:?}: {reason}")]
    InvalidLaunchMoment {
        /// The rejected text.
        text: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The stream URL is blank.
    #[error("stream URL is empty")]
    EmptyStreamUrl,
}

/// Everything the page needs to build its controller.
#[derive(Clone, Debug)]
pub struct PageConfig {
    /// Launch timing.
    pub launch: LaunchConfig,
    /// Playback tuning.
    pub playback: PlaybackConfig,
}

impl PageConfig {
    /// The compiled-in configuration.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::with_overrides(None, None)
    }

    /// Builds the configuration, replacing the launch moment and stream URL
    /// when overrides are given.
    pub fn with_overrides(launch: Option<&str>, stream: Option<&str>) -> Result<Self, ConfigError> {
        let launch_moment = parse_launch_moment(launch.unwrap_or(LAUNCH_MOMENT))?;
        let stream = stream.unwrap_or(STREAM_URL).trim();
        if stream.is_empty() {
            return Err(ConfigError::EmptyStreamUrl);
        }
        Ok(Self {
            launch: LaunchConfig::new(launch_moment),
            playback: PlaybackConfig::live(stream),
        })
    }
}

/// Parses an RFC 3339 timestamp into wall time.
pub fn parse_launch_moment(text: &str) -> Result<WallTime, ConfigError> {
    let text = text.trim();
    DateTime::parse_from_rfc3339(text)
        .map(|moment| WallTime::from_millis(moment.timestamp_millis()))
        .map_err(|err| ConfigError::InvalidLaunchMoment {
            text: text.to_string(),
            reason: err.to_string(),
        })
}
