// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Playback session policy: strategy selection, autoplay, error display, and
//! reactions to media, engine, and environment events.
//!
//! The strategy is chosen once from [`PlatformCaps`] and never changes:
//!
//! | Strategy   | Chosen when                        | Source              |
//! |------------|------------------------------------|---------------------|
//! | `Engine`   | the streaming engine is supported  | engine loads the URL|
//! | `Native`   | the media element plays HLS itself | element `src`       |
//! | `Fallback` | neither                            | poster only         |
//!
//! [`PlaybackAdapter`] holds no handles of its own. Every operation borrows
//! the [`TaskSet`], the [`PlaybackView`] and the [`MediaEngine`] it needs, so
//! the controller keeps sole ownership of all of them.

use alloc::string::String;

use crate::backend::{MediaEngine, PlaybackView};
use crate::config::PlaybackConfig;
use crate::error::PlaybackError;
use crate::input::KeyCommand;
use crate::timers::{Deferred, TaskSet, TimerId, Timers};

/// What the platform can do, probed once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlatformCaps {
    /// The streaming engine library reports support (MSE available).
    pub engine_supported: bool,
    /// The media element can play HLS playlists natively.
    pub native_hls: bool,
}

/// How the stream reaches the media element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaybackStrategy {
    /// The streaming engine fetches segments and feeds the element.
    Engine,
    /// The element is pointed at the playlist directly.
    Native,
    /// Nothing can play; show a poster and an explanation.
    Fallback,
}

impl PlaybackStrategy {
    /// Picks the strategy, preferring the engine over native playback.
    #[must_use]
    pub const fn select(caps: PlatformCaps) -> Self {
        if caps.engine_supported {
            Self::Engine
        } else if caps.native_hls {
            Self::Native
        } else {
            Self::Fallback
        }
    }

    /// Whether a streaming engine instance backs this strategy.
    #[must_use]
    pub const fn has_engine(self) -> bool {
        matches!(self, Self::Engine)
    }
}

/// Settings handed to the streaming engine on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Verbose engine logging.
    pub debug: bool,
    /// Demux in a worker.
    pub enable_worker: bool,
    /// Low-latency live mode.
    pub low_latency_mode: bool,
    /// Seconds of already-played media kept in the buffer.
    pub back_buffer_length: u32,
}

impl EngineConfig {
    /// Low-latency live playback.
    pub const LIVE: Self = Self {
        debug: false,
        enable_worker: true,
        low_latency_mode: true,
        back_buffer_length: 90,
    };
}

/// Forward buffer targets, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferProfile {
    /// Target forward buffer.
    pub max_buffer_length: u32,
    /// Hard ceiling on the forward buffer.
    pub max_max_buffer_length: u32,
}

impl BufferProfile {
    /// Narrow (mobile) viewports.
    pub const COMPACT: Self = Self {
        max_buffer_length: 30,
        max_max_buffer_length: 60,
    };

    /// Wide viewports.
    pub const ROOMY: Self = Self {
        max_buffer_length: 60,
        max_max_buffer_length: 120,
    };
}

/// Events raised by the streaming engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// The playlist was fetched and parsed.
    ManifestParsed,
    /// The engine hit an error.
    Error {
        /// Whether the engine gave up.
        fatal: bool,
        /// Engine-specific description.
        details: String,
    },
}

/// Events raised by the media element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    /// Playback started or resumed.
    Play,
    /// Playback paused.
    Pause,
    /// Playback reached the end.
    Ended,
    /// Playback stalled waiting for data.
    Waiting,
    /// Enough data to start playing.
    CanPlay,
    /// Duration and dimensions are known.
    LoadedMetadata,
}

/// Why a play request was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayIntent {
    /// Attempted without a user gesture once the stream is ready.
    Autoplay,
    /// Requested by the viewer.
    Manual,
}

/// Glyph drawn on the play button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayGlyph {
    /// Triangle.
    Play,
    /// Two bars.
    Pause,
}

/// The single slot of the error message area.
///
/// Each [`show`](Self::show) bumps a generation number. A dismissal only
/// applies to the generation it was scheduled for, so a message that replaced
/// an older one is never removed by the older one's timer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorNotice {
    generation: u32,
    current: Option<PlaybackError>,
}

impl ErrorNotice {
    /// Replaces the current message and returns its generation.
    pub fn show(&mut self, error: PlaybackError) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(error);
        self.generation
    }

    /// Clears the message if it is still `generation`. Returns whether it did.
    pub fn dismiss(&mut self, generation: u32) -> bool {
        if self.current.is_some() && self.generation == generation {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// The error currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<&PlaybackError> {
        self.current.as_ref()
    }

    /// Generation of the most recent message.
    #[must_use]
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

/// Playback policy for one page session.
#[derive(Debug)]
pub struct PlaybackAdapter {
    config: PlaybackConfig,
    strategy: PlaybackStrategy,
    notice: ErrorNotice,
    dismiss_timer: Option<TimerId>,
    long_press: Option<TimerId>,
    buffer: Option<BufferProfile>,
    glyph: PlayGlyph,
}

impl PlaybackAdapter {
    /// Creates the adapter for an already selected strategy.
    #[must_use]
    pub fn new(config: PlaybackConfig, strategy: PlaybackStrategy) -> Self {
        Self {
            config,
            strategy,
            notice: ErrorNotice::default(),
            dismiss_timer: None,
            long_press: None,
            buffer: None,
            glyph: PlayGlyph::Play,
        }
    }

    /// The strategy chosen at startup.
    #[must_use]
    pub const fn strategy(&self) -> PlaybackStrategy {
        self.strategy
    }

    /// Adapter configuration.
    #[must_use]
    pub const fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// The error message slot.
    #[must_use]
    pub const fn notice(&self) -> &ErrorNotice {
        &self.notice
    }

    /// Buffer profile last applied to the engine.
    #[must_use]
    pub const fn buffer_profile(&self) -> Option<BufferProfile> {
        self.buffer
    }

    /// Applies startup state for the selected strategy.
    pub fn start<T, V, M>(
        &mut self,
        tasks: &mut TaskSet<T>,
        view: &mut V,
        media: &mut M,
        viewport_width: u32,
    ) where
        T: Timers,
        V: PlaybackView,
        M: MediaEngine,
    {
        tracing::info!(strategy = ?self.strategy, "playback session starting");
        match self.strategy {
            PlaybackStrategy::Engine => self.on_resize(viewport_width, media),
            PlaybackStrategy::Native => {}
            PlaybackStrategy::Fallback => {
                tracing::warn!("no supported playback method, showing fallback poster");
                view.set_poster(&self.config.fallback_poster);
                self.show_error(PlaybackError::UnsupportedPlatform, tasks, view);
            }
        }
    }

    /// Reacts to a streaming engine event.
    pub fn on_engine_event<T, V, M>(
        &mut self,
        event: EngineEvent,
        tasks: &mut TaskSet<T>,
        view: &mut V,
        media: &mut M,
    ) where
        T: Timers,
        V: PlaybackView,
        M: MediaEngine,
    {
        match event {
            EngineEvent::ManifestParsed => {
                tracing::info!("manifest parsed");
                view.set_loading_visible(false);
                Self::attempt_autoplay(media);
            }
            EngineEvent::Error {
                fatal: true,
                details,
            } => {
                tracing::error!(%details, "fatal streaming engine error");
                view.set_loading_visible(false);
                self.show_error(PlaybackError::EngineFatal { details }, tasks, view);
            }
            EngineEvent::Error {
                fatal: false,
                details,
            } => {
                tracing::warn!(%details, "streaming engine error");
            }
        }
    }

    /// Reacts to a media element event.
    pub fn on_media_event<V, M>(&mut self, event: MediaEvent, view: &mut V, media: &mut M)
    where
        V: PlaybackView,
        M: MediaEngine,
    {
        match event {
            MediaEvent::Play => {
                tracing::info!(target: "premiere::engagement", action = "play");
                view.set_overlay_hidden(true);
                self.set_glyph(PlayGlyph::Play, view);
            }
            MediaEvent::Pause => {
                if !media.is_ended() {
                    view.set_overlay_hidden(false);
                }
            }
            MediaEvent::Ended => {
                view.set_overlay_hidden(true);
                self.set_glyph(PlayGlyph::Pause, view);
            }
            MediaEvent::Waiting => {
                view.set_loading_visible(true);
                view.set_play_button_visible(false);
            }
            MediaEvent::CanPlay => {
                view.set_loading_visible(false);
                view.set_play_button_visible(true);
            }
            MediaEvent::LoadedMetadata => {
                if self.strategy == PlaybackStrategy::Native {
                    Self::attempt_autoplay(media);
                }
            }
        }
    }

    fn set_glyph<V: PlaybackView>(&mut self, glyph: PlayGlyph, view: &mut V) {
        if self.glyph != glyph {
            self.glyph = glyph;
            view.set_play_glyph(glyph);
        }
    }

    /// Tries to start playback without a user gesture.
    pub fn attempt_autoplay<M: MediaEngine>(media: &mut M) {
        media.request_play(PlayIntent::Autoplay);
    }

    /// Starts playback on the viewer's behalf.
    ///
    /// Does nothing under [`PlaybackStrategy::Fallback`]: there is no source,
    /// and the unsupported-platform message must stay up.
    pub fn play_video<V, M>(&mut self, view: &mut V, media: &mut M)
    where
        V: PlaybackView,
        M: MediaEngine,
    {
        if self.strategy == PlaybackStrategy::Fallback {
            tracing::debug!("play ignored without a playable source");
            return;
        }
        view.set_loading_visible(true);
        media.start_load();
        media.request_play(PlayIntent::Manual);
    }

    /// Handles the outcome of a play request.
    pub fn on_play_settled<T, V, M>(
        &mut self,
        intent: PlayIntent,
        result: Result<(), PlaybackError>,
        tasks: &mut TaskSet<T>,
        view: &mut V,
        media: &mut M,
    ) where
        T: Timers,
        V: PlaybackView,
        M: MediaEngine,
    {
        match (intent, result) {
            (PlayIntent::Autoplay, Ok(())) => {
                tracing::info!("autoplay started");
                view.set_overlay_hidden(true);
                tasks.after(self.config.unmute_delay, Deferred::Unmute);
            }
            (PlayIntent::Autoplay, Err(err)) => {
                tracing::info!(%err, "autoplay blocked, waiting for the viewer");
                view.set_overlay_hidden(false);
            }
            (PlayIntent::Manual, Ok(())) => {
                media.set_muted(false);
            }
            (PlayIntent::Manual, Err(err)) => {
                tracing::error!(%err, "manual play failed");
                view.set_loading_visible(false);
                self.show_error(err, tasks, view);
            }
        }
    }

    /// Puts `error` in the message area, replacing any previous message.
    ///
    /// Transient errors schedule their own dismissal; a permanent one stays.
    pub fn show_error<T, V>(&mut self, error: PlaybackError, tasks: &mut TaskSet<T>, view: &mut V)
    where
        T: Timers,
        V: PlaybackView,
    {
        view.show_error(error.user_message());
        let permanent = error.is_permanent();
        let generation = self.notice.show(error);
        if let Some(id) = self.dismiss_timer.take() {
            tasks.cancel(id);
        }
        if !permanent {
            self.dismiss_timer = Some(tasks.after(
                self.config.error_dismiss_after,
                Deferred::DismissError(generation),
            ));
        }
    }

    /// Removes the message of `generation` if it is still shown.
    pub fn dismiss_error<V: PlaybackView>(&mut self, generation: u32, view: &mut V) {
        if self.notice.dismiss(generation) {
            self.dismiss_timer = None;
            view.clear_error();
        }
    }

    /// Delayed unmute after a successful autoplay.
    pub fn unmute<M: MediaEngine>(media: &mut M) {
        media.set_muted(false);
    }

    /// Dispatches a keyboard shortcut.
    pub fn on_key<V, M>(&mut self, command: KeyCommand, view: &mut V, media: &mut M)
    where
        V: PlaybackView,
        M: MediaEngine,
    {
        match command {
            KeyCommand::TogglePlayback => {
                if media.is_paused() {
                    self.play_video(view, media);
                } else {
                    media.pause();
                }
            }
            KeyCommand::ToggleFullscreen => {
                tracing::info!(target: "premiere::engagement", action = "fullscreen");
                view.toggle_fullscreen();
            }
            KeyCommand::ToggleMute => {
                let muted = !media.is_muted();
                tracing::info!(target: "premiere::engagement", action = "mute", muted);
                media.set_muted(muted);
            }
        }
    }

    /// A touch began on the player; arms the long-press timer.
    pub fn touch_start<T: Timers>(&mut self, tasks: &mut TaskSet<T>) {
        if let Some(id) = self.long_press.take() {
            tasks.cancel(id);
        }
        self.long_press = Some(tasks.after(self.config.long_press, Deferred::LongPress));
    }

    /// The touch ended; a pending long press is abandoned.
    pub fn touch_end<T: Timers>(&mut self, tasks: &mut TaskSet<T>) {
        if let Some(id) = self.long_press.take() {
            tasks.cancel(id);
        }
    }

    /// The touch was held long enough.
    pub fn long_press_elapsed<V: PlaybackView>(&mut self, view: &mut V) {
        self.long_press = None;
        view.toggle_overlay();
    }

    /// Page visibility changed.
    pub fn on_visibility<M: MediaEngine>(&mut self, hidden: bool, media: &mut M) {
        if hidden && !media.is_paused() {
            tracing::debug!("page hidden, pausing");
            media.pause();
        }
    }

    /// Network connectivity changed.
    pub fn on_connectivity<M: MediaEngine>(&mut self, online: bool, media: &mut M) {
        if online {
            tracing::info!("connection restored");
            media.start_load();
        } else {
            tracing::info!("connection lost");
            media.pause();
        }
    }

    /// Viewport width changed; retunes engine buffering.
    pub fn on_resize<M: MediaEngine>(&mut self, width: u32, media: &mut M) {
        if !self.strategy.has_engine() {
            return;
        }
        let profile = self.config.buffer_profile_for(width);
        if self.buffer != Some(profile) {
            tracing::debug!(width, ?profile, "buffer profile changed");
            media.apply_buffer_profile(profile);
            self.buffer = Some(profile);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString as _;
    use alloc::vec::Vec;

    use super::*;
    use crate::testing::{ManualTimers, RecordingView, ScriptedMedia, ViewCall};
    use crate::time::Duration;
    use crate::timers::TimerEvent;

    struct Rig {
        adapter: PlaybackAdapter,
        tasks: TaskSet<ManualTimers>,
        view: RecordingView,
        media: ScriptedMedia,
    }

    fn rig(strategy: PlaybackStrategy) -> Rig {
        Rig {
            adapter: PlaybackAdapter::new(
                PlaybackConfig::live("https://example.invalid/live.m3u8"),
                strategy,
            ),
            tasks: TaskSet::new(ManualTimers::default()),
            view: RecordingView::default(),
            media: ScriptedMedia::default(),
        }
    }

    impl Rig {
        fn fire_due(&mut self, by: Duration) {
            let until = self.tasks.host().now() + by.millis();
            while let Some((id, event)) = self.tasks.host_mut().pop_due(until) {
                if !self.tasks.fired(id) {
                    continue;
                }
                match event {
                    TimerEvent::Deferred(Deferred::DismissError(generation)) => {
                        self.adapter.dismiss_error(generation, &mut self.view);
                    }
                    TimerEvent::Deferred(Deferred::Unmute) => {
                        PlaybackAdapter::unmute(&mut self.media);
                    }
                    TimerEvent::Deferred(Deferred::LongPress) => {
                        self.adapter.long_press_elapsed(&mut self.view);
                    }
                    other => panic!("unexpected timer {other:?}"),
                }
            }
            self.tasks.host_mut().settle(until);
        }

        fn fail(&mut self, error: PlaybackError) {
            self.adapter
                .show_error(error, &mut self.tasks, &mut self.view);
        }
    }

    #[test]
    fn strategy_prefers_engine_then_native() {
        let both = PlatformCaps {
            engine_supported: true,
            native_hls: true,
        };
        let native = PlatformCaps {
            engine_supported: false,
            native_hls: true,
        };
        assert_eq!(PlaybackStrategy::select(both), PlaybackStrategy::Engine);
        assert_eq!(PlaybackStrategy::select(native), PlaybackStrategy::Native);
        assert_eq!(
            PlaybackStrategy::select(PlatformCaps::default()),
            PlaybackStrategy::Fallback
        );
    }

    #[test]
    fn fallback_shows_poster_and_permanent_message() {
        let mut r = rig(PlaybackStrategy::Fallback);
        r.adapter
            .start(&mut r.tasks, &mut r.view, &mut r.media, 1280);
        assert!(
            r.view
                .calls
                .contains(&ViewCall::Poster("assets/fallback-poster.jpg".to_string()))
        );
        assert_eq!(
            r.view.error.as_deref(),
            Some(PlaybackError::UnsupportedPlatform.user_message())
        );
        assert_eq!(r.tasks.outstanding(), 0, "no dismissal for permanent errors");

        r.fire_due(Duration::from_secs(60));
        assert!(r.view.error.is_some());
    }

    #[test]
    fn engine_start_applies_buffer_for_viewport() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.adapter.start(&mut r.tasks, &mut r.view, &mut r.media, 400);
        assert_eq!(r.media.profiles, [BufferProfile::COMPACT]);
    }

    #[test]
    fn resize_switches_profiles_only_with_engine() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.adapter.on_resize(1024, &mut r.media);
        r.adapter.on_resize(1200, &mut r.media);
        r.adapter.on_resize(600, &mut r.media);
        assert_eq!(
            r.media.profiles,
            [BufferProfile::ROOMY, BufferProfile::COMPACT]
        );
        assert_eq!(r.adapter.buffer_profile(), Some(BufferProfile::COMPACT));

        let mut n = rig(PlaybackStrategy::Native);
        n.adapter.on_resize(600, &mut n.media);
        assert!(n.media.profiles.is_empty());
    }

    #[test]
    fn manifest_parsed_hides_loading_and_autoplays() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.adapter.on_engine_event(
            EngineEvent::ManifestParsed,
            &mut r.tasks,
            &mut r.view,
            &mut r.media,
        );
        assert_eq!(r.view.calls, [ViewCall::Loading(false)]);
        assert_eq!(r.media.play_requests, [PlayIntent::Autoplay]);
    }

    #[test]
    fn autoplay_success_hides_overlay_then_unmutes() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.adapter.on_play_settled(
            PlayIntent::Autoplay,
            Ok(()),
            &mut r.tasks,
            &mut r.view,
            &mut r.media,
        );
        assert_eq!(r.view.calls, [ViewCall::OverlayHidden(true)]);
        assert!(r.media.muted);

        r.fire_due(Duration::from_millis(999));
        assert!(r.media.muted);
        r.fire_due(Duration::from_millis(1));
        assert!(!r.media.muted);
    }

    #[test]
    fn autoplay_rejection_keeps_overlay() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.adapter.on_play_settled(
            PlayIntent::Autoplay,
            Err(PlaybackError::Failure {
                reason: "NotAllowedError".to_string(),
            }),
            &mut r.tasks,
            &mut r.view,
            &mut r.media,
        );
        assert_eq!(r.view.calls, [ViewCall::OverlayHidden(false)]);
        assert!(r.view.error.is_none(), "a blocked autoplay is not an error");
    }

    #[test]
    fn manual_play_loads_and_unmutes() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.adapter.play_video(&mut r.view, &mut r.media);
        assert_eq!(r.view.calls, [ViewCall::Loading(true)]);
        assert_eq!(r.media.loads, 1);
        assert_eq!(r.media.play_requests, [PlayIntent::Manual]);

        r.adapter.on_play_settled(
            PlayIntent::Manual,
            Ok(()),
            &mut r.tasks,
            &mut r.view,
            &mut r.media,
        );
        assert!(!r.media.muted);
    }

    #[test]
    fn manual_play_failure_shows_transient_error() {
        let mut r = rig(PlaybackStrategy::Native);
        r.adapter.on_play_settled(
            PlayIntent::Manual,
            Err(PlaybackError::Failure {
                reason: "aborted".to_string(),
            }),
            &mut r.tasks,
            &mut r.view,
            &mut r.media,
        );
        assert_eq!(
            r.view.error.as_deref(),
            Some("Unable to play stream. Please try again.")
        );
        assert!(r.view.calls.contains(&ViewCall::Loading(false)));

        r.fire_due(Duration::from_secs(10));
        assert!(r.view.error.is_none());
        assert!(r.adapter.notice().current().is_none());
    }

    #[test]
    fn fatal_engine_error_hides_loading_and_reports() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.adapter.on_engine_event(
            EngineEvent::Error {
                fatal: true,
                details: "manifestLoadError".to_string(),
            },
            &mut r.tasks,
            &mut r.view,
            &mut r.media,
        );
        assert_eq!(r.view.calls[0], ViewCall::Loading(false));
        assert_eq!(
            r.view.error.as_deref(),
            Some("Stream temporarily unavailable. Please refresh the page.")
        );
    }

    #[test]
    fn non_fatal_engine_error_touches_nothing() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.adapter.on_engine_event(
            EngineEvent::Error {
                fatal: false,
                details: "fragLoadTimeOut".to_string(),
            },
            &mut r.tasks,
            &mut r.view,
            &mut r.media,
        );
        assert!(r.view.calls.is_empty());
        assert_eq!(r.tasks.outstanding(), 0);
    }

    #[test]
    fn error_area_holds_one_message_and_old_timer_cannot_clear_new_one() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.fail(PlaybackError::Failure {
            reason: "first".to_string(),
        });
        r.fire_due(Duration::from_secs(6));
        r.fail(PlaybackError::EngineFatal {
            details: "second".to_string(),
        });
        assert_eq!(r.view.shown_errors, 2);
        assert_eq!(r.tasks.outstanding(), 1, "first dismissal was cancelled");

        // The first message would have expired here.
        r.fire_due(Duration::from_secs(5));
        assert_eq!(
            r.view.error.as_deref(),
            Some("Stream temporarily unavailable. Please refresh the page.")
        );

        r.fire_due(Duration::from_secs(5));
        assert!(r.view.error.is_none());
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut notice = ErrorNotice::default();
        let first = notice.show(PlaybackError::UnsupportedPlatform);
        let second = notice.show(PlaybackError::UnsupportedPlatform);
        assert!(!notice.dismiss(first));
        assert!(notice.dismiss(second));
        assert!(!notice.dismiss(second));
    }

    #[test]
    fn media_events_drive_chrome() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.adapter
            .on_media_event(MediaEvent::Waiting, &mut r.view, &mut r.media);
        r.adapter
            .on_media_event(MediaEvent::CanPlay, &mut r.view, &mut r.media);
        r.adapter
            .on_media_event(MediaEvent::Play, &mut r.view, &mut r.media);
        assert_eq!(
            r.view.calls,
            [
                ViewCall::Loading(true),
                ViewCall::PlayButton(false),
                ViewCall::Loading(false),
                ViewCall::PlayButton(true),
                ViewCall::OverlayHidden(true),
            ]
        );
    }

    #[test]
    fn pause_at_end_keeps_overlay_hidden() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.media.ended = true;
        r.adapter
            .on_media_event(MediaEvent::Ended, &mut r.view, &mut r.media);
        r.adapter
            .on_media_event(MediaEvent::Pause, &mut r.view, &mut r.media);
        assert_eq!(
            r.view.calls,
            [
                ViewCall::OverlayHidden(true),
                ViewCall::Glyph(PlayGlyph::Pause)
            ]
        );

        r.media.ended = false;
        r.adapter
            .on_media_event(MediaEvent::Pause, &mut r.view, &mut r.media);
        assert_eq!(r.view.calls.last(), Some(&ViewCall::OverlayHidden(false)));
    }

    #[test]
    fn replay_after_end_restores_play_glyph() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.adapter
            .on_media_event(MediaEvent::Play, &mut r.view, &mut r.media);
        assert!(!r.view.calls.iter().any(|c| matches!(c, ViewCall::Glyph(_))));

        r.adapter
            .on_media_event(MediaEvent::Ended, &mut r.view, &mut r.media);
        r.adapter
            .on_media_event(MediaEvent::Play, &mut r.view, &mut r.media);
        let glyphs: Vec<_> = r
            .view
            .calls
            .iter()
            .filter(|c| matches!(c, ViewCall::Glyph(_)))
            .cloned()
            .collect();
        assert_eq!(
            glyphs,
            [
                ViewCall::Glyph(PlayGlyph::Pause),
                ViewCall::Glyph(PlayGlyph::Play)
            ]
        );
    }

    #[test]
    fn fallback_ignores_play_requests_and_keeps_its_message() {
        let mut r = rig(PlaybackStrategy::Fallback);
        r.adapter
            .start(&mut r.tasks, &mut r.view, &mut r.media, 1280);
        r.adapter
            .on_key(KeyCommand::TogglePlayback, &mut r.view, &mut r.media);
        r.adapter.play_video(&mut r.view, &mut r.media);
        assert!(r.media.play_requests.is_empty());
        assert_eq!(r.media.loads, 0);

        r.fire_due(Duration::from_secs(11));
        assert_eq!(
            r.view.error.as_deref(),
            Some(PlaybackError::UnsupportedPlatform.user_message())
        );
        assert!(!r.view.calls.contains(&ViewCall::ClearError));
    }

    #[test]
    fn loaded_metadata_autoplays_only_natively() {
        let mut e = rig(PlaybackStrategy::Engine);
        e.adapter
            .on_media_event(MediaEvent::LoadedMetadata, &mut e.view, &mut e.media);
        assert!(e.media.play_requests.is_empty());

        let mut n = rig(PlaybackStrategy::Native);
        n.adapter
            .on_media_event(MediaEvent::LoadedMetadata, &mut n.view, &mut n.media);
        assert_eq!(n.media.play_requests, [PlayIntent::Autoplay]);
    }

    #[test]
    fn space_toggles_between_play_and_pause() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.adapter
            .on_key(KeyCommand::TogglePlayback, &mut r.view, &mut r.media);
        assert_eq!(r.media.play_requests, [PlayIntent::Manual]);

        r.media.paused = false;
        r.adapter
            .on_key(KeyCommand::TogglePlayback, &mut r.view, &mut r.media);
        assert_eq!(r.media.pauses, 1);
        assert_eq!(r.media.play_requests.len(), 1);
    }

    #[test]
    fn mute_and_fullscreen_toggle() {
        let mut r = rig(PlaybackStrategy::Engine);
        assert!(r.media.muted);
        r.adapter
            .on_key(KeyCommand::ToggleMute, &mut r.view, &mut r.media);
        assert!(!r.media.muted);
        r.adapter
            .on_key(KeyCommand::ToggleMute, &mut r.view, &mut r.media);
        assert!(r.media.muted);

        r.adapter
            .on_key(KeyCommand::ToggleFullscreen, &mut r.view, &mut r.media);
        assert_eq!(r.view.calls, [ViewCall::Fullscreen]);
    }

    #[test]
    fn long_press_toggles_overlay_and_short_tap_does_not() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.adapter.touch_start(&mut r.tasks);
        r.fire_due(Duration::from_millis(200));
        r.adapter.touch_end(&mut r.tasks);
        r.fire_due(Duration::from_secs(1));
        assert!(r.view.calls.is_empty());

        r.adapter.touch_start(&mut r.tasks);
        r.fire_due(Duration::from_millis(300));
        assert_eq!(r.view.calls, [ViewCall::ToggleOverlay]);
        r.adapter.touch_end(&mut r.tasks);
        assert_eq!(r.tasks.outstanding(), 0);
    }

    #[test]
    fn environment_events() {
        let mut r = rig(PlaybackStrategy::Engine);
        r.adapter.on_visibility(true, &mut r.media);
        assert_eq!(r.media.pauses, 0, "already paused");

        r.media.paused = false;
        r.adapter.on_visibility(false, &mut r.media);
        assert_eq!(r.media.pauses, 0);
        r.adapter.on_visibility(true, &mut r.media);
        assert_eq!(r.media.pauses, 1);

        r.adapter.on_connectivity(true, &mut r.media);
        assert_eq!(r.media.loads, 1);
        r.adapter.on_connectivity(false, &mut r.media);
        assert_eq!(r.media.pauses, 2);
    }
}
