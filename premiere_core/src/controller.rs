// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page-lifetime context object.
//!
//! [`LaunchController`] owns every timer, both views, and the playback
//! session. The host feeds it [`HostEvent`]s together with the current wall
//! time; nothing inside reads a clock or touches a global.
//!
//! # Startup order
//!
//! 1. Playback session (strategy-specific startup, initial buffer profile).
//! 2. Countdown: the repeating tick is armed, then one tick runs immediately.
//! 3. Status: one poll runs immediately, then the repeating poll is armed.
//!
//! Arming the countdown before the first tick means a page opened after the
//! launch moment goes straight into the celebration and the countdown timer
//! is cancelled in the same turn.

use crate::backend::{LaunchView, MediaEngine, PlaybackView};
use crate::config::{LaunchConfig, PlaybackConfig};
use crate::error::PlaybackError;
use crate::input::KeyCommand;
use crate::playback::{EngineEvent, MediaEvent, PlayIntent, PlaybackAdapter, PlaybackStrategy};
use crate::sequencer::{CelebrationStep, CountdownStep, LaunchSequencer};
use crate::status::StatusTracker;
use crate::time::WallTime;
use crate::timers::{Deferred, TaskSet, TimerEvent, TimerId, Timers};

/// Everything the host can tell the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// A timer armed through the controller's [`Timers`] fired.
    Timer(TimerId, TimerEvent),
    /// The streaming engine raised an event.
    Engine(EngineEvent),
    /// The media element raised an event.
    Media(MediaEvent),
    /// A play request settled.
    PlaySettled(PlayIntent, Result<(), PlaybackError>),
    /// A bound key was pressed.
    Key(KeyCommand),
    /// The play button was clicked.
    PlayClicked,
    /// A touch began on the player.
    TouchStart,
    /// A touch on the player ended.
    TouchEnd,
    /// Page visibility changed.
    Visibility {
        /// Whether the page is now hidden.
        hidden: bool,
    },
    /// Network connectivity changed.
    Connectivity {
        /// Whether the browser is now online.
        online: bool,
    },
    /// The viewport was resized.
    Resize {
        /// New viewport width in CSS pixels.
        width: u32,
    },
}

/// Countdown, launch sequence, status indicator and playback for one page.
#[derive(Debug)]
pub struct LaunchController<T, V, M> {
    config: LaunchConfig,
    tasks: TaskSet<T>,
    view: V,
    media: M,
    status: StatusTracker,
    sequencer: LaunchSequencer,
    playback: PlaybackAdapter,
    countdown_timer: Option<TimerId>,
    celebration_timer: Option<TimerId>,
    running: bool,
}

impl<T, V, M> LaunchController<T, V, M>
where
    T: Timers,
    V: LaunchView + PlaybackView,
    M: MediaEngine,
{
    /// Assembles a controller. Nothing is rendered or scheduled until
    /// [`start`](Self::start).
    pub fn new(
        config: LaunchConfig,
        playback: PlaybackConfig,
        strategy: PlaybackStrategy,
        timers: T,
        view: V,
        media: M,
    ) -> Self {
        Self {
            config,
            tasks: TaskSet::new(timers),
            view,
            media,
            status: StatusTracker::new(config.launch_moment, config.live_window),
            sequencer: LaunchSequencer::new(config.launch_moment, config.celebration_from),
            playback: PlaybackAdapter::new(playback, strategy),
            countdown_timer: None,
            celebration_timer: None,
            running: true,
        }
    }

    /// Renders the initial state and arms the repeating timers.
    pub fn start(&mut self, now: WallTime, viewport_width: u32) {
        if !self.running {
            return;
        }
        tracing::info!(
            launch_ms = self.config.launch_moment.millis(),
            now_ms = now.millis(),
            "launch controller starting"
        );
        self.playback
            .start(&mut self.tasks, &mut self.view, &mut self.media, viewport_width);

        self.countdown_timer = Some(
            self.tasks
                .every(self.config.countdown_interval, TimerEvent::CountdownTick),
        );
        self.countdown_tick(now);

        self.poll_status(now);
        self.tasks
            .every(self.config.status_poll_interval, TimerEvent::StatusPoll);
    }

    /// Handles one host event at wall time `now`.
    ///
    /// After [`shutdown`](Self::shutdown) every event is ignored.
    pub fn handle(&mut self, event: HostEvent, now: WallTime) {
        if !self.running {
            return;
        }
        match event {
            HostEvent::Timer(id, event) => {
                if self.tasks.fired(id) {
                    self.on_timer(event, now);
                }
            }
            HostEvent::Engine(event) => self.playback.on_engine_event(
                event,
                &mut self.tasks,
                &mut self.view,
                &mut self.media,
            ),
            HostEvent::Media(event) => {
                self.playback
                    .on_media_event(event, &mut self.view, &mut self.media);
            }
            HostEvent::PlaySettled(intent, result) => self.playback.on_play_settled(
                intent,
                result,
                &mut self.tasks,
                &mut self.view,
                &mut self.media,
            ),
            HostEvent::Key(command) => {
                self.playback
                    .on_key(command, &mut self.view, &mut self.media);
            }
            HostEvent::PlayClicked => self.playback.play_video(&mut self.view, &mut self.media),
            HostEvent::TouchStart => self.playback.touch_start(&mut self.tasks),
            HostEvent::TouchEnd => self.playback.touch_end(&mut self.tasks),
            HostEvent::Visibility { hidden } => {
                self.playback.on_visibility(hidden, &mut self.media);
            }
            HostEvent::Connectivity { online } => {
                self.playback.on_connectivity(online, &mut self.media);
            }
            HostEvent::Resize { width } => self.playback.on_resize(width, &mut self.media),
        }
    }

    /// Cancels every outstanding timer and releases the playback session.
    ///
    /// Idempotent.
    pub fn shutdown(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.tasks.cancel_all();
        self.countdown_timer = None;
        self.celebration_timer = None;
        self.media.release();
        tracing::info!("launch controller shut down");
    }

    fn on_timer(&mut self, event: TimerEvent, now: WallTime) {
        match event {
            TimerEvent::StatusPoll => self.poll_status(now),
            TimerEvent::CountdownTick => self.countdown_tick(now),
            TimerEvent::CelebrationTick => self.celebration_tick(),
            TimerEvent::Deferred(effect) => self.run_deferred(effect),
        }
    }

    fn poll_status(&mut self, now: WallTime) {
        let status = self.status.poll(now);
        self.view.render_status(status);
    }

    fn countdown_tick(&mut self, now: WallTime) {
        match self.sequencer.on_countdown_tick(now) {
            CountdownStep::Render(left) => self.view.render_countdown(&left),
            CountdownStep::Launch => {
                if let Some(id) = self.countdown_timer.take() {
                    self.tasks.cancel(id);
                }
                self.celebration_timer = Some(
                    self.tasks
                        .every(self.config.countdown_interval, TimerEvent::CelebrationTick),
                );
            }
            CountdownStep::Idle => {}
        }
    }

    fn celebration_tick(&mut self) {
        match self.sequencer.on_celebration_tick() {
            CelebrationStep::Show(n) => self.view.render_celebration(n),
            CelebrationStep::Transition => {
                if let Some(id) = self.celebration_timer.take() {
                    self.tasks.cancel(id);
                }
                self.transition();
            }
            CelebrationStep::Idle => {}
        }
    }

    fn transition(&mut self) {
        let status = self.status.force_live();
        self.view.render_status(status);
        self.view.fade_out_countdown(self.config.countdown_fade);
        self.tasks
            .after(self.config.countdown_fade, Deferred::RevealLiveBanner);
        self.tasks
            .after(self.config.container_collapse_delay, Deferred::CollapseContainer);
    }

    fn run_deferred(&mut self, effect: Deferred) {
        match effect {
            Deferred::RevealLiveBanner => {
                self.view.show_live_banner();
                self.tasks
                    .after(self.config.scroll_delay, Deferred::ScrollToVideo);
            }
            Deferred::ScrollToVideo => self.view.scroll_to_video(),
            Deferred::CollapseContainer => {
                self.view.fade_out_container(self.config.container_fade);
                self.tasks
                    .after(self.config.container_fade, Deferred::HideContainer);
            }
            Deferred::HideContainer => self.view.hide_container(),
            Deferred::Unmute => PlaybackAdapter::unmute(&mut self.media),
            Deferred::DismissError(generation) => {
                self.playback.dismiss_error(generation, &mut self.view);
            }
            Deferred::LongPress => self.playback.long_press_elapsed(&mut self.view),
        }
    }
}

impl<T, V, M> LaunchController<T, V, M> {
    /// Whether [`shutdown`](LaunchController::shutdown) has not run yet.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Launch timing configuration.
    #[must_use]
    pub const fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// The launch sequencer.
    #[must_use]
    pub const fn sequencer(&self) -> &LaunchSequencer {
        &self.sequencer
    }

    /// The status tracker.
    #[must_use]
    pub const fn status(&self) -> &StatusTracker {
        &self.status
    }

    /// The playback adapter.
    #[must_use]
    pub const fn playback(&self) -> &PlaybackAdapter {
        &self.playback
    }

    /// The views.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// The media session.
    #[must_use]
    pub const fn media(&self) -> &M {
        &self.media
    }

    /// The host timer facility.
    #[must_use]
    pub fn timers(&self) -> &T {
        self.tasks.host()
    }

    /// The host timer facility, mutably.
    pub fn timers_mut(&mut self) -> &mut T {
        self.tasks.host_mut()
    }

    /// Number of timers still outstanding.
    #[must_use]
    pub fn outstanding_timers(&self) -> usize {
        self.tasks.outstanding()
    }
}
