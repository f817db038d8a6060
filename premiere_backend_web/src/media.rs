// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The playback session: the `<video>` element plus the strategy's engine.

use alloc::boxed::Box;
use alloc::vec::Vec;

use premiere_core::backend::MediaEngine;
use premiere_core::config::PlaybackConfig;
use premiere_core::controller::HostEvent;
use premiere_core::error::PlaybackError;
use premiere_core::playback::{
    BufferProfile, EngineEvent, MediaEvent, PlatformCaps, PlayIntent, PlaybackStrategy,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, EventTarget, HtmlVideoElement};

use crate::dispatch::Dispatcher;
use crate::error::{DomError, describe};
use crate::hls::{self, Hls};

const HLS_MIME: &str = "application/vnd.apple.mpegurl";

const MEDIA_EVENTS: [(&str, MediaEvent); 6] = [
    ("play", MediaEvent::Play),
    ("pause", MediaEvent::Pause),
    ("ended", MediaEvent::Ended),
    ("waiting", MediaEvent::Waiting),
    ("canplay", MediaEvent::CanPlay),
    ("loadedmetadata", MediaEvent::LoadedMetadata),
];

/// Probes what `video` and the page can play.
#[must_use]
pub fn probe_caps(video: &HtmlVideoElement) -> PlatformCaps {
    PlatformCaps {
        engine_supported: hls::is_available(),
        native_hls: !video.can_play_type(HLS_MIME).is_empty(),
    }
}

/// An event listener that stays registered until dropped.
pub(crate) struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Registers `handler` for `kind` events on `target`.
    pub(crate) fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, DomError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| DomError::js("add event listener", &e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for Listener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listener").field("kind", &self.kind).finish()
    }
}

type EngineClosure = Closure<dyn FnMut(JsValue, JsValue)>;

enum Session {
    Engine {
        hls: Hls,
        listeners: [EngineClosure; 2],
    },
    Native,
    Fallback,
    Released,
}

/// [`MediaEngine`] over an `HtmlVideoElement`.
pub struct WebMedia {
    video: HtmlVideoElement,
    session: Session,
    dispatcher: Dispatcher,
    media_listeners: Vec<Listener>,
}

impl core::fmt::Debug for WebMedia {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let session = match self.session {
            Session::Engine { .. } => "Engine",
            Session::Native => "Native",
            Session::Fallback => "Fallback",
            Session::Released => "Released",
        };
        f.debug_struct("WebMedia")
            .field("session", &session)
            .finish_non_exhaustive()
    }
}

impl WebMedia {
    /// Opens the session for `strategy` and starts loading the stream.
    ///
    /// Media element events and engine events are forwarded to `dispatcher`.
    pub fn open(
        video: HtmlVideoElement,
        strategy: PlaybackStrategy,
        config: &PlaybackConfig,
        dispatcher: Dispatcher,
    ) -> Result<Self, DomError> {
        let session = match strategy {
            PlaybackStrategy::Engine => {
                let hls = Hls::with_config(&config.engine)?;
                let listeners = [
                    engine_listener(&hls, hls::MANIFEST_PARSED, &dispatcher, |_| {
                        EngineEvent::ManifestParsed
                    }),
                    engine_listener(&hls, hls::ERROR, &dispatcher, hls::error_event),
                ];
                hls.load_source(&config.stream_url);
                hls.attach_media(&video);
                Session::Engine { hls, listeners }
            }
            PlaybackStrategy::Native => {
                video.set_src(&config.stream_url);
                Session::Native
            }
            PlaybackStrategy::Fallback => Session::Fallback,
        };

        let mut media_listeners = Vec::with_capacity(MEDIA_EVENTS.len());
        for (kind, event) in MEDIA_EVENTS {
            let dispatcher = dispatcher.clone();
            media_listeners.push(Listener::attach(&video, kind, move |_| {
                dispatcher.send(HostEvent::Media(event));
            })?);
        }

        tracing::info!(?strategy, url = %config.stream_url, "playback session opened");
        Ok(Self {
            video,
            session,
            dispatcher,
            media_listeners,
        })
    }

    /// The media element.
    #[must_use]
    pub fn video(&self) -> &HtmlVideoElement {
        &self.video
    }

    fn engine(&self) -> Option<&Hls> {
        match &self.session {
            Session::Engine { hls, .. } => Some(hls),
            _ => None,
        }
    }
}

fn engine_listener(
    hls: &Hls,
    event_name: &'static str,
    dispatcher: &Dispatcher,
    decode: fn(&JsValue) -> EngineEvent,
) -> EngineClosure {
    let dispatcher = dispatcher.clone();
    let closure = Closure::wrap(Box::new(move |_name: JsValue, data: JsValue| {
        dispatcher.send(HostEvent::Engine(decode(&data)));
    }) as Box<dyn FnMut(JsValue, JsValue)>);
    hls.on(event_name, closure.as_ref().unchecked_ref());
    closure
}

impl MediaEngine for WebMedia {
    fn request_play(&mut self, intent: PlayIntent) {
        if matches!(self.session, Session::Released) {
            return;
        }
        let dispatcher = self.dispatcher.clone();
        let promise = match self.video.play() {
            Ok(promise) => promise,
            Err(thrown) => {
                let reason = describe(&thrown);
                dispatcher.send(HostEvent::PlaySettled(
                    intent,
                    Err(PlaybackError::Failure { reason }),
                ));
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            let result = JsFuture::from(promise)
                .await
                .map(drop)
                .map_err(|rejected| PlaybackError::Failure {
                    reason: describe(&rejected),
                });
            dispatcher.send(HostEvent::PlaySettled(intent, result));
        });
    }

    fn pause(&mut self) {
        if let Err(err) = self.video.pause() {
            tracing::warn!(error = %describe(&err), "pause failed");
        }
    }

    fn is_paused(&self) -> bool {
        self.video.paused()
    }

    fn is_ended(&self) -> bool {
        self.video.ended()
    }

    fn is_muted(&self) -> bool {
        self.video.muted()
    }

    fn set_muted(&mut self, muted: bool) {
        self.video.set_muted(muted);
    }

    fn start_load(&mut self) {
        if let Some(hls) = self.engine() {
            hls.start_load();
        }
    }

    fn apply_buffer_profile(&mut self, profile: BufferProfile) {
        if let Some(hls) = self.engine()
            && let Err(err) = hls.apply_buffer(profile)
        {
            tracing::warn!(%err, "could not apply buffer profile");
        }
    }

    fn release(&mut self) {
        match core::mem::replace(&mut self.session, Session::Released) {
            Session::Engine { hls, listeners } => {
                hls.destroy();
                drop(listeners);
                tracing::info!("streaming engine destroyed");
            }
            Session::Native => {
                let _ = self.video.pause();
                let _ = self.video.remove_attribute("src");
                self.video.load();
            }
            Session::Fallback | Session::Released => {}
        }
        self.media_listeners.clear();
    }
}
