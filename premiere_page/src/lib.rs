// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Launch-event page: countdown, stream status and live playback.
//!
//! The page markup ships the status indicator, the countdown block and the
//! video section; this crate locates them, builds a
//! [`LaunchController`] over the web backend and routes every browser event
//! into it.
//!
//! Build with: `wasm-pack build --target web premiere_page`
//! Then serve the page with `pkg/` next to `index.html`. Append
//! `?launch=<rfc3339>&stream=<url>` to rehearse against another moment or
//! stream.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

pub mod config;

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString as _};
use core::cell::RefCell;

use premiere_backend_web::{Dispatcher, DomError, DomView, WebMedia, WebTimers, probe_caps};
use premiere_core::controller::{HostEvent, LaunchController};
use premiere_core::input::KeyCommand;
use premiere_core::playback::PlaybackStrategy;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, KeyboardEvent, UrlSearchParams, Window};

use crate::config::{ConfigError, LAUNCH_PARAM, PageConfig, STREAM_PARAM};

/// The controller as wired to the browser.
pub type PageController = LaunchController<WebTimers, DomView, WebMedia>;

/// Why the page could not start.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The browser environment is missing something the page needs.
    #[error(transparent)]
    Dom(#[from] DomError),
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// A running page.
///
/// Browser listeners hold their own references, so dropping the handle does
/// not stop the page; [`shutdown`](Self::shutdown) does.
#[derive(Clone)]
pub struct Page {
    controller: Rc<RefCell<PageController>>,
    dispatcher: Dispatcher,
}

impl core::fmt::Debug for Page {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Page")
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

impl Page {
    /// The controller.
    #[must_use]
    pub fn controller(&self) -> &Rc<RefCell<PageController>> {
        &self.controller
    }

    /// The event router feeding the controller.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Stops every timer, releases the stream and detaches the router.
    pub fn shutdown(&self) {
        self.dispatcher
            .batch(|| self.controller.borrow_mut().shutdown());
        self.dispatcher.disconnect();
    }
}

/// Entry point for the launch page.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let config = config_from_query(&window)?;
    tracing::info!("launch event page loaded");
    tracing::info!(
        launch_ms = config.launch.launch_moment.millis(),
        "scheduled launch"
    );

    let page = mount(&window, config)?;
    let on_unload = page.clone();
    listen(window.as_ref(), "beforeunload", move |_| on_unload.shutdown())?;
    Ok(())
}

/// Reads rehearsal overrides from the page's query string.
pub fn config_from_query(window: &Window) -> Result<PageConfig, PageError> {
    let search = window
        .location()
        .search()
        .map_err(|e| DomError::js("read location", &e))?;
    let params =
        UrlSearchParams::new_with_str(&search).map_err(|e| DomError::js("parse query", &e))?;
    let launch = params.get(LAUNCH_PARAM);
    let stream = params.get(STREAM_PARAM);
    if launch.is_some() || stream.is_some() {
        tracing::info!(?launch, ?stream, "rehearsal overrides");
    }
    Ok(PageConfig::with_overrides(
        launch.as_deref(),
        stream.as_deref(),
    )?)
}

/// Builds the controller over the document in `window`, starts it and
/// binds the page's listeners.
pub fn mount(window: &Window, config: PageConfig) -> Result<Page, PageError> {
    let document = window.document().ok_or(DomError::NoDocument)?;
    let view = DomView::new(document.clone())?;
    let video = view.video().clone();

    let strategy = PlaybackStrategy::select(probe_caps(&video));
    tracing::info!(?strategy, "playback strategy selected");

    let dispatcher = Dispatcher::new();
    let media = WebMedia::open(video, strategy, &config.playback, dispatcher.clone())?;
    let timers = WebTimers::new(dispatcher.clone());
    let controller = Rc::new(RefCell::new(PageController::new(
        config.launch,
        config.playback,
        strategy,
        timers,
        view,
        media,
    )));

    let sink = Rc::clone(&controller);
    dispatcher.connect(move |event| {
        sink.borrow_mut().handle(event, premiere_backend_web::now());
    });
    let width = premiere_backend_web::viewport_width().unwrap_or_default();
    dispatcher.batch(|| {
        controller
            .borrow_mut()
            .start(premiere_backend_web::now(), width);
    });

    let page = Page {
        controller,
        dispatcher,
    };
    attach(page, |page| bind_listeners(window, page))
}

/// Runs `bind` on a started page, shutting the page down if it fails.
fn attach(
    page: Page,
    bind: impl FnOnce(&Page) -> Result<(), DomError>,
) -> Result<Page, PageError> {
    if let Err(err) = bind(&page) {
        tracing::error!(%err, "could not bind page listeners");
        page.shutdown();
        return Err(err.into());
    }
    Ok(page)
}

fn bind_listeners(window: &Window, page: &Page) -> Result<(), DomError> {
    let document = window.document().ok_or(DomError::NoDocument)?;
    let controller = page.controller.borrow();
    let targets = controller.view().targets();

    let d = page.dispatcher.clone();
    listen(document.as_ref(), "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let tag = target_tag(event);
        if let Some(command) = KeyCommand::from_code(&event.code(), &tag) {
            event.prevent_default();
            d.send(HostEvent::Key(command));
        }
    })?;

    let d = page.dispatcher.clone();
    listen(targets.video.as_ref(), "touchstart", move |_| {
        d.send(HostEvent::TouchStart);
    })?;
    let d = page.dispatcher.clone();
    listen(targets.video.as_ref(), "touchend", move |_| {
        d.send(HostEvent::TouchEnd);
    })?;

    let d = page.dispatcher.clone();
    listen(targets.play_button.as_ref(), "click", move |_| {
        d.send(HostEvent::PlayClicked);
    })?;

    let d = page.dispatcher.clone();
    let doc = document.clone();
    listen(document.as_ref(), "visibilitychange", move |_| {
        d.send(HostEvent::Visibility {
            hidden: doc.hidden(),
        });
    })?;

    let d = page.dispatcher.clone();
    listen(window.as_ref(), "resize", move |_| {
        if let Some(width) = premiere_backend_web::viewport_width() {
            d.send(HostEvent::Resize { width });
        }
    })?;

    for (kind, online) in [("online", true), ("offline", false)] {
        let d = page.dispatcher.clone();
        listen(window.as_ref(), kind, move |_| {
            d.send(HostEvent::Connectivity { online });
        })?;
    }
    Ok(())
}

fn target_tag(event: &Event) -> String {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|el| el.tag_name())
        .unwrap_or_default()
}

/// Registers a page-lifetime listener.
fn listen(
    target: &EventTarget,
    kind: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())
        .map_err(|e| DomError::js("add event listener", &e))?;
    cb.forget();
    Ok(())
}
