// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser smoke tests for the page wiring.

#![cfg(target_arch = "wasm32")]

use premiere_backend_web::{DomError, DomView, PlaybackView as _};
use premiere_page::config::PageConfig;
use premiere_page::{PageError, mount};
use wasm_bindgen::JsCast as _;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlVideoElement, KeyboardEvent, KeyboardEventInit, Window};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<div class="countdown-container">
  <h2 class="countdown-title">Launching in</h2>
  <div class="countdown">
    <span id="days"></span><span id="hours"></span>
    <span id="minutes"></span><span id="seconds"></span>
  </div>
</div>
<div id="status-indicator"><span id="status-text"></span></div>
<section class="video-section">
  <div class="video-wrapper">
    <video id="video-player" muted playsinline></video>
    <div id="video-overlay"><button id="play-button"></button></div>
    <div id="video-loading"></div>
  </div>
  <div class="video-info"></div>
</section>
"#;

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

fn install(markup: &str) {
    document().body().unwrap().set_inner_html(markup);
}

fn text(selector: &str) -> String {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn rehearsal(launch: &str) -> PageConfig {
    PageConfig::with_overrides(Some(launch), Some("https://example.test/live.m3u8")).unwrap()
}

#[wasm_bindgen_test]
fn missing_markup_fails_to_mount() {
    install("<div></div>");
    let err = mount(&window(), rehearsal("2099-01-01T00:00:00Z")).unwrap_err();
    assert!(matches!(
        err,
        PageError::Dom(DomError::MissingElement { .. })
    ));
}

#[wasm_bindgen_test]
fn far_launch_renders_countdown_and_offline_status() {
    install(FIXTURE);
    let page = mount(&window(), rehearsal("2099-01-01T00:00:00Z")).unwrap();

    assert_eq!(text("#status-text"), "Stream Offline");
    for field in ["#hours", "#minutes", "#seconds"] {
        assert_eq!(text(field).len(), 2);
    }
    assert!(page.controller().borrow().is_running());

    page.shutdown();
    let controller = page.controller().borrow();
    assert!(!controller.is_running());
    assert_eq!(controller.outstanding_timers(), 0);
    assert_eq!(controller.timers().armed(), 0);
}

#[wasm_bindgen_test]
fn mute_key_flips_the_video() {
    install(FIXTURE);
    let page = mount(&window(), rehearsal("2099-01-01T00:00:00Z")).unwrap();
    let video: HtmlVideoElement = document()
        .query_selector("#video-player")
        .unwrap()
        .unwrap()
        .unchecked_into();
    let before = video.muted();

    let init = KeyboardEventInit::new();
    init.set_code("KeyM");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&event).unwrap();

    assert_eq!(video.muted(), !before);
    page.shutdown();
}

#[wasm_bindgen_test]
fn error_area_replaces_its_message() {
    install(FIXTURE);
    let mut view = DomView::new(document()).unwrap();
    view.show_error("first failure");
    view.show_error("second failure");

    let shown = document()
        .query_selector_all(".video-info .error-message")
        .unwrap();
    assert_eq!(shown.length(), 1);
    assert_eq!(
        shown.item(0).unwrap().text_content().as_deref(),
        Some("second failure")
    );

    view.clear_error();
    assert_eq!(
        document()
            .query_selector_all(".video-info .error-message")
            .unwrap()
            .length(),
        0
    );
}
