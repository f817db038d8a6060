// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM surfaces of the launch page.
//!
//! [`DomTargets`] locates every element the controller writes to, once, at
//! startup; a missing element is a [`DomError::MissingElement`].
//! [`DomView`] applies [`LaunchView`] and [`PlaybackView`] calls to them.
//! Individual style and class writes that the browser rejects are ignored,
//! matching how a view call has no failure path.

use alloc::format;
use alloc::string::String;

use premiere_core::backend::{LaunchView, PlaybackView};
use premiere_core::countdown::CountdownRemaining;
use premiere_core::playback::PlayGlyph;
use premiere_core::status::StreamStatus;
use premiere_core::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, HtmlVideoElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::error::DomError;
use crate::fullscreen::FullscreenApi;

const LIVE_BANNER: &str = "\u{1f389} WE ARE LIVE! \u{1f389}";
const ERROR_CLASS: &str = "error-message";
const ERROR_CSS: &str = "background: rgba(245, 87, 108, 0.1); \
    border: 1px solid rgba(245, 87, 108, 0.3); border-radius: 8px; padding: 1rem; \
    margin-top: 1rem; color: #f5576c; font-size: 0.9rem;";

const PLAY_GLYPH: &str = r##"<svg width="80" height="80" viewBox="0 0 80 80" fill="none"><circle cx="40" cy="40" r="40" fill="rgba(255, 255, 255, 0.9)"/><path d="M32 25L55 40L32 55V25Z" fill="#1a1a2e"/></svg>"##;
const PAUSE_GLYPH: &str = r##"<svg width="80" height="80" viewBox="0 0 80 80" fill="none"><circle cx="40" cy="40" r="40" fill="rgba(255, 255, 255, 0.9)"/><rect x="25" y="25" width="10" height="30" fill="#1a1a2e"/><rect x="45" y="25" width="10" height="30" fill="#1a1a2e"/></svg>"##;

/// Every element the page controller touches.
#[derive(Clone, Debug)]
pub struct DomTargets {
    /// `#status-indicator`, lit with the `live` class.
    pub status_indicator: HtmlElement,
    /// `#status-text`.
    pub status_text: HtmlElement,
    /// `#days`, `#hours`, `#minutes`, `#seconds`.
    pub fields: [HtmlElement; 4],
    /// `.countdown-title`.
    pub countdown_title: HtmlElement,
    /// `.countdown`, the digit block.
    pub countdown: HtmlElement,
    /// `.countdown-container`.
    pub countdown_container: HtmlElement,
    /// `.video-section`, the scroll target after launch.
    pub video_section: HtmlElement,
    /// `.video-wrapper`, the fullscreen target.
    pub video_wrapper: HtmlElement,
    /// `#video-player`.
    pub video: HtmlVideoElement,
    /// `#video-overlay`.
    pub overlay: HtmlElement,
    /// `#video-loading`.
    pub loading: HtmlElement,
    /// `#play-button`.
    pub play_button: HtmlElement,
    /// `.video-info`, host of the error message.
    pub video_info: HtmlElement,
}

impl DomTargets {
    /// Finds every target in `document`.
    pub fn locate(document: &Document) -> Result<Self, DomError> {
        Ok(Self {
            status_indicator: find(document, "#status-indicator")?,
            status_text: find(document, "#status-text")?,
            fields: [
                find(document, "#days")?,
                find(document, "#hours")?,
                find(document, "#minutes")?,
                find(document, "#seconds")?,
            ],
            countdown_title: find(document, ".countdown-title")?,
            countdown: find(document, ".countdown")?,
            countdown_container: find(document, ".countdown-container")?,
            video_section: find(document, ".video-section")?,
            video_wrapper: find(document, ".video-wrapper")?,
            video: find(document, "#video-player")?,
            overlay: find(document, "#video-overlay")?,
            loading: find(document, "#video-loading")?,
            play_button: find(document, "#play-button")?,
            video_info: find(document, ".video-info")?,
        })
    }
}

fn find<T: JsCast>(document: &Document, selector: &'static str) -> Result<T, DomError> {
    document
        .query_selector(selector)
        .map_err(|e| DomError::js("query selector", &e))?
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(DomError::MissingElement { selector })
}

/// Applies view calls to the page's DOM.
pub struct DomView {
    document: Document,
    targets: DomTargets,
    fullscreen: FullscreenApi,
}

impl core::fmt::Debug for DomView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomView")
            .field("document", &"Document")
            .field("fullscreen", &self.fullscreen)
            .finish_non_exhaustive()
    }
}

impl DomView {
    /// Locates all targets in `document` and probes fullscreen support.
    pub fn new(document: Document) -> Result<Self, DomError> {
        let targets = DomTargets::locate(&document)?;
        let fullscreen = FullscreenApi::probe(&targets.video_wrapper);
        tracing::debug!(?fullscreen, "page surfaces located");
        Ok(Self {
            document,
            targets,
            fullscreen,
        })
    }

    /// The located targets.
    #[must_use]
    pub fn targets(&self) -> &DomTargets {
        &self.targets
    }

    /// The media element.
    #[must_use]
    pub fn video(&self) -> &HtmlVideoElement {
        &self.targets.video
    }

    fn remove_error(&self) {
        if let Ok(Some(existing)) = self
            .targets
            .video_info
            .query_selector(&format!(".{ERROR_CLASS}"))
        {
            existing.remove();
        }
    }
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

fn set_display(el: &HtmlElement, visible: bool) {
    set_style(el, "display", if visible { "block" } else { "none" });
}

/// A duration as a CSS time value.
pub(crate) fn css_time(d: Duration) -> String {
    let ms = d.millis();
    if ms % 1000 == 0 {
        format!("{}s", ms / 1000)
    } else {
        format!("{ms}ms")
    }
}

/// Title text during the celebration countdown.
pub(crate) fn celebration_title(count: u8) -> String {
    format!("\u{1f680} LAUNCHING IN {count}... \u{1f680}")
}

impl LaunchView for DomView {
    fn render_status(&mut self, status: StreamStatus) {
        let classes = self.targets.status_indicator.class_list();
        let _ = if status.is_live() {
            classes.add_1("live")
        } else {
            classes.remove_1("live")
        };
        self.targets.status_text.set_text_content(Some(status.label()));
        set_style(&self.targets.status_text, "color", status.color());
    }

    fn render_countdown(&mut self, remaining: &CountdownRemaining) {
        for (el, text) in self.targets.fields.iter().zip(remaining.padded()) {
            el.set_text_content(Some(&text));
        }
    }

    fn render_celebration(&mut self, count: u8) {
        let title = &self.targets.countdown_title;
        title.set_text_content(Some(&celebration_title(count)));
        set_style(title, "animation", "pulse 0.5s ease-in-out");
    }

    fn fade_out_countdown(&mut self, over: Duration) {
        let countdown = &self.targets.countdown;
        set_style(
            countdown,
            "transition",
            &format!("opacity {} ease-out", css_time(over)),
        );
        set_style(countdown, "opacity", "0");
    }

    fn show_live_banner(&mut self) {
        set_display(&self.targets.countdown, false);
        let title = &self.targets.countdown_title;
        title.set_text_content(Some(LIVE_BANNER));
        set_style(title, "font-size", "2rem");
        set_style(
            title,
            "background",
            "linear-gradient(135deg, #4ade80 0%, #06b6d4 100%)",
        );
        set_style(title, "-webkit-background-clip", "text");
        set_style(title, "-webkit-text-fill-color", "transparent");
        set_style(title, "background-clip", "text");
        set_style(
            title,
            "animation",
            "fadeInUp 1s ease-out, pulse 2s ease-in-out infinite",
        );
    }

    fn scroll_to_video(&mut self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.targets
            .video_section
            .scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn fade_out_container(&mut self, over: Duration) {
        let container = &self.targets.countdown_container;
        let t = css_time(over);
        set_style(
            container,
            "transition",
            &format!("opacity {t} ease-out, transform {t} ease-out"),
        );
        set_style(container, "opacity", "0");
        set_style(container, "transform", "translateY(-30px)");
    }

    fn hide_container(&mut self) {
        set_display(&self.targets.countdown_container, false);
    }
}

impl PlaybackView for DomView {
    fn set_loading_visible(&mut self, visible: bool) {
        set_display(&self.targets.loading, visible);
    }

    fn set_overlay_hidden(&mut self, hidden: bool) {
        let classes = self.targets.overlay.class_list();
        let _ = if hidden {
            classes.add_1("hidden")
        } else {
            classes.remove_1("hidden")
        };
    }

    fn toggle_overlay(&mut self) {
        let _ = self.targets.overlay.class_list().toggle("hidden");
    }

    fn set_play_button_visible(&mut self, visible: bool) {
        set_display(&self.targets.play_button, visible);
    }

    fn set_play_glyph(&mut self, glyph: PlayGlyph) {
        let markup = match glyph {
            PlayGlyph::Play => PLAY_GLYPH,
            PlayGlyph::Pause => PAUSE_GLYPH,
        };
        self.targets.play_button.set_inner_html(markup);
    }

    fn show_error(&mut self, message: &str) {
        self.remove_error();
        let Ok(div) = self.document.create_element("div") else {
            tracing::warn!(text = message, "could not create error message element");
            return;
        };
        div.set_class_name(ERROR_CLASS);
        let _ = div.set_attribute("style", ERROR_CSS);
        div.set_text_content(Some(message));
        let _ = self.targets.video_info.append_child(&div);
    }

    fn clear_error(&mut self) {
        self.remove_error();
    }

    fn set_poster(&mut self, url: &str) {
        self.targets.video.set_poster(url);
    }

    fn toggle_fullscreen(&mut self) {
        if let Err(err) = self
            .fullscreen
            .toggle(&self.document, &self.targets.video_wrapper)
        {
            tracing::warn!(%err, "fullscreen toggle failed");
        }
    }
}
