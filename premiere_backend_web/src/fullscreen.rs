// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fullscreen across the standard and vendor-prefixed APIs.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element};

use crate::error::DomError;

/// Which fullscreen API family the browser exposes.
///
/// Probed once, in preference order: standard, WebKit, then the legacy
/// Microsoft prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenApi {
    /// `requestFullscreen` / `exitFullscreen` / `fullscreenElement`.
    Standard,
    /// `webkit`-prefixed members.
    Webkit,
    /// `ms`-prefixed members.
    Ms,
    /// No fullscreen support; toggling does nothing.
    Unsupported,
}

impl FullscreenApi {
    const PROBE_ORDER: [Self; 3] = [Self::Standard, Self::Webkit, Self::Ms];

    /// Picks the first family whose request method exists on `element`.
    #[must_use]
    pub fn probe(element: &Element) -> Self {
        Self::PROBE_ORDER
            .into_iter()
            .find(|api| method(element, api.request_method()).is_some())
            .unwrap_or(Self::Unsupported)
    }

    /// Element method that enters fullscreen.
    #[must_use]
    pub const fn request_method(self) -> &'static str {
        match self {
            Self::Standard | Self::Unsupported => "requestFullscreen",
            Self::Webkit => "webkitRequestFullscreen",
            Self::Ms => "msRequestFullscreen",
        }
    }

    /// Document method that leaves fullscreen.
    #[must_use]
    pub const fn exit_method(self) -> &'static str {
        match self {
            Self::Standard | Self::Unsupported => "exitFullscreen",
            Self::Webkit => "webkitExitFullscreen",
            Self::Ms => "msExitFullscreen",
        }
    }

    /// Document property holding the current fullscreen element.
    #[must_use]
    pub const fn element_property(self) -> &'static str {
        match self {
            Self::Standard | Self::Unsupported => "fullscreenElement",
            Self::Webkit => "webkitFullscreenElement",
            Self::Ms => "msFullscreenElement",
        }
    }

    /// Whether some element is fullscreen right now.
    #[must_use]
    pub fn is_active(self, document: &Document) -> bool {
        Reflect::get(document, &JsValue::from_str(self.element_property()))
            .is_ok_and(|el| !el.is_null() && !el.is_undefined())
    }

    /// Enters fullscreen on `element`, or leaves it if anything is
    /// fullscreen.
    pub fn toggle(self, document: &Document, element: &Element) -> Result<(), DomError> {
        if self == Self::Unsupported {
            return Ok(());
        }
        let active = self.is_active(document);
        let target: &JsValue = if active { document } else { element };
        let name = if active {
            self.exit_method()
        } else {
            self.request_method()
        };
        let Some(func) = method(target, name) else {
            return Ok(());
        };
        // The returned promise only reports a refused request; nothing to do.
        func.call0(target)
            .map(drop)
            .map_err(|e| DomError::js("toggle fullscreen", &e))
    }
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_order_prefers_the_standard_api() {
        assert_eq!(
            FullscreenApi::PROBE_ORDER,
            [
                FullscreenApi::Standard,
                FullscreenApi::Webkit,
                FullscreenApi::Ms
            ]
        );
    }

    #[test]
    fn member_names_per_family() {
        assert_eq!(
            FullscreenApi::Webkit.request_method(),
            "webkitRequestFullscreen"
        );
        assert_eq!(FullscreenApi::Ms.exit_method(), "msExitFullscreen");
        assert_eq!(
            FullscreenApi::Standard.element_property(),
            "fullscreenElement"
        );
    }
}
