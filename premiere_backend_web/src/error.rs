// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::{String, ToString as _};

use wasm_bindgen::{JsCast as _, JsValue};

/// Failures while locating or driving page surfaces.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// A required element is not on the page.
    #[error("missing page element `{selector}`")]
    MissingElement {
        /// Selector that matched nothing (or the wrong element type).
        selector: &'static str,
    },
    /// A JavaScript call threw.
    #[error("{context}: {message}")]
    Js {
        /// What was being attempted.
        context: &'static str,
        /// The thrown value, described.
        message: String,
    },
}

impl DomError {
    /// Wraps a thrown JavaScript value.
    pub fn js(context: &'static str, thrown: &JsValue) -> Self {
        Self::Js {
            context,
            message: describe(thrown),
        }
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort text for a thrown or rejected JavaScript value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        let name: String = err.name().into();
        let message: String = err.message().into();
        format!("{name}: {message}")
    } else if let Some(text) = value.as_string() {
        text
    } else {
        format!("{value:?}")
    }
}
