// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bindings for the [hls.js] streaming engine.
//!
//! The page loads hls.js as a classic script, which installs a global `Hls`
//! class. Only the handful of members the playback session uses are bound.
//!
//! [hls.js]: https://github.com/video-dev/hls.js

use alloc::format;
use alloc::string::String;

use js_sys::{Function, Object, Reflect};
use premiere_core::playback::{BufferProfile, EngineConfig, EngineEvent};
use wasm_bindgen::prelude::*;
use web_sys::HtmlMediaElement;

use crate::error::DomError;

/// `Hls.Events.MANIFEST_PARSED`.
pub(crate) const MANIFEST_PARSED: &str = "hlsManifestParsed";
/// `Hls.Events.ERROR`.
pub(crate) const ERROR: &str = "hlsError";

#[wasm_bindgen]
extern "C" {
    /// An hls.js player instance.
    #[derive(Debug, Clone)]
    pub(crate) type Hls;

    #[wasm_bindgen(static_method_of = Hls, js_name = "isSupported")]
    fn is_supported() -> bool;

    #[wasm_bindgen(constructor, catch)]
    fn new(config: &Object) -> Result<Hls, JsValue>;

    #[wasm_bindgen(method, js_name = "loadSource")]
    pub(crate) fn load_source(this: &Hls, url: &str);

    #[wasm_bindgen(method, js_name = "attachMedia")]
    pub(crate) fn attach_media(this: &Hls, media: &HtmlMediaElement);

    #[wasm_bindgen(method)]
    pub(crate) fn on(this: &Hls, event: &str, listener: &Function);

    #[wasm_bindgen(method, js_name = "startLoad")]
    pub(crate) fn start_load(this: &Hls);

    #[wasm_bindgen(method)]
    pub(crate) fn destroy(this: &Hls);

    #[wasm_bindgen(method, getter)]
    fn config(this: &Hls) -> Object;
}

/// Whether the `Hls` global is present and reports support.
///
/// The global is checked first so a page that failed to load hls.js falls
/// back instead of throwing.
pub(crate) fn is_available() -> bool {
    let present = Reflect::get(&js_sys::global(), &JsValue::from_str("Hls"))
        .is_ok_and(|hls| hls.is_function());
    present && Hls::is_supported()
}

/// A value in an hls.js options object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OptionValue {
    Bool(bool),
    Seconds(u32),
}

impl From<OptionValue> for JsValue {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Bool(b) => Self::from_bool(b),
            OptionValue::Seconds(s) => Self::from(s),
        }
    }
}

/// Constructor options for an engine configuration.
pub(crate) fn engine_options(config: &EngineConfig) -> [(&'static str, OptionValue); 4] {
    [
        ("debug", OptionValue::Bool(config.debug)),
        ("enableWorker", OptionValue::Bool(config.enable_worker)),
        ("lowLatencyMode", OptionValue::Bool(config.low_latency_mode)),
        (
            "backBufferLength",
            OptionValue::Seconds(config.back_buffer_length),
        ),
    ]
}

/// Live config keys for a buffer profile.
pub(crate) fn buffer_options(profile: BufferProfile) -> [(&'static str, OptionValue); 2] {
    [
        (
            "maxBufferLength",
            OptionValue::Seconds(profile.max_buffer_length),
        ),
        (
            "maxMaxBufferLength",
            OptionValue::Seconds(profile.max_max_buffer_length),
        ),
    ]
}

fn set_all(target: &Object, entries: &[(&'static str, OptionValue)]) -> Result<(), DomError> {
    for &(key, value) in entries {
        Reflect::set(target, &JsValue::from_str(key), &value.into())
            .map_err(|e| DomError::js("set hls.js option", &e))?;
    }
    Ok(())
}

impl Hls {
    /// Constructs an engine with `config`.
    pub(crate) fn with_config(config: &EngineConfig) -> Result<Self, DomError> {
        let options = Object::new();
        set_all(&options, &engine_options(config))?;
        Self::new(&options).map_err(|e| DomError::js("construct Hls", &e))
    }

    /// Writes new buffer targets into the running engine's config.
    pub(crate) fn apply_buffer(&self, profile: BufferProfile) -> Result<(), DomError> {
        set_all(&self.config(), &buffer_options(profile))
    }
}

/// Decodes the payload of an `hlsError` event.
pub(crate) fn error_event(data: &JsValue) -> EngineEvent {
    let field = |name: &str| Reflect::get(data, &JsValue::from_str(name)).ok();
    let fatal = field("fatal").and_then(|v| v.as_bool()).unwrap_or(false);
    let kind = field("type").and_then(|v| v.as_string());
    let details = field("details").and_then(|v| v.as_string());
    let details = match (kind, details) {
        (Some(kind), Some(details)) => format!("{kind}/{details}"),
        (None, Some(details)) => details,
        (Some(kind), None) => kind,
        (None, None) => String::from("unknown"),
    };
    EngineEvent::Error { fatal, details }
}
