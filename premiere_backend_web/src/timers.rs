// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval`/`setTimeout` timer facility.
//!
//! Each armed timer owns a JS closure that forwards `(id, event)` to the
//! [`Dispatcher`]. A closure must outlive its own invocation, so closures of
//! cancelled or fired timers are parked and only dropped at the start of the
//! next timer callback, which by then is a different closure.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use premiere_core::controller::HostEvent;
use premiere_core::time::Duration;
use premiere_core::timers::{TimerEvent, TimerId, Timers};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::dispatch::Dispatcher;

// Direct global bindings so timers work without a `Window` handle.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(handle: i32);

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(handle: i32);
}

type TimerClosure = Closure<dyn FnMut()>;

struct Armed {
    handle: i32,
    repeating: bool,
    closure: TimerClosure,
}

#[derive(Default)]
struct Slots {
    armed: RefCell<BTreeMap<TimerId, Armed>>,
    /// Closures that may still be on the call stack.
    parked: RefCell<Vec<TimerClosure>>,
}

impl Slots {
    /// Forgets `id` and returns its browser handle and whether it repeats.
    fn park(&self, id: TimerId) -> Option<(i32, bool)> {
        let armed = self.armed.borrow_mut().remove(&id)?;
        self.parked.borrow_mut().push(armed.closure);
        Some((armed.handle, armed.repeating))
    }

    fn collect(&self) {
        let dead = core::mem::take(&mut *self.parked.borrow_mut());
        drop(dead);
    }
}

/// Browser timers implementing [`Timers`].
pub struct WebTimers {
    dispatcher: Dispatcher,
    slots: Rc<Slots>,
}

impl WebTimers {
    /// Creates a timer facility that reports through `dispatcher`.
    #[must_use]
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            slots: Rc::new(Slots::default()),
        }
    }

    /// Number of timers currently armed in the browser.
    #[must_use]
    pub fn armed(&self) -> usize {
        self.slots.armed.borrow().len()
    }

    fn arm(&mut self, id: TimerId, after: Duration, event: TimerEvent, repeating: bool) {
        let dispatcher = self.dispatcher.clone();
        let slots: Weak<Slots> = Rc::downgrade(&self.slots);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(slots) = slots.upgrade() {
                slots.collect();
                if !repeating {
                    slots.park(id);
                }
            }
            dispatcher.send(HostEvent::Timer(id, event));
        }) as Box<dyn FnMut()>);

        let ms = timeout_ms(after);
        let handle = if repeating {
            set_interval(closure.as_ref().unchecked_ref(), ms)
        } else {
            set_timeout(closure.as_ref().unchecked_ref(), ms)
        };
        self.slots.armed.borrow_mut().insert(
            id,
            Armed {
                handle,
                repeating,
                closure,
            },
        );
    }
}

impl Timers for WebTimers {
    fn set_interval(&mut self, id: TimerId, period: Duration, event: TimerEvent) {
        self.arm(id, period, event, true);
    }

    fn set_timeout(&mut self, id: TimerId, delay: Duration, event: TimerEvent) {
        self.arm(id, delay, event, false);
    }

    fn cancel(&mut self, id: TimerId) {
        match self.slots.park(id) {
            Some((handle, true)) => clear_interval(handle),
            Some((handle, false)) => clear_timeout(handle),
            None => {}
        }
    }
}

impl core::fmt::Debug for WebTimers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WebTimers")
            .field("armed", &self.armed())
            .field("parked", &self.slots.parked.borrow().len())
            .finish()
    }
}

/// Converts a delay to the `i32` milliseconds the timer APIs take.
///
/// Browsers treat anything above `i32::MAX` as zero, so longer delays clamp.
pub(crate) fn timeout_ms(delay: Duration) -> i32 {
    i32::try_from(delay.millis()).unwrap_or(i32::MAX)
}
