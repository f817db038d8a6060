// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing of browser callbacks to the controller.
//!
//! Every timer, media listener and play-promise continuation holds a clone
//! of the same [`Dispatcher`]. Events are queued and delivered one at a time
//! to the connected sink. A send that happens while an event is being
//! delivered (for example a media call that synchronously re-enters a
//! listener) is appended to the queue and delivered after the current one
//! returns, so the sink is never re-entered.

use alloc::collections::VecDeque;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use premiere_core::controller::HostEvent;

type Sink = Rc<dyn Fn(HostEvent)>;

/// Late-bound, non-reentrant event router.
///
/// Cloning is cheap and all clones share the same queue and sink.
#[derive(Clone, Default)]
pub struct Dispatcher {
    inner: Rc<DispatchInner>,
}

#[derive(Default)]
struct DispatchInner {
    sink: RefCell<Option<Sink>>,
    queue: RefCell<VecDeque<HostEvent>>,
    /// Set while the queue is being drained or a batch is open.
    busy: Cell<bool>,
    closed: Cell<bool>,
}

impl Dispatcher {
    /// Creates a dispatcher with no sink. Events sent before
    /// [`connect`](Self::connect) are queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the sink and delivers anything queued so far.
    pub fn connect(&self, sink: impl Fn(HostEvent) + 'static) {
        self.inner.closed.set(false);
        *self.inner.sink.borrow_mut() = Some(Rc::new(sink) as Sink);
        self.drain();
    }

    /// Removes the sink for good. Later events are dropped.
    pub fn disconnect(&self) {
        self.inner.closed.set(true);
        self.inner.sink.borrow_mut().take();
        self.inner.queue.borrow_mut().clear();
    }

    /// Queues `event` and delivers it unless a delivery is already running.
    pub fn send(&self, event: HostEvent) {
        if self.inner.closed.get() {
            return;
        }
        self.inner.queue.borrow_mut().push_back(event);
        self.drain();
    }

    /// Runs `f` with delivery held back, then delivers whatever it queued.
    ///
    /// Use this around direct calls into whatever the sink borrows, so
    /// events raised synchronously by those calls wait for the borrow to end.
    pub fn batch<R>(&self, f: impl FnOnce() -> R) -> R {
        if self.inner.busy.replace(true) {
            return f();
        }
        let out = f();
        self.inner.busy.set(false);
        self.drain();
        out
    }

    /// Number of events waiting for delivery.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.queue.borrow().len()
    }

    fn drain(&self) {
        if self.inner.busy.replace(true) {
            return;
        }
        loop {
            let Some(event) = self.inner.queue.borrow_mut().pop_front() else {
                break;
            };
            let sink = self.inner.sink.borrow().clone();
            match sink {
                Some(sink) => sink(event),
                None => {
                    // Not connected yet; keep it for `connect`.
                    self.inner.queue.borrow_mut().push_front(event);
                    break;
                }
            }
        }
        self.inner.busy.set(false);
    }
}

impl core::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("connected", &self.inner.sink.borrow().is_some())
            .field("pending", &self.pending())
            .field("busy", &self.inner.busy.get())
            .finish()
    }
}
