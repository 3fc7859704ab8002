// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` update coalescing.
//!
//! [`FrameScheduler`] turns any number of [`request`](FrameScheduler::request)
//! calls between two rendered frames into a single invocation of its update
//! callback, run from the next `requestAnimationFrame` callback. Requests
//! made while an update is queued are dropped; the update re-samples the page
//! when it runs, so it always sees the latest scroll position.
//!
//! The queued flag is a [`FrameGate`].
//!
//! [`FrameGate`]: scrollstage_core::schedule::FrameGate

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use scrollstage_core::schedule::FrameGate;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods, so no Window
// object is fetched (and unwrapped) on every request.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// Runs an update callback at most once per rendered frame.
///
/// Clones share the same gate and callback, so event listeners can each hold
/// one.
#[derive(Clone)]
pub struct FrameScheduler {
    inner: Rc<SchedulerInner>,
}

type RafClosure = Closure<dyn FnMut(f64)>;

struct SchedulerInner {
    /// The JS closure handed to `requestAnimationFrame`.
    ///
    /// Created once and reused for every request.
    closure: RefCell<Option<RafClosure>>,

    /// The user-supplied update, invoked with the gate's counters.
    update: RefCell<Box<dyn FnMut(FrameGate)>>,

    /// The "update already queued" flag and its counters.
    gate: Cell<FrameGate>,

    /// The ID returned by the most recent `requestAnimationFrame` call.
    raf_id: Cell<i32>,
}

impl FrameScheduler {
    /// Creates a scheduler with nothing queued.
    ///
    /// `update` receives the gate each time a coalesced update runs; its
    /// [`frames`](FrameGate::frames) count increases by one per frame.
    pub fn new(update: impl FnMut(FrameGate) + 'static) -> Self {
        let inner = Rc::new(SchedulerInner {
            closure: RefCell::new(None),
            update: RefCell::new(Box::new(update)),
            gate: Cell::new(FrameGate::new()),
            raf_id: Cell::new(0),
        });

        // The closure holds a weak reference so dropping the last scheduler
        // handle frees everything.
        let weak = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut gate = inner.gate.get();
            let run = gate.begin_frame();
            inner.gate.set(gate);
            if run {
                inner.update.borrow_mut()(gate);
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.closure.borrow_mut() = Some(closure);

        Self { inner }
    }

    /// Requests an update on the next frame.
    ///
    /// Returns `true` if this call queued the frame, `false` if it was
    /// absorbed by one already queued.
    pub fn request(&self) -> bool {
        let mut gate = self.inner.gate.get();
        let schedule = gate.request();
        self.inner.gate.set(gate);
        if schedule && let Some(ref closure) = *self.inner.closure.borrow() {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.inner.raf_id.set(id);
        }
        schedule
    }

    /// Runs the update immediately, outside the frame cycle.
    ///
    /// Used for the initial render when a feature is installed. A queued
    /// frame still runs.
    pub fn run_now(&self) {
        let gate = self.inner.gate.get();
        self.inner.update.borrow_mut()(gate);
    }

    /// Cancels the queued update, if any.
    pub fn cancel(&self) {
        let mut gate = self.inner.gate.get();
        if gate.is_queued() {
            cancel_animation_frame(self.inner.raf_id.get());
        }
        gate.cancel();
        self.inner.gate.set(gate);
    }

    /// Returns the gate's current state (queued flag and counters).
    #[must_use]
    pub fn gate(&self) -> FrameGate {
        self.inner.gate.get()
    }
}

impl core::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("gate", &self.inner.gate.get())
            .field("raf_id", &self.inner.raf_id.get())
            .finish_non_exhaustive()
    }
}
