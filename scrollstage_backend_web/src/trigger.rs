// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fire-once `IntersectionObserver` subscriptions.
//!
//! [`VisibilityTrigger`] owns one observer. Each watched element carries a
//! one-shot callback that runs the first time the element intersects the
//! (margin-adjusted) viewport; the element is unobserved right before the
//! callback runs and is never reported again. Fired elements are released.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use js_sys::Array;
use scrollstage_core::trigger::{FireOnce, TriggerOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type Callback = Box<dyn FnOnce(&Element)>;
type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Targets that have not fired yet.
///
/// Keys are handed out in watch order and never reused. An entry is removed
/// when it fires, which releases its element.
struct Targets<E, C> {
    next_key: u32,
    entries: Vec<(u32, E, C)>,
}

impl<E: PartialEq, C> Targets<E, C> {
    fn new() -> Self {
        Self {
            next_key: 0,
            entries: Vec::new(),
        }
    }

    /// Adds `element` unless it is already pending; returns its key.
    fn insert(&mut self, element: E, callback: C) -> Option<u32> {
        if self.key_of(&element).is_some() {
            return None;
        }
        let key = self.next_key;
        self.next_key = key.checked_add(1)?;
        self.entries.push((key, element, callback));
        Some(key)
    }

    fn key_of(&self, element: &E) -> Option<u32> {
        self.entries
            .iter()
            .find(|(_, e, _)| e == element)
            .map(|&(key, _, _)| key)
    }

    fn remove(&mut self, key: u32) -> Option<(E, C)> {
        let index = self.entries.iter().position(|&(k, _, _)| k == key)?;
        let (_, element, callback) = self.entries.swap_remove(index);
        Some((element, callback))
    }

    fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|&(key, _, _)| key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// A set of fire-once visibility subscriptions sharing one observer.
///
/// Targets are tracked independently; one firing does not affect the
/// others. Clones share the same observer.
#[derive(Clone)]
pub struct VisibilityTrigger {
    inner: Rc<TriggerInner>,
}

struct TriggerInner {
    observer: IntersectionObserver,
    options: TriggerOptions,
    targets: RefCell<Targets<Element, Callback>>,
    state: RefCell<FireOnce<u32>>,
    /// Kept alive for as long as the observer may call it.
    _closure: ObserverClosure,
}

impl VisibilityTrigger {
    /// Creates a trigger with the given observer options.
    pub fn new(options: TriggerOptions) -> Result<Self, JsValue> {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        // The observer callback needs the inner state, and the inner state
        // owns the observer: build the closure around a late-bound slot.
        let slot: Rc<RefCell<Option<Weak<TriggerInner>>>> = Rc::new(RefCell::new(None));
        let slot_cb = Rc::clone(&slot);
        let closure = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let inner = slot_cb.borrow().as_ref().and_then(Weak::upgrade);
            if let Some(inner) = inner {
                inner.handle(&entries);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;

        let inner = Rc::new(TriggerInner {
            observer,
            options,
            targets: RefCell::new(Targets::new()),
            state: RefCell::new(FireOnce::new()),
            _closure: closure,
        });
        *slot.borrow_mut() = Some(Rc::downgrade(&inner));

        Ok(Self { inner })
    }

    /// Watches `element`, running `callback` the first time it becomes
    /// visible.
    ///
    /// Watching an element that is still pending does nothing and returns
    /// `false`. Fired elements are forgotten, so watching one again starts a
    /// new subscription.
    pub fn watch(&self, element: &Element, callback: impl FnOnce(&Element) + 'static) -> bool {
        let mut targets = self.inner.targets.borrow_mut();
        let Some(key) = targets.insert(element.clone(), Box::new(callback)) else {
            return false;
        };
        if !self.inner.state.borrow_mut().watch(key) {
            targets.remove(key);
            return false;
        }
        drop(targets);
        self.inner.observer.observe(element);
        true
    }

    /// Number of watched elements that have not fired yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.state.borrow().pending()
    }

    /// The observer options this trigger was created with.
    #[must_use]
    pub fn options(&self) -> TriggerOptions {
        self.inner.options
    }

    /// Stops observing everything. Pending callbacks never run.
    pub fn disconnect(&self) {
        self.inner.observer.disconnect();
        let mut targets = self.inner.targets.borrow_mut();
        let mut state = self.inner.state.borrow_mut();
        for key in targets.keys() {
            state.cancel(&key);
        }
        targets.clear();
    }
}

impl TriggerInner {
    fn handle(&self, entries: &Array) {
        let mut fired: Vec<(Element, Callback)> = Vec::new();
        {
            let mut targets = self.targets.borrow_mut();
            let mut state = self.state.borrow_mut();
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(key) = targets.key_of(&target) else {
                    continue;
                };
                if state.notify(&key, entry.is_intersecting()) {
                    self.observer.unobserve(&target);
                    if let Some(entry) = targets.remove(key) {
                        fired.push(entry);
                    }
                }
            }
        }
        // Borrows are released; callbacks may watch new elements.
        for (target, callback) in fired {
            callback(&target);
        }
    }
}

impl core::fmt::Debug for VisibilityTrigger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VisibilityTrigger")
            .field("options", &self.inner.options)
            .field("watched", &self.inner.targets.borrow().len())
            .field("pending", &self.inner.state.borrow().pending())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_targets_are_not_added_twice() {
        let mut targets = Targets::new();
        assert_eq!(targets.insert("hero", ()), Some(0));
        assert_eq!(targets.insert("hero", ()), None);
        assert_eq!(targets.insert("story", ()), Some(1));
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn fired_targets_are_released() {
        let mut targets = Targets::new();
        let _ = targets.insert("a", 'a');
        let _ = targets.insert("b", 'b');
        let _ = targets.insert("c", 'c');

        assert_eq!(targets.remove(1), Some(("b", 'b')));
        assert_eq!(targets.remove(1), None);
        assert_eq!(targets.len(), 2);
        assert_eq!(targets.key_of(&"b"), None);
        assert_eq!(targets.key_of(&"c"), Some(2));

        // A released element gets a fresh key; old keys are never reused.
        assert_eq!(targets.insert("b", 'b'), Some(3));
        let mut keys = targets.keys().collect::<Vec<_>>();
        keys.sort_unstable();
        assert_eq!(keys, [0, 2, 3]);

        targets.clear();
        assert_eq!(targets.len(), 0);
    }
}
