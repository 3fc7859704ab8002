// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fire-once visibility subscriptions.
//!
//! A watched target notifies its subscriber the first time it becomes
//! visible and then detaches for good: scrolling past it again, back up and
//! past once more never produces a second notification. A target that never
//! becomes visible never fires; there is no timeout.
//!
//! [`FireOnce`] is the platform-independent bookkeeping. Backends feed it the
//! raw intersection notifications and act only when
//! [`notify`](FireOnce::notify) returns `true`.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Observer options for a visibility trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerOptions {
    /// Fraction of the target's area that must be visible, in `[0, 1]`.
    pub threshold: f64,
    /// Offset applied to the bottom edge of the viewport, in pixels.
    ///
    /// Negative values shrink the viewport, so targets fire only once they
    /// are this far inside its bottom edge.
    pub bottom_margin_px: f64,
}

impl TriggerOptions {
    /// Reveal animations: 10% visible, 50 px inside the bottom edge.
    pub const REVEAL: Self = Self {
        threshold: 0.1,
        bottom_margin_px: -50.0,
    };

    /// Section wiring: 10% visible, no margin.
    pub const SECTION: Self = Self {
        threshold: 0.1,
        bottom_margin_px: 0.0,
    };

    /// Renders the CSS-style root margin string (`top right bottom left`).
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin_px)
    }
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self::REVEAL
    }
}

/// Subscription state of one key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerState {
    /// Watched and waiting for its first intersection.
    Pending,
    /// Already fired; detached permanently.
    Fired,
}

/// Bookkeeping for a set of independent fire-once subscriptions.
#[derive(Clone, Debug)]
pub struct FireOnce<K> {
    entries: Vec<(K, TriggerState)>,
}

impl<K> Default for FireOnce<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq> FireOnce<K> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts watching `key`.
    ///
    /// Returns `false` if `key` is already watched or has already fired.
    pub fn watch(&mut self, key: K) -> bool {
        if self.state(&key).is_some() {
            return false;
        }
        self.entries.push((key, TriggerState::Pending));
        true
    }

    /// Feeds an intersection notification for `key`.
    ///
    /// Returns `true` exactly once per watched key: for the first
    /// notification with `intersecting == true`. The key is then detached
    /// and the caller should stop observing it.
    pub fn notify(&mut self, key: &K, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, state @ TriggerState::Pending)) => {
                *state = TriggerState::Fired;
                true
            }
            _ => false,
        }
    }

    /// Stops watching `key` without firing it.
    ///
    /// Returns `true` if the key was pending.
    pub fn cancel(&mut self, key: &K) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|(k, state)| !(k == key && *state == TriggerState::Pending));
        self.entries.len() != before
    }

    /// Returns the state of `key`, or `None` if it was never watched.
    #[must_use]
    pub fn state(&self, key: &K) -> Option<TriggerState> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|&(_, state)| state)
    }

    /// Number of keys still waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, state)| *state == TriggerState::Pending)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_across_repeated_intersections() {
        let mut trigger = FireOnce::new();
        assert!(trigger.watch(7_u32));

        let mut fired = 0;
        // Scroll past, back up, past again.
        for intersecting in [false, true, false, true, false, true] {
            if trigger.notify(&7, intersecting) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(trigger.state(&7), Some(TriggerState::Fired));
        assert_eq!(trigger.pending(), 0);
    }

    #[test]
    fn never_visible_never_fires() {
        let mut trigger = FireOnce::new();
        trigger.watch("story");
        for _ in 0..5 {
            assert!(!trigger.notify(&"story", false));
        }
        assert_eq!(trigger.state(&"story"), Some(TriggerState::Pending));
    }

    #[test]
    fn keys_are_independent() {
        let mut trigger = FireOnce::new();
        trigger.watch(1_u32);
        trigger.watch(2_u32);

        assert!(trigger.notify(&1, true));
        assert_eq!(trigger.state(&2), Some(TriggerState::Pending));
        assert!(trigger.notify(&2, true));
        assert!(!trigger.notify(&1, true));
    }

    #[test]
    fn fired_keys_cannot_be_rewatched() {
        let mut trigger = FireOnce::new();
        assert!(trigger.watch(1_u32));
        assert!(!trigger.watch(1_u32));
        assert!(trigger.notify(&1, true));
        assert!(!trigger.watch(1_u32));
        assert!(!trigger.notify(&1, true));
    }

    #[test]
    fn unknown_and_cancelled_keys_do_not_fire() {
        let mut trigger = FireOnce::new();
        assert!(!trigger.notify(&3_u32, true));

        trigger.watch(3_u32);
        assert!(trigger.cancel(&3));
        assert!(!trigger.cancel(&3));
        assert!(!trigger.notify(&3, true));
        assert_eq!(trigger.state(&3), None);
    }

    #[test]
    fn root_margin_strings() {
        assert_eq!(TriggerOptions::REVEAL.root_margin(), "0px 0px -50px 0px");
        assert_eq!(TriggerOptions::SECTION.root_margin(), "0px 0px 0px 0px");
    }
}
