// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame coalescing.
//!
//! Scroll and resize events can fire many times between two rendered frames.
//! The expensive recomputation should run at most once per frame, and it
//! should see the latest scroll position rather than the one carried by the
//! event that asked for it.
//!
//! [`FrameGate`] is the "update already queued" flag behind that behavior:
//!
//! ```text
//!   event ──► request() == true  ──► schedule one frame callback
//!   event ──► request() == false ──► dropped
//!   event ──► request() == false ──► dropped
//!                 frame callback ──► begin_frame(), re-sample, recompute
//! ```
//!
//! Dropped requests are not queued or batched; the frame callback re-samples
//! the page, so nothing they carried is lost.

/// Coalesces update requests into at most one pending frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    queued: bool,
    frames: u64,
    dropped: u64,
}

impl FrameGate {
    /// Creates an idle gate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queued: false,
            frames: 0,
            dropped: 0,
        }
    }

    /// Records an update request.
    ///
    /// Returns `true` if the caller must schedule a frame callback (no update
    /// was queued yet), `false` if the request was absorbed by the pending
    /// one.
    pub fn request(&mut self) -> bool {
        if self.queued {
            self.dropped += 1;
            false
        } else {
            self.queued = true;
            true
        }
    }

    /// Marks the start of the queued frame callback, clearing the flag.
    ///
    /// Returns `false` if no update was queued (e.g. the callback fired after
    /// [`cancel`](Self::cancel)); the caller should skip the update.
    pub fn begin_frame(&mut self) -> bool {
        if !self.queued {
            return false;
        }
        self.queued = false;
        self.frames += 1;
        true
    }

    /// Drops the pending request, if any.
    pub fn cancel(&mut self) {
        self.queued = false;
    }

    /// Whether an update is currently queued.
    #[must_use]
    pub fn is_queued(&self) -> bool {
        self.queued
    }

    /// Number of frame callbacks that ran an update.
    ///
    /// Doubles as a monotonically increasing frame index.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Number of requests absorbed by an already queued update.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_requests_schedules_one_frame() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        for _ in 0..9 {
            assert!(!gate.request());
        }
        assert!(gate.is_queued());

        assert!(gate.begin_frame());
        assert!(!gate.is_queued());
        assert_eq!(gate.frames(), 1);
        assert_eq!(gate.dropped(), 9);
    }

    #[test]
    fn next_event_after_a_frame_schedules_again() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        assert!(gate.begin_frame());
        assert!(gate.request());
        assert!(gate.begin_frame());
        assert_eq!(gate.frames(), 2);
        assert_eq!(gate.dropped(), 0);
    }

    #[test]
    fn spurious_or_cancelled_frames_are_skipped() {
        let mut gate = FrameGate::new();
        assert!(!gate.begin_frame());

        assert!(gate.request());
        gate.cancel();
        assert!(!gate.begin_frame());
        assert_eq!(gate.frames(), 0);

        // A fresh request after cancel schedules normally.
        assert!(gate.request());
    }
}
