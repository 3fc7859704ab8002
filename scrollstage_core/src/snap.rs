// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-snap latch.
//!
//! The page opens with scroll snapping enabled so the hero settles cleanly.
//! Once the reader scrolls past a small threshold, snapping is switched off
//! for the rest of the session.

/// One-way switch that trips the first time the scroll offset passes a
/// threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapLatch {
    threshold: f64,
    disabled: bool,
}

impl SnapLatch {
    /// Creates an armed latch.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            disabled: false,
        }
    }

    /// Feeds the current scroll offset.
    ///
    /// Returns `true` exactly once: on the first offset strictly greater than
    /// the threshold. The caller disables snapping at that point.
    pub fn observe(&mut self, offset_y: f64) -> bool {
        if self.disabled || offset_y <= self.threshold {
            return false;
        }
        self.disabled = true;
        true
    }

    /// Whether snapping has been disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trips_once_past_the_threshold() {
        let mut latch = SnapLatch::new(100.0);
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(100.0));
        assert!(!latch.is_disabled());

        assert!(latch.observe(100.5));
        assert!(latch.is_disabled());

        // Scrolling back up does not re-arm it.
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(400.0));
    }
}
