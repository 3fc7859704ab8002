// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sampled viewport state.
//!
//! These are plain values read fresh from the page on every update. They
//! carry no identity and no history; a [`ScrollState`] from a previous frame
//! is never compared against the current one.

/// Vertical scroll position and viewport size, sampled once per update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Document scroll offset in CSS pixels.
    pub offset_y: f64,
    /// Height of the layout viewport in CSS pixels.
    pub viewport_height: f64,
}

impl ScrollState {
    /// Creates a scroll state from an offset and a viewport height.
    #[must_use]
    pub const fn new(offset_y: f64, viewport_height: f64) -> Self {
        Self {
            offset_y,
            viewport_height,
        }
    }

    /// Document-space y coordinate of the middle of the viewport.
    #[must_use]
    pub fn viewport_center(&self) -> f64 {
        self.offset_y + self.viewport_height / 2.0
    }
}

/// Document-space vertical extent of a section element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionGeometry {
    /// Offset of the section's top edge from the document top.
    pub top: f64,
    /// Rendered height of the section.
    pub height: f64,
}

impl SectionGeometry {
    /// Creates a section geometry.
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Distance the reader can scroll while the section fills the viewport.
    ///
    /// Zero or negative when the viewport is at least as tall as the section.
    #[must_use]
    pub fn scrollable_height(&self, viewport_height: f64) -> f64 {
        self.height - viewport_height
    }
}

/// Absolute distance between two coordinates.
pub(crate) fn distance(a: f64, b: f64) -> f64 {
    if a > b { a - b } else { b - a }
}
