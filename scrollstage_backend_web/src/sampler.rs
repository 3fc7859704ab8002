// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport and element geometry reads.
//!
//! Pure reads of current layout; nothing here caches or writes. Call these
//! from inside a frame callback so every value belongs to the same frame.

use kurbo::Rect;
use scrollstage_core::viewport::{ScrollState, SectionGeometry};
use web_sys::{Element, HtmlElement, Window};

/// Samples the document scroll offset and layout viewport height.
///
/// Values the browser refuses to report read as `0`.
#[must_use]
pub fn scroll_state(window: &Window) -> ScrollState {
    let offset_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    ScrollState::new(offset_y, viewport_height)
}

/// Samples a section's document offset and rendered height.
#[must_use]
pub fn section_geometry(section: &HtmlElement) -> SectionGeometry {
    SectionGeometry::new(
        f64::from(section.offset_top()),
        f64::from(section.offset_height()),
    )
}

/// Samples an element's bounds in document coordinates.
///
/// `offset_y` is the scroll offset sampled for the same frame.
#[must_use]
pub fn document_rect(element: &Element, offset_y: f64) -> Rect {
    let r = element.get_bounding_client_rect();
    viewport_to_document(r.left(), r.top(), r.width(), r.height(), offset_y)
}

/// Shifts a viewport-relative box by the vertical scroll offset.
fn viewport_to_document(left: f64, top: f64, width: f64, height: f64, offset_y: f64) -> Rect {
    Rect::from_origin_size((left, top + offset_y), (width, height))
}
