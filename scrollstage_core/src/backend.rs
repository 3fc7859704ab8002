// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for page integrations.
//!
//! Scrollstage splits platform-specific work into *backend* crates. Each
//! backend provides the following pieces:
//!
//! - **Sampler**: Free functions that read the scroll offset, viewport size
//!   and element geometry into [`ScrollState`], [`SectionGeometry`] and
//!   `kurbo::Rect` values. Reads only; no state.
//!
//! - **Frame source**: Coalesces scroll and resize events into at most one
//!   update per rendered frame, driven by a [`FrameGate`]. This is
//!   backend-specific and not abstracted by a trait because the callback
//!   plumbing differs fundamentally across platforms.
//!
//! - **Visibility trigger**: Fires a one-shot callback per watched element,
//!   with the bookkeeping of a [`FireOnce`].
//!
//! - **Presenter**: Implements the [`Presenter`] trait to push a computed
//!   frame onto native nodes (e.g. DOM elements).
//!
//! # Crate boundaries
//!
//! `scrollstage_core` owns the computations, the small page state machines
//! and this contract module. Backend crates depend on `scrollstage_core` and
//! provide platform glue. Page code depends on both and wires them together
//! in a frame callback.
//!
//! [`ScrollState`]: crate::viewport::ScrollState
//! [`SectionGeometry`]: crate::viewport::SectionGeometry
//! [`FrameGate`]: crate::schedule::FrameGate
//! [`FireOnce`]: crate::trigger::FireOnce

/// Applies a computed frame to a native presentation tree.
///
/// Presenters are write-only: they hold element handles and make no
/// decisions. DOM presenters implement this for
/// [`StoryFrame`](crate::stage::StoryFrame),
/// [`WowFrame`](crate::wow::WowFrame) and
/// [`TimelineToggle`](crate::timeline::TimelineToggle); tests implement it
/// with in-memory style maps.
///
/// # Frame callback pseudocode
///
/// ```rust,ignore
/// fn on_frame(page: &mut Page) {
///     let scroll = sample_scroll_state(&window);
///
///     let story = page.mapper.frame(scroll, sample_section(&section));
///     page.story_presenter.apply(&story);
///
///     let cards: Vec<Rect> = page.cards.iter().map(|c| sample_rect(c, scroll.offset_y)).collect();
///     let wow = page.selector.update(scroll, &cards);
///     page.wow_presenter.apply(&wow);
/// }
/// ```
pub trait Presenter<F: ?Sized> {
    /// Applies `frame` to the backing presentation tree.
    fn apply(&mut self, frame: &F);
}
