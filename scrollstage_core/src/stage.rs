// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping a scroll offset onto the stages of a bounded section.
//!
//! A scrollytelling section is taller than the viewport. While it is pinned,
//! the distance scrolled through it is normalized to a progress value in
//! `[0, 1]` and split into `N` equal sub-ranges, one per stage.
//!
//! Two stage readings come out of a [`StageProgress`]:
//!
//! - the per-stage [`StageClass`] (`Active`, `Previous`, `Inactive`), which
//!   drives the stage elements' classes, and
//! - the 1-based [`stage_number`](StageProgress::stage_number), which drives
//!   the section's `data-stage` attribute.
//!
//! They are derived independently and can disagree by one at exact stage
//! boundaries (at `progress == 1` no stage is classified active while the
//! stage number reads `N`). Both are kept as-is.

use alloc::vec::Vec;
use core::num::NonZeroUsize;

use crate::viewport::{ScrollState, SectionGeometry};

/// Default vertical parallax travel of an active stage's visual, in pixels.
pub const DEFAULT_PARALLAX_RANGE_PX: f64 = 50.0;

/// Computes the normalized progress through `section` at the given scroll
/// state.
///
/// The result is always within `[0, 1]`. When the viewport is at least as
/// tall as the section there is nothing to scroll through; the section then
/// behaves as one full-viewport stage and progress is `0` until the reader
/// scrolls past its top, `1` afterwards.
#[must_use]
pub fn section_progress(scroll: ScrollState, section: SectionGeometry) -> f64 {
    let scrollable = section.scrollable_height(scroll.viewport_height);
    let section_scroll = scroll.offset_y - section.top;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return if section_scroll > 0.0 { 1.0 } else { 0.0 };
    }
    let progress = section_scroll / scrollable;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// How a single stage should be presented for the current progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageClass {
    /// The stage's sub-range contains the current progress.
    Active,
    /// The stage starts within half a stage of the current progress
    /// (trailing fade state).
    Previous,
    /// Neither active nor previous.
    Inactive,
}

impl StageClass {
    /// Returns the class name applied to the stage element, if any.
    #[must_use]
    pub const fn class_name(self) -> Option<&'static str> {
        match self {
            Self::Active => Some("active"),
            Self::Previous => Some("prev"),
            Self::Inactive => None,
        }
    }
}

/// Progress through a section together with its (fixed) stage count.
///
/// Recomputed every frame; never stored across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageProgress {
    progress: f64,
    stage_count: NonZeroUsize,
}

impl StageProgress {
    /// Creates a stage progress, clamping `progress` into `[0, 1]`.
    ///
    /// A NaN progress is treated as `0`.
    #[must_use]
    pub fn new(progress: f64, stage_count: NonZeroUsize) -> Self {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        Self {
            progress,
            stage_count,
        }
    }

    /// Normalized progress through the section, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Number of stages in the section.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stage_count.get()
    }

    /// Progress local to stage `index`: `0` at the start of its sub-range,
    /// `1` at the end, negative before it.
    #[must_use]
    pub fn local_progress(&self, index: usize) -> f64 {
        let n = self.stage_count.get() as f64;
        (self.progress - index as f64 / n) * n
    }

    /// Classifies stage `index`.
    ///
    /// Ranges are half-open on the low end. Away from boundaries exactly one
    /// stage is active. At a boundary `i / n` the local progress is rounded
    /// floating point, so the earlier neighbour may still read just below `1`
    /// and both neighbours can be active there; [`active_index`] then reports
    /// the earlier one.
    ///
    /// [`active_index`]: Self::active_index
    #[must_use]
    pub fn class(&self, index: usize) -> StageClass {
        let local = self.local_progress(index);
        if (0.0..1.0).contains(&local) {
            StageClass::Active
        } else if (-0.5..0.0).contains(&local) {
            StageClass::Previous
        } else {
            StageClass::Inactive
        }
    }

    /// Index of the stage classified [`StageClass::Active`], if any.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        (0..self.stage_count.get()).find(|&i| self.class(i) == StageClass::Active)
    }

    /// The 1-based stage number shown on the section.
    ///
    /// Computed as `min(floor(progress * N) + 1, N)`, independently of
    /// [`class`](Self::class).
    #[must_use]
    pub fn stage_number(&self) -> usize {
        let n = self.stage_count.get();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "progress is clamped to [0, 1], so the product is a small non-negative value"
        )]
        let floor = (self.progress * n as f64) as usize;
        (floor + 1).min(n)
    }
}

/// Presentation of one stage in a [`StoryFrame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StagePresentation {
    /// Class to apply to the stage element.
    pub class: StageClass,
    /// Vertical offset of the stage's visual, set only for the active stage.
    pub parallax_px: Option<f64>,
}

/// Everything the presenter needs to render a scrollytelling section for one
/// frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoryFrame {
    /// Value for the section's `data-stage` attribute (1-based).
    pub stage_number: usize,
    /// One entry per stage, in DOM order.
    pub stages: Vec<StagePresentation>,
}

impl StoryFrame {
    /// Index of the first stage presented as active, if any.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.stages
            .iter()
            .position(|s| s.class == StageClass::Active)
    }
}

/// Maps scroll offsets onto a section with a fixed number of stages.
///
/// The stage count is read once, when the section is wired up, and never
/// changes. Geometry is passed in on every call, so a resize simply yields a
/// different result on the next frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageMapper {
    stage_count: NonZeroUsize,
    parallax_range_px: f64,
}

impl StageMapper {
    /// Creates a mapper for `stage_count` stages.
    ///
    /// Returns `None` if `stage_count` is zero; a section without stages has
    /// nothing to animate.
    #[must_use]
    pub fn new(stage_count: usize) -> Option<Self> {
        Some(Self {
            stage_count: NonZeroUsize::new(stage_count)?,
            parallax_range_px: DEFAULT_PARALLAX_RANGE_PX,
        })
    }

    /// Sets the parallax travel of the active stage's visual.
    #[must_use]
    pub fn with_parallax_range(mut self, range_px: f64) -> Self {
        self.parallax_range_px = range_px;
        self
    }

    /// Number of stages.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stage_count.get()
    }

    /// Computes the stage progress for the given scroll state and geometry.
    #[must_use]
    pub fn map(&self, scroll: ScrollState, section: SectionGeometry) -> StageProgress {
        StageProgress::new(section_progress(scroll, section), self.stage_count)
    }

    /// Computes the full presentation of the section for one frame.
    #[must_use]
    pub fn frame(&self, scroll: ScrollState, section: SectionGeometry) -> StoryFrame {
        let progress = self.map(scroll, section);
        let stages = (0..progress.stage_count())
            .map(|i| {
                let class = progress.class(i);
                let parallax_px = (class == StageClass::Active)
                    .then(|| (progress.local_progress(i) - 0.5) * self.parallax_range_px);
                StagePresentation { class, parallax_px }
            })
            .collect();
        StoryFrame {
            stage_number: progress.stage_number(),
            stages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(count: usize) -> NonZeroUsize {
        NonZeroUsize::new(count).unwrap()
    }

    const VIEWPORT: f64 = 800.0;
    const SECTION: SectionGeometry = SectionGeometry::new(2000.0, 4800.0);

    #[test]
    fn progress_is_always_within_unit_range() {
        let mut offset = -5000.0;
        while offset < 20_000.0 {
            let p = section_progress(ScrollState::new(offset, VIEWPORT), SECTION);
            assert!((0.0..=1.0).contains(&p), "offset {offset} gave {p}");
            offset += 137.0;
        }
    }

    #[test]
    fn progress_endpoints() {
        let scrollable = SECTION.scrollable_height(VIEWPORT);
        let start = section_progress(ScrollState::new(SECTION.top, VIEWPORT), SECTION);
        let end = section_progress(
            ScrollState::new(SECTION.top + scrollable, VIEWPORT),
            SECTION,
        );
        assert_eq!(start, 0.0);
        assert_eq!(end, 1.0);

        let mid = section_progress(
            ScrollState::new(SECTION.top + scrollable / 2.0, VIEWPORT),
            SECTION,
        );
        assert_eq!(mid, 0.5);
    }

    #[test]
    fn collapsed_section_resolves_to_zero_or_one() {
        // Viewport grew to (or past) the section height.
        for viewport in [4800.0, 6000.0] {
            for (offset, expected) in [(0.0, 0.0), (2000.0, 0.0), (2001.0, 1.0), (9000.0, 1.0)] {
                let p = section_progress(ScrollState::new(offset, viewport), SECTION);
                assert!(p.is_finite());
                assert_eq!(p, expected, "viewport {viewport}, offset {offset}");
            }
        }
    }

    #[test]
    fn resize_recomputes_without_drift() {
        let mapper = StageMapper::new(3).unwrap();
        let scroll = ScrollState::new(3000.0, VIEWPORT);
        let before = mapper.map(scroll, SECTION);

        // Shrink, then restore the viewport; the result only depends on the
        // current sample.
        let _ = mapper.map(ScrollState::new(3000.0, 400.0), SECTION);
        let after = mapper.map(scroll, SECTION);
        assert_eq!(before, after);
    }

    #[test]
    fn zero_stages_disables_the_mapper() {
        assert!(StageMapper::new(0).is_none());
        assert_eq!(StageMapper::new(4).unwrap().stage_count(), 4);
    }

    #[test]
    fn exactly_one_active_stage_inside_the_range() {
        for count in 1..=6 {
            for p in [0.01, 0.1, 0.3, 0.45, 0.62, 0.77, 0.99] {
                let progress = StageProgress::new(p, n(count));
                let active = (0..count)
                    .filter(|&i| progress.class(i) == StageClass::Active)
                    .count();
                assert_eq!(active, 1, "count {count}, progress {p}");
            }
        }
    }

    #[test]
    fn boundary_favors_the_later_stage() {
        let progress = StageProgress::new(0.5, n(4));
        assert_eq!(progress.class(1), StageClass::Inactive);
        assert_eq!(progress.class(2), StageClass::Active);
        assert_eq!(progress.active_index(), Some(2));
        assert_eq!(progress.stage_number(), 3);
    }

    #[test]
    fn boundaries_only_activate_neighbouring_stages() {
        for count in 1..=12_usize {
            for i in 1..count {
                let progress = StageProgress::new(i as f64 / count as f64, n(count));
                let active = (0..count)
                    .filter(|&k| progress.class(k) == StageClass::Active)
                    .collect::<Vec<_>>();
                assert!(!active.is_empty(), "count {count}, boundary {i}");
                assert!(
                    active.iter().all(|&k| k + 1 == i || k == i),
                    "count {count}, boundary {i}: {active:?}"
                );
            }
        }

        // 3/5 rounds so that stage 2 still reads just below 1.
        let progress = StageProgress::new(3.0 / 5.0, n(5));
        assert_eq!(progress.class(2), StageClass::Active);
        assert_eq!(progress.class(3), StageClass::Active);
        assert_eq!(progress.active_index(), Some(2));
    }

    #[test]
    fn upcoming_stage_within_half_a_stage_is_previous() {
        let progress = StageProgress::new(0.15, n(4));
        assert_eq!(progress.class(0), StageClass::Active);
        assert_eq!(progress.class(1), StageClass::Previous);
        assert_eq!(progress.class(2), StageClass::Inactive);

        // Exactly half a stage ahead still counts.
        let progress = StageProgress::new(0.125, n(4));
        assert_eq!(progress.local_progress(1), -0.5);
        assert_eq!(progress.class(1), StageClass::Previous);
    }

    #[test]
    fn stage_number_and_classification_disagree_at_the_end() {
        let progress = StageProgress::new(1.0, n(4));
        assert_eq!(progress.active_index(), None);
        assert_eq!(progress.stage_number(), 4);

        let progress = StageProgress::new(0.0, n(4));
        assert_eq!(progress.active_index(), Some(0));
        assert_eq!(progress.stage_number(), 1);
    }

    #[test]
    fn frame_sets_parallax_on_the_active_stage_only() {
        let mapper = StageMapper::new(2).unwrap();
        let scrollable = SECTION.scrollable_height(VIEWPORT);
        // progress 0.25: stage 0 is halfway through its sub-range.
        let frame = mapper.frame(
            ScrollState::new(SECTION.top + scrollable * 0.25, VIEWPORT),
            SECTION,
        );
        assert_eq!(frame.stage_number, 1);
        assert_eq!(frame.active_index(), Some(0));
        assert_eq!(frame.stages[0].parallax_px, Some(0.0));
        assert_eq!(frame.stages[1].class, StageClass::Previous);
        assert_eq!(frame.stages[1].parallax_px, None);

        let mapper = mapper.with_parallax_range(100.0);
        let frame = mapper.frame(ScrollState::new(SECTION.top, VIEWPORT), SECTION);
        assert_eq!(frame.stages[0].parallax_px, Some(-50.0));
    }

    #[test]
    fn class_names() {
        assert_eq!(StageClass::Active.class_name(), Some("active"));
        assert_eq!(StageClass::Previous.class_name(), Some("prev"));
        assert_eq!(StageClass::Inactive.class_name(), None);
    }
}
