// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame page state.

use scrollstage_backend_web::ConsoleSink;
use scrollstage_core::config::PageConfig;
use scrollstage_core::schedule::FrameGate;
use scrollstage_core::snap::SnapLatch;
use scrollstage_core::trace::{FrameEvent, SnapEvent, Tracer, TriggerEvent};
use scrollstage_core::viewport::ScrollState;
use web_sys::HtmlElement;

use crate::features::story::StoryFeature;
use crate::features::wow::WowFeature;

/// Owns every piece of state the frame update touches.
///
/// Features that are absent from the document are simply `None`; the story
/// section stays `None` until it first becomes visible.
pub(crate) struct PageController {
    /// The `<html>` element, for switching off scroll snapping.
    root: HtmlElement,
    snap: SnapLatch,
    story: Option<StoryFeature>,
    wow: Option<WowFeature>,
    sink: ConsoleSink,
}

impl PageController {
    pub(crate) fn new(root: HtmlElement, config: &PageConfig) -> Self {
        Self {
            root,
            snap: SnapLatch::new(config.snap_threshold),
            story: None,
            wow: None,
            sink: ConsoleSink,
        }
    }

    pub(crate) fn install_story(&mut self, story: StoryFeature) {
        self.story = Some(story);
    }

    pub(crate) fn install_wow(&mut self, wow: WowFeature) {
        self.wow = Some(wow);
    }

    /// Runs one coalesced frame against freshly sampled scroll state.
    pub(crate) fn update(&mut self, scroll: ScrollState, gate: FrameGate) {
        let frame_index = gate.frames();
        let mut tracer = Tracer::new(&mut self.sink);
        tracer.frame(&FrameEvent {
            frame_index,
            scroll,
            dropped_requests: gate.dropped(),
        });

        if self.snap.observe(scroll.offset_y) {
            let _ = self.root.style().set_property("scroll-snap-type", "none");
            tracer.snap(&SnapEvent {
                offset_y: scroll.offset_y,
            });
        }

        if let Some(story) = &mut self.story {
            story.update(scroll, frame_index, &mut tracer);
        }
        if let Some(wow) = &mut self.wow {
            wow.update(scroll, frame_index, &mut tracer);
        }
    }

    /// Records that a fire-once trigger fired.
    pub(crate) fn trace_trigger(&mut self, feature: &'static str, key: u32) {
        Tracer::new(&mut self.sink).trigger(&TriggerEvent { feature, key });
    }
}
