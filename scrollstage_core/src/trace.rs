// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostic events from the frame loop.
//!
//! The page reports frames, stage changes, wow transitions, fired triggers
//! and the snap switch through a [`Tracer`], which forwards them to a
//! [`TraceSink`] such as a console logger.
//!
//! # Crate features
//!
//! - `trace`: without it [`Tracer`] carries no sink and drops every event.

use crate::stage::StoryFrame;
use crate::viewport::ScrollState;

/// Emitted when a coalesced frame update runs.
#[derive(Clone, Copy, Debug)]
pub struct FrameEvent {
    /// Monotonic frame counter.
    pub frame_index: u64,
    /// Scroll state sampled for this frame.
    pub scroll: ScrollState,
    /// Total update requests absorbed by a pending frame so far.
    pub dropped_requests: u64,
}

/// Emitted after the story section was recomputed.
#[derive(Clone, Copy, Debug)]
pub struct StageEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// Displayed 1-based stage number.
    pub stage_number: usize,
    /// Index of the stage classified active, if any.
    pub active_index: Option<usize>,
}

impl StageEvent {
    /// Creates a `StageEvent` from a computed [`StoryFrame`].
    #[must_use]
    pub fn new(frame_index: u64, frame: &StoryFrame) -> Self {
        Self {
            frame_index,
            stage_number: frame.stage_number,
            active_index: frame.active_index(),
        }
    }
}

/// What happened to a wow card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WowTransition {
    /// The card became the holder.
    Promoted,
    /// The card's styling was cleared.
    Reset,
}

/// Emitted when a wow card changes holder status.
#[derive(Clone, Copy, Debug)]
pub struct WowEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// Card index in DOM order.
    pub card: usize,
    /// What happened.
    pub transition: WowTransition,
}

/// Emitted when a fire-once trigger fires.
#[derive(Clone, Copy, Debug)]
pub struct TriggerEvent {
    /// Static name of the feature the trigger belongs to.
    pub feature: &'static str,
    /// Key of the target within its trigger.
    pub key: u32,
}

/// Emitted when scroll snapping is switched off.
#[derive(Clone, Copy, Debug)]
pub struct SnapEvent {
    /// Scroll offset that tripped the latch.
    pub offset_y: f64,
}

/// Receives trace events from the page.
///
/// Every method defaults to ignoring its event.
pub trait TraceSink {
    /// Called when a coalesced frame update runs.
    fn on_frame(&mut self, e: &FrameEvent) {
        _ = e;
    }

    /// Called after the story section was recomputed.
    fn on_stage(&mut self, e: &StageEvent) {
        _ = e;
    }

    /// Called when a wow card is promoted or reset.
    fn on_wow(&mut self, e: &WowEvent) {
        _ = e;
    }

    /// Called when a fire-once trigger fires.
    fn on_trigger(&mut self, e: &TriggerEvent) {
        _ = e;
    }

    /// Called when scroll snapping is switched off.
    fn on_snap(&mut self, e: &SnapEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// The handle the frame update emits events through.
///
/// Built without the `trace` feature it holds no sink at all and every call
/// is empty, so pages that never log pay nothing for the calls.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Forwards events to `sink`.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// A tracer with nowhere to send events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    #[inline]
    fn emit(&mut self, deliver: impl FnOnce(&mut (dyn TraceSink + 'a))) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            deliver(&mut **sink);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = deliver;
        }
    }

    /// Reports a coalesced frame.
    #[inline]
    pub fn frame(&mut self, e: &FrameEvent) {
        self.emit(|sink| sink.on_frame(e));
    }

    /// Reports the recomputed story section.
    #[inline]
    pub fn stage(&mut self, e: &StageEvent) {
        self.emit(|sink| sink.on_stage(e));
    }

    /// Reports a wow card promotion or reset.
    #[inline]
    pub fn wow(&mut self, e: &WowEvent) {
        self.emit(|sink| sink.on_wow(e));
    }

    /// Reports a fired visibility trigger.
    #[inline]
    pub fn trigger(&mut self, e: &TriggerEvent) {
        self.emit(|sink| sink.on_trigger(e));
    }

    /// Reports that scroll snapping was switched off.
    #[inline]
    pub fn snap(&mut self, e: &SnapEvent) {
        self.emit(|sink| sink.on_snap(e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::StageMapper;
    use crate::viewport::SectionGeometry;

    #[test]
    fn stage_event_from_story_frame() {
        let mapper = StageMapper::new(3).unwrap();
        let frame = mapper.frame(
            ScrollState::new(0.0, 800.0),
            SectionGeometry::new(0.0, 3200.0),
        );
        let e = StageEvent::new(4, &frame);
        assert_eq!(e.frame_index, 4);
        assert_eq!(e.stage_number, 1);
        assert_eq!(e.active_index, Some(0));
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        let mut tracer = Tracer::new(&mut sink);
        tracer.frame(&FrameEvent {
            frame_index: 0,
            scroll: ScrollState::new(0.0, 800.0),
            dropped_requests: 0,
        });
        tracer.snap(&SnapEvent { offset_y: 120.0 });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.trigger(&TriggerEvent {
            feature: "reveal",
            key: 0,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        #[derive(Default)]
        struct RecordingSink {
            frames: u32,
            wows: u32,
        }

        impl TraceSink for RecordingSink {
            fn on_frame(&mut self, _e: &FrameEvent) {
                self.frames += 1;
            }

            fn on_wow(&mut self, _e: &WowEvent) {
                self.wows += 1;
            }
        }

        let mut sink = RecordingSink::default();
        {
            let mut tracer = Tracer::new(&mut sink);
            tracer.frame(&FrameEvent {
                frame_index: 1,
                scroll: ScrollState::new(10.0, 800.0),
                dropped_requests: 3,
            });
            tracer.wow(&WowEvent {
                frame_index: 1,
                card: 0,
                transition: WowTransition::Promoted,
            });
            // Not overridden by the sink; falls through to the default no-op.
            tracer.stage(&StageEvent {
                frame_index: 1,
                stage_number: 1,
                active_index: None,
            });
        }
        assert_eq!(sink.frames, 1);
        assert_eq!(sink.wows, 1);
    }
}
