// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`ConsoleSink`] implements [`TraceSink`] and writes one line per event
//! through the [`log`] facade at `debug` level. Hook the facade up to the
//! browser console (e.g. with `console_log`) to see them.

use alloc::format;
use alloc::string::String;

use scrollstage_core::trace::{
    FrameEvent, SnapEvent, StageEvent, TraceSink, TriggerEvent, WowEvent, WowTransition,
};

/// Logs trace events, one line per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

fn wow_transition_name(transition: WowTransition) -> &'static str {
    match transition {
        WowTransition::Promoted => "promote",
        WowTransition::Reset => "reset",
    }
}

fn frame_line(e: &FrameEvent) -> String {
    format!(
        "[frame] index={} scroll_y={:.1}px viewport={:.1}px dropped={}",
        e.frame_index, e.scroll.offset_y, e.scroll.viewport_height, e.dropped_requests,
    )
}

fn stage_line(e: &StageEvent) -> String {
    let active = match e.active_index {
        Some(i) => format!("{i}"),
        None => String::from("-"),
    };
    format!(
        "[stage] frame={} number={} active={active}",
        e.frame_index, e.stage_number,
    )
}

impl TraceSink for ConsoleSink {
    fn on_frame(&mut self, e: &FrameEvent) {
        log::debug!("{}", frame_line(e));
    }

    fn on_stage(&mut self, e: &StageEvent) {
        log::debug!("{}", stage_line(e));
    }

    fn on_wow(&mut self, e: &WowEvent) {
        log::debug!(
            "[wow] frame={} card={} {}",
            e.frame_index,
            e.card,
            wow_transition_name(e.transition),
        );
    }

    fn on_trigger(&mut self, e: &TriggerEvent) {
        log::debug!("[trigger] feature={} key={}", e.feature, e.key);
    }

    fn on_snap(&mut self, e: &SnapEvent) {
        log::debug!("[snap] disabled at scroll_y={:.1}px", e.offset_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollstage_core::viewport::ScrollState;

    #[test]
    fn frame_line_format() {
        let line = frame_line(&FrameEvent {
            frame_index: 12,
            scroll: ScrollState::new(1234.5, 800.0),
            dropped_requests: 7,
        });
        assert_eq!(
            line,
            "[frame] index=12 scroll_y=1234.5px viewport=800.0px dropped=7"
        );
    }

    #[test]
    fn stage_line_marks_missing_active_stage() {
        let line = stage_line(&StageEvent {
            frame_index: 3,
            stage_number: 4,
            active_index: None,
        });
        assert_eq!(line, "[stage] frame=3 number=4 active=-");
    }
}
