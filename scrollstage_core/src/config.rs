// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page tunables.

use crate::stage::DEFAULT_PARALLAX_RANGE_PX;
use crate::trigger::TriggerOptions;
use crate::wow::WowConfig;

/// Configuration for a scroll-animated page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    /// Scroll offset past which scroll snapping is switched off.
    pub snap_threshold: f64,
    /// Observer options for reveal-on-scroll elements.
    pub reveal: TriggerOptions,
    /// Observer options gating section wiring (story, timeline).
    pub section: TriggerOptions,
    /// Wow-effect tuning.
    pub wow: WowConfig,
    /// Vertical parallax travel of the active story visual, in pixels.
    pub parallax_range_px: f64,
    /// Hover time before the shutter tone plays, in milliseconds.
    pub hover_delay_ms: i32,
}

impl PageConfig {
    /// Default configuration for the portfolio page.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            snap_threshold: 100.0,
            reveal: TriggerOptions::REVEAL,
            section: TriggerOptions::SECTION,
            wow: WowConfig::standard(),
            parallax_range_px: DEFAULT_PARALLAX_RANGE_PX,
            hover_delay_ms: 200,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::standard()
    }
}
