// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM presenters.
//!
//! Each presenter resolves its elements once, when the feature is wired up,
//! and then only writes classes, attributes and inline styles. Writes whose
//! failure would mean nothing to the page are discarded.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use scrollstage_core::backend::Presenter;
use scrollstage_core::stage::{StageClass, StoryFrame};
use scrollstage_core::timeline::TimelineToggle;
use scrollstage_core::wow::{WowCommand, WowFrame, WowStyle};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Element, HtmlElement};

/// Returns the first descendant of `root` matching `selector`.
fn child(root: &Element, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(root
        .query_selector(selector)?
        .and_then(|e| e.dyn_into::<HtmlElement>().ok()))
}

/// Returns every descendant of `root` matching `selector`, in DOM order.
fn children(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

fn centered_scale(scale: f64) -> String {
    format!("translate(-50%, -50%) scale({scale})")
}

/// Staggered entrance delay for the `index`-th text block of a stage.
fn animation_delay(index: usize) -> String {
    format!("{}ms", index * 100)
}

// --- Story -----------------------------------------------------------------

struct StoryStage {
    root: HtmlElement,
    visual: Option<HtmlElement>,
    text: Vec<HtmlElement>,
}

/// Renders a [`StoryFrame`] onto a scrollytelling section.
///
/// The section carries the `data-stage` attribute; each `.story-stage` child
/// gets `active`/`prev` classes, and the active stage's `.story-visual` is
/// shifted for parallax.
pub struct StoryPresenter {
    section: HtmlElement,
    stages: Vec<StoryStage>,
}

impl StoryPresenter {
    /// Resolves the `.story-stage` children of `section`.
    pub fn new(section: HtmlElement) -> Result<Self, JsValue> {
        let stages = children(&section, ".story-stage")?
            .into_iter()
            .map(|root| -> Result<StoryStage, JsValue> {
                Ok(StoryStage {
                    visual: child(&root, ".story-visual")?,
                    text: children(&root, ".story-title, .story-description")?,
                    root,
                })
            })
            .collect::<Result<Vec<_>, JsValue>>()?;
        Ok(Self { section, stages })
    }

    /// Number of stages found under the section.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// The section element.
    #[must_use]
    pub fn section(&self) -> &HtmlElement {
        &self.section
    }
}

impl Presenter<StoryFrame> for StoryPresenter {
    fn apply(&mut self, frame: &StoryFrame) {
        let _ = self
            .section
            .set_attribute("data-stage", &format!("{}", frame.stage_number));

        for (stage, presentation) in self.stages.iter().zip(&frame.stages) {
            let classes = stage.root.class_list();
            let _ = classes.remove_2("active", "prev");
            if let Some(name) = presentation.class.class_name() {
                let _ = classes.add_1(name);
            }

            if let (Some(px), Some(visual)) = (presentation.parallax_px, &stage.visual) {
                let _ = visual.style().set_property("transform", &translate_y(px));
            }

            if presentation.class == StageClass::Active {
                for (i, el) in stage.text.iter().enumerate() {
                    let _ = el
                        .style()
                        .set_property("animation-delay", &animation_delay(i));
                    let _ = el.class_list().add_1("animated");
                }
            }
        }
    }
}

impl core::fmt::Debug for StoryPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StoryPresenter")
            .field("section", &"HtmlElement")
            .field("stages_len", &self.stages.len())
            .finish_non_exhaustive()
    }
}

// --- Wow -------------------------------------------------------------------

/// Fixed declarations written on a lifted logo, besides its scale and
/// opacity.
const LIFTED_LOGO: [(&str, &str); 9] = [
    ("position", "fixed"),
    ("top", "50%"),
    ("left", "50%"),
    ("z-index", "9998"),
    ("max-width", "100vw"),
    ("max-height", "100vh"),
    ("width", "auto"),
    ("height", "auto"),
    ("object-fit", "cover"),
];

/// Every logo property the wow styling may write.
const LOGO_PROPERTIES: [&str; 11] = [
    "transform",
    "opacity",
    "position",
    "top",
    "left",
    "z-index",
    "max-width",
    "max-height",
    "width",
    "height",
    "object-fit",
];

/// The parts of one `.case-study-card.wow-effect` element.
pub struct WowCard {
    root: Element,
    logo: Option<HtmlElement>,
    text: Option<HtmlElement>,
    meta: Option<HtmlElement>,
}

impl WowCard {
    /// Resolves the logo, text and meta parts of `card`. Missing parts are
    /// skipped when styling.
    pub fn new(card: Element) -> Result<Self, JsValue> {
        Ok(Self {
            logo: child(&card, ".case-logo")?,
            text: child(&card, ".case-text-content")?,
            meta: child(&card, ".case-meta")?,
            root: card,
        })
    }

    /// The card element, for geometry sampling.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.root
    }

    fn reset(&self) {
        let _ = self.root.class_list().remove_1("scrolling");
        if let Some(logo) = &self.logo {
            let s = logo.style();
            for name in LOGO_PROPERTIES {
                let _ = s.remove_property(name);
            }
        }
        if let Some(text) = &self.text {
            let s = text.style();
            let _ = s.remove_property("opacity");
            let _ = s.remove_property("transform");
        }
        if let Some(meta) = &self.meta {
            let _ = meta.style().remove_property("opacity");
        }
    }

    fn style(&self, style: &WowStyle) {
        if let (Some(image), Some(logo)) = (style.image, &self.logo) {
            let s = logo.style();
            for (name, value) in LIFTED_LOGO {
                let _ = s.set_property(name, value);
            }
            let _ = s.set_property("transform", &centered_scale(image.scale));
            let _ = s.set_property("opacity", &format!("{}", image.opacity));
        }
        if let Some(text) = &self.text {
            let s = text.style();
            let _ = s.set_property("opacity", &format!("{}", style.text_opacity));
            let _ = s.set_property("transform", &translate_y(style.text_shift_px));
        }
        if let Some(meta) = &self.meta {
            let _ = meta
                .style()
                .set_property("opacity", &format!("{}", style.meta_opacity));
        }
    }
}

impl core::fmt::Debug for WowCard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WowCard")
            .field("logo", &self.logo.is_some())
            .field("text", &self.text.is_some())
            .field("meta", &self.meta.is_some())
            .finish_non_exhaustive()
    }
}

/// Applies [`WowFrame`] commands to the wow cards, in DOM order.
#[derive(Debug)]
pub struct WowPresenter {
    cards: Vec<WowCard>,
}

impl WowPresenter {
    /// Creates a presenter over `cards`, indexed as the selector indexes
    /// them.
    #[must_use]
    pub fn new(cards: Vec<WowCard>) -> Self {
        Self { cards }
    }

    /// The cards, in DOM order.
    #[must_use]
    pub fn cards(&self) -> &[WowCard] {
        &self.cards
    }
}

impl Presenter<WowFrame> for WowPresenter {
    fn apply(&mut self, frame: &WowFrame) {
        for command in &frame.commands {
            match *command {
                WowCommand::Reset(i) => {
                    if let Some(card) = self.cards.get(i) {
                        card.reset();
                    }
                }
                WowCommand::Promote(i) => {
                    if let Some(card) = self.cards.get(i) {
                        let _ = card.root.class_list().add_1("scrolling");
                    }
                }
                WowCommand::Style { card, style } => {
                    if let Some(card) = self.cards.get(card) {
                        card.style(&style);
                    }
                }
            }
        }
    }
}

// --- Timeline --------------------------------------------------------------

/// One `.timeline-clickable` item and its `.timeline-details` block.
pub struct TimelineEntry {
    item: HtmlElement,
    details: Option<HtmlElement>,
}

impl TimelineEntry {
    /// Resolves the details block of `item`.
    pub fn new(item: HtmlElement) -> Result<Self, JsValue> {
        Ok(Self {
            details: child(&item, ".timeline-details")?,
            item,
        })
    }

    /// The clickable item element.
    #[must_use]
    pub fn item(&self) -> &HtmlElement {
        &self.item
    }

    fn collapse(&self) {
        let _ = self.item.class_list().remove_1("active");
        let _ = self.item.set_attribute("aria-expanded", "false");
        if let Some(details) = &self.details {
            let s = details.style();
            let _ = s.set_property("max-height", "0");
            let _ = s.set_property("opacity", "0");
        }
    }

    fn expand(&self) {
        let _ = self.item.class_list().add_1("active");
        let _ = self.item.set_attribute("aria-expanded", "true");
        if let Some(details) = &self.details {
            let s = details.style();
            let _ = s.set_property("max-height", &format!("{}px", details.scroll_height()));
            let _ = s.set_property("opacity", "1");
        }
    }
}

impl core::fmt::Debug for TimelineEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TimelineEntry")
            .field("details", &self.details.is_some())
            .finish_non_exhaustive()
    }
}

/// Applies accordion toggles to the timeline entries.
#[derive(Debug)]
pub struct TimelinePresenter {
    entries: Vec<TimelineEntry>,
}

impl TimelinePresenter {
    /// Creates a presenter over `entries`, in DOM order.
    #[must_use]
    pub fn new(entries: Vec<TimelineEntry>) -> Self {
        Self { entries }
    }

    /// The entries, in DOM order.
    #[must_use]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }
}

impl Presenter<TimelineToggle> for TimelinePresenter {
    fn apply(&mut self, toggle: &TimelineToggle) {
        if let Some(entry) = toggle.collapsed.and_then(|i| self.entries.get(i)) {
            entry.collapse();
        }
        if let Some(entry) = toggle.expanded.and_then(|i| self.entries.get(i)) {
            entry.expand();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_values() {
        assert_eq!(translate_y(20.0), "translateY(20px)");
        assert_eq!(translate_y(-12.5), "translateY(-12.5px)");
        assert_eq!(centered_scale(1.625), "translate(-50%, -50%) scale(1.625)");
    }

    #[test]
    fn text_blocks_are_staggered_by_100ms() {
        assert_eq!(animation_delay(0), "0ms");
        assert_eq!(animation_delay(1), "100ms");
        assert_eq!(animation_delay(3), "300ms");
    }

    #[test]
    fn reset_clears_everything_the_lift_writes() {
        for (name, _) in LIFTED_LOGO {
            assert!(LOGO_PROPERTIES.contains(&name), "{name} is never cleared");
        }
        assert!(LOGO_PROPERTIES.contains(&"transform"));
        assert!(LOGO_PROPERTIES.contains(&"opacity"));
    }
}
