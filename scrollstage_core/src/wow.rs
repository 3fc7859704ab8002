// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection of the single "wow" card.
//!
//! As a card's vertical center approaches the viewport's center, its logo is
//! lifted out of the card, fixed over the viewport and scaled up while the
//! card's text fades away. Only one card may hold the lifted styling at a
//! time.
//!
//! [`WowSelector::update`] walks the cards in DOM order and produces a
//! [`WowFrame`]: an ordered list of [`WowCommand`]s for the presenter. The
//! selector is the only state that survives between frames (which card
//! currently holds the styling); everything else is re-derived from the
//! sampled geometry.
//!
//! # Mutual exclusion
//!
//! The holder is chosen first: the last qualifying card in DOM order. Only
//! when it differs from the previous holder is the previous one reset (every
//! inline override the styler may have written is cleared) and the new one
//! promoted. A holder that keeps qualifying is only restyled.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::viewport::{ScrollState, distance};

/// Tunables for the wow effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WowConfig {
    /// Minimum document scroll offset before any card can activate.
    pub scroll_threshold: f64,
    /// A card qualifies when its proximity exceeds this value.
    pub activation_progress: f64,
    /// Proximity falls to zero at this multiple of the viewport height.
    pub max_distance_ratio: f64,
    /// Proximity above which the logo is lifted and scaled.
    pub image_scale_start: f64,
    /// Logo scale gained per unit of proximity past `image_scale_start`.
    pub image_scale_rate: f64,
    /// Upper bound on the logo scale.
    pub image_scale_max: f64,
    /// Logo opacity at zero proximity.
    pub image_opacity_base: f64,
    /// Logo opacity gained per unit of proximity.
    pub image_opacity_rate: f64,
    /// Upper bound on the logo opacity.
    pub image_opacity_max: f64,
    /// Text and meta opacity lost per unit of proximity.
    pub text_fade_rate: f64,
    /// Downward text shift per unit of proximity, in pixels.
    pub text_shift_px: f64,
}

impl WowConfig {
    /// The tuning used on the portfolio page.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            scroll_threshold: 100.0,
            activation_progress: 0.1,
            max_distance_ratio: 0.8,
            image_scale_start: 0.2,
            image_scale_rate: 3.125,
            image_scale_max: 3.5,
            image_opacity_base: 0.6,
            image_opacity_rate: 0.35,
            image_opacity_max: 0.95,
            text_fade_rate: 2.0,
            text_shift_px: 20.0,
        }
    }

    /// Proximity of `card` (document coordinates) to the viewport center, in
    /// `[0, 1]`; `1` when the centers coincide.
    #[must_use]
    pub fn proximity(&self, scroll: ScrollState, card: Rect) -> f64 {
        let max_distance = scroll.viewport_height * self.max_distance_ratio;
        if max_distance <= 0.0 {
            return 0.0;
        }
        let d = distance(scroll.viewport_center(), card.center().y);
        (1.0 - d / max_distance).clamp(0.0, 1.0)
    }

    /// Whether a card at the given proximity qualifies for the effect.
    #[must_use]
    pub fn qualifies(&self, scroll: ScrollState, proximity: f64) -> bool {
        proximity > self.activation_progress && scroll.offset_y > self.scroll_threshold
    }

    /// Computes the inline styling for a qualifying card.
    #[must_use]
    pub fn style(&self, proximity: f64) -> WowStyle {
        let image = (proximity > self.image_scale_start).then(|| ImageStyle {
            scale: (1.0 + (proximity - self.image_scale_start) * self.image_scale_rate)
                .min(self.image_scale_max),
            opacity: (self.image_opacity_base + proximity * self.image_opacity_rate)
                .min(self.image_opacity_max),
        });
        let fade = (1.0 - proximity * self.text_fade_rate).max(0.0);
        WowStyle {
            image,
            text_opacity: fade,
            text_shift_px: proximity * self.text_shift_px,
            meta_opacity: fade,
        }
    }
}

impl Default for WowConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lifted-logo styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageStyle {
    /// Uniform scale around the viewport center.
    pub scale: f64,
    /// Logo opacity.
    pub opacity: f64,
}

/// Inline styling for the holder card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WowStyle {
    /// Logo styling; `None` leaves the logo's current styling untouched.
    pub image: Option<ImageStyle>,
    /// Opacity of the card's text block.
    pub text_opacity: f64,
    /// Downward shift of the card's text block, in pixels.
    pub text_shift_px: f64,
    /// Opacity of the card's meta line.
    pub meta_opacity: f64,
}

/// One presenter instruction, in the order it must be applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WowCommand {
    /// Clear every inline override on the card and drop its holder class.
    Reset(usize),
    /// Mark the card as the holder.
    Promote(usize),
    /// Write the holder's inline styling.
    Style {
        /// Card index in DOM order.
        card: usize,
        /// Styling to apply.
        style: WowStyle,
    },
}

/// The ordered presenter instructions for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WowFrame {
    /// Commands in application order.
    pub commands: Vec<WowCommand>,
    /// Holder after the frame, if any.
    pub holder: Option<usize>,
}

impl WowFrame {
    /// Returns `true` if the frame changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Tracks which card holds the wow styling.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WowSelector {
    config: WowConfig,
    holder: Option<usize>,
}

impl WowSelector {
    /// Creates a selector with no holder.
    #[must_use]
    pub const fn new(config: WowConfig) -> Self {
        Self {
            config,
            holder: None,
        }
    }

    /// The card currently holding the styling.
    #[must_use]
    pub fn holder(&self) -> Option<usize> {
        self.holder
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &WowConfig {
        &self.config
    }

    /// Processes one frame.
    ///
    /// `cards` are the card bounds in document coordinates, in DOM order.
    /// The last qualifying card wins. Cards beyond the end of `cards` never
    /// qualify, so a holder index that no longer exists is reset. `Reset` and
    /// `Promote` are only emitted when the holder actually changes.
    pub fn update(&mut self, scroll: ScrollState, cards: &[Rect]) -> WowFrame {
        let winner = cards.iter().enumerate().rev().find_map(|(card, &bounds)| {
            let proximity = self.config.proximity(scroll, bounds);
            self.config
                .qualifies(scroll, proximity)
                .then_some((card, proximity))
        });

        let mut commands = Vec::new();
        let previous = self.holder;
        let next = winner.map(|(card, _)| card);
        if previous != next {
            if let Some(previous) = previous {
                commands.push(WowCommand::Reset(previous));
            }
            if let Some(next) = next {
                commands.push(WowCommand::Promote(next));
            }
            self.holder = next;
        }
        if let Some((card, proximity)) = winner {
            commands.push(WowCommand::Style {
                card,
                style: self.config.style(proximity),
            });
        }

        WowFrame {
            commands,
            holder: self.holder,
        }
    }

    /// Releases the holder, if any, returning the reset for it.
    pub fn release(&mut self) -> WowFrame {
        let commands = self
            .holder
            .take()
            .map(WowCommand::Reset)
            .into_iter()
            .collect();
        WowFrame {
            commands,
            holder: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;

    use super::*;
    use crate::backend::Presenter;

    const VIEWPORT: f64 = 1000.0;

    /// A card of height 200 centered at document y `center`.
    fn card_at(center: f64) -> Rect {
        Rect::new(0.0, center - 100.0, 400.0, center + 100.0)
    }

    fn approx(a: f64, b: f64) -> bool {
        distance(a, b) < 1e-12
    }

    /// Scroll state that puts the viewport center at `center`.
    fn centered_on(center: f64) -> ScrollState {
        ScrollState::new(center - VIEWPORT / 2.0, VIEWPORT)
    }

    /// Inline-style model of the cards, mirroring what the DOM presenter
    /// writes and clears.
    #[derive(Default)]
    struct StyleRecorder {
        styles: Vec<BTreeMap<&'static str, String>>,
        scrolling: Vec<bool>,
    }

    impl StyleRecorder {
        fn with_cards(count: usize) -> Self {
            Self {
                styles: vec![BTreeMap::new(); count],
                scrolling: vec![false; count],
            }
        }

        fn elevated(&self) -> Vec<usize> {
            (0..self.styles.len())
                .filter(|&i| self.styles[i].contains_key("z-index"))
                .collect()
        }
    }

    impl Presenter<WowFrame> for StyleRecorder {
        fn apply(&mut self, frame: &WowFrame) {
            for command in &frame.commands {
                match *command {
                    WowCommand::Reset(card) => {
                        self.styles[card].clear();
                        self.scrolling[card] = false;
                    }
                    WowCommand::Promote(card) => self.scrolling[card] = true,
                    WowCommand::Style { card, style } => {
                        let s = &mut self.styles[card];
                        if let Some(image) = style.image {
                            s.insert("position", "fixed".to_string());
                            s.insert("z-index", "9998".to_string());
                            s.insert("image-scale", image.scale.to_string());
                        }
                        s.insert("text-opacity", style.text_opacity.to_string());
                        s.insert("meta-opacity", style.meta_opacity.to_string());
                    }
                }
            }
        }
    }

    #[test]
    fn proximity_peaks_at_the_viewport_center() {
        let config = WowConfig::standard();
        let scroll = centered_on(2000.0);
        assert_eq!(config.proximity(scroll, card_at(2000.0)), 1.0);
        // 0.8 * 1000 = 800 px away -> 0.
        assert_eq!(config.proximity(scroll, card_at(2800.0)), 0.0);
        assert_eq!(config.proximity(scroll, card_at(1600.0)), 0.5);
        assert_eq!(config.proximity(scroll, card_at(9000.0)), 0.0);
    }

    #[test]
    fn nothing_qualifies_above_the_scroll_threshold() {
        let mut selector = WowSelector::new(WowConfig::standard());
        // Offset 50 is below the 100 px threshold even though the card is
        // centered.
        let scroll = ScrollState::new(50.0, VIEWPORT);
        let frame = selector.update(scroll, &[card_at(550.0)]);
        assert!(frame.is_empty());
        assert_eq!(selector.holder(), None);
    }

    #[test]
    fn style_follows_proximity() {
        let config = WowConfig::standard();

        let near = config.style(1.0);
        let image = near.image.unwrap();
        assert!(approx(image.scale, 3.5), "{}", image.scale);
        assert!(approx(image.opacity, 0.95), "{}", image.opacity);
        assert_eq!(near.text_opacity, 0.0);
        assert_eq!(near.meta_opacity, 0.0);
        assert_eq!(near.text_shift_px, 20.0);

        // The scale cap holds however close the card gets.
        assert!(config.style(1.0).image.unwrap().scale <= config.image_scale_max);

        let far = config.style(0.15);
        assert_eq!(far.image, None);
        assert!(approx(far.text_opacity, 0.7), "{}", far.text_opacity);

        let mid = config.style(0.4);
        let image = mid.image.unwrap();
        assert!(approx(image.scale, 1.625), "{}", image.scale);
        assert!(approx(image.opacity, 0.74), "{}", image.opacity);
    }

    #[test]
    fn promote_style_then_reset_when_out_of_range() {
        let mut selector = WowSelector::new(WowConfig::standard());
        let cards = [card_at(2000.0)];

        let frame = selector.update(centered_on(2000.0), &cards);
        assert_eq!(frame.commands.len(), 2);
        assert_eq!(frame.commands[0], WowCommand::Promote(0));
        assert!(matches!(
            frame.commands[1],
            WowCommand::Style { card: 0, .. }
        ));
        assert_eq!(frame.holder, Some(0));

        // Still the holder: only a restyle.
        let frame = selector.update(centered_on(2100.0), &cards);
        assert_eq!(frame.commands.len(), 1);
        assert!(matches!(
            frame.commands[0],
            WowCommand::Style { card: 0, .. }
        ));

        // Far away: fully reset.
        let frame = selector.update(centered_on(5000.0), &cards);
        assert_eq!(frame.commands, vec![WowCommand::Reset(0)]);
        assert_eq!(selector.holder(), None);

        // Not the holder and not qualifying: nothing to do.
        let frame = selector.update(centered_on(5000.0), &cards);
        assert!(frame.is_empty());
    }

    #[test]
    fn later_card_wins_and_the_other_is_fully_restored() {
        let mut selector = WowSelector::new(WowConfig::standard());
        let mut dom = StyleRecorder::with_cards(2);
        // Both cards sit within range of the viewport center.
        let cards = [card_at(1900.0), card_at(2100.0)];

        let frame = selector.update(centered_on(2000.0), &cards);
        dom.apply(&frame);

        assert_eq!(frame.holder, Some(1));
        assert_eq!(dom.elevated(), vec![1]);
        assert!(dom.styles[0].is_empty(), "card 0 kept {:?}", dom.styles[0]);
        assert_eq!(dom.scrolling, vec![false, true]);

        // The same holds on every following frame.
        for _ in 0..3 {
            let frame = selector.update(centered_on(2000.0), &cards);
            dom.apply(&frame);
            assert_eq!(dom.elevated(), vec![1]);
            assert!(dom.styles[0].is_empty());
        }
    }

    #[test]
    fn steady_holder_among_qualifying_cards_is_only_restyled() {
        let mut selector = WowSelector::new(WowConfig::standard());
        let cards = [card_at(1900.0), card_at(2100.0)];

        let frame = selector.update(centered_on(2000.0), &cards);
        assert_eq!(frame.commands[0], WowCommand::Promote(1));
        assert_eq!(frame.commands.len(), 2);

        // Unchanged geometry: neither card is reset or promoted again.
        let frame = selector.update(centered_on(2000.0), &cards);
        assert_eq!(frame.commands.len(), 1);
        assert!(matches!(
            frame.commands[0],
            WowCommand::Style { card: 1, .. }
        ));
        assert_eq!(frame.holder, Some(1));
    }

    #[test]
    fn switching_holders_resets_the_previous_one_first() {
        let mut selector = WowSelector::new(WowConfig::standard());
        let cards = [card_at(2000.0), card_at(4000.0)];

        let _ = selector.update(centered_on(2000.0), &cards);
        let frame = selector.update(centered_on(4000.0), &cards);
        assert_eq!(frame.commands[0], WowCommand::Reset(0));
        assert_eq!(frame.commands[1], WowCommand::Promote(1));
        assert_eq!(selector.holder(), Some(1));
    }

    #[test]
    fn vanished_holder_is_reset() {
        let mut selector = WowSelector::new(WowConfig::standard());
        let _ = selector.update(centered_on(2000.0), &[card_at(1000.0), card_at(2000.0)]);
        assert_eq!(selector.holder(), Some(1));

        let frame = selector.update(centered_on(2000.0), &[card_at(1000.0)]);
        assert_eq!(frame.commands, vec![WowCommand::Reset(1)]);
        assert_eq!(selector.holder(), None);
    }

    #[test]
    fn release_resets_the_holder() {
        let mut selector = WowSelector::new(WowConfig::standard());
        assert!(selector.release().is_empty());

        let _ = selector.update(centered_on(2000.0), &[card_at(2000.0)]);
        let frame = selector.release();
        assert_eq!(frame.commands, vec![WowCommand::Reset(0)]);
        assert_eq!(selector.holder(), None);
    }
}
