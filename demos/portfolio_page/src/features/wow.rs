// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wow cards: `.case-study-card.wow-effect`.

use alloc::vec::Vec;

use scrollstage_backend_web::{Presenter as _, WowCard, WowPresenter, sampler};
use scrollstage_core::trace::{Tracer, WowEvent, WowTransition};
use scrollstage_core::viewport::ScrollState;
use scrollstage_core::wow::{WowCommand, WowConfig, WowSelector};
use web_sys::Document;

use crate::dom;

pub(crate) struct WowFeature {
    selector: WowSelector,
    presenter: WowPresenter,
}

impl WowFeature {
    /// Resolves the cards. `None` when the page has none.
    pub(crate) fn find(document: &Document, config: WowConfig) -> Option<Self> {
        let cards = dom::query_all(document, ".case-study-card.wow-effect")
            .into_iter()
            .filter_map(|card| WowCard::new(card.into()).ok())
            .collect::<Vec<_>>();
        if cards.is_empty() {
            return None;
        }
        Some(Self {
            selector: WowSelector::new(config),
            presenter: WowPresenter::new(cards),
        })
    }

    pub(crate) fn update(
        &mut self,
        scroll: ScrollState,
        frame_index: u64,
        tracer: &mut Tracer<'_>,
    ) {
        let bounds = self
            .presenter
            .cards()
            .iter()
            .map(|card| sampler::document_rect(card.element(), scroll.offset_y))
            .collect::<Vec<_>>();
        let frame = self.selector.update(scroll, &bounds);

        for command in &frame.commands {
            let (card, transition) = match *command {
                WowCommand::Promote(card) => (card, WowTransition::Promoted),
                WowCommand::Reset(card) => (card, WowTransition::Reset),
                WowCommand::Style { .. } => continue,
            };
            tracer.wow(&WowEvent {
                frame_index,
                card,
                transition,
            });
        }
        self.presenter.apply(&frame);
    }
}
