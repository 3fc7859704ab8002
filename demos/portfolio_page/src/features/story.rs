// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrollytelling: `#story` and its `.story-stage` children.

use alloc::rc::Rc;
use core::cell::RefCell;

use scrollstage_backend_web::{
    FrameScheduler, Presenter as _, StoryPresenter, VisibilityTrigger, sampler,
};
use scrollstage_core::stage::StageMapper;
use scrollstage_core::trace::{StageEvent, Tracer};
use scrollstage_core::trigger::TriggerOptions;
use scrollstage_core::viewport::ScrollState;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use crate::controller::PageController;
use crate::dom;

pub(crate) struct StoryFeature {
    mapper: StageMapper,
    presenter: StoryPresenter,
}

impl StoryFeature {
    /// Resolves the stages under `section`. `None` when it has none.
    fn new(section: HtmlElement, parallax_range_px: f64) -> Option<Self> {
        let presenter = StoryPresenter::new(section).ok()?;
        let mapper = StageMapper::new(presenter.stage_count())?;
        Some(Self {
            mapper: mapper.with_parallax_range(parallax_range_px),
            presenter,
        })
    }

    fn section(&self) -> &HtmlElement {
        self.presenter.section()
    }

    pub(crate) fn update(
        &mut self,
        scroll: ScrollState,
        frame_index: u64,
        tracer: &mut Tracer<'_>,
    ) {
        // Geometry is re-read every frame so resizes need no bookkeeping.
        let geometry = sampler::section_geometry(self.section());
        let frame = self.mapper.frame(scroll, geometry);
        tracer.stage(&StageEvent::new(frame_index, &frame));
        self.presenter.apply(&frame);
    }
}

/// Watches `#story` and, the first time it becomes visible, resolves its
/// stages, hands the section to the controller and renders it once.
///
/// Nothing under the section is queried before then.
pub(crate) fn install(
    document: &Document,
    controller: &Rc<RefCell<PageController>>,
    scheduler: &FrameScheduler,
    options: TriggerOptions,
    parallax_range_px: f64,
) -> Result<Option<VisibilityTrigger>, JsValue> {
    let Some(section) = dom::by_id(document, "story") else {
        return Ok(None);
    };
    let trigger = VisibilityTrigger::new(options)?;

    let target = section.clone();
    let controller = Rc::downgrade(controller);
    let scheduler = scheduler.clone();
    trigger.watch(&target, move |_| {
        let Some(controller) = controller.upgrade() else {
            return;
        };
        let Some(story) = StoryFeature::new(section, parallax_range_px) else {
            log::debug!("#story has no stages");
            return;
        };
        {
            let mut controller = controller.borrow_mut();
            controller.install_story(story);
            controller.trace_trigger("story", 0);
        }
        scheduler.run_now();
    });
    Ok(Some(trigger))
}
