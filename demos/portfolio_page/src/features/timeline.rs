// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expandable timeline: `.timeline-clickable` items behave as an accordion.
//!
//! Wiring waits until `.timeline` first becomes visible.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use scrollstage_backend_web::{
    Presenter as _, TimelineEntry, TimelinePresenter, VisibilityTrigger,
};
use scrollstage_core::timeline::Timeline;
use scrollstage_core::trigger::TriggerOptions;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, KeyboardEvent};

use crate::controller::PageController;
use crate::dom;

struct Accordion {
    timeline: Timeline,
    presenter: TimelinePresenter,
}

pub(crate) fn install(
    document: &Document,
    controller: &Rc<RefCell<PageController>>,
    options: TriggerOptions,
) -> Result<Option<VisibilityTrigger>, JsValue> {
    let Ok(Some(container)) = document.query_selector(".timeline") else {
        return Ok(None);
    };
    let trigger = VisibilityTrigger::new(options)?;

    let document = document.clone();
    let controller = Rc::downgrade(controller);
    trigger.watch(&container, move |_| {
        if let Some(controller) = controller.upgrade() {
            controller.borrow_mut().trace_trigger("timeline", 0);
        }
        if let Err(err) = wire(&document) {
            log::warn!("timeline wiring failed: {err:?}");
        }
    });
    Ok(Some(trigger))
}

fn wire(document: &Document) -> Result<(), JsValue> {
    let entries = dom::query_all(document, ".timeline-clickable")
        .into_iter()
        .map(TimelineEntry::new)
        .collect::<Result<Vec<_>, JsValue>>()?;
    if entries.is_empty() {
        return Ok(());
    }
    let items = entries
        .iter()
        .map(|entry| entry.item().clone())
        .collect::<Vec<_>>();
    let accordion = Rc::new(RefCell::new(Accordion {
        timeline: Timeline::new(entries.len()),
        presenter: TimelinePresenter::new(entries),
    }));

    for (index, item) in items.into_iter().enumerate() {
        item.set_attribute("tabindex", "0")?;
        item.set_attribute("role", "button")?;
        item.set_attribute("aria-expanded", "false")?;

        let accordion = Rc::clone(&accordion);
        dom::listen(&item, "click", move |event| {
            event.stop_propagation();
            let mut accordion = accordion.borrow_mut();
            let toggle = accordion.timeline.toggle(index);
            accordion.presenter.apply(&toggle);
        })?;

        let target = item.clone();
        dom::listen(&item, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if key == "Enter" || key == " " {
                event.prevent_default();
                target.click();
            }
        })?;
    }
    Ok(())
}
