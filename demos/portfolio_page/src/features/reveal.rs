// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal on scroll: `.hidden` elements gain `visible` once they show up.

use alloc::rc::Rc;
use core::cell::RefCell;

use scrollstage_backend_web::VisibilityTrigger;
use scrollstage_core::trigger::TriggerOptions;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::controller::PageController;
use crate::dom;

pub(crate) fn install(
    document: &Document,
    controller: &Rc<RefCell<PageController>>,
    options: TriggerOptions,
) -> Result<Option<VisibilityTrigger>, JsValue> {
    let targets = dom::query_all(document, ".hidden");
    if targets.is_empty() {
        return Ok(None);
    }
    let trigger = VisibilityTrigger::new(options)?;
    for (key, target) in (0_u32..).zip(targets) {
        let controller = Rc::downgrade(controller);
        trigger.watch(&target, move |el| {
            let _ = el.class_list().add_1("visible");
            if let Some(controller) = controller.upgrade() {
                controller.borrow_mut().trace_trigger("reveal", key);
            }
        });
    }
    Ok(Some(trigger))
}
