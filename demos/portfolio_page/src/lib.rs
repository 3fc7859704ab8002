// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Portfolio page script driven by `scrollstage_backend_web`.
//!
//! Wires a single marketing page: scroll snapping that switches off past the
//! hero, reveal-on-scroll, the expandable timeline, the scrollytelling
//! section, the "wow" case-study cards, UI tones, and the persisted mute and
//! theme toggles. Every feature is optional; missing markup means the feature
//! is never installed.
//!
//! Scroll and resize events only request a frame from the
//! [`FrameScheduler`]; the frame itself samples the page once and updates
//! every installed feature.
//!
//! Build with: `wasm-pack build --target web demos/portfolio_page`
//!
//! Enable the `trace` feature to log frame, stage, wow, trigger and snap
//! events to the browser console.
//!
//! [`FrameScheduler`]: scrollstage_backend_web::FrameScheduler

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod controller;
mod dom;
mod features;

use alloc::rc::Rc;
use core::cell::RefCell;

use scrollstage_backend_web::{FrameScheduler, LocalStorage, sampler};
use scrollstage_core::config::PageConfig;
use scrollstage_core::prefs::MemoryStore;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use controller::PageController;
use features::{reveal, sounds, story, timeline, toggles, wow::WowFeature};

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(feature = "trace") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();

    let config = PageConfig::standard();
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let root: HtmlElement = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("no document element"))?
        .dyn_into()?;

    let controller = Rc::new(RefCell::new(PageController::new(root, &config)));

    let scheduler = {
        let controller = Rc::clone(&controller);
        let window = window.clone();
        FrameScheduler::new(move |gate| {
            let scroll = sampler::scroll_state(&window);
            controller.borrow_mut().update(scroll, gate);
        })
    };
    for event in ["scroll", "resize"] {
        let scheduler = scheduler.clone();
        dom::listen(&window, event, move |_| {
            scheduler.request();
        })?;
    }

    // The toggles listen before the click tones, so the mute button's own
    // click tone already sees the new mute state.
    let sound = match LocalStorage::open(&window) {
        Some(store) => toggles::install(&document, store)?,
        None => {
            log::warn!("localStorage unavailable, preferences will not persist");
            toggles::install(&document, MemoryStore::new())?
        }
    };
    sounds::install(&window, &document, &sound, config.hover_delay_ms)?;

    let triggers = [
        reveal::install(&document, &controller, config.reveal)?,
        timeline::install(&document, &controller, config.section)?,
        story::install(
            &document,
            &controller,
            &scheduler,
            config.section,
            config.parallax_range_px,
        )?,
    ];

    if let Some(wow) = WowFeature::find(&document, config.wow) {
        controller.borrow_mut().install_wow(wow);
    }
    scheduler.run_now();

    // Keep the observers and the frame loop alive; there is no teardown on
    // the web.
    core::mem::forget(triggers);
    core::mem::forget(scheduler);

    Ok(())
}
