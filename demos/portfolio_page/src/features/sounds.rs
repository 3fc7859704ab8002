// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! UI tones: clicks, hover shutters and focus taps.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;

use scrollstage_backend_web::SoundSystem;
use scrollstage_core::tone::Tone;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use crate::dom;

const CLICKABLE: &str =
    "button, .btn-case, .btn-contact, .btn-nav-cv, .timeline-clickable, .tag, a[href^=\"#\"]";
const HOVER_IMAGES: &str = "img.case-logo, img[loading=\"lazy\"]";
const FORM_FIELDS: &str = "input, select, textarea";

pub(crate) fn install(
    window: &Window,
    document: &Document,
    sound: &SoundSystem,
    hover_delay_ms: i32,
) -> Result<(), JsValue> {
    // Browsers only allow an audio context to start from a user gesture.
    for event in ["click", "touchstart", "keydown"] {
        let sound = sound.clone();
        dom::listen(document, event, move |_| sound.unlock())?;
    }

    for element in dom::query_all(document, CLICKABLE) {
        let sound = sound.clone();
        dom::listen(&element, "click", move |_| sound.play(Tone::Click))?;
    }

    for image in dom::query_all(document, HOVER_IMAGES) {
        hover_shutter(window, &image, sound, hover_delay_ms)?;
    }

    for field in dom::query_all(document, FORM_FIELDS) {
        let sound = sound.clone();
        dom::listen(&field, "focus", move |_| sound.play(Tone::Tap))?;
    }
    Ok(())
}

/// Plays the shutter tone once the pointer has rested on `image` for
/// `delay_ms`. Leaving earlier cancels it.
fn hover_shutter(
    window: &Window,
    image: &HtmlElement,
    sound: &SoundSystem,
    delay_ms: i32,
) -> Result<(), JsValue> {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let fire = {
        let sound = sound.clone();
        let pending = Rc::clone(&pending);
        Closure::wrap(Box::new(move || {
            pending.set(None);
            sound.play(Tone::Shutter);
        }) as Box<dyn FnMut()>)
    };

    {
        let window = window.clone();
        let pending = Rc::clone(&pending);
        let callback: JsValue = fire.as_ref().clone();
        dom::listen(image, "mouseenter", move |_| {
            if let Some(handle) = pending.take() {
                window.clear_timeout_with_handle(handle);
            }
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay_ms,
            ) {
                Ok(handle) => pending.set(Some(handle)),
                Err(err) => log::debug!("[sound] hover timer failed: {err:?}"),
            }
        })?;
    }

    {
        let window = window.clone();
        dom::listen(image, "mouseleave", move |_| {
            if let Some(handle) = pending.take() {
                window.clear_timeout_with_handle(handle);
            }
        })?;
    }

    // Reused by every hover of this image for the life of the page.
    fire.forget();
    Ok(())
}
