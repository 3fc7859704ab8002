// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `#toggle-sound` and `#toggle-theme`.

use alloc::rc::Rc;
use core::cell::RefCell;

use scrollstage_backend_web::SoundSystem;
use scrollstage_core::prefs::{PreferenceStore, Preferences, Theme, mute_glyph};
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use crate::dom;

const DARK_MODE_CLASS: &str = "dark-mode";

struct Settings<S> {
    prefs: Preferences,
    store: S,
}

/// Loads the preferences from `store`, applies them and wires both buttons.
///
/// Returns the sound system, muted according to the stored preference.
pub(crate) fn install<S>(document: &Document, store: S) -> Result<SoundSystem, JsValue>
where
    S: PreferenceStore + 'static,
{
    let prefs = Preferences::load(&store);
    let sound = SoundSystem::new(prefs.muted);
    let settings = Rc::new(RefCell::new(Settings { prefs, store }));

    if let Some(button) = dom::by_id(document, "toggle-sound") {
        show_muted(&button, prefs.muted);
        let settings = Rc::clone(&settings);
        let sound = sound.clone();
        let target = button.clone();
        dom::listen(&button, "click", move |_| {
            let mut settings = settings.borrow_mut();
            let Settings { prefs, store } = &mut *settings;
            if let Err(err) = prefs.toggle_muted(store) {
                log::warn!("could not persist the sound preference: {err:?}");
            }
            sound.set_muted(prefs.muted);
            show_muted(&target, prefs.muted);
        })?;
    }

    if let Some(body) = document.body() {
        let theme_button = dom::by_id(document, "toggle-theme");
        show_theme(&body, theme_button.as_ref(), prefs.theme);
        if let Some(button) = theme_button {
            let target = button.clone();
            dom::listen(&button, "click", move |_| {
                let mut settings = settings.borrow_mut();
                let Settings { prefs, store } = &mut *settings;
                if let Err(err) = prefs.toggle_theme(store) {
                    log::warn!("could not persist the theme preference: {err:?}");
                }
                show_theme(&body, Some(&target), prefs.theme);
            })?;
        }
    }

    Ok(sound)
}

fn show_muted(button: &HtmlElement, muted: bool) {
    button.set_text_content(Some(mute_glyph(muted)));
    let _ = button.class_list().toggle_with_force("muted", muted);
}

fn show_theme(body: &HtmlElement, button: Option<&HtmlElement>, theme: Theme) {
    let _ = body
        .class_list()
        .toggle_with_force(DARK_MODE_CLASS, theme == Theme::Dark);
    if let Some(button) = button {
        button.set_text_content(Some(theme.glyph()));
    }
}
