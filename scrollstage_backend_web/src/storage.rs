// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `localStorage`-backed preference store.

use alloc::string::String;

use scrollstage_core::prefs::PreferenceStore;
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

/// [`PreferenceStore`] over the window's `localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Opens the window's local storage.
    ///
    /// Returns `None` if storage is unavailable (disabled by the user or a
    /// sandboxed frame).
    #[must_use]
    pub fn open(window: &Window) -> Option<Self> {
        let storage = window.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    type Error = JsValue;

    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.storage.set_item(key, value)
    }
}
