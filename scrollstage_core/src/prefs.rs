// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted page preferences.
//!
//! Two flags survive a reload: whether UI sounds are muted and which color
//! theme is active. They live in a string key-value store under fixed keys,
//! are read once at load and written on every toggle. There is no migration
//! or versioning; unknown values fall back to the defaults.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::convert::Infallible;

/// Storage key for the mute flag (`"true"` / `"false"`).
pub const MUTED_KEY: &str = "soundsMuted";

/// Storage key for the theme (`"dark"` / `"light"`).
pub const THEME_KEY: &str = "theme";

/// A string key-value store, such as browser local storage.
pub trait PreferenceStore {
    /// Error produced by a failed write.
    type Error: core::fmt::Debug;

    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-memory [`PreferenceStore`], for tests and hosts without storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// The default theme.
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

impl Theme {
    /// The stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored value; anything other than `"dark"` is light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the theme button: the theme a click switches to.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Light => "\u{1f319}",
            Self::Dark => "\u{2600}\u{fe0f}",
        }
    }
}

/// Glyph shown on the mute button.
#[must_use]
pub const fn mute_glyph(muted: bool) -> &'static str {
    if muted { "\u{1f507}" } else { "\u{1f50a}" }
}

/// The persisted preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    /// Whether UI sounds are muted.
    pub muted: bool,
    /// Active color theme.
    pub theme: Theme,
}

impl Preferences {
    /// Reads both preferences from `store`.
    ///
    /// Sounds are muted only if the stored value is exactly `"true"`.
    #[must_use]
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        Self {
            muted: store.get(MUTED_KEY).as_deref() == Some("true"),
            theme: Theme::from_stored(store.get(THEME_KEY).as_deref()),
        }
    }

    /// Flips the mute flag and persists it, returning the new value.
    ///
    /// The in-memory flag flips even if the write fails.
    pub fn toggle_muted<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
    ) -> Result<bool, S::Error> {
        self.muted = !self.muted;
        store.set(MUTED_KEY, if self.muted { "true" } else { "false" })?;
        Ok(self.muted)
    }

    /// Switches the theme and persists it, returning the new theme.
    ///
    /// The in-memory theme switches even if the write fails.
    pub fn toggle_theme<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
    ) -> Result<Theme, S::Error> {
        self.theme = self.theme.toggled();
        store.set(THEME_KEY, self.theme.as_str())?;
        Ok(self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_stored() {
        let prefs = Preferences::load(&MemoryStore::new());
        assert!(!prefs.muted);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn one_mute_toggle_persists_true_and_flips_the_glyph() {
        let mut store = MemoryStore::new();
        let mut prefs = Preferences::load(&store);
        assert_eq!(mute_glyph(prefs.muted), "\u{1f50a}");

        assert_eq!(prefs.toggle_muted(&mut store), Ok(true));
        assert_eq!(store.get(MUTED_KEY).as_deref(), Some("true"));
        assert_eq!(mute_glyph(prefs.muted), "\u{1f507}");

        assert_eq!(prefs.toggle_muted(&mut store), Ok(false));
        assert_eq!(store.get(MUTED_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn theme_toggle_round_trips_through_the_store() {
        let mut store = MemoryStore::new();
        let mut prefs = Preferences::load(&store);
        assert_eq!(prefs.toggle_theme(&mut store), Ok(Theme::Dark));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        let reloaded = Preferences::load(&store);
        assert_eq!(reloaded.theme, Theme::Dark);
        assert_eq!(reloaded.theme.glyph(), "\u{2600}\u{fe0f}");
        assert_eq!(reloaded, prefs);
    }

    #[test]
    fn unexpected_stored_values_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(MUTED_KEY, "yes").unwrap();
        store.set(THEME_KEY, "DARK").unwrap();
        let prefs = Preferences::load(&store);
        assert!(!prefs.muted);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn failed_writes_still_flip_in_memory() {
        struct ReadOnly;
        impl PreferenceStore for ReadOnly {
            type Error = &'static str;
            fn get(&self, _key: &str) -> Option<String> {
                None
            }
            fn set(&mut self, _key: &str, _value: &str) -> Result<(), Self::Error> {
                Err("quota exceeded")
            }
        }

        let mut prefs = Preferences::default();
        assert_eq!(prefs.toggle_muted(&mut ReadOnly), Err("quota exceeded"));
        assert!(prefs.muted);
        assert_eq!(prefs.toggle_theme(&mut ReadOnly), Err("quota exceeded"));
        assert_eq!(prefs.theme, Theme::Dark);
    }
}
