use std::cell::RefCell;
use std::collections::HashMap;

use crate::constants::{PREF_HIGH_CONTRAST, PREF_LANGUAGE};
use crate::content::Locale;

/// Key/value persistence for user preferences (browser local storage on
/// the web, memory elsewhere). Writes are best effort.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub high_contrast: bool,
    pub locale: Locale,
}

impl Preferences {
    /// Read once at startup. Unknown stored values fall back to defaults.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let high_contrast = store
            .get(PREF_HIGH_CONTRAST)
            .map(|v| v == "true")
            .unwrap_or(false);
        let locale = match store.get(PREF_LANGUAGE) {
            Some(tag) => Locale::parse(&tag).unwrap_or_else(|| {
                log::warn!("[prefs] ignoring stored language {:?}", tag);
                Locale::default()
            }),
            None => Locale::default(),
        };
        Self {
            high_contrast,
            locale,
        }
    }

    pub fn set_high_contrast(&mut self, store: &dyn PreferenceStore, on: bool) {
        self.high_contrast = on;
        store.set(PREF_HIGH_CONTRAST, if on { "true" } else { "false" });
    }

    pub fn toggle_high_contrast(&mut self, store: &dyn PreferenceStore) -> bool {
        let next = !self.high_contrast;
        self.set_high_contrast(store, next);
        next
    }

    pub fn set_locale(&mut self, store: &dyn PreferenceStore, locale: Locale) {
        self.locale = locale;
        store.set(PREF_LANGUAGE, locale.tag());
    }
}
