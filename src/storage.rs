use site_core::prefs::PreferenceStore;
use web_sys as web;

/// `window.localStorage`, or nothing when the browser refuses access
/// (private mode, disabled storage). Preferences then last for the visit.
pub struct LocalStorage {
    storage: Option<web::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[prefs] localStorage unavailable; preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("[prefs] could not persist {}: {:?}", key, e);
            }
        }
    }
}
