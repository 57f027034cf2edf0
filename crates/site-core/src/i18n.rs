use std::borrow::Cow;

use fnv::FnvHashMap;

use crate::content::{Locale, Localized};

/// UI string table. Lookups never fail: a missing key renders as itself.
#[derive(Clone, Debug)]
pub struct Translations {
    entries: FnvHashMap<&'static str, Localized<&'static str>>,
}

impl Default for Translations {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Translations {
    pub fn empty() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: &'static str, value: Localized<&'static str>) {
        self.entries.insert(key, value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get<'a>(&'a self, key: &'a str, locale: Locale) -> Cow<'a, str> {
        let found = self
            .entries
            .get(key)
            .and_then(|entry| entry.resolve(locale, locale.other()));
        match found {
            Some(text) => Cow::Borrowed(*text),
            None => {
                log::warn!("[i18n] missing translation for {:?} ({})", key, locale.tag());
                Cow::Borrowed(key)
            }
        }
    }

    pub fn builtin() -> Self {
        let mut t = Self::empty();
        for (key, pl, en) in BUILTIN {
            t.insert(key, Localized::new(pl, en));
        }
        t
    }
}

const BUILTIN: [(&str, &str, &str); 28] = [
    ("nav.home", "Start", "Home"),
    ("nav.bio", "Biografia", "Biography"),
    ("nav.calendar", "Kalendarz", "Calendar"),
    ("nav.archive", "Archiwum", "Archive"),
    ("nav.media", "Media", "Media"),
    ("nav.videos", "Wideo", "Videos"),
    ("nav.gallery", "Galeria", "Gallery"),
    ("nav.repertoire", "Repertuar", "Repertoire"),
    ("nav.special_projects", "Projekty specjalne", "Special projects"),
    ("nav.foundation", "Fundacja", "Foundation"),
    ("nav.contact", "Kontakt", "Contact"),
    ("ui.loading", "Ładowanie…", "Loading…"),
    ("ui.load_failed", "Nie udało się załadować treści.", "Failed to load content."),
    ("ui.empty", "Brak pozycji.", "Nothing here yet."),
    ("ui.tickets", "Bilety", "Tickets"),
    ("ui.contrast", "Wysoki kontrast", "High contrast"),
    ("ui.language", "English", "Polski"),
    ("ui.not_found", "Nie znaleziono strony.", "Page not found."),
    ("home.word.sound", "dźwięk", "sound"),
    ("home.word.space", "przestrzeń", "space"),
    ("home.word.time", "czas", "time"),
    ("home.word.now", "teraz", "now"),
    ("home.tagline.sound", "słuchamy uważnie", "we listen closely"),
    ("home.tagline.space", "gramy miejsce", "we play the room"),
    ("home.tagline.time", "rozciągamy chwilę", "we stretch the moment"),
    ("home.tagline.now", "muzyka powstaje dziś", "music made today"),
    ("foundation.krs", "KRS", "KRS"),
    ("foundation.account", "Numer konta", "Account number"),
];
