//! Bilingual content records and their resolution to one display language.
//!
//! Records arrive in a raw shape where every translatable field is a
//! [`Localized`] pair, either from the built-in tables or from the remote
//! query API (whose projections emit `{ "pl": .., "en": .. }` objects).
//! [`Resolve`] turns a raw record into plain strings for the active
//! [`Locale`], falling back to the other language when a value is missing.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pl,
    En,
}

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Pl => "pl",
            Locale::En => "en",
        }
    }

    pub fn parse(tag: &str) -> Option<Locale> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "pl" | "pl-pl" => Some(Locale::Pl),
            "en" | "en-gb" | "en-us" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn other(self) -> Locale {
        match self {
            Locale::Pl => Locale::En,
            Locale::En => Locale::Pl,
        }
    }
}

/// A value authored in both languages, either of which may be missing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    #[serde(default)]
    pub pl: Option<T>,
    #[serde(default)]
    pub en: Option<T>,
}

impl<T> Default for Localized<T> {
    fn default() -> Self {
        Self { pl: None, en: None }
    }
}

impl<T> Localized<T> {
    pub fn new(pl: T, en: T) -> Self {
        Self {
            pl: Some(pl),
            en: Some(en),
        }
    }

    pub fn only(locale: Locale, value: T) -> Self {
        match locale {
            Locale::Pl => Self {
                pl: Some(value),
                en: None,
            },
            Locale::En => Self {
                pl: None,
                en: Some(value),
            },
        }
    }

    pub fn get(&self, locale: Locale) -> Option<&T> {
        match locale {
            Locale::Pl => self.pl.as_ref(),
            Locale::En => self.en.as_ref(),
        }
    }

    pub fn resolve(&self, locale: Locale, fallback: Locale) -> Option<&T> {
        self.get(locale).or_else(|| self.get(fallback))
    }
}

impl<S: AsRef<str>> Localized<S> {
    /// Text in `locale`, else the other language, else empty. Blank strings
    /// count as missing.
    pub fn text(&self, locale: Locale) -> String {
        let pick = |l: Locale| {
            self.get(l)
                .map(|s| s.as_ref().trim())
                .filter(|s| !s.is_empty())
        };
        pick(locale)
            .or_else(|| pick(locale.other()))
            .unwrap_or_default()
            .to_string()
    }
}

/// Resolution of a raw bilingual record to one language.
pub trait Resolve {
    type Resolved;

    fn resolve(&self, locale: Locale) -> Self::Resolved;
}

/// Normalizes an optional record set; a missing set yields no records.
pub fn adapt<R: Resolve>(records: Option<&[R]>, locale: Locale) -> Vec<R::Resolved> {
    records
        .unwrap_or_default()
        .iter()
        .map(|r| r.resolve(locale))
        .collect()
}

/// Decodes a query result into raw records. `null` means "no records",
/// and a lone object is treated as a one-record set.
pub fn decode_records<R: DeserializeOwned>(
    value: Option<serde_json::Value>,
) -> Result<Vec<R>, ContentError> {
    match value {
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter(|item| !item.is_null())
            .map(|item| serde_json::from_value(item).map_err(ContentError::from))
            .collect(),
        Some(object @ serde_json::Value::Object(_)) => Ok(vec![serde_json::from_value(object)?]),
        Some(other) => Err(ContentError::Decode(format!(
            "expected records, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

type Text = Localized<String>;

// ---------------- Events ----------------

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawEvent {
    pub id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time: Option<String>,
    pub title: Text,
    pub venue: Text,
    pub description: Text,
    pub image: Option<String>,
    pub ticket_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub date: String,
    pub time: Option<String>,
    pub title: String,
    pub venue: String,
    pub description: String,
    pub image: Option<String>,
    pub ticket_url: Option<String>,
}

impl Resolve for RawEvent {
    type Resolved = Event;

    fn resolve(&self, locale: Locale) -> Event {
        Event {
            id: self.id.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            title: self.title.text(locale),
            venue: self.venue.text(locale),
            description: self.description.text(locale),
            image: self.image.clone(),
            ticket_url: self.ticket_url.clone(),
        }
    }
}

/// Splits events into the calendar (today onwards, soonest first) and the
/// archive (past, most recent first). ISO dates compare lexicographically.
pub fn split_events(mut events: Vec<Event>, today: &str) -> (Vec<Event>, Vec<Event>) {
    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
    let (upcoming, mut archived): (Vec<Event>, Vec<Event>) = events
        .into_iter()
        .partition(|e| e.date.as_str() >= today);
    archived.reverse();
    (upcoming, archived)
}

// ---------------- Biography ----------------

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawBioProfile {
    pub name: String,
    pub role: Text,
    pub bio: Text,
    pub image: Option<String>,
    pub order: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BioProfile {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: Option<String>,
}

impl Resolve for RawBioProfile {
    type Resolved = BioProfile;

    fn resolve(&self, locale: Locale) -> BioProfile {
        BioProfile {
            name: self.name.clone(),
            role: self.role.text(locale),
            bio: self.bio.text(locale),
            image: self.image.clone(),
        }
    }
}

// ---------------- Media ----------------

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawPhoto {
    pub url: String,
    pub caption: Text,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawPhotoAlbum {
    pub id: String,
    pub title: Text,
    pub cover: Option<String>,
    pub photos: Vec<RawPhoto>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Photo {
    pub url: String,
    pub caption: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoAlbum {
    pub id: String,
    pub title: String,
    pub cover: Option<String>,
    pub photos: Vec<Photo>,
}

impl Resolve for RawPhotoAlbum {
    type Resolved = PhotoAlbum;

    fn resolve(&self, locale: Locale) -> PhotoAlbum {
        PhotoAlbum {
            id: self.id.clone(),
            title: self.title.text(locale),
            // First photo doubles as the cover when none is set
            cover: self
                .cover
                .clone()
                .or_else(|| self.photos.first().map(|p| p.url.clone())),
            photos: self
                .photos
                .iter()
                .map(|p| Photo {
                    url: p.url.clone(),
                    caption: p.caption.text(locale),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawVideo {
    pub title: Text,
    pub youtube_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Video {
    pub title: String,
    pub youtube_id: String,
}

impl Video {
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube-nocookie.com/embed/{}", self.youtube_id)
    }
}

impl Resolve for RawVideo {
    type Resolved = Video;

    fn resolve(&self, locale: Locale) -> Video {
        Video {
            title: self.title.text(locale),
            youtube_id: self.youtube_id.clone(),
        }
    }
}

// ---------------- Homepage ----------------

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawHomeSlideText {
    pub word: Text,
    pub tagline: Text,
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeSlideText {
    pub word: String,
    pub tagline: String,
    pub image: Option<String>,
}

impl Resolve for RawHomeSlideText {
    type Resolved = HomeSlideText;

    fn resolve(&self, locale: Locale) -> HomeSlideText {
        HomeSlideText {
            word: self.word.text(locale),
            tagline: self.tagline.text(locale),
            image: self.image.clone(),
        }
    }
}

// ---------------- Repertoire ----------------

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawWork {
    pub title: Text,
    pub year: Option<u16>,
    pub instrumentation: Text,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawComposer {
    pub name: String,
    pub country: Text,
    pub works: Vec<RawWork>,
    pub special_project: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Work {
    pub title: String,
    pub year: Option<u16>,
    pub instrumentation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composer {
    pub name: String,
    pub country: String,
    pub works: Vec<Work>,
    pub special_project: bool,
}

impl Resolve for RawComposer {
    type Resolved = Composer;

    fn resolve(&self, locale: Locale) -> Composer {
        Composer {
            name: self.name.clone(),
            country: self.country.text(locale),
            works: self
                .works
                .iter()
                .map(|w| Work {
                    title: w.title.text(locale),
                    year: w.year,
                    instrumentation: w.instrumentation.text(locale),
                })
                .collect(),
            special_project: self.special_project,
        }
    }
}

/// (repertoire, special projects), each sorted by composer surname.
pub fn partition_repertoire(composers: Vec<Composer>) -> (Vec<Composer>, Vec<Composer>) {
    let (mut special, mut standard): (Vec<Composer>, Vec<Composer>) =
        composers.into_iter().partition(|c| c.special_project);
    let by_surname = |a: &Composer, b: &Composer| surname(&a.name).cmp(surname(&b.name));
    standard.sort_by(by_surname);
    special.sort_by(by_surname);
    (standard, special)
}

fn surname(name: &str) -> &str {
    name.split_whitespace().last().unwrap_or(name)
}

// ---------------- Foundation ----------------

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawFoundationInfo {
    pub name: String,
    pub address: String,
    pub krs: String,
    pub nip: String,
    pub account: String,
    pub email: String,
    pub description: Text,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoundationInfo {
    pub name: String,
    pub address: String,
    pub krs: String,
    pub nip: String,
    pub account: String,
    pub email: String,
    pub description: String,
}

impl Resolve for RawFoundationInfo {
    type Resolved = FoundationInfo;

    fn resolve(&self, locale: Locale) -> FoundationInfo {
        FoundationInfo {
            name: self.name.clone(),
            address: self.address.clone(),
            krs: self.krs.clone(),
            nip: self.nip.clone(),
            account: self.account.clone(),
            email: self.email.clone(),
            description: self.description.text(locale),
        }
    }
}

/// Outcome of one content load as seen by a page.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(ContentError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&ContentError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Empty unless loaded.
    pub fn items(&self) -> &[T] {
        match self {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }
}
