//! Content sources and the generation-guarded loader pages use.
//!
//! A page loads one collection through a [`ContentSource`]: the remote query
//! API (implemented by the web crate over `fetch`), the built-in static
//! tables, or generated synthetic data. [`ContentLoader`] tags every load
//! with a generation number so a response that arrives after the page has
//! moved on (language switched, another load started) is discarded instead
//! of overwriting newer state.

use std::marker::PhantomData;

use crate::config::{CmsConfig, SiteConfig};
use crate::constants::{SYNTHETIC_RECORD_COUNT, SYNTHETIC_SEED};
use crate::content::*;
use crate::error::ContentError;
use crate::{static_content, synthetic};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Events,
    Bio,
    Albums,
    Videos,
    HomeSlides,
    Composers,
    Foundation,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Events,
        Collection::Bio,
        Collection::Albums,
        Collection::Videos,
        Collection::HomeSlides,
        Collection::Composers,
        Collection::Foundation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::Bio => "bio",
            Collection::Albums => "albums",
            Collection::Videos => "videos",
            Collection::HomeSlides => "home-slides",
            Collection::Composers => "composers",
            Collection::Foundation => "foundation",
        }
    }

    pub fn parse(name: &str) -> Option<Collection> {
        Collection::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Query expression; projections emit `{ "pl", "en" }` pairs.
    pub fn expression(self) -> &'static str {
        match self {
            Collection::Events => concat!(
                r#"*[_type == "event" && (!defined($id) || _id == $id)] | order(date asc) {"#,
                r#""id": _id, date, time, ticketUrl, "image": image.asset->url, "#,
                r#""title": {"pl": titlePl, "en": titleEn}, "#,
                r#""venue": {"pl": venuePl, "en": venueEn}, "#,
                r#""description": {"pl": descriptionPl, "en": descriptionEn}}"#
            ),
            Collection::Bio => concat!(
                r#"*[_type == "bioProfile"] | order(order asc) {"#,
                r#"name, order, "image": image.asset->url, "#,
                r#""role": {"pl": rolePl, "en": roleEn}, "#,
                r#""bio": {"pl": bioPl, "en": bioEn}}"#
            ),
            Collection::Albums => concat!(
                r#"*[_type == "photoAlbum"] | order(date desc) {"#,
                r#""id": _id, "cover": cover.asset->url, "#,
                r#""title": {"pl": titlePl, "en": titleEn}, "#,
                r#""photos": photos[]{"url": asset->url, "caption": {"pl": captionPl, "en": captionEn}}}"#
            ),
            Collection::Videos => concat!(
                r#"*[_type == "video"] | order(date desc) {"#,
                r#"youtubeId, "title": {"pl": titlePl, "en": titleEn}}"#
            ),
            Collection::HomeSlides => concat!(
                r#"*[_type == "homeSlide"] | order(order asc) {"#,
                r#""image": image.asset->url, "#,
                r#""word": {"pl": wordPl, "en": wordEn}, "#,
                r#""tagline": {"pl": taglinePl, "en": taglineEn}}"#
            ),
            Collection::Composers => concat!(
                r#"*[_type == "composer"] | order(name asc) {"#,
                r#"name, specialProject, "country": {"pl": countryPl, "en": countryEn}, "#,
                r#""works": works[]{year, "title": {"pl": titlePl, "en": titleEn}, "#,
                r#""instrumentation": {"pl": instrumentationPl, "en": instrumentationEn}}}"#
            ),
            Collection::Foundation => concat!(
                r#"*[_type == "foundation"][0] {"#,
                r#"name, address, krs, nip, account, email, "#,
                r#""description": {"pl": descriptionPl, "en": descriptionEn}}"#
            ),
        }
    }
}

/// A query expression plus its named parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub collection: Collection,
    pub params: Vec<(String, String)>,
}

impl Query {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn expression(&self) -> &'static str {
        self.collection.expression()
    }

    /// Full GET URL against the configured query endpoint. Parameters are
    /// passed JSON-encoded as `$name=value`.
    pub fn url(&self, cms: &CmsConfig) -> String {
        let mut url = format!(
            "{}?query={}",
            cms.query_endpoint(),
            urlencoding::encode(self.expression())
        );
        let mut params = self.params.clone();
        // The events expression always references $id
        if self.collection == Collection::Events && self.param("id").is_none() {
            params.push(("id".to_string(), String::new()));
        }
        for (name, value) in &params {
            let json = if value.is_empty() {
                "null".to_string()
            } else {
                serde_json::Value::String(value.clone()).to_string()
            };
            url.push_str(&format!("&${}={}", name, urlencoding::encode(&json)));
        }
        url
    }
}

/// Remote responses wrap the payload as `{ "result": ... }`.
pub fn unwrap_envelope(value: serde_json::Value) -> Option<serde_json::Value> {
    match value {
        serde_json::Value::Object(mut map) if map.contains_key("result") => map.remove("result"),
        serde_json::Value::Null => None,
        other => Some(other),
    }
}

/// Anything that can answer a [`Query`] with JSON. `Ok(None)` means the
/// source had nothing for it.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    async fn fetch(&self, query: &Query) -> Result<Option<serde_json::Value>, ContentError>;
}

/// Built-in tables compiled into the site.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticSource;

impl ContentSource for StaticSource {
    async fn fetch(&self, query: &Query) -> Result<Option<serde_json::Value>, ContentError> {
        let table = static_content::table(query.collection);
        Ok(Some(filter_by_id(table, query.param("id"))))
    }
}

/// Deterministic generated data for volume testing.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticSource {
    pub count: usize,
    pub seed: u64,
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self {
            count: SYNTHETIC_RECORD_COUNT,
            seed: SYNTHETIC_SEED,
        }
    }
}

impl ContentSource for SyntheticSource {
    async fn fetch(&self, query: &Query) -> Result<Option<serde_json::Value>, ContentError> {
        let data = synthetic::generate(query.collection, self.count, self.seed);
        Ok(Some(filter_by_id(data, query.param("id"))))
    }
}

/// Source used when nothing is configured; every fetch fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableSource;

impl ContentSource for UnavailableSource {
    async fn fetch(&self, _query: &Query) -> Result<Option<serde_json::Value>, ContentError> {
        Err(ContentError::Unavailable)
    }
}

fn filter_by_id(value: serde_json::Value, id: Option<&str>) -> serde_json::Value {
    match (value, id) {
        (serde_json::Value::Array(items), Some(id)) if !id.is_empty() => serde_json::Value::Array(
            items
                .into_iter()
                .filter(|item| item.get("id").and_then(|v| v.as_str()) == Some(id))
                .collect(),
        ),
        (value, _) => value,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Remote,
    Static,
    Synthetic,
}

impl SourceKind {
    /// Synthetic data wins over the CMS; the CMS needs a project id.
    pub fn for_config(config: &SiteConfig) -> SourceKind {
        if config.use_synthetic_data {
            SourceKind::Synthetic
        } else if config.cms_enabled() {
            SourceKind::Remote
        } else {
            if config.use_cms {
                log::warn!("[content] CMS enabled without a project id; using static content");
            }
            SourceKind::Static
        }
    }
}

/// A raw record type bound to the collection it is loaded from.
pub trait Record: serde::de::DeserializeOwned + Resolve {
    const COLLECTION: Collection;
}

impl Record for RawEvent {
    const COLLECTION: Collection = Collection::Events;
}
impl Record for RawBioProfile {
    const COLLECTION: Collection = Collection::Bio;
}
impl Record for RawPhotoAlbum {
    const COLLECTION: Collection = Collection::Albums;
}
impl Record for RawVideo {
    const COLLECTION: Collection = Collection::Videos;
}
impl Record for RawHomeSlideText {
    const COLLECTION: Collection = Collection::HomeSlides;
}
impl Record for RawComposer {
    const COLLECTION: Collection = Collection::Composers;
}
impl Record for RawFoundationInfo {
    const COLLECTION: Collection = Collection::Foundation;
}

/// Identifies one dispatched load and the inputs it was started with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub locale: Locale,
}

pub struct ContentLoader<R: Record> {
    generation: u64,
    state: LoadState<R::Resolved>,
    _record: PhantomData<R>,
}

impl<R: Record> Default for ContentLoader<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> ContentLoader<R> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: LoadState::Loading,
            _record: PhantomData,
        }
    }

    pub fn state(&self) -> &LoadState<R::Resolved> {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a load; any ticket issued earlier becomes stale.
    pub fn begin(&mut self, locale: Locale) -> FetchTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        FetchTicket {
            generation: self.generation,
            locale,
        }
    }

    /// Applies a finished load if its ticket is still current.
    pub fn finish(
        &mut self,
        ticket: FetchTicket,
        result: Result<Option<serde_json::Value>, ContentError>,
    ) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "[content] dropping stale {} response (gen {} < {})",
                R::COLLECTION.name(),
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.state = match result.and_then(decode_records::<R>) {
            Ok(raw) => {
                log::info!(
                    "[content] {} loaded: {} records ({})",
                    R::COLLECTION.name(),
                    raw.len(),
                    ticket.locale.tag()
                );
                LoadState::Loaded(adapt(Some(raw.as_slice()), ticket.locale))
            }
            Err(err) => {
                log::error!("[content] {} failed: {}", R::COLLECTION.name(), err);
                LoadState::Failed(err)
            }
        };
        true
    }

    /// Begin, fetch and finish in one go.
    pub async fn load<S: ContentSource>(
        &mut self,
        source: &S,
        query: &Query,
        locale: Locale,
    ) -> &LoadState<R::Resolved> {
        let ticket = self.begin(locale);
        let result = source.fetch(query).await;
        self.finish(ticket, result);
        &self.state
    }
}
