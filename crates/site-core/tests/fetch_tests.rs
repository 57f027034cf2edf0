// Host-side tests for content sources and the generation-guarded loader.

use pollster::block_on;
use serde_json::json;
use site_core::config::CmsConfig;
use site_core::content::{RawBioProfile, RawEvent, RawFoundationInfo, RawHomeSlideText};
use site_core::fetch::{unwrap_envelope, StaticSource, SyntheticSource, UnavailableSource};
use site_core::{
    Collection, ContentError, ContentLoader, ContentSource, LoadState, Locale, Query, SiteConfig,
    SourceKind,
};

struct RejectingSource;

impl ContentSource for RejectingSource {
    async fn fetch(&self, _query: &Query) -> Result<Option<serde_json::Value>, ContentError> {
        Err(ContentError::Network("connection reset".to_string()))
    }
}

struct NullSource;

impl ContentSource for NullSource {
    async fn fetch(&self, _query: &Query) -> Result<Option<serde_json::Value>, ContentError> {
        Ok(None)
    }
}

#[test]
fn rejected_fetch_reports_error_and_no_events() {
    let mut loader = ContentLoader::<RawEvent>::new();
    let state = block_on(loader.load(&RejectingSource, &Query::new(Collection::Events), Locale::Pl));
    assert!(!state.is_loading());
    assert_eq!(
        state.error(),
        Some(&ContentError::Network("connection reset".to_string()))
    );
    assert!(state.items().is_empty());
}

#[test]
fn null_result_is_an_empty_success() {
    let mut loader = ContentLoader::<RawEvent>::new();
    let state = block_on(loader.load(&NullSource, &Query::new(Collection::Events), Locale::En));
    assert_eq!(state, &LoadState::Loaded(Vec::new()));
}

#[test]
fn unavailable_source_fails_cleanly() {
    let mut loader = ContentLoader::<RawBioProfile>::new();
    let state = block_on(loader.load(&UnavailableSource, &Query::new(Collection::Bio), Locale::Pl));
    assert_eq!(state.error(), Some(&ContentError::Unavailable));
}

#[test]
fn stale_response_is_dropped() {
    let mut loader = ContentLoader::<RawHomeSlideText>::new();
    let first = loader.begin(Locale::Pl);
    // Language switched while the first fetch was in flight
    let second = loader.begin(Locale::En);

    let payload = json!([{ "word": { "pl": "czas", "en": "time" } }]);
    assert!(!loader.finish(first, Ok(Some(payload.clone()))));
    assert!(loader.state().is_loading());

    assert!(loader.finish(second, Ok(Some(payload))));
    assert_eq!(loader.state().items()[0].word, "time");
    assert_eq!(loader.generation(), 2);
}

#[test]
fn static_tables_decode_for_every_collection() {
    for collection in Collection::ALL {
        let value = block_on(StaticSource.fetch(&Query::new(collection))).unwrap();
        assert!(value.is_some(), "{} has no static table", collection.name());
    }
    let mut loader = ContentLoader::<RawEvent>::new();
    let state = block_on(loader.load(&StaticSource, &Query::new(Collection::Events), Locale::En));
    assert!(state.items().len() >= 3);
    assert!(state.items().iter().all(|e| !e.title.is_empty()));

    let mut foundation = ContentLoader::<RawFoundationInfo>::new();
    let state = block_on(foundation.load(&StaticSource, &Query::new(Collection::Foundation), Locale::Pl));
    assert_eq!(state.items().len(), 1);
}

#[test]
fn single_event_query_filters_by_id() {
    let query = Query::new(Collection::Events).with_param("id", "ev-2025-nospr");
    let mut loader = ContentLoader::<RawEvent>::new();
    let state = block_on(loader.load(&StaticSource, &query, Locale::En));
    assert_eq!(state.items().len(), 1);
    // No English description in the table: falls back to Polish
    assert!(state.items()[0].description.starts_with("Muzyka"));
}

#[test]
fn synthetic_data_is_deterministic_and_large() {
    let source = SyntheticSource {
        count: 250,
        seed: 7,
    };
    let a = block_on(source.fetch(&Query::new(Collection::Events))).unwrap();
    let b = block_on(source.fetch(&Query::new(Collection::Events))).unwrap();
    assert_eq!(a, b);

    let mut loader = ContentLoader::<RawEvent>::new();
    let state = block_on(loader.load(&source, &Query::new(Collection::Events), Locale::En));
    assert_eq!(state.items().len(), 250);
    assert!(state.items().iter().all(|e| !e.title.is_empty()));
}

#[test]
fn query_url_encodes_expression_and_params() {
    let cms = CmsConfig {
        project_id: "abc123".to_string(),
        ..CmsConfig::default()
    };
    let url = Query::new(Collection::Videos).url(&cms);
    assert!(url.starts_with("https://abc123.apicdn.sanity.io/v2023-05-03/data/query/production?query="));
    assert!(!url.contains(' '));

    let url = Query::new(Collection::Events).with_param("id", "ev 1").url(&cms);
    assert!(url.ends_with("&$id=%22ev%201%22"));

    let url = Query::new(Collection::Events).url(&cms);
    assert!(url.ends_with("&$id=null"));
}

#[test]
fn envelope_is_unwrapped() {
    assert_eq!(unwrap_envelope(json!({ "result": [1, 2], "ms": 4 })), Some(json!([1, 2])));
    assert_eq!(unwrap_envelope(json!({ "result": null })), Some(serde_json::Value::Null));
    assert_eq!(unwrap_envelope(serde_json::Value::Null), None);
    assert_eq!(unwrap_envelope(json!([1])), Some(json!([1])));
}

#[test]
fn source_kind_follows_flags() {
    let mut config = SiteConfig::default();
    assert_eq!(SourceKind::for_config(&config), SourceKind::Static);

    config.use_cms = true;
    assert_eq!(SourceKind::for_config(&config), SourceKind::Static);
    config.cms.project_id = "abc123".to_string();
    assert_eq!(SourceKind::for_config(&config), SourceKind::Remote);

    config.use_synthetic_data = true;
    assert_eq!(SourceKind::for_config(&config), SourceKind::Synthetic);
}
