// Host-side tests for language resolution and record decoding.

use serde_json::json;
use site_core::content::*;
use site_core::ContentError;

#[test]
fn active_language_wins() {
    let title = Localized::new("Koncert".to_string(), "Concert".to_string());
    assert_eq!(title.text(Locale::Pl), "Koncert");
    assert_eq!(title.text(Locale::En), "Concert");
}

#[test]
fn missing_language_falls_back_to_the_other() {
    let only_pl = Localized::only(Locale::Pl, "Próba".to_string());
    assert_eq!(only_pl.text(Locale::En), "Próba");

    let blank_en = Localized {
        pl: Some("Cisza".to_string()),
        en: Some("   ".to_string()),
    };
    assert_eq!(blank_en.text(Locale::En), "Cisza");

    let none: Localized<String> = Localized::default();
    assert_eq!(none.text(Locale::Pl), "");
    assert_eq!(none.resolve(Locale::Pl, Locale::En), None);
}

#[test]
fn generic_resolve_uses_explicit_fallback() {
    let years = Localized {
        pl: None,
        en: Some(2024u16),
    };
    assert_eq!(years.resolve(Locale::Pl, Locale::En), Some(&2024));
    assert_eq!(years.resolve(Locale::Pl, Locale::Pl), None);
}

#[test]
fn locale_tags_round_trip() {
    for locale in [Locale::Pl, Locale::En] {
        assert_eq!(Locale::parse(locale.tag()), Some(locale));
        assert_eq!(locale.other().other(), locale);
    }
    assert_eq!(Locale::parse("EN-gb"), Some(Locale::En));
    assert_eq!(Locale::parse("de"), None);
}

#[test]
fn null_and_missing_results_are_empty_not_errors() {
    assert!(decode_records::<RawEvent>(None).unwrap().is_empty());
    assert!(decode_records::<RawEvent>(Some(serde_json::Value::Null))
        .unwrap()
        .is_empty());
    assert!(adapt::<RawEvent>(None, Locale::Pl).is_empty());
}

#[test]
fn single_object_is_one_record() {
    let value = json!({ "name": "Fundacja", "description": { "en": "About" } });
    let raw = decode_records::<RawFoundationInfo>(Some(value)).unwrap();
    let resolved = adapt(Some(raw.as_slice()), Locale::Pl);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].description, "About");
}

#[test]
fn scalar_payload_is_a_decode_error() {
    let err = decode_records::<RawVideo>(Some(json!(42))).unwrap_err();
    assert!(matches!(err, ContentError::Decode(_)));
}

#[test]
fn events_resolve_with_fallback_per_field() {
    let value = json!([{
        "id": "e1",
        "date": "2025-03-14",
        "title": { "pl": "Przestrzenie ciszy", "en": "Spaces of Silence" },
        "venue": { "pl": "NOSPR" },
        "description": { "en": "Spectral music." },
        "ticketUrl": "https://example.org"
    }]);
    let raw = decode_records::<RawEvent>(Some(value)).unwrap();
    let en = adapt(Some(raw.as_slice()), Locale::En);
    assert_eq!(en[0].title, "Spaces of Silence");
    assert_eq!(en[0].venue, "NOSPR");
    assert_eq!(en[0].description, "Spectral music.");
    assert_eq!(en[0].ticket_url.as_deref(), Some("https://example.org"));

    let pl = adapt(Some(raw.as_slice()), Locale::Pl);
    assert_eq!(pl[0].description, "Spectral music.");
}

fn event(id: &str, date: &str) -> Event {
    Event {
        id: id.to_string(),
        date: date.to_string(),
        time: None,
        title: String::new(),
        venue: String::new(),
        description: String::new(),
        image: None,
        ticket_url: None,
    }
}

#[test]
fn events_split_into_calendar_and_archive() {
    let events = vec![
        event("b", "2026-11-07"),
        event("old", "2023-01-01"),
        event("today", "2026-10-18"),
        event("older", "2021-05-05"),
    ];
    let (upcoming, archived) = split_events(events, "2026-10-18");
    let ids = |v: &[Event]| v.iter().map(|e| e.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&upcoming), ["today", "b"]);
    assert_eq!(ids(&archived), ["old", "older"]);
}

#[test]
fn album_cover_defaults_to_first_photo() {
    let value = json!([{
        "id": "a",
        "title": { "pl": "Album" },
        "photos": [{ "url": "/1.webp", "caption": { "en": "One" } }]
    }]);
    let raw = decode_records::<RawPhotoAlbum>(Some(value)).unwrap();
    let album = &adapt(Some(raw.as_slice()), Locale::Pl)[0];
    assert_eq!(album.cover.as_deref(), Some("/1.webp"));
    assert_eq!(album.photos[0].caption, "One");
    assert_eq!(album.title, "Album");
}

#[test]
fn repertoire_partitions_and_sorts_by_surname() {
    let value = json!([
        { "name": "Salvatore Sciarrino", "works": [] },
        { "name": "Jagoda Szmytka", "specialProject": true },
        { "name": "Agata Zubel" },
        { "name": "Georg Friedrich Haas" }
    ]);
    let raw = decode_records::<RawComposer>(Some(value)).unwrap();
    let (standard, special) = partition_repertoire(adapt(Some(raw.as_slice()), Locale::En));
    let names: Vec<_> = standard.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Georg Friedrich Haas", "Salvatore Sciarrino", "Agata Zubel"]);
    assert_eq!(special.len(), 1);
    assert_eq!(special[0].name, "Jagoda Szmytka");
}

#[test]
fn load_state_accessors() {
    let loading: LoadState<Event> = LoadState::Loading;
    assert!(loading.is_loading());
    assert!(loading.items().is_empty());

    let failed: LoadState<Event> = LoadState::Failed(ContentError::Status(503));
    assert!(!failed.is_loading());
    assert_eq!(failed.error(), Some(&ContentError::Status(503)));
    assert!(failed.items().is_empty());
}
