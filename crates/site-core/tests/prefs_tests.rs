// Host-side tests for preferences, translations, surfaces, routes and config.

use site_core::config::parse_flag;
use site_core::constants::{PREF_HIGH_CONTRAST, PREF_LANGUAGE};
use site_core::i18n::Translations;
use site_core::prefs::{MemoryStore, PreferenceStore, Preferences};
use site_core::routes::Route;
use site_core::surface::{resolve_target, RenderTarget, Surface};
use site_core::{ConfigError, EdgePolicy, Locale, Localized, SiteConfig};

#[test]
fn preferences_default_when_store_is_empty() {
    let store = MemoryStore::new();
    let prefs = Preferences::load(&store);
    assert!(!prefs.high_contrast);
    assert_eq!(prefs.locale, Locale::Pl);
}

#[test]
fn preferences_write_through_and_reload() {
    let store = MemoryStore::new();
    let mut prefs = Preferences::load(&store);
    assert!(prefs.toggle_high_contrast(&store));
    prefs.set_locale(&store, Locale::En);
    assert_eq!(store.get(PREF_HIGH_CONTRAST).as_deref(), Some("true"));
    assert_eq!(store.get(PREF_LANGUAGE).as_deref(), Some("en"));

    let reloaded = Preferences::load(&store);
    assert_eq!(reloaded, prefs);
}

#[test]
fn garbage_language_falls_back_to_default() {
    let store = MemoryStore::new();
    store.set(PREF_LANGUAGE, "klingon");
    assert_eq!(Preferences::load(&store).locale, Locale::Pl);
}

#[test]
fn translations_fall_back_then_echo_key() {
    let mut t = Translations::empty();
    t.insert("only.pl", Localized::only(Locale::Pl, "tylko"));
    assert_eq!(t.get("only.pl", Locale::En), "tylko");
    assert_eq!(t.get("no.such.key", Locale::En), "no.such.key");

    let builtin = Translations::builtin();
    assert_eq!(builtin.get("ui.load_failed", Locale::En), "Failed to load content.");
    assert_eq!(builtin.get("nav.bio", Locale::Pl), "Biografia");
}

#[test]
fn every_route_title_is_translated() {
    let t = Translations::builtin();
    for path in [
        "/", "/biography", "/calendar", "/calendar/archive", "/event/x", "/media",
        "/media/video", "/media/gallery/y", "/repertoire", "/repertoire/special-projects",
        "/foundation", "/contact", "/nope",
    ] {
        let (route, _) = Route::parse(path);
        assert!(t.contains(route.title_key()), "{path}");
    }
}

#[test]
fn missing_mount_renders_inline() {
    let mounted = resolve_target(Surface::Overlay, |id| (id == "overlay-root").then_some(id.len()));
    assert_eq!(mounted, RenderTarget::Mounted("overlay-root".len()));

    let inline: RenderTarget<()> = resolve_target(Surface::Background, |_| None);
    assert!(inline.is_inline());
}

#[test]
fn routes_parse_and_round_trip() {
    assert_eq!(Route::parse("/"), (Route::Home, None));
    assert_eq!(Route::parse("/en"), (Route::Home, Some(Locale::En)));
    assert_eq!(Route::parse("/en/calendar/archive/"), (Route::Archive, Some(Locale::En)));
    assert_eq!(
        Route::parse("/media/gallery/album-studio"),
        (Route::Gallery("album-studio".to_string()), None)
    );
    assert_eq!(Route::parse("/calendar/nope").0, Route::NotFound);

    for route in [Route::Biography, Route::Event("e1".to_string()), Route::SpecialProjects] {
        assert_eq!(Route::parse(&route.path()).0, route);
        assert_eq!(Route::parse(&route.localized_path(Locale::En)), (route.clone(), Some(Locale::En)));
    }
    assert_eq!(Route::Home.localized_path(Locale::En), "/en");
}

#[test]
fn slide_pages_have_policies() {
    assert!(!Route::Home.slide_policy().unwrap().reset_scroll);
    assert!(Route::Biography.slide_policy().unwrap().reset_scroll);
    assert_eq!(
        Route::Gallery("a".to_string()).slide_policy().unwrap().edge,
        EdgePolicy::Wrap
    );
    assert_eq!(Route::Calendar.slide_policy(), None);
}

#[test]
fn flags_parse_common_spellings() {
    assert_eq!(parse_flag("X", None), Ok(false));
    assert_eq!(parse_flag("X", Some(" ".to_string())), Ok(false));
    assert_eq!(parse_flag("X", Some("TRUE".to_string())), Ok(true));
    assert_eq!(parse_flag("X", Some("off".to_string())), Ok(false));
    assert!(matches!(
        parse_flag("X", Some("maybe".to_string())),
        Err(ConfigError::InvalidFlag { .. })
    ));
}

#[test]
fn config_from_lookup() {
    let config = SiteConfig::from_lookup(|key| match key {
        "SITE_USE_CMS" => Some("1".to_string()),
        "SITE_CMS_PROJECT_ID" => Some("abc123".to_string()),
        _ => None,
    })
    .unwrap();
    assert!(config.use_cms);
    assert!(!config.use_synthetic_data);
    assert!(config.cms_enabled());
    assert_eq!(config.cms.dataset, "production");

    let mut bad = SiteConfig::default();
    bad.navigation.wheel_threshold = 0.0;
    assert!(matches!(bad.validate(), Err(ConfigError::NonPositive { name: "wheel_threshold", .. })));
}

#[test]
fn config_deserializes_with_defaults() {
    let config: SiteConfig =
        serde_json::from_str(r#"{ "use_cms": true, "navigation": { "wheel_threshold": 120.0 } }"#).unwrap();
    assert!(config.use_cms);
    assert_eq!(config.navigation.wheel_threshold, 120.0);
    assert_eq!(config.navigation.wheel_quiet_ms, 150.0);
    assert_eq!(config.viewport.breakpoint_px, 768.0);
}
