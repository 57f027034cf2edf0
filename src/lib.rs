#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use site_core::config::{
    FLAG_CMS_API_VERSION, FLAG_CMS_DATASET, FLAG_CMS_PROJECT_ID, FLAG_USE_CMS,
    FLAG_USE_SYNTHETIC_DATA,
};
use site_core::i18n::Translations;
use site_core::prefs::Preferences;
use site_core::routes::Route;
use site_core::slides::SlideSet;
use site_core::SiteConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod cms;
mod constants;
mod content_view;
mod dom;
mod events;
mod header;
mod input;
mod markup;
mod overlay;
mod slides;
mod storage;
mod surfaces;
mod viewport;

use constants::{CONTRAST_TOGGLE_ID, LANGUAGE_TOGGLE_ID};
use content_view::{PageContext, Reload};
use slides::{SharedDeck, SlideDeck};
use storage::LocalStorage;

/// Flags are baked in at build time; the browser has no process environment.
fn build_env(key: &str) -> Option<&'static str> {
    match key {
        FLAG_USE_CMS => option_env!("SITE_USE_CMS"),
        FLAG_USE_SYNTHETIC_DATA => option_env!("SITE_USE_SYNTHETIC_DATA"),
        FLAG_CMS_PROJECT_ID => option_env!("SITE_CMS_PROJECT_ID"),
        FLAG_CMS_DATASET => option_env!("SITE_CMS_DATASET"),
        FLAG_CMS_API_VERSION => option_env!("SITE_CMS_API_VERSION"),
        _ => None,
    }
}

fn wire_slides(
    window: &web::Window,
    document: &web::Document,
    route: &Route,
    config: &SiteConfig,
) -> Option<SharedDeck> {
    let policy = route.slide_policy()?;
    let themes = (*route == Route::Home).then(SlideSet::homepage);
    let deck = Rc::new(RefCell::new(SlideDeck::new(
        document,
        policy,
        config.navigation,
        themes,
    )));
    events::wire_wheel(window, deck.clone());
    events::wire_touch_handlers(window, deck.clone());
    Some(deck)
}

fn wire_preference_toggles(
    document: &web::Document,
    route: Route,
    prefs: Rc<RefCell<Preferences>>,
    translations: Rc<Translations>,
    reload: Option<Reload>,
) {
    let prefs_contrast = prefs.clone();
    let document_contrast = document.clone();
    dom::add_click_listener(document, CONTRAST_TOGGLE_ID, move || {
        let store = LocalStorage::open();
        let mut prefs = prefs_contrast.borrow_mut();
        let on = prefs.toggle_high_contrast(&store);
        dom::apply_preferences(&document_contrast, &prefs);
        log::info!("[prefs] high contrast={}", on);
    });

    let document_language = document.clone();
    dom::add_click_listener(document, LANGUAGE_TOGGLE_ID, move || {
        let store = LocalStorage::open();
        let locale = {
            let mut prefs = prefs.borrow_mut();
            let next = prefs.locale.other();
            prefs.set_locale(&store, next);
            dom::apply_preferences(&document_language, &prefs);
            next
        };
        log::info!("[prefs] language={}", locale.tag());
        dom::apply_translations(&document_language, &translations, locale);
        document_language.set_title(&translations.get(route.title_key(), locale));
        if let Some(history) = web::window().and_then(|w| w.history().ok()) {
            _ = history.replace_state_with_url(
                &JsValue::NULL,
                "",
                Some(&route.localized_path(locale)),
            );
        }
        // A load still in flight for the old language is discarded
        if let Some(reload) = &reload {
            reload(locale);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = SiteConfig::from_lookup(|key| build_env(key).map(str::to_string))?;

    let path = window
        .location()
        .pathname()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let (route, route_locale) = Route::parse(&path);
    let mut prefs = Preferences::load(&LocalStorage::open());
    // An explicit language in the URL wins over the stored preference
    if let Some(locale) = route_locale {
        prefs.locale = locale;
    }
    let locale = prefs.locale;
    log::info!("[nav] route={:?} locale={}", route, locale.tag());
    dom::apply_preferences(&document, &prefs);

    let translations = Rc::new(Translations::builtin());
    dom::apply_translations(&document, &translations, locale);
    document.set_title(&translations.get(route.title_key(), locale));

    surfaces::mount_all(&document);
    let viewport = viewport::wire(&window, &document, config.viewport);
    overlay::wire_menu_toggle(&document);

    let deck = wire_slides(&window, &document, &route, &config);
    events::wire_global_keydown(&document, deck.clone());

    let reload = content_view::bind_route(PageContext {
        document: document.clone(),
        route: route.clone(),
        source: Rc::new(cms::SiteSource::for_config(&config)),
        translations: translations.clone(),
        viewport,
        deck,
    });
    if let Some(reload) = &reload {
        reload(locale);
    }

    wire_preference_toggles(
        &document,
        route,
        Rc::new(RefCell::new(prefs)),
        translations,
        reload,
    );
    Ok(())
}
