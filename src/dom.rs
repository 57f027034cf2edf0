use site_core::i18n::Translations;
use site_core::prefs::Preferences;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{HIGH_CONTRAST_CLASS, I18N_ATTR, I18N_SELECTOR};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::debug!("[dom] no #{} to wire", element_id);
    }
}

/// All elements matching `selector` that are `HtmlElement`s, in document order.
pub fn html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Sets a custom property on `<html>` so stylesheets can read it.
pub fn set_root_property(document: &web::Document, property: &str, value: &str) {
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        set_style(&root, property, value);
    }
}

/// Contrast class and `lang` attribute on `<html>`.
pub fn apply_preferences(document: &web::Document, prefs: &Preferences) {
    if let Some(root) = document.document_element() {
        set_class(&root, HIGH_CONTRAST_CLASS, prefs.high_contrast);
        _ = root.set_attribute("lang", prefs.locale.tag());
    }
}

/// Replaces the text of every `[data-i18n]` element with its translation.
pub fn apply_translations(
    document: &web::Document,
    translations: &Translations,
    locale: site_core::Locale,
) {
    let elements = html_elements(document, I18N_SELECTOR);
    for el in &elements {
        if let Some(key) = el.get_attribute(I18N_ATTR) {
            el.set_text_content(Some(&translations.get(&key, locale)));
        }
    }
    log::debug!("[i18n] translated {} elements ({})", elements.len(), locale.tag());
}
