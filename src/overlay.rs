use web_sys as web;

use crate::constants::{HIDDEN_CLASS, MENU_OVERLAY_ID, MENU_TOGGLE_ID};
use crate::dom;

#[inline]
pub fn show(document: &web::Document) {
    set_open(document, true);
}

#[inline]
pub fn hide(document: &web::Document) {
    set_open(document, false);
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(MENU_OVERLAY_ID)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(true)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

fn set_open(document: &web::Document, open: bool) {
    if let Some(el) = document.get_element_by_id(MENU_OVERLAY_ID) {
        dom::set_class(&el, HIDDEN_CLASS, !open);
        _ = el.set_attribute("aria-hidden", if open { "false" } else { "true" });
    }
    if let Some(button) = document.get_element_by_id(MENU_TOGGLE_ID) {
        _ = button.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

/// The menu button opens and closes the navigation overlay.
pub fn wire_menu_toggle(document: &web::Document) {
    hide(document);
    let document_click = document.clone();
    dom::add_click_listener(document, MENU_TOGGLE_ID, move || {
        toggle(&document_click);
    });
}
