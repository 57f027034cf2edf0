use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::WHEEL_LINE_HEIGHT_PX;
use crate::input::{normalize_wheel_delta, page_can_scroll};
use crate::slides::{self, SharedDeck};

/// Wheel input drives the slide deck once the page cannot scroll any further
/// that way. The listener is non-passive so the page does not scroll
/// underneath a slide change.
pub fn wire_wheel(window: &web::Window, deck: SharedDeck) {
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let page_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let delta = normalize_wheel_delta(
            ev.delta_y(),
            ev.delta_mode(),
            page_height,
            WHEEL_LINE_HEIGHT_PX,
        );
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let content_height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(page_height, |root| f64::from(root.scroll_height()));
        if page_can_scroll(delta, scroll_y, page_height, content_height) {
            return;
        }
        ev.prevent_default();
        let outcome = deck.borrow_mut().navigator.on_wheel(delta, instant::now());
        slides::handle(&deck, outcome);
    }) as Box<dyn FnMut(_)>);

    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::error!("[nav] wheel listener failed: {:?}", e);
    }
    closure.forget();
}
