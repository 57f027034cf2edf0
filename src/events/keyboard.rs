use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input::{direction_for_key, is_editable_tag};
use crate::overlay;
use crate::slides::{self, SharedDeck};

pub fn handle_global_keydown(ev: &web::KeyboardEvent, deck: Option<&SharedDeck>) {
    let key = ev.key();
    if key == "Escape" {
        if let Some(document) = crate::dom::window_document() {
            overlay::hide(&document);
        }
        return;
    }
    let typing = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| is_editable_tag(&el.tag_name()))
        .unwrap_or(false);
    if typing || ev.alt_key() || ev.ctrl_key() || ev.meta_key() {
        return;
    }
    let (Some(deck), Some(direction)) = (deck, direction_for_key(&key)) else {
        return;
    };
    ev.prevent_default();
    let outcome = deck.borrow_mut().navigator.step(direction, instant::now());
    log::debug!("[keys] {} -> {:?}", key, outcome);
    slides::handle(deck, outcome);
}

/// Arrow/Page keys step the deck; Escape closes the menu overlay.
pub fn wire_global_keydown(document: &web::Document, deck: Option<SharedDeck>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, deck.as_ref());
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
