use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input::first_touch_y;
use crate::slides::{self, SharedDeck};

/// Vertical swipes drive the slide deck: start, move (commits once past
/// the threshold), end/cancel.
pub fn wire_touch_handlers(window: &web::Window, deck: SharedDeck) {
    let deck_start = deck.clone();
    let start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(y) = first_touch_y(&ev) {
            deck_start
                .borrow_mut()
                .navigator
                .on_touch_start(y, instant::now());
        }
    }) as Box<dyn FnMut(_)>);

    let deck_move = deck.clone();
    let moved = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(y) = first_touch_y(&ev) else {
            return;
        };
        let outcome = deck_move
            .borrow_mut()
            .navigator
            .on_touch_move(y, instant::now());
        slides::handle(&deck_move, outcome);
    }) as Box<dyn FnMut(_)>);

    let deck_end = deck;
    let end = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        deck_end.borrow_mut().navigator.on_touch_end();
    }) as Box<dyn FnMut(_)>);

    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    for (name, closure) in [
        ("touchstart", &start),
        ("touchmove", &moved),
        ("touchend", &end),
        ("touchcancel", &end),
    ] {
        _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            name,
            closure.as_ref().unchecked_ref(),
            &options,
        );
    }
    start.forget();
    moved.forget();
    end.forget();
}
