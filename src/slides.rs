use std::cell::RefCell;
use std::rc::Rc;

use site_core::routes::SlidePolicy;
use site_core::slides::SlideSet;
use site_core::{NavOutcome, NavigationTuning, SlideNavigator};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    ACTIVE_CLASS, CAPTION_IMAGE_ATTR, CAPTION_SELECTOR, SLIDE_BACKGROUND_PROPERTY,
    SLIDE_IMAGE_PROPERTY, SLIDE_LINE_PROPERTY, SLIDE_SELECTOR, SLIDE_TEXT_PROPERTY,
};
use crate::dom;

/// The slides of the current page and the navigator that picks which one
/// is shown. A themed deck (the homepage) has one slide per theme and shows
/// the matching `.slide-caption`; any other deck counts its `.slide` nodes.
pub struct SlideDeck {
    pub navigator: SlideNavigator,
    elements: Vec<web::HtmlElement>,
    captions: Vec<web::HtmlElement>,
    themes: Option<SlideSet>,
    policy: SlidePolicy,
    tuning: NavigationTuning,
}

pub type SharedDeck = Rc<RefCell<SlideDeck>>;

impl SlideDeck {
    pub fn new(
        document: &web::Document,
        policy: SlidePolicy,
        tuning: NavigationTuning,
        themes: Option<SlideSet>,
    ) -> Self {
        let elements = dom::html_elements(document, SLIDE_SELECTOR);
        let captions = dom::html_elements(document, CAPTION_SELECTOR);
        let len = slide_count(themes.as_ref(), elements.len());
        let deck = Self {
            navigator: navigator_for(len, policy, tuning),
            elements,
            captions,
            themes,
            policy,
            tuning,
        };
        log::info!(
            "[nav] {} slides edge={:?} reset_scroll={}",
            len,
            policy.edge,
            policy.reset_scroll
        );
        deck.paint(0);
        deck
    }

    pub fn themes(&self) -> Option<&SlideSet> {
        self.themes.as_ref()
    }

    /// Picks up slides rendered after load. The navigator restarts at the
    /// first slide only when the number of slides changed.
    pub fn rebind(&mut self, document: &web::Document) {
        let elements = dom::html_elements(document, SLIDE_SELECTOR);
        let before = self.navigator.len();
        let after = slide_count(self.themes.as_ref(), elements.len());
        // The navigator never holds fewer than one slide
        if after.max(1) != before {
            log::info!("[nav] slides {} -> {}", before, after);
            self.navigator = navigator_for(after, self.policy, self.tuning);
        }
        self.elements = elements;
        self.captions = dom::html_elements(document, CAPTION_SELECTOR);
        self.paint(self.navigator.target());
    }

    fn paint(&self, index: usize) {
        mark_active(&self.elements, index);
        mark_active(&self.captions, index);
        let Some(slide) = self.themes.as_ref().and_then(|set| set.get(index)) else {
            return;
        };
        let Some(document) = dom::window_document() else {
            return;
        };
        dom::set_root_property(&document, SLIDE_BACKGROUND_PROPERTY, slide.theme.background);
        dom::set_root_property(&document, SLIDE_LINE_PROPERTY, slide.theme.line);
        dom::set_root_property(&document, SLIDE_TEXT_PROPERTY, slide.theme.text);
        // A loaded caption may carry its own picture
        let image = self
            .captions
            .get(index)
            .and_then(|el| el.get_attribute(CAPTION_IMAGE_ATTR))
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| slide.image.clone());
        dom::set_root_property(&document, SLIDE_IMAGE_PROPERTY, &format!("url(\"{}\")", image));
    }
}

fn mark_active(elements: &[web::HtmlElement], index: usize) {
    for (i, el) in elements.iter().enumerate() {
        let active = i == index;
        dom::set_class(el, ACTIVE_CLASS, active);
        _ = el.set_attribute("aria-hidden", if active { "false" } else { "true" });
    }
}

fn slide_count(themes: Option<&SlideSet>, rendered: usize) -> usize {
    themes.map_or(rendered, SlideSet::len)
}

fn navigator_for(len: usize, policy: SlidePolicy, tuning: NavigationTuning) -> SlideNavigator {
    SlideNavigator::new(len, tuning)
        .with_edge_policy(policy.edge)
        .with_scroll_reset(policy.reset_scroll)
}

/// Shows the target of a committed transition and schedules the lock release.
pub fn handle(deck: &SharedDeck, outcome: NavOutcome) {
    let Some(transition) = outcome.transition() else {
        return;
    };
    let delay_ms = {
        let deck = deck.borrow();
        deck.paint(transition.to);
        deck.navigator.tuning().transition_ms
    };
    if transition.reset_scroll {
        if let Some(window) = web::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
    schedule_settle(deck.clone(), delay_ms);
}

fn schedule_settle(deck: SharedDeck, delay_ms: f64) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(move || {
        let now = instant::now();
        let remaining = {
            let mut deck = deck.borrow_mut();
            match deck.navigator.settle(now) {
                Some(index) => {
                    log::debug!("[nav] settled on {}", index);
                    None
                }
                None => deck.navigator.lock_remaining_ms(now),
            }
        };
        // Timers may fire a hair before the lock expires
        if let Some(ms) = remaining {
            schedule_settle(deck, ms);
        }
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms.ceil() as i32,
    ) {
        log::error!("[nav] could not schedule unlock: {:?}", e);
    }
}
