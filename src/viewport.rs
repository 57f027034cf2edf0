use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use site_core::config::ViewportConfig;
use site_core::constants::{DESKTOP_REFERENCE_HEIGHT, MOBILE_REFERENCE_HEIGHT};
use site_core::layout::{fit_font_size, FontFit};
use site_core::{LayoutKind, Viewport, ViewportClassifier, ViewportState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    CANVAS_HEIGHT_PROPERTY, DESIGN_BOX_SELECTOR, DESIGN_H_ATTR, DESIGN_W_ATTR, DESIGN_X_ATTR,
    DESIGN_Y_ATTR, FIT_TEXT_ATTR, SCALE_PROPERTY,
};
use crate::markup::{parse_design_value, px};
use crate::{dom, header};

pub type SharedViewport = Rc<RefCell<ViewportClassifier>>;

pub fn window_state(window: &web::Window) -> ViewportState {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    ViewportState::new(read(window.inner_width()), read(window.inner_height()))
}

/// Computes the initial viewport, applies it, and re-applies on every resize.
pub fn wire(window: &web::Window, document: &web::Document, config: ViewportConfig) -> SharedViewport {
    let initial = window_state(window);
    let classifier = Rc::new(RefCell::new(ViewportClassifier::new(config, initial)));
    let current = classifier.borrow().current();
    log::info!(
        "[viewport] {}x{} {:?} scale={:.4}",
        initial.width,
        initial.height,
        current.kind,
        current.scale.factor()
    );
    sync(document, &current);

    let classifier_resize = classifier.clone();
    let document_resize = document.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        let state = window_state(&window);
        let viewport = classifier_resize.borrow_mut().resize(state.width, state.height);
        sync(&document_resize, &viewport);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();

    classifier
}

/// Applies one snapshot everywhere: layout class, scale property, header,
/// and every design-positioned element in the body.
pub fn sync(document: &web::Document, viewport: &Viewport) {
    if let Some(root) = document.document_element() {
        for kind in [LayoutKind::Desktop, LayoutKind::Mobile] {
            dom::set_class(&root, kind.css_class(), kind == viewport.kind);
        }
    }
    dom::set_root_property(document, SCALE_PROPERTY, &viewport.scale.factor().to_string());
    let reference_height = match viewport.kind {
        LayoutKind::Desktop => DESKTOP_REFERENCE_HEIGHT,
        LayoutKind::Mobile => MOBILE_REFERENCE_HEIGHT,
    };
    dom::set_root_property(
        document,
        CANVAS_HEIGHT_PROPERTY,
        &px(viewport.scaled_canvas_height(reference_height)),
    );
    header::sync(document, viewport);
    place_design_boxes(document, viewport);
}

/// Positions every `[data-design-x]` element, including ones rendered after
/// the last resize.
pub fn place_design_boxes(document: &web::Document, viewport: &Viewport) {
    let fit = FontFit::default();
    for el in dom::html_elements(document, DESIGN_BOX_SELECTOR) {
        place(&el, viewport, fit);
    }
}

fn place(el: &web::HtmlElement, viewport: &Viewport, fit: FontFit) {
    let attr = |name: &str| el.get_attribute(name).as_deref().and_then(parse_design_value);
    let scale = viewport.scale;
    for (name, property) in [
        (DESIGN_X_ATTR, "left"),
        (DESIGN_Y_ATTR, "top"),
        (DESIGN_W_ATTR, "width"),
        (DESIGN_H_ATTR, "height"),
    ] {
        if let Some(design) = attr(name) {
            dom::set_style(el, property, &px(scale.to_px(design)));
        }
    }

    if !el.has_attribute(FIT_TEXT_ATTR) {
        return;
    }
    if let (Some(w), Some(h)) = (attr(DESIGN_W_ATTR), attr(DESIGN_H_ATTR)) {
        let text = el.text_content().unwrap_or_default();
        let size = fit_font_size(&text, Vec2::new(w, h), fit);
        dom::set_style(el, "font-size", &px(scale.apply(size)));
    }
}
