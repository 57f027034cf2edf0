use site_core::layout::{guides_aligned, BodyGeometry, HeaderGeometry, ScaledHeader};
use site_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{BODY_GUIDE_SELECTOR, HEADER_GUIDE_SELECTOR, HEADER_ID};
use crate::dom;
use crate::markup::px;

/// Sizes the fixed header and places guide lines in both the header and
/// the page body from the same viewport snapshot.
pub fn sync(document: &web::Document, viewport: &Viewport) -> ScaledHeader {
    let header = HeaderGeometry::for_layout(viewport.kind).scaled(viewport.scale);
    if let Some(el) = document
        .get_element_by_id(HEADER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        dom::set_style(&el, "width", &px(header.rect.width()));
        dom::set_style(&el, "height", &px(header.rect.height()));
    }
    place_guides(document, HEADER_GUIDE_SELECTOR, &header.guide_xs);

    let body_xs = BodyGeometry::for_layout(viewport.kind).guide_xs(viewport.scale);
    place_guides(document, BODY_GUIDE_SELECTOR, &body_xs);

    if !guides_aligned(&header, &body_xs) {
        log::warn!(
            "[viewport] header and body guides disagree at scale {:.4}",
            viewport.scale.factor()
        );
    }
    header
}

fn place_guides(document: &web::Document, selector: &str, xs: &[f32]) {
    for (i, el) in dom::html_elements(document, selector).iter().enumerate() {
        match xs.get(i) {
            Some(x) => {
                dom::set_style(el, "left", &px(*x));
                dom::set_style(el, "display", "");
            }
            None => dom::set_style(el, "display", "none"),
        }
    }
}
