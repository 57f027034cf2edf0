// Host-side tests for the markup contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
fn element_ids_are_distinct() {
    let ids = [
        HEADER_ID,
        MENU_OVERLAY_ID,
        BACKDROP_ID,
        CONTENT_REGION_ID,
        CONTRAST_TOGGLE_ID,
        LANGUAGE_TOGGLE_ID,
        MENU_TOGGLE_ID,
    ];
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    // Surfaces must not collide with their mount points
    for mount in ["header-root", "overlay-root", "background-root"] {
        assert!(!ids.contains(&mount));
    }
}

#[test]
fn header_guide_selector_targets_the_header() {
    assert!(HEADER_GUIDE_SELECTOR.starts_with(&format!("#{}", HEADER_ID)));
    assert_ne!(HEADER_GUIDE_SELECTOR, BODY_GUIDE_SELECTOR);
}

#[test]
fn attribute_selectors_match_attribute_names() {
    assert_eq!(DESIGN_BOX_SELECTOR, format!("[{}]", DESIGN_X_ATTR));
    assert_eq!(I18N_SELECTOR, format!("[{}]", I18N_ATTR));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn custom_properties_are_dashed() {
    for prop in [
        SCALE_PROPERTY,
        CANVAS_HEIGHT_PROPERTY,
        SLIDE_BACKGROUND_PROPERTY,
        SLIDE_IMAGE_PROPERTY,
        SLIDE_LINE_PROPERTY,
        SLIDE_TEXT_PROPERTY,
    ] {
        assert!(prop.starts_with("--"));
    }
    assert!(WHEEL_LINE_HEIGHT_PX > 0.0);
}

#[test]
fn captions_are_not_counted_as_slides() {
    // `.slide` must not also match `.slide-caption`
    assert_ne!(SLIDE_SELECTOR, CAPTION_SELECTOR);
    assert!(CAPTION_SELECTOR.starts_with('.') && !CAPTION_SELECTOR.contains(' '));
    assert!(CAPTION_IMAGE_ATTR.starts_with("data-"));
}

#[test]
fn included_sources_open_with_plain_comments() {
    // Outer doc comments at the top would attach to the first item
    for (name, src) in [
        ("constants.rs", include_str!("../src/constants.rs")),
        ("markup.rs", include_str!("../src/markup.rs")),
        ("input.rs", include_str!("../src/input.rs")),
    ] {
        assert!(!src.trim_start().starts_with("///"), "{name}");
    }
}
