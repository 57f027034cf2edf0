// Host-side tests for pure input and markup functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod markup {
    include!("../src/markup.rs");
}

use input::*;
use markup::*;
use site_core::Direction;

#[test]
fn wheel_pixels_pass_through() {
    assert_eq!(normalize_wheel_delta(42.0, DOM_DELTA_PIXEL, 900.0, 16.0), 42.0);
    assert_eq!(normalize_wheel_delta(-7.5, DOM_DELTA_PIXEL, 900.0, 16.0), -7.5);
}

#[test]
fn wheel_lines_and_pages_scale_to_pixels() {
    // Three lines from a notched mouse wheel clears the default threshold
    assert_eq!(normalize_wheel_delta(3.0, DOM_DELTA_LINE, 900.0, 16.0), 48.0);
    assert_eq!(normalize_wheel_delta(-1.0, DOM_DELTA_PAGE, 900.0, 16.0), -900.0);
}

#[test]
fn wheel_garbage_is_zero() {
    assert_eq!(normalize_wheel_delta(f64::NAN, DOM_DELTA_PIXEL, 900.0, 16.0), 0.0);
    assert_eq!(normalize_wheel_delta(1.0, DOM_DELTA_PAGE, f64::INFINITY, 16.0), 0.0);
}

#[test]
fn long_pages_scroll_before_slides_move() {
    // 900px window over 2400px of biography text
    assert!(page_can_scroll(120.0, 0.0, 900.0, 2400.0));
    assert!(page_can_scroll(-120.0, 600.0, 900.0, 2400.0));
    // At the bottom, further downward wheel goes to the slides
    assert!(!page_can_scroll(120.0, 1500.0, 900.0, 2400.0));
    assert!(!page_can_scroll(120.0, 1499.6, 900.0, 2400.0));
    // At the top, upward wheel goes to the slides
    assert!(!page_can_scroll(-120.0, 0.0, 900.0, 2400.0));
    assert!(!page_can_scroll(-120.0, 0.5, 900.0, 2400.0));
}

#[test]
fn pages_that_fit_never_scroll() {
    assert!(!page_can_scroll(120.0, 0.0, 900.0, 900.0));
    assert!(!page_can_scroll(-120.0, 0.0, 900.0, 900.0));
    assert!(!page_can_scroll(0.0, 300.0, 900.0, 2400.0));
}

#[test]
fn keys_map_to_directions() {
    assert_eq!(direction_for_key("ArrowDown"), Some(Direction::Advance));
    assert_eq!(direction_for_key("PageDown"), Some(Direction::Advance));
    assert_eq!(direction_for_key(" "), Some(Direction::Advance));
    assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Retreat));
    assert_eq!(direction_for_key("PageUp"), Some(Direction::Retreat));
    assert_eq!(direction_for_key("Enter"), None);
    assert_eq!(direction_for_key("j"), None);
}

#[test]
fn form_fields_are_editable() {
    assert!(is_editable_tag("INPUT"));
    assert!(is_editable_tag("textarea"));
    assert!(!is_editable_tag("DIV"));
}

#[test]
fn design_values_parse() {
    assert_eq!(parse_design_value("120"), Some(120.0));
    assert_eq!(parse_design_value(" 37.5px "), Some(37.5));
    assert_eq!(parse_design_value("-12"), Some(-12.0));
    assert_eq!(parse_design_value("wide"), None);
    assert_eq!(parse_design_value("inf"), None);
    assert_eq!(parse_design_value(""), None);
}

#[test]
fn html_is_escaped() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert_eq!(escape_html("Łódź"), "Łódź");
}

#[test]
fn px_and_dates_format() {
    assert_eq!(px(179.0), "179.00px");
    // Date.getMonth() is zero-based
    assert_eq!(calendar_date(2026, 9, 18), "2026-10-18");
    assert_eq!(calendar_date(2027, 0, 1), "2027-01-01");
    assert_eq!(calendar_date(2026, 11, 31), "2026-12-31");
}
