use site_core::Direction;
use web_sys as web;

// WheelEvent.deltaMode values
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

/// Converts a wheel delta to pixels so thresholds mean the same thing for
/// mice that report lines and trackpads that report pixels.
#[inline]
pub fn normalize_wheel_delta(delta: f64, mode: u32, page_height: f64, line_height: f64) -> f32 {
    let px = match mode {
        DOM_DELTA_LINE => delta * line_height,
        DOM_DELTA_PAGE => delta * page_height,
        _ => delta,
    };
    if px.is_finite() {
        px as f32
    } else {
        0.0
    }
}

// Sub-pixel scroll positions still count as being at the edge
const SCROLL_EDGE_SLACK_PX: f64 = 1.0;

/// Whether the page itself can still scroll the way `delta` points. While it
/// can, the wheel belongs to the page and the slides stay where they are.
#[inline]
pub fn page_can_scroll(delta: f32, scroll_y: f64, view_height: f64, content_height: f64) -> bool {
    if delta > 0.0 {
        scroll_y + view_height < content_height - SCROLL_EDGE_SLACK_PX
    } else if delta < 0.0 {
        scroll_y > SCROLL_EDGE_SLACK_PX
    } else {
        false
    }
}

#[inline]
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowDown" | "ArrowRight" | "PageDown" | " " => Some(Direction::Advance),
        "ArrowUp" | "ArrowLeft" | "PageUp" => Some(Direction::Retreat),
        _ => None,
    }
}

/// Keys typed into form fields never drive the slides.
#[inline]
pub fn is_editable_tag(tag: &str) -> bool {
    matches!(
        tag.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

#[inline]
pub fn first_touch_y(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.client_y() as f32)
}
