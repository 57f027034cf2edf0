use site_core::surface::{resolve_target, RenderTarget, Surface};
use web_sys as web;

use crate::constants::{BACKDROP_ID, HEADER_ID, MENU_OVERLAY_ID, SURFACE_ATTR};

/// Moves the fixed surfaces out of the scrolling document into their
/// top-level mount points. A page without a mount keeps the surface inline.
pub fn mount_all(document: &web::Document) {
    for (surface, element_id) in [
        (Surface::Header, HEADER_ID),
        (Surface::Overlay, MENU_OVERLAY_ID),
        (Surface::Background, BACKDROP_ID),
    ] {
        let Some(el) = document.get_element_by_id(element_id) else {
            continue;
        };
        let mode = match resolve_target(surface, |id| document.get_element_by_id(id)) {
            RenderTarget::Mounted(mount) => match mount.append_child(&el) {
                Ok(_) => "portal",
                Err(e) => {
                    log::warn!("[surface] could not move #{}: {:?}", element_id, e);
                    "inline"
                }
            },
            RenderTarget::Inline => "inline",
        };
        _ = el.set_attribute(SURFACE_ATTR, mode);
        log::debug!("[surface] #{} {}", element_id, mode);
    }
}
