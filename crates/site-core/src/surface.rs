/// Named layers a component can render into instead of its logical parent,
/// so fixed and decorative layers escape scaled or filtered ancestors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Header,
    Overlay,
    Background,
}

impl Surface {
    pub fn mount_id(self) -> &'static str {
        match self {
            Surface::Header => "header-root",
            Surface::Overlay => "overlay-root",
            Surface::Background => "background-root",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderTarget<T> {
    Mounted(T),
    /// Mount point missing; render in place.
    Inline,
}

impl<T> RenderTarget<T> {
    pub fn is_inline(&self) -> bool {
        matches!(self, RenderTarget::Inline)
    }
}

pub fn resolve_target<T, F>(surface: Surface, lookup: F) -> RenderTarget<T>
where
    F: FnOnce(&str) -> Option<T>,
{
    match lookup(surface.mount_id()) {
        Some(mount) => RenderTarget::Mounted(mount),
        None => {
            log::warn!(
                "[surface] #{} missing; rendering {:?} inline",
                surface.mount_id(),
                surface
            );
            RenderTarget::Inline
        }
    }
}
