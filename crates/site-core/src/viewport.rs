//! Viewport classification and design-space scaling.
//!
//! Every page is authored against a fixed reference canvas (1440 wide on
//! desktop, 390 on mobile). At runtime a single uniform factor,
//! `viewport width / reference width`, maps design-space pixels to screen
//! pixels. The classifier picks the layout and that factor together so
//! every consumer of one [`Viewport`] snapshot scales identically.

use glam::Vec2;

use crate::config::ViewportConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
}

impl ViewportState {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Desktop,
    Mobile,
}

impl LayoutKind {
    pub fn is_mobile(self) -> bool {
        matches!(self, LayoutKind::Mobile)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            LayoutKind::Desktop => "layout-desktop",
            LayoutKind::Mobile => "layout-mobile",
        }
    }
}

/// Mobile iff the width is at or below the breakpoint.
#[inline]
pub fn classify(width: f32, breakpoint: f32) -> LayoutKind {
    if width <= breakpoint {
        LayoutKind::Mobile
    } else {
        LayoutKind::Desktop
    }
}

/// Uniform design-space to screen-space factor. Always strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale(f32);

impl Scale {
    pub const IDENTITY: Scale = Scale(1.0);

    /// A zero-width viewport is treated as one pixel wide so the factor stays
    /// positive; non-positive reference widths fall back to identity.
    pub fn for_width(width: f32, reference_width: f32) -> Self {
        if reference_width <= 0.0 || !reference_width.is_finite() {
            return Scale::IDENTITY;
        }
        let width = if width.is_finite() { width.max(1.0) } else { 1.0 };
        Scale(width / reference_width)
    }

    #[inline]
    pub fn factor(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn apply(self, design: f32) -> f32 {
        design * self.0
    }

    #[inline]
    pub fn apply_vec(self, design: Vec2) -> Vec2 {
        design * self.0
    }

    /// Screen position rounded to whole pixels.
    #[inline]
    pub fn to_px(self, design: f32) -> f32 {
        self.apply(design).round()
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::IDENTITY
    }
}

/// One consistent snapshot of viewport, layout choice and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub state: ViewportState,
    pub kind: LayoutKind,
    pub scale: Scale,
    pub reference_width: f32,
}

impl Viewport {
    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.kind.is_mobile()
    }

    #[inline]
    pub fn design_to_screen(&self, x: f32) -> f32 {
        self.scale.apply(x)
    }

    /// Height of the reference canvas after scaling.
    pub fn scaled_canvas_height(&self, reference_height: f32) -> f32 {
        self.scale.apply(reference_height)
    }
}

/// Recomputes a [`Viewport`] on every resize. No debouncing; callers that
/// care about cost can coalesce resize events before calling in.
#[derive(Clone, Debug)]
pub struct ViewportClassifier {
    config: ViewportConfig,
    current: Viewport,
}

impl ViewportClassifier {
    pub fn new(config: ViewportConfig, initial: ViewportState) -> Self {
        let current = compute(&config, initial);
        Self { config, current }
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Viewport {
        let next = compute(&self.config, ViewportState::new(width, height));
        if next.kind != self.current.kind {
            log::info!(
                "[viewport] layout {:?} -> {:?} at {}px",
                self.current.kind,
                next.kind,
                width
            );
        }
        self.current = next;
        next
    }

    #[inline]
    pub fn current(&self) -> Viewport {
        self.current
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }
}

pub fn compute(config: &ViewportConfig, state: ViewportState) -> Viewport {
    let kind = classify(state.width, config.breakpoint_px);
    let reference_width = match kind {
        LayoutKind::Desktop => config.desktop_reference_width,
        LayoutKind::Mobile => config.mobile_reference_width,
    };
    Viewport {
        state,
        kind,
        scale: Scale::for_width(state.width, reference_width),
        reference_width,
    }
}
