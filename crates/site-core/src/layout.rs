//! Fixed-pixel layout geometry scaled by the viewport factor.
//!
//! The fixed header lives on its own surface pinned to the visual viewport,
//! while the guide lines it must line up with belong to the scrolling body.
//! Both sides compute their x-offsets from the same design-space table and
//! the same [`Scale`], which is what keeps them visually aligned.

use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::*;
use crate::viewport::{LayoutKind, Scale};

/// Axis-aligned box in design or screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }
    pub fn y(&self) -> f32 {
        self.origin.y
    }
    pub fn width(&self) -> f32 {
        self.size.x
    }
    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn scaled(&self, scale: Scale) -> Rect {
        Rect {
            origin: scale.apply_vec(self.origin),
            size: scale.apply_vec(self.size),
        }
    }
}

pub type GuideXs = SmallVec<[f32; 4]>;

/// Design-space x-coordinates of the decorative vertical lines.
#[derive(Clone, Debug, PartialEq)]
pub struct GuideLines {
    xs: GuideXs,
}

impl GuideLines {
    pub fn new(xs: &[f32]) -> Self {
        Self {
            xs: SmallVec::from_slice(xs),
        }
    }

    pub fn for_layout(kind: LayoutKind) -> Self {
        match kind {
            LayoutKind::Desktop => GuideLines::new(&DESKTOP_GUIDE_XS),
            LayoutKind::Mobile => GuideLines::new(&MOBILE_GUIDE_XS),
        }
    }

    pub fn design_xs(&self) -> &[f32] {
        &self.xs
    }

    pub fn screen_xs(&self, scale: Scale) -> GuideXs {
        self.xs.iter().map(|x| scale.apply(*x)).collect()
    }
}

/// The fixed header, authored in design space.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderGeometry {
    pub rect: Rect,
    pub guides: GuideLines,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScaledHeader {
    pub rect: Rect,
    pub guide_xs: GuideXs,
    pub scale: Scale,
}

impl HeaderGeometry {
    pub fn for_layout(kind: LayoutKind) -> Self {
        let (width, height) = match kind {
            LayoutKind::Desktop => (DESKTOP_REFERENCE_WIDTH, DESKTOP_HEADER_HEIGHT),
            LayoutKind::Mobile => (MOBILE_REFERENCE_WIDTH, MOBILE_HEADER_HEIGHT),
        };
        Self {
            rect: Rect::new(0.0, 0.0, width, height),
            guides: GuideLines::for_layout(kind),
        }
    }

    pub fn scaled(&self, scale: Scale) -> ScaledHeader {
        ScaledHeader {
            rect: self.rect.scaled(scale),
            guide_xs: self.guides.screen_xs(scale),
            scale,
        }
    }
}

/// Guide lines drawn in the scrolling body under the header.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyGeometry {
    pub guides: GuideLines,
}

impl BodyGeometry {
    pub fn for_layout(kind: LayoutKind) -> Self {
        Self {
            guides: GuideLines::for_layout(kind),
        }
    }

    pub fn guide_xs(&self, scale: Scale) -> GuideXs {
        self.guides.screen_xs(scale)
    }
}

/// Header and body guide lines coincide (within half a pixel).
pub fn guides_aligned(header: &ScaledHeader, body_xs: &[f32]) -> bool {
    header.guide_xs.len() == body_xs.len()
        && header
            .guide_xs
            .iter()
            .zip(body_xs)
            .all(|(h, b)| (h - b).abs() <= 0.5)
}

/// Parameters of the overflow-driven font shrinking heuristic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontFit {
    pub max_px: f32,
    pub min_px: f32,
    pub step_px: f32,
    /// Average glyph advance as a fraction of the font size.
    pub char_width_ratio: f32,
    pub line_height: f32,
}

impl Default for FontFit {
    fn default() -> Self {
        Self {
            max_px: 64.0,
            min_px: 12.0,
            step_px: 2.0,
            char_width_ratio: 0.55,
            line_height: 1.2,
        }
    }
}

/// Largest font size (stepping down from `max_px`) whose estimated wrapped
/// text fits the box. Returns `min_px` if nothing fits.
pub fn fit_font_size(text: &str, box_size: Vec2, fit: FontFit) -> f32 {
    let step = fit.step_px.max(0.5);
    let mut size = fit.max_px.max(fit.min_px);
    while size > fit.min_px {
        if estimated_height(text, box_size.x, size, fit) <= box_size.y {
            return size;
        }
        size = (size - step).max(fit.min_px);
    }
    fit.min_px
}

/// Estimated rendered height of `text` word-wrapped into `width`.
pub fn estimated_height(text: &str, width: f32, size: f32, fit: FontFit) -> f32 {
    let advance = (size * fit.char_width_ratio).max(f32::EPSILON);
    let per_line = ((width / advance).floor() as usize).max(1);
    wrapped_line_count(text, per_line) as f32 * size * fit.line_height
}

/// Greedy word wrap; words longer than a line break mid-word.
pub fn wrapped_line_count(text: &str, per_line: usize) -> usize {
    let per_line = per_line.max(1);
    let mut lines = 0usize;
    for paragraph in text.split('\n') {
        let mut current = 0usize;
        let mut para_lines = 1usize;
        for word in paragraph.split_whitespace() {
            let len = word.chars().count();
            let needed = if current == 0 { len } else { current + 1 + len };
            if needed <= per_line {
                current = needed;
            } else if current == 0 {
                para_lines += (len - 1) / per_line;
                current = tail_len(len, per_line);
            } else {
                para_lines += 1 + (len - 1) / per_line;
                current = tail_len(len, per_line);
            }
        }
        lines += para_lines;
    }
    lines.max(1)
}

// Characters on the last line a word of `len` occupies.
fn tail_len(len: usize, per_line: usize) -> usize {
    match len % per_line {
        0 => per_line,
        rest => rest,
    }
}
