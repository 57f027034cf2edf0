// Element ids, selectors and class names the page markup is expected to use.
//
// Kept free of `web_sys` so host tests can include this file directly.
// Surfaces re-parented into their mount points
pub const HEADER_ID: &str = "site-header";
pub const MENU_OVERLAY_ID: &str = "menu-overlay";
pub const BACKDROP_ID: &str = "slide-backdrop";

// The only region content loads write into
pub const CONTENT_REGION_ID: &str = "content-region";

// Buttons
pub const CONTRAST_TOGGLE_ID: &str = "contrast-toggle";
pub const LANGUAGE_TOGGLE_ID: &str = "language-toggle";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";

// Selectors
pub const SLIDE_SELECTOR: &str = ".slide";
pub const CAPTION_SELECTOR: &str = ".slide-caption";
pub const HEADER_GUIDE_SELECTOR: &str = "#site-header .guide-line";
pub const BODY_GUIDE_SELECTOR: &str = "main .guide-line";
pub const DESIGN_BOX_SELECTOR: &str = "[data-design-x]";
pub const I18N_SELECTOR: &str = "[data-i18n]";

// Attributes
pub const I18N_ATTR: &str = "data-i18n";
pub const FIT_TEXT_ATTR: &str = "data-fit-text";
pub const DESIGN_X_ATTR: &str = "data-design-x";
pub const DESIGN_Y_ATTR: &str = "data-design-y";
pub const DESIGN_W_ATTR: &str = "data-design-w";
pub const DESIGN_H_ATTR: &str = "data-design-h";
pub const SURFACE_ATTR: &str = "data-surface";
pub const CAPTION_IMAGE_ATTR: &str = "data-image";

// Classes
pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "is-active";

// CSS custom properties
pub const SCALE_PROPERTY: &str = "--site-scale";
pub const CANVAS_HEIGHT_PROPERTY: &str = "--canvas-height";
pub const SLIDE_BACKGROUND_PROPERTY: &str = "--slide-bg";
pub const SLIDE_LINE_PROPERTY: &str = "--slide-line";
pub const SLIDE_TEXT_PROPERTY: &str = "--slide-text";
pub const SLIDE_IMAGE_PROPERTY: &str = "--slide-image";

// Line height assumed when a wheel event reports its delta in lines
pub const WHEEL_LINE_HEIGHT_PX: f64 = 16.0;
