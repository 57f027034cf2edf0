// Design-space and interaction constants shared by the web and native front-ends.

// Reference canvases every design-space coordinate is authored against
pub const DESKTOP_REFERENCE_WIDTH: f32 = 1440.0;
pub const DESKTOP_REFERENCE_HEIGHT: f32 = 700.0;
pub const MOBILE_REFERENCE_WIDTH: f32 = 390.0;
pub const MOBILE_REFERENCE_HEIGHT: f32 = 844.0;

// Widths at or below this use the mobile layout
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// Slide navigation tuning. Carried as defaults for `NavigationTuning`; they
// came from eyeballing a handful of mice and trackpads and need re-tuning
// against recorded event traces.
pub const WHEEL_COMMIT_THRESHOLD: f32 = 80.0; // accumulated deltaY units
pub const TOUCH_COMMIT_THRESHOLD_PX: f32 = 80.0;
pub const WHEEL_QUIET_PERIOD_MS: f64 = 150.0; // gap that restarts accumulation
pub const SLIDE_TRANSITION_MS: f64 = 800.0; // matches the CSS cross-fade

// Decorative vertical guide lines (design-space x)
pub const DESKTOP_GUIDE_XS: [f32; 3] = [375.0, 720.0, 1065.0];
pub const MOBILE_GUIDE_XS: [f32; 3] = [97.0, 195.0, 293.0];

// Fixed header box (design space)
pub const DESKTOP_HEADER_HEIGHT: f32 = 96.0;
pub const MOBILE_HEADER_HEIGHT: f32 = 72.0;

// Persisted preference keys
pub const PREF_HIGH_CONTRAST: &str = "site.highContrast";
pub const PREF_LANGUAGE: &str = "site.language";

// Remote query API defaults
pub const CMS_DEFAULT_DATASET: &str = "production";
pub const CMS_DEFAULT_API_VERSION: &str = "2023-05-03";

// Synthetic data volume per collection when the synthetic flag is on
pub const SYNTHETIC_RECORD_COUNT: usize = 400;
pub const SYNTHETIC_SEED: u64 = 42;
