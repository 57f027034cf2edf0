//! Site configuration injected into the front-ends at construction time.
//!
//! Nothing here is read from ambient state: the web crate builds a
//! [`SiteConfig`] from build-time environment values, the native preview
//! from the process environment, and tests construct one directly.

use serde::Deserialize;

use crate::constants::*;
use crate::error::ConfigError;

pub const FLAG_USE_CMS: &str = "SITE_USE_CMS";
pub const FLAG_USE_SYNTHETIC_DATA: &str = "SITE_USE_SYNTHETIC_DATA";
pub const FLAG_CMS_PROJECT_ID: &str = "SITE_CMS_PROJECT_ID";
pub const FLAG_CMS_DATASET: &str = "SITE_CMS_DATASET";
pub const FLAG_CMS_API_VERSION: &str = "SITE_CMS_API_VERSION";

/// Remote query API endpoint description.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: CMS_DEFAULT_DATASET.to_string(),
            api_version: CMS_DEFAULT_API_VERSION.to_string(),
            use_cdn: true,
        }
    }
}

impl CmsConfig {
    /// Base query URL, without the query string.
    pub fn query_endpoint(&self) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!(
            "https://{}.{}.sanity.io/v{}/data/query/{}",
            self.project_id, host, self.api_version, self.dataset
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub breakpoint_px: f32,
    pub desktop_reference_width: f32,
    pub mobile_reference_width: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: MOBILE_BREAKPOINT_PX,
            desktop_reference_width: DESKTOP_REFERENCE_WIDTH,
            mobile_reference_width: MOBILE_REFERENCE_WIDTH,
        }
    }
}

/// Gesture thresholds and timings for the slide navigator.
///
/// These are heuristics, not measured physical constants; keep them
/// configurable so they can be re-tuned per page or per device class.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationTuning {
    pub wheel_threshold: f32,
    pub touch_threshold_px: f32,
    pub wheel_quiet_ms: f64,
    pub transition_ms: f64,
}

impl Default for NavigationTuning {
    fn default() -> Self {
        Self {
            wheel_threshold: WHEEL_COMMIT_THRESHOLD,
            touch_threshold_px: TOUCH_COMMIT_THRESHOLD_PX,
            wheel_quiet_ms: WHEEL_QUIET_PERIOD_MS,
            transition_ms: SLIDE_TRANSITION_MS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Fetch content from the remote query API instead of the static tables.
    pub use_cms: bool,
    /// Substitute generated large-volume data for real content.
    pub use_synthetic_data: bool,
    pub cms: CmsConfig,
    pub viewport: ViewportConfig,
    pub navigation: NavigationTuning,
}

impl SiteConfig {
    /// Build a config from a key lookup (build-time env, process env, a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SiteConfig {
            use_cms: parse_flag(FLAG_USE_CMS, lookup(FLAG_USE_CMS))?,
            use_synthetic_data: parse_flag(
                FLAG_USE_SYNTHETIC_DATA,
                lookup(FLAG_USE_SYNTHETIC_DATA),
            )?,
            ..SiteConfig::default()
        };
        if let Some(project_id) = non_empty(lookup(FLAG_CMS_PROJECT_ID)) {
            config.cms.project_id = project_id;
        }
        if let Some(dataset) = non_empty(lookup(FLAG_CMS_DATASET)) {
            config.cms.dataset = dataset;
        }
        if let Some(version) = non_empty(lookup(FLAG_CMS_API_VERSION)) {
            config.cms.api_version = version;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("breakpoint_px", self.viewport.breakpoint_px as f64)?;
        positive(
            "desktop_reference_width",
            self.viewport.desktop_reference_width as f64,
        )?;
        positive(
            "mobile_reference_width",
            self.viewport.mobile_reference_width as f64,
        )?;
        positive("wheel_threshold", self.navigation.wheel_threshold as f64)?;
        positive("touch_threshold_px", self.navigation.touch_threshold_px as f64)?;
        positive("wheel_quiet_ms", self.navigation.wheel_quiet_ms)?;
        positive("transition_ms", self.navigation.transition_ms)?;
        Ok(())
    }

    /// The CMS is only usable when enabled and pointed at a project.
    pub fn cms_enabled(&self) -> bool {
        self.use_cms && !self.cms.project_id.is_empty()
    }
}

pub fn parse_flag(key: &str, raw: Option<String>) -> Result<bool, ConfigError> {
    let Some(raw) = non_empty(raw) else {
        return Ok(false);
    };
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key: key.to_string(),
            value: raw,
        }),
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
