//! Platform-neutral core of the ensemble website.
//!
//! Nothing in this crate touches the DOM. The web front-end feeds it
//! viewport sizes, input deltas and fetched JSON; the native preview feeds
//! it the same things from the command line.

pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod fetch;
pub mod i18n;
pub mod layout;
pub mod navigator;
pub mod prefs;
pub mod routes;
pub mod slides;
pub mod static_content;
pub mod surface;
pub mod synthetic;
pub mod viewport;

pub use config::{NavigationTuning, SiteConfig, ViewportConfig};
pub use content::{Locale, Localized, LoadState, Resolve};
pub use error::{ConfigError, ContentError, SlideSetError};
pub use fetch::{Collection, ContentLoader, ContentSource, Query, SourceKind};
pub use navigator::{Direction, EdgePolicy, NavOutcome, NavState, SlideNavigator};
pub use viewport::{LayoutKind, Scale, Viewport, ViewportClassifier, ViewportState};
