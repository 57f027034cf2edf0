//! Content sources available to the browser build.

use site_core::config::{CmsConfig, SiteConfig};
use site_core::fetch::{unwrap_envelope, StaticSource, SyntheticSource};
use site_core::{ContentError, ContentSource, Query, SourceKind};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Remote query API over `window.fetch`.
pub struct HttpSource {
    cms: CmsConfig,
}

impl HttpSource {
    pub fn new(cms: CmsConfig) -> Self {
        Self { cms }
    }
}

fn network_error(e: JsValue) -> ContentError {
    ContentError::Network(format!("{:?}", e))
}

impl ContentSource for HttpSource {
    async fn fetch(&self, query: &Query) -> Result<Option<serde_json::Value>, ContentError> {
        let window = web::window().ok_or(ContentError::Unavailable)?;
        let url = query.url(&self.cms);

        let opts = web::RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(web::RequestMode::Cors);
        let request = web::Request::new_with_str_and_init(&url, &opts).map_err(network_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(network_error)?;

        let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?
            .dyn_into()
            .map_err(network_error)?;
        if !response.ok() {
            return Err(ContentError::Status(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;
        let body = text
            .as_string()
            .ok_or_else(|| ContentError::Decode("response body is not text".to_string()))?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        Ok(unwrap_envelope(value))
    }
}

/// The one source a page load uses, picked from the site config.
pub enum SiteSource {
    Remote(HttpSource),
    Static(StaticSource),
    Synthetic(SyntheticSource),
}

impl SiteSource {
    pub fn for_config(config: &SiteConfig) -> Self {
        let kind = SourceKind::for_config(config);
        log::info!("[content] source={:?}", kind);
        match kind {
            SourceKind::Remote => SiteSource::Remote(HttpSource::new(config.cms.clone())),
            SourceKind::Static => SiteSource::Static(StaticSource),
            SourceKind::Synthetic => SiteSource::Synthetic(SyntheticSource::default()),
        }
    }
}

impl ContentSource for SiteSource {
    async fn fetch(&self, query: &Query) -> Result<Option<serde_json::Value>, ContentError> {
        match self {
            SiteSource::Remote(source) => source.fetch(query).await,
            SiteSource::Static(source) => source.fetch(query).await,
            SiteSource::Synthetic(source) => source.fetch(query).await,
        }
    }
}
