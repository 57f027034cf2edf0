use thiserror::Error;

/// Failure of a content load. Carried as a value by `LoadState::Failed`
/// so a page can show a localized message in place of the affected region.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("network error: {0}")]
    Network(String),
    #[error("content API responded with status {0}")]
    Status(u16),
    #[error("could not decode content: {0}")]
    Decode(String),
    #[error("no content source is available")]
    Unavailable,
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Decode(err.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SlideSetError {
    #[error("a slide set needs at least one slide")]
    Empty,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("flag {key} has unrecognised value {value:?}")]
    InvalidFlag { key: String, value: String },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}
