use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypicodeError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected response status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to build resource url: {0}")]
    Url(#[from] url::ParseError),
}

impl TypicodeError {
    /// True when the upstream answered 404 for the requested resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
