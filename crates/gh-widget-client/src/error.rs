//! API error type shared by all client implementations

use thiserror::Error;

/// Failure of a single GitHub API call
#[derive(Debug, Error)]
pub enum ApiError {
    /// No credential configured; checked before any network call is issued
    #[error("no GitHub token configured")]
    MissingToken,

    /// The provider answered with a non-2xx status
    #[error("GitHub API error: {code} {text}")]
    Status { code: u16, text: String },

    /// The request never produced an HTTP response (DNS, TLS, IO, parse)
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<octocrab::Error> for ApiError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => ApiError::Status {
                code: source.status_code.as_u16(),
                text: source.message,
            },
            other => ApiError::Transport(other.to_string()),
        }
    }
}
