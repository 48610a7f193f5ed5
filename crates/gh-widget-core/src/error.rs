//! Refresh cycle error taxonomy
//!
//! Only the list fetch and the missing-credential condition ever surface to
//! the caller; resolver failures are downgraded inside `enrich` and never
//! abort a cycle.

use gh_widget_client::ApiError;
use thiserror::Error;

/// Failure of a whole refresh cycle
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RefreshError {
    /// No credential configured; the user must act
    #[error("no GitHub token configured")]
    Authentication,

    /// The list endpoint answered with a non-2xx status
    #[error("GitHub API error: {status} {text}")]
    Provider { status: u16, text: String },

    /// The list request never produced an HTTP response
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<ApiError> for RefreshError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::MissingToken => RefreshError::Authentication,
            ApiError::Status { code, text } => RefreshError::Provider { status: code, text },
            ApiError::Transport(message) => RefreshError::Transport(message),
        }
    }
}
