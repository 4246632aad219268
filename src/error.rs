//! emosum error types

use std::time::Duration;

/// emosum error types
///
/// `TextTooShort` is the only client-caused error; every other variant is a
/// service failure reported with its display text.
#[derive(Debug, thiserror::Error)]
pub enum EmosumError {
    // Validation errors
    #[error("Text too short")]
    TextTooShort,

    // Provider/network errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("model not found: {0}")]
    ModelNotFound(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty response from model")]
    EmptyResponse,

    #[error("unexpected classifier label: {0}")]
    UnexpectedLabel(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl EmosumError {
    /// Whether the caller caused this error (bad input) rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::TextTooShort)
    }
}

impl From<reqwest::Error> for EmosumError {
    fn from(err: reqwest::Error) -> Self {
        EmosumError::Http(err.to_string())
    }
}

/// Result type alias for emosum operations
pub type Result<T> = std::result::Result<T, EmosumError>;
