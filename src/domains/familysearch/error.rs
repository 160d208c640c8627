//! FamilySearch gateway error types.

use thiserror::Error;

/// Result type for FamilySearch gateway operations.
pub type FamilySearchResult<T> = Result<T, FamilySearchError>;

/// Errors that can occur while calling the FamilySearch API.
#[derive(Debug, Error)]
pub enum FamilySearchError {
    /// The API answered with a non-success status. The body is not parsed.
    #[error("FamilySearch API error: {status_text}")]
    Status { status: u16, status_text: String },

    /// The request never produced a usable response (connect, TLS, body read).
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// A non-empty success body that is not JSON.
    #[error("Invalid FamilySearch response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot carry endpoint paths.
    #[error("Invalid FamilySearch base URL: {0}")]
    InvalidUrl(String),
}

impl FamilySearchError {
    /// Build a status error from an HTTP status code.
    ///
    /// The status text is the canonical reason phrase, or `Unknown` for
    /// codes that have none.
    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }
}
