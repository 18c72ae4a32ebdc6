//! Newsletter retrieval errors.

use thiserror::Error;

/// Result type for newsletter operations.
pub type Result<T> = std::result::Result<T, NewsletterError>;

/// Errors raised while retrieving newsletter issues.
#[derive(Debug, Error)]
pub enum NewsletterError {
    /// Transport failure or client construction error.
    #[error("newsletter request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status (401 for a bad or missing key).
    #[error("newsletter provider returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("failed to decode newsletter response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NewsletterError {
    /// Status error from the provider's response.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Whether the provider rejected the credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}
