//! Error taxonomy for the hosted-model HTML path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("API key not configured for {0}")]
    MissingKey(&'static str),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limited: {0}")]
    RateLimit(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response shape: {0}")]
    Parse(String),
}

impl AiError {
    /// Transient failures worth retrying with backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AiError::Network(_) | AiError::RateLimit(_))
    }
}
