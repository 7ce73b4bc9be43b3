use thiserror::Error;

/// Result type alias for CyberAPI operations
pub type Result<T> = std::result::Result<T, CyberApiError>;

/// Errors that can occur when using the CyberAPI service
#[derive(Error, Debug)]
pub enum CyberApiError {
    /// A lookup was attempted without a domain or IP address
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Authentication failed - invalid or missing API key
    #[error("authentication failed: invalid API key")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("rate limit exceeded, retry after {retry_after:?} seconds")]
    RateLimited {
        /// Seconds to wait before retrying
        retry_after: Option<u64>,
    },

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API (the `detail` field when present,
        /// otherwise the raw response body)
        message: String,
    },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CyberApiError {
    /// Returns the HTTP status code if the remote service rejected the request
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::RateLimited { .. } => Some(429),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the error was raised locally, before any network call
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
