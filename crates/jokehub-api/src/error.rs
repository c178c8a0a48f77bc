//! Error types for the JokeHub API client

/// Errors that can occur when talking to the backend
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP 401. Handled centrally by terminating the session; never
    /// surfaced as a per-action message.
    #[error("Not authorized")]
    Auth,

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// True for 401 responses, which are fatal to the session rather than
    /// to a single action.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth)
    }
}

/// Result type alias for API client operations
pub type Result<T> = std::result::Result<T, ApiError>;
