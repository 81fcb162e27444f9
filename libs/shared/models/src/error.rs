use thiserror::Error;

/// Failure taxonomy for calls against the clinic API. Every variant surfaces
/// to the operator as a message; none is fatal to the process.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl ApiError {
    /// An expired or rejected credential; callers treat this exactly like
    /// local expiry detection and force a logout.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}
