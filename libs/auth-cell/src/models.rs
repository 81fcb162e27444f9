use serde::{Deserialize, Serialize};

use shared_models::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    /// "ADMIN" or "USER"; the server validates and defaults to USER.
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("could not persist the credential: {0}")]
    Storage(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AuthError {
    pub fn is_auth(&self) -> bool {
        matches!(self, AuthError::Api(api) if api.is_auth())
    }
}
