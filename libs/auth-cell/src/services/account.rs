use std::sync::Arc;

use reqwest::Method;
use tracing::debug;

use shared_gateway::ApiClient;
use shared_models::error::ApiError;

use crate::models::{AuthError, RegisterRequest, TokenResponse};

/// HTTP side of authentication: exchanges credentials for a token and
/// creates accounts. Persisting the token is the session store's job.
pub struct AuthService {
    api: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        debug!("Logging in {}", email);

        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response: TokenResponse = self
            .api
            .request(Method::POST, "/auth/login", None, Some(body))
            .await
            .map_err(|e| match e {
                ApiError::Auth(_) | ApiError::Validation(_) => AuthError::InvalidCredentials,
                other => AuthError::Api(other),
            })?;

        Ok(response.token)
    }

    /// The server answers with a token, but account creation routes the
    /// operator to the login screen instead of opening a session, so the
    /// token is discarded here.
    pub async fn register(&self, request: RegisterRequest) -> Result<(), AuthError> {
        debug!("Registering account for {}", request.email);

        let body = serde_json::json!({
            "firstname": request.firstname,
            "lastname": request.lastname,
            "email": request.email,
            "password": request.password,
            "role": request.role,
        });
        self.api
            .request_text(Method::POST, "/auth/register", None, Some(body))
            .await?;

        Ok(())
    }
}
