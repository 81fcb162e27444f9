use reqwest::{
    header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method, Response,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::error::ApiError;

/// Thin wrapper over the clinic API: builds URLs from the configured base,
/// attaches the bearer credential, and maps non-success statuses onto the
/// shared error taxonomy.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        auth_token: Option<&str>,
        body: Option<Value>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let mut req = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ApiError::Auth("Credential contains invalid characters".to_string()))?;
            req = req.header(AUTHORIZATION, value);
        }

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => ApiError::Auth(error_text),
                404 => ApiError::NotFound(error_text),
                400 => ApiError::Validation(error_text),
                409 => ApiError::Conflict(error_text),
                code => ApiError::Api {
                    status: code,
                    message: error_text,
                },
            });
        }

        Ok(response)
    }

    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        auth_token: Option<&str>,
        body: Option<Value>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(method, path, auth_token, body).await?;
        let status = response.status().as_u16();

        response.json::<T>().await.map_err(|e| ApiError::Api {
            status,
            message: format!("Invalid response body: {}", e),
        })
    }

    /// Some endpoints answer with plain text (delete confirmations) or an
    /// empty body (updates); this variant skips JSON decoding.
    pub async fn request_text(
        &self,
        method: Method,
        path: &str,
        auth_token: Option<&str>,
        body: Option<Value>,
    ) -> Result<String, ApiError> {
        let response = self.send(method, path, auth_token, body).await?;

        response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}
