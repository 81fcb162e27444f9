use std::sync::Arc;

use reqwest::Method;
use tracing::debug;

use shared_gateway::ApiClient;
use shared_models::error::ApiError;

use crate::models::{CreateDentistRequest, Dentist, DentistError, UpdateDentistRequest};

pub struct DentistService {
    api: Arc<ApiClient>,
}

impl DentistService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, auth_token: &str) -> Result<Vec<Dentist>, DentistError> {
        debug!("Fetching dentist list");

        let dentists = self
            .api
            .request(Method::GET, "/odontologos", Some(auth_token), None)
            .await?;

        Ok(dentists)
    }

    pub async fn create(
        &self,
        request: CreateDentistRequest,
        auth_token: &str,
    ) -> Result<Dentist, DentistError> {
        debug!("Creating dentist {} {}", request.name, request.last_name);

        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let dentist = self
            .api
            .request(Method::POST, "/odontologos", Some(auth_token), Some(body))
            .await?;

        Ok(dentist)
    }

    pub async fn update(
        &self,
        request: UpdateDentistRequest,
        auth_token: &str,
    ) -> Result<Dentist, DentistError> {
        debug!("Updating dentist {}", request.id);

        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let dentist = self
            .api
            .request(Method::PUT, "/odontologos", Some(auth_token), Some(body))
            .await?;

        Ok(dentist)
    }

    pub async fn delete(&self, id: i64, auth_token: &str) -> Result<(), DentistError> {
        debug!("Deleting dentist {}", id);

        let path = format!("/odontologos/{}", id);
        self.api
            .request_text(Method::DELETE, &path, Some(auth_token), None)
            .await
            .map_err(|e| match e {
                ApiError::NotFound(_) => DentistError::NotFound,
                other => DentistError::Api(other),
            })?;

        Ok(())
    }
}
