use std::sync::Arc;

use reqwest::Method;
use tracing::debug;

use shared_gateway::ApiClient;
use shared_models::error::ApiError;

use crate::models::{CreatePatientRequest, Patient, PatientError, UpdatePatientRequest};

const DUPLICATE_IDENTITY_MARKER: &str = "Ya existe";

pub struct PatientService {
    api: Arc<ApiClient>,
}

impl PatientService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, auth_token: &str) -> Result<Vec<Patient>, PatientError> {
        debug!("Fetching patient list");

        let patients = self
            .api
            .request(Method::GET, "/pacientes", Some(auth_token), None)
            .await?;

        Ok(patients)
    }

    /// Identity-number uniqueness is enforced server-side; the 400 carrying
    /// the duplicate message maps to its own variant so the screen can tell
    /// it apart from other validation failures.
    pub async fn create(
        &self,
        request: CreatePatientRequest,
        auth_token: &str,
    ) -> Result<Patient, PatientError> {
        debug!("Creating patient {} {}", request.name, request.last_name);

        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let patient = self
            .api
            .request(Method::POST, "/pacientes", Some(auth_token), Some(body))
            .await
            .map_err(|e| match e {
                ApiError::Validation(msg) if msg.contains(DUPLICATE_IDENTITY_MARKER) => {
                    PatientError::DuplicateIdentity(msg)
                }
                other => PatientError::Api(other),
            })?;

        Ok(patient)
    }

    /// The update endpoint answers with an empty body.
    pub async fn update(
        &self,
        request: UpdatePatientRequest,
        auth_token: &str,
    ) -> Result<(), PatientError> {
        debug!("Updating patient {}", request.id);

        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        self.api
            .request_text(Method::PUT, "/pacientes", Some(auth_token), Some(body))
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i64, auth_token: &str) -> Result<(), PatientError> {
        debug!("Deleting patient {}", id);

        let path = format!("/pacientes/{}", id);
        self.api
            .request_text(Method::DELETE, &path, Some(auth_token), None)
            .await
            .map_err(|e| match e {
                ApiError::NotFound(_) => PatientError::NotFound,
                other => PatientError::Api(other),
            })?;

        Ok(())
    }
}
