use std::sync::Arc;

use chrono::NaiveDateTime;
use reqwest::Method;
use tracing::{debug, warn};

use shared_gateway::ApiClient;
use shared_models::error::ApiError;
use shared_utils::datetime::format_minutes;

use crate::models::{
    Appointment, AppointmentError, CreateAppointmentRequest, UpdateAppointmentRequest,
};

/// Client side of appointment scheduling. The availability pre-check is
/// advisory: it closes the common double-booking path inside one session,
/// while the server stays the final arbiter (a concurrent session can still
/// take the slot between our check and our create).
pub struct AppointmentService {
    api: Arc<ApiClient>,
}

impl AppointmentService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, auth_token: &str) -> Result<Vec<Appointment>, AppointmentError> {
        debug!("Fetching appointment list");

        let appointments = self
            .api
            .request(Method::GET, "/turnos", Some(auth_token), None)
            .await?;

        Ok(appointments)
    }

    /// Asks the server whether the dentist's slot at `date` is free. The
    /// boolean answer is authoritative; no overlap arithmetic happens here.
    pub async fn check_availability(
        &self,
        dentist_id: i64,
        date: NaiveDateTime,
        auth_token: &str,
    ) -> Result<bool, AppointmentError> {
        debug!("Checking availability for dentist {} at {}", dentist_id, date);

        let path = format!(
            "/turnos/check-availability?dentistId={}&dateTime={}",
            dentist_id,
            urlencoding::encode(&format_minutes(&date))
        );

        let available: bool = self
            .api
            .request(Method::GET, &path, Some(auth_token), None)
            .await?;

        Ok(available)
    }

    /// Books a new appointment in two explicit steps: the availability check
    /// runs to completion first, and the create request is only issued when
    /// the answer was "free". Editing an existing appointment never goes
    /// through here.
    pub async fn schedule(
        &self,
        request: CreateAppointmentRequest,
        auth_token: &str,
    ) -> Result<Appointment, AppointmentError> {
        let available = self
            .check_availability(request.dentist_id, request.date, auth_token)
            .await?;

        if !available {
            warn!(
                "Slot taken for dentist {} at {}",
                request.dentist_id, request.date
            );
            return Err(AppointmentError::SlotNotAvailable);
        }

        self.create(request, auth_token).await
    }

    async fn create(
        &self,
        request: CreateAppointmentRequest,
        auth_token: &str,
    ) -> Result<Appointment, AppointmentError> {
        debug!(
            "Creating appointment for patient {} with dentist {}",
            request.patient_id, request.dentist_id
        );

        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let appointment = self
            .api
            .request(Method::POST, "/turnos", Some(auth_token), Some(body))
            .await?;

        Ok(appointment)
    }

    /// Edits skip the availability pre-check: re-checking would reject every
    /// edit that keeps its own slot, and the endpoint cannot exclude an
    /// appointment from its own answer. Conflict detection on edit is the
    /// server's call, if it makes one.
    pub async fn update(
        &self,
        request: UpdateAppointmentRequest,
        auth_token: &str,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Updating appointment {}", request.id);

        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let appointment = self
            .api
            .request(Method::PUT, "/turnos", Some(auth_token), Some(body))
            .await
            .map_err(|e| match e {
                ApiError::NotFound(_) => AppointmentError::NotFound,
                other => AppointmentError::Api(other),
            })?;

        Ok(appointment)
    }

    pub async fn delete(&self, id: i64, auth_token: &str) -> Result<(), AppointmentError> {
        debug!("Deleting appointment {}", id);

        let path = format!("/turnos/{}", id);
        self.api
            .request_text(Method::DELETE, &path, Some(auth_token), None)
            .await
            .map_err(|e| match e {
                ApiError::NotFound(_) => AppointmentError::NotFound,
                other => AppointmentError::Api(other),
            })?;

        Ok(())
    }
}
