use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use shared_models::error::ApiError;
use shared_utils::search::Searchable;

/// Appointments for one dentist occupy fixed-width slots of this many
/// minutes; the availability endpoint owns the overlap arithmetic, the
/// client only surfaces the width in messages.
pub const SLOT_MINUTES: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub dentist_id: i64,
    #[serde(with = "shared_utils::datetime::iso_local")]
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient_id: i64,
    pub dentist_id: i64,
    #[serde(with = "shared_utils::datetime::iso_local")]
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub id: i64,
    pub patient_id: i64,
    pub dentist_id: i64,
    #[serde(with = "shared_utils::datetime::iso_local")]
    pub date: NaiveDateTime,
}

/// One appointment joined with its resolved display names, which is what
/// the list screen renders and what the search term matches against.
#[derive(Debug, Clone)]
pub struct AppointmentView {
    pub appointment: Appointment,
    pub patient_label: String,
    pub patient_identity: String,
    pub dentist_label: String,
}

impl Searchable for AppointmentView {
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.patient_label, self.patient_identity, self.dentist_label
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment slot not available")]
    SlotNotAvailable,

    #[error("Appointment not found")]
    NotFound,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AppointmentError {
    pub fn is_auth(&self) -> bool {
        matches!(self, AppointmentError::Api(api) if api.is_auth())
    }
}
