use serde::{Deserialize, Serialize};

use shared_models::error::ApiError;
use shared_utils::search::Searchable;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub location: String,
    pub province: String,
}

/// Flat patient record; scheduling carries no semantics here, patients are
/// lookup targets and foreign keys on appointments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "cardIdentity")]
    pub card_identity: String,
    #[serde(default)]
    pub address: Option<Address>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}

impl Searchable for Patient {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.full_name(), self.card_identity, self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "cardIdentity")]
    pub card_identity: String,
    pub address: Address,
}

/// Updates go to `PUT /pacientes` with the id in the body; the API has no
/// per-id update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePatientRequest {
    pub id: i64,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "cardIdentity")]
    pub card_identity: String,
    pub address: Address,
}

#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    /// The server rejects a second patient with the same identity number;
    /// the message is carried so the screen can show it verbatim.
    #[error("{0}")]
    DuplicateIdentity(String),

    #[error("Patient not found")]
    NotFound,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl PatientError {
    pub fn is_auth(&self) -> bool {
        matches!(self, PatientError::Api(api) if api.is_auth())
    }
}
