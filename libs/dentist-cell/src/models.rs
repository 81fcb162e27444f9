use serde::{Deserialize, Serialize};

use shared_models::error::ApiError;
use shared_utils::search::Searchable;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dentist {
    pub id: i64,
    /// Professional license number.
    pub registration: String,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

impl Dentist {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}

impl Searchable for Dentist {
    fn search_text(&self) -> String {
        format!("{} {}", self.full_name(), self.registration)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDentistRequest {
    pub registration: String,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDentistRequest {
    pub id: i64,
    pub registration: String,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DentistError {
    #[error("Dentist not found")]
    NotFound,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl DentistError {
    pub fn is_auth(&self) -> bool {
        matches!(self, DentistError::Api(api) if api.is_auth())
    }
}
