use dentist_cell::Dentist;
use patient_cell::Patient;

use crate::models::{Appointment, AppointmentView};

/// Patients and dentists loaded alongside the appointment list, used to
/// resolve foreign keys to display names. Ids with no match fall back to a
/// placeholder label so that referential drift (a deleted patient whose old
/// appointments are still listed) never breaks the view.
pub struct ClinicRoster {
    patients: Vec<Patient>,
    dentists: Vec<Dentist>,
}

impl ClinicRoster {
    pub fn new(patients: Vec<Patient>, dentists: Vec<Dentist>) -> Self {
        Self { patients, dentists }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn dentists(&self) -> &[Dentist] {
        &self.dentists
    }

    pub fn patient_label(&self, id: i64) -> String {
        self.patients
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.full_name())
            .unwrap_or_else(|| format!("Paciente {}", id))
    }

    pub fn dentist_label(&self, id: i64) -> String {
        self.dentists
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.full_name())
            .unwrap_or_else(|| format!("Odontólogo {}", id))
    }

    fn patient_identity(&self, id: i64) -> String {
        self.patients
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.card_identity.clone())
            .unwrap_or_default()
    }

    /// Joins appointments with their resolved names for rendering and
    /// filtering. The source list is untouched.
    pub fn views(&self, appointments: &[Appointment]) -> Vec<AppointmentView> {
        appointments
            .iter()
            .map(|appointment| AppointmentView {
                appointment: appointment.clone(),
                patient_label: self.patient_label(appointment.patient_id),
                patient_identity: self.patient_identity(appointment.patient_id),
                dentist_label: self.dentist_label(appointment.dentist_id),
            })
            .collect()
    }
}
