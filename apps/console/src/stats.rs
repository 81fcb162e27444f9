/// Aggregate counts for the admin dashboard, derived client-side from the
/// three collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClinicStats {
    pub patients: usize,
    pub dentists: usize,
    pub appointments: usize,
}

impl ClinicStats {
    pub fn appointments_per_patient(&self) -> f64 {
        Self::ratio(self.appointments, self.patients)
    }

    pub fn appointments_per_dentist(&self) -> f64 {
        Self::ratio(self.appointments, self.dentists)
    }

    fn ratio(numerator: usize, denominator: usize) -> f64 {
        if denominator == 0 {
            0.0
        } else {
            numerator as f64 / denominator as f64
        }
    }
}
