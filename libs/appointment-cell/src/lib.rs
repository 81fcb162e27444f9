pub mod models;
pub mod services;

pub use models::*;
pub use services::roster::ClinicRoster;
pub use services::scheduling::AppointmentService;
