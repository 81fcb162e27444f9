pub mod guards;
pub mod models;
pub mod services;

pub use guards::{GuardOutcome, RouteGuard};
pub use services::account::AuthService;
pub use services::credentials::CredentialStore;
pub use services::session::SessionStore;
