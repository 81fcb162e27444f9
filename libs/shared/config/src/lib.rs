use std::env;
use std::path::PathBuf;

use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the clinic API, without a trailing slash.
    pub api_base_url: String,
    /// The single credential slot: one file holding the bearer token.
    pub credentials_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("CLINICA_API_URL").unwrap_or_else(|_| {
                warn!("CLINICA_API_URL not set, using http://localhost:8080");
                "http://localhost:8080".to_string()
            }),
            credentials_path: env::var("CLINICA_CREDENTIALS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| Self::default_credentials_path()),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    fn default_credentials_path() -> PathBuf {
        match env::var("HOME") {
            Ok(home) => PathBuf::from(home).join(".clinica_dental").join("credential"),
            Err(_) => {
                warn!("HOME not set, storing the credential in the working directory");
                PathBuf::from(".clinica_credential")
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty()
    }
}
