use std::sync::Arc;

use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod notice;
mod screens;
mod stats;

use auth_cell::{CredentialStore, SessionStore};
use shared_config::AppConfig;
use shared_gateway::ApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Clínica Dental console");

    // Load configuration
    let config = AppConfig::from_env();

    let api = Arc::new(ApiClient::new(&config));
    let session = SessionStore::new(CredentialStore::new(config.credentials_path.clone()));

    let mut app = app::App::new(api, session);
    app.run().await
}
