//! Taskboard API server binary

use std::sync::Arc;

use taskboard_api::{ApiConfig, ApiServer, AppState};
use taskboard_persistence::{InMemoryTaskRepository, InMemoryUserRepository};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ApiConfig::from_env();
    let state = AppState::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(InMemoryUserRepository::new()),
        config.auth_config(),
    );

    ApiServer::new(config).run(state).await
}
