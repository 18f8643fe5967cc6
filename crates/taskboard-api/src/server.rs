//! API server configuration and startup

use std::net::SocketAddr;

use crate::{auth::AuthConfig, routes, state::AppState};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Server configuration, read from the environment with defaults
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// JWT signing secret
    pub jwt_secret: String,
    /// Token lifetime in hours
    pub token_ttl_hours: i64,
}

impl ApiConfig {
    /// Read configuration from `TASKBOARD_*` environment variables
    pub fn from_env() -> Self {
        let host = std::env::var("TASKBOARD_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = std::env::var("TASKBOARD_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let jwt_secret = std::env::var("TASKBOARD_JWT_SECRET")
            .unwrap_or_else(|_| "taskboard-dev-secret".to_string());
        let token_ttl_hours = std::env::var("TASKBOARD_TOKEN_TTL_HOURS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_HOURS);

        Self {
            host,
            port,
            jwt_secret,
            token_ttl_hours,
        }
    }

    /// The authentication slice of the configuration
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            jwt_secret: self.jwt_secret.clone(),
            token_ttl_hours: self.token_ttl_hours,
        }
    }

    fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            jwt_secret: "taskboard-dev-secret".to_string(),
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
        }
    }
}

/// API server
pub struct ApiServer {
    config: ApiConfig,
}

impl ApiServer {
    /// Create a server from configuration
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Bind and serve until shutdown
    pub async fn run(self, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
        let app = routes::all_routes(state.clone()).with_state(state);

        let listener = tokio::net::TcpListener::bind(self.config.bind_addr()).await?;
        let addr: SocketAddr = listener.local_addr()?;
        tracing::info!("Taskboard API listening on {}", addr);

        axum::serve(listener, app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.token_ttl_hours, DEFAULT_TOKEN_TTL_HOURS);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_auth_config_slice() {
        let config = ApiConfig::default();
        let auth = config.auth_config();
        assert_eq!(auth.jwt_secret, config.jwt_secret);
        assert_eq!(auth.token_ttl_hours, config.token_ttl_hours);
    }
}
