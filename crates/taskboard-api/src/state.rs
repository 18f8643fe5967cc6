//! Application state for the API server

use std::sync::Arc;

use taskboard_domain::{TaskRepository, UserRepository};

use crate::auth::AuthConfig;

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Task store
    pub tasks: Arc<dyn TaskRepository>,
    /// User store
    pub users: Arc<dyn UserRepository>,
    /// Authentication configuration
    pub auth: Arc<AuthConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(
        tasks: Arc<dyn TaskRepository>,
        users: Arc<dyn UserRepository>,
        auth: AuthConfig,
    ) -> Self {
        Self {
            tasks,
            users,
            auth: Arc::new(auth),
            start_time: std::time::Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
