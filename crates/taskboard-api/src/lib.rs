#![warn(missing_docs)]

//! Taskboard RESTful API
//!
//! Exposes task CRUD, the statistics dashboard report, and JWT-based
//! authentication over the repositories defined in `taskboard-domain`.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{ApiConfig, ApiServer};
pub use state::AppState;
