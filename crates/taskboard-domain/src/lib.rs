//! Taskboard domain layer
//!
//! Core entities (`Task`, `User`), value objects, repository interfaces,
//! and the statistics aggregation that backs the dashboard report.
//! This crate holds no infrastructure: repositories are traits implemented
//! by `taskboard-persistence`, and the aggregator is a pure function.

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod stats;
pub mod value_objects;

pub use entities::{Task, User};
pub use errors::{DomainError, DomainResult};
pub use repositories::{TaskRepository, UserRepository};
pub use stats::TaskStatistics;
pub use value_objects::{Priority, TaskId, TaskStatus, UserId};
