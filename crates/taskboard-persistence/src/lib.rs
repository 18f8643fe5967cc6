//! Taskboard persistence layer
//!
//! Infrastructure crate implementing the repository interfaces defined in
//! `taskboard-domain`. Ships a thread-safe in-memory backend; a
//! database-backed store plugs into the same traits.

pub mod error;
pub mod memory;

pub use error::PersistenceError;
pub use memory::{InMemoryTaskRepository, InMemoryUserRepository};
