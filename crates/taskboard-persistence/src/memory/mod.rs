//! In-memory repository implementations
//!
//! Thread-safe backends used for development and tests.

pub mod task_repository;
pub mod user_repository;

pub use task_repository::InMemoryTaskRepository;
pub use user_repository::InMemoryUserRepository;
