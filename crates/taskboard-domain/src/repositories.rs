//! Repository interfaces for data persistence
//!
//! These interfaces define the contracts for data access.
//! Implementations are provided by infrastructure crates; the domain layer
//! defines only traits, no concrete storage.

use async_trait::async_trait;

use crate::entities::{Task, User};
use crate::errors::DomainResult;
use crate::value_objects::{TaskId, UserId};

/// Repository for task entities
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Save a task (insert or replace)
    async fn save(&self, task: &Task) -> DomainResult<()>;

    /// Find task by ID
    async fn find_by_id(&self, id: &TaskId) -> DomainResult<Option<Task>>;

    /// Find all tasks (the statistics snapshot read)
    async fn find_all(&self) -> DomainResult<Vec<Task>>;

    /// Delete task by ID
    async fn delete(&self, id: &TaskId) -> DomainResult<()>;

    /// Check if task exists
    async fn exists(&self, id: &TaskId) -> DomainResult<bool>;
}

/// Repository for user entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; fails with `DuplicateEntity` when the username
    /// or email is already taken. Check and insert are one atomic step,
    /// so two concurrent registrations cannot both succeed.
    async fn create(&self, user: &User) -> DomainResult<()>;

    /// Save a user (insert or replace)
    async fn save(&self, user: &User) -> DomainResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    /// Delete user by ID
    async fn delete(&self, id: &UserId) -> DomainResult<()>;
}
