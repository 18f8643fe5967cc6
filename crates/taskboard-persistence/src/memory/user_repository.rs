//! In-memory user repository implementation

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use taskboard_domain::{
    errors::{DomainError, DomainResult},
    repositories::UserRepository,
    User, UserId,
};

/// In-memory UserRepository backed by a `RwLock<HashMap>`
///
/// `create` holds the write lock across the uniqueness checks and the
/// insert, which keeps registration race-free.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Create a new empty in-memory user repository
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Get the current count of users (for testing)
    pub fn count(&self) -> usize {
        self.users.read().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> DomainResult<()> {
        // Uniqueness check and insert under one write lock
        let mut users = self.users.write();
        if users.values().any(|u| u.username() == user.username()) {
            return Err(DomainError::DuplicateEntity {
                entity_type: "User".to_string(),
                field: "username".to_string(),
                value: user.username().to_string(),
            });
        }
        if users.values().any(|u| u.email() == user.email()) {
            return Err(DomainError::DuplicateEntity {
                entity_type: "User".to_string(),
                field: "email".to_string(),
                value: user.email().to_string(),
            });
        }
        users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn save(&self, user: &User) -> DomainResult<()> {
        let mut users = self.users.write();
        users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>> {
        let users = self.users.read();
        Ok(users.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let users = self.users.read();
        Ok(users.values().find(|u| u.username() == username).cloned())
    }

    async fn delete(&self, id: &UserId) -> DomainResult<()> {
        let mut users = self.users.write();
        users.remove(id);
        Ok(())
    }
}
