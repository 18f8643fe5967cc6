//! User entity representing a registered account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::UserId;

/// A registered user account.
///
/// Holds only the bcrypt hash of the password, never the plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user, validating username and email
    pub fn new(username: String, email: String, password_hash: String) -> DomainResult<Self> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(DomainError::validation("username", "must not be empty"));
        }
        if !email.contains('@') || !email.contains('.') {
            return Err(DomainError::validation("email", "invalid email format"));
        }

        let now = Utc::now();
        Ok(Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get user ID
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Get username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get email
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Get the stored password hash
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Get created timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get updated timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_email() {
        let result = User::new(
            "alice".to_string(),
            "not-an-email".to_string(),
            "hash".to_string(),
        );
        assert!(matches!(result, Err(DomainError::ValidationError { .. })));
    }

    #[test]
    fn test_new_rejects_blank_username() {
        let result = User::new(
            "  ".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_accepts_valid_user() {
        let user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        )
        .unwrap();
        assert_eq!(user.username(), "alice");
        assert_eq!(user.email(), "alice@example.com");
    }
}
