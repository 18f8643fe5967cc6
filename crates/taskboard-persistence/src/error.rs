//! Persistence layer error types

use thiserror::Error;

/// Errors that can occur during persistence operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PersistenceError {
    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}

/// Convert persistence errors to domain errors
impl From<PersistenceError> for taskboard_domain::DomainError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound { entity_type, id } => {
                taskboard_domain::DomainError::EntityNotFound {
                    entity_type: entity_type.to_string(),
                    id,
                }
            }
            PersistenceError::Storage(msg) => {
                taskboard_domain::DomainError::BusinessRuleViolation {
                    rule: format!("Infrastructure error: {}", msg),
                }
            }
        }
    }
}
