//! Profile store error types.

use entities::ProfileId;
use thiserror::Error;
use validation::ValidationError;

/// Errors that can occur during profile store operations.
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    /// A profile with the same id is already stored.
    #[error("Profile already exists: {id}")]
    DuplicateId { id: ProfileId },

    /// No profile has the given id.
    #[error("Profile not found: {id}")]
    NotFound { id: ProfileId },

    /// The id counter has reached `ProfileId::MAX`.
    #[error("No profile ids left after {last}")]
    IdsExhausted { last: ProfileId },

    /// A draft submitted through an operation failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProfileStoreError {
    /// Creates a not found error.
    pub fn not_found(id: ProfileId) -> Self {
        Self::NotFound { id }
    }

    /// Creates an ids exhausted error.
    pub fn ids_exhausted(last: ProfileId) -> Self {
        Self::IdsExhausted { last }
    }

    /// Creates a duplicate id error.
    pub fn duplicate_id(id: ProfileId) -> Self {
        Self::DuplicateId { id }
    }
}

/// Result type for profile store operations.
pub type ProfileStoreResult<T> = Result<T, ProfileStoreError>;
