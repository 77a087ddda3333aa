//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Deleting an absent record, an empty range query, and a failed
/// authentication lookup are successful outcomes and never produce one of
/// these.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record matched the identifier of an update.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The backing storage failed. Never produced by the in-memory stores.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a not found error.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Returns true if this is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
