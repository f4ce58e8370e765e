//! # Storage Error Types
//!
//! Error types for roster and artifact operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the domain cases on top               │
//! │       │                      (NotFound, Duplicate, Aborted)            │
//! │       ▼                                                                 │
//! │  Menu loop ← Reports the message and returns to the prompt             │
//! │                                                                         │
//! │  Nothing here is fatal: a load failure degrades to an empty roster,    │
//! │  a save failure is rolled back and reported.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hr_core::ValidationError;
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record (or artifact) exists for the given identity number.
    #[error("no employee found for identity number {cnp}")]
    NotFound { cnp: String },

    /// The identity number already belongs to another record.
    #[error("identity number {cnp} already belongs to another employee")]
    Duplicate { cnp: String },

    /// A delete was requested without confirmation; nothing was changed.
    #[error("operation aborted: deletion was not confirmed")]
    Aborted,

    /// A field failed re-validation at the store boundary.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The document or artifact could not be encoded/decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Creates a NotFound error for a given identity number.
    pub fn not_found(cnp: impl Into<String>) -> Self {
        StoreError::NotFound { cnp: cnp.into() }
    }

    /// Creates a Duplicate error for a given identity number.
    pub fn duplicate(cnp: impl Into<String>) -> Self {
        StoreError::Duplicate { cnp: cnp.into() }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::not_found("1234567890123").to_string(),
            "no employee found for identity number 1234567890123"
        );
        assert_eq!(
            StoreError::duplicate("1234567890123").to_string(),
            "identity number 1234567890123 already belongs to another employee"
        );
        assert_eq!(
            StoreError::Aborted.to_string(),
            "operation aborted: deletion was not confirmed"
        );
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let err: StoreError = ValidationError::required("name").into();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}
