//! # Error Types
//!
//! Validation error types for hr-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hr-core errors (this file)                                            │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  hr-store errors (separate crate)                                      │
//! │  └── StoreError       - Persistence and record-store failures          │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → menu loop reports and continues  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Every variant is recoverable - the menu re-prompts, nothing is fatal

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a field of an employee record doesn't meet
/// requirements. The interactive layer catches them and re-prompts; the
/// store refuses to persist a record carrying any of them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Invalid format (wrong character class, wrong length).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Employee is younger than the legal working age.
    #[error("age must be at least {min} (got {actual})")]
    AgeBelowMinimum { min: u32, actual: u32 },

    /// Gross salary is below the configured legal minimum.
    #[error("gross salary must be at least {minimum:.2} (got {actual:.2})")]
    SalaryBelowMinimum { minimum: f64, actual: f64 },

    /// Seniority value is not in the accepted set.
    #[error("seniority must be one of junior, mid, senior (got '{actual}')")]
    UnknownSeniority { actual: String },
}

impl ValidationError {
    /// Creates a Required error for a given field name.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::required("cnp");
        assert_eq!(err.to_string(), "cnp is required");

        let err = ValidationError::TooShort {
            field: "last name".to_string(),
            min: 3,
        };
        assert_eq!(err.to_string(), "last name must be at least 3 characters");

        let err = ValidationError::SalaryBelowMinimum {
            minimum: 4050.0,
            actual: 3000.0,
        };
        assert_eq!(
            err.to_string(),
            "gross salary must be at least 4050.00 (got 3000.00)"
        );
    }

    #[test]
    fn test_unknown_seniority_message() {
        let err = ValidationError::UnknownSeniority {
            actual: "lead".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "seniority must be one of junior, mid, senior (got 'lead')"
        );
    }
}
