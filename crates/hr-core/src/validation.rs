//! # Validation Module
//!
//! Field-level validation predicates and normalizers for employee records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Menu prompts (apps/cli)                                      │
//! │  ├── Interactive retry loop until the predicate accepts                │
//! │  └── '0' / empty input backs out                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (pure predicates)                                │
//! │  ├── Character-class and range checks                                  │
//! │  └── Normalization (title case, uppercase)                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Record store (hr-store)                                      │
//! │  ├── Re-validates every field before persisting                        │
//! │  └── Uniqueness check on the identity number                           │
//! │                                                                         │
//! │  The predicates are the testable unit; the retry loops are UI glue     │
//! │  that lives outside this crate.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hr_core::validation::{validate_identity_number, normalize_person_name};
//!
//! assert!(validate_identity_number("1234567890123").is_ok());
//! assert_eq!(normalize_person_name(" ion-vlad "), "Ion-Vlad");
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::policy::PayrollPolicy;
use crate::types::Employee;

/// Length of a valid identity number.
pub const IDENTITY_NUMBER_LEN: usize = 13;

/// Minimum accepted age in years.
pub const MINIMUM_AGE: u32 = 18;

/// Minimum name length after trimming.
pub const MIN_NAME_LEN: usize = 3;

/// Minimum department code length.
pub const MIN_DEPARTMENT_LEN: usize = 2;

// =============================================================================
// Identity Number
// =============================================================================

/// Validates an identity number (CNP).
///
/// ## Rules
/// - Exactly 13 characters
/// - ASCII digits only
///
/// This is a format check only; no checksum validation is performed.
///
/// ## Example
/// ```rust
/// use hr_core::validation::validate_identity_number;
///
/// assert!(validate_identity_number("1234567890123").is_ok());
/// assert!(validate_identity_number("123456789012").is_err());  // 12 digits
/// assert!(validate_identity_number("123456789012A").is_err()); // letter
/// ```
pub fn validate_identity_number(cnp: &str) -> ValidationResult<()> {
    if cnp.is_empty() {
        return Err(ValidationError::required("identity number"));
    }

    if !cnp.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::invalid_format(
            "identity number",
            "must contain digits only",
        ));
    }

    if cnp.len() != IDENTITY_NUMBER_LEN {
        return Err(ValidationError::invalid_format(
            "identity number",
            format!("must be exactly {IDENTITY_NUMBER_LEN} digits (got {})", cnp.len()),
        ));
    }

    Ok(())
}

// =============================================================================
// Names
// =============================================================================

/// Validates a first or last name.
///
/// ## Rules
/// - Letters, spaces, and hyphens only (compound names allowed)
/// - At least 3 characters after trimming
pub fn validate_person_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    if !name
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-')
    {
        return Err(ValidationError::invalid_format(
            "name",
            "must contain only letters, spaces, and hyphens",
        ));
    }

    if name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::TooShort {
            field: "name".to_string(),
            min: MIN_NAME_LEN,
        });
    }

    Ok(())
}

/// Normalizes a name to title case.
///
/// Each space- or hyphen-separated part gets an uppercase first letter
/// and lowercase remainder; separators are preserved.
///
/// ## Example
/// ```rust
/// use hr_core::validation::normalize_person_name;
///
/// assert_eq!(normalize_person_name("POPESCU"), "Popescu");
/// assert_eq!(normalize_person_name("ion-vlad"), "Ion-Vlad");
/// assert_eq!(normalize_person_name(" ana maria "), "Ana Maria");
/// ```
pub fn normalize_person_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut at_boundary = true;

    for c in trimmed.chars() {
        if c == ' ' || c == '-' {
            out.push(c);
            at_boundary = true;
        } else if at_boundary {
            out.extend(c.to_uppercase());
            at_boundary = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

// =============================================================================
// Age and Salary
// =============================================================================

/// Validates an age.
///
/// ## Rules
/// - At least 18 years
pub fn validate_age(age: u32) -> ValidationResult<()> {
    if age < MINIMUM_AGE {
        return Err(ValidationError::AgeBelowMinimum {
            min: MINIMUM_AGE,
            actual: age,
        });
    }

    Ok(())
}

/// Validates a gross salary against the policy minimum.
///
/// ## Rules
/// - Must be a finite number
/// - At least `policy.minimum_gross`
pub fn validate_gross_salary(salary: f64, policy: &PayrollPolicy) -> ValidationResult<()> {
    if !salary.is_finite() {
        return Err(ValidationError::invalid_format(
            "gross salary",
            "must be a finite number",
        ));
    }

    if salary < policy.minimum_gross {
        return Err(ValidationError::SalaryBelowMinimum {
            minimum: policy.minimum_gross,
            actual: salary,
        });
    }

    Ok(())
}

// =============================================================================
// Department
// =============================================================================

/// Validates a department code.
///
/// ## Rules
/// - Alphanumeric characters only (no spaces, no symbols)
/// - At least 2 characters
pub fn validate_department(department: &str) -> ValidationResult<()> {
    if department.is_empty() {
        return Err(ValidationError::required("department"));
    }

    if !department.chars().all(|c| c.is_alphanumeric()) {
        return Err(ValidationError::invalid_format(
            "department",
            "must contain only letters and digits",
        ));
    }

    if department.chars().count() < MIN_DEPARTMENT_LEN {
        return Err(ValidationError::TooShort {
            field: "department".to_string(),
            min: MIN_DEPARTMENT_LEN,
        });
    }

    Ok(())
}

/// Normalizes a department code to its stored uppercase form.
pub fn normalize_department(raw: &str) -> String {
    raw.trim().to_uppercase()
}

// =============================================================================
// Whole-Record Validation
// =============================================================================

/// Validates every field of an employee record.
///
/// The record store runs this before persisting any add or update, so a
/// record that bypassed the interactive prompts still cannot reach disk
/// in an invalid state. Uniqueness of the identity number is the store's
/// job, not this function's.
pub fn validate_employee(employee: &Employee, policy: &PayrollPolicy) -> ValidationResult<()> {
    validate_identity_number(&employee.identity_number)?;
    validate_person_name(&employee.last_name)?;
    validate_person_name(&employee.first_name)?;
    validate_age(employee.age)?;
    validate_gross_salary(employee.gross_salary, policy)?;
    validate_department(&employee.department)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
