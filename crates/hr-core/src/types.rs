//! # Domain Types
//!
//! Core domain types used throughout HR Ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Employee     │   │   Seniority     │   │ EmployeeSummary │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  cnp (key)      │   │  Junior         │   │  full_name      │       │
//! │  │  nume/prenume   │   │  Mid            │   │  cnp            │       │
//! │  │  varsta         │   │  Senior         │   │  departament    │       │
//! │  │  salar          │   └─────────────────┘   │  senioritate    │       │
//! │  │  departament    │                         └─────────────────┘       │
//! │  │  senioritate    │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Natural-Key Identity
//! An employee is identified by `cnp`, the 13-digit national identity
//! number. It is the lookup key for the roster and the filename key for
//! payslip artifacts. The serde field names match the on-disk JSON
//! document, so the roster file round-trips field-for-field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Seniority
// =============================================================================

/// Experience level of an employee.
///
/// Serialized lowercase (`"junior"`, `"mid"`, `"senior"`), matching the
/// stored document. Parsing is case-insensitive so menu input like
/// `"JUNIOR"` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    /// Starting out, little professional experience.
    Junior,
    /// Mid-level, significant experience.
    Mid,
    /// Advanced, extensive experience.
    Senior,
}

impl Seniority {
    /// All accepted levels, in display order.
    pub const ALL: [Seniority; 3] = [Seniority::Junior, Seniority::Mid, Seniority::Senior];

    /// Returns the canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Seniority::Junior => "junior",
            Seniority::Mid => "mid",
            Seniority::Senior => "senior",
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Seniority {
    type Err = ValidationError;

    /// Case-insensitive parse; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "junior" => Ok(Seniority::Junior),
            "mid" => Ok(Seniority::Mid),
            "senior" => Ok(Seniority::Senior),
            other => Err(ValidationError::UnknownSeniority {
                actual: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Employee
// =============================================================================

/// One employee record.
///
/// Field names are English in code but serialize to the roster document's
/// names (`cnp`, `nume`, `prenume`, `varsta`, `salar`, `departament`,
/// `senioritate`). Every field is validated before a record is allowed
/// into the store; see [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// 13-digit national identity number - unique natural key.
    #[serde(rename = "cnp")]
    pub identity_number: String,

    /// Last name, title-cased.
    #[serde(rename = "nume")]
    pub last_name: String,

    /// First name, title-cased.
    #[serde(rename = "prenume")]
    pub first_name: String,

    /// Age in years, at least 18.
    #[serde(rename = "varsta")]
    pub age: u32,

    /// Gross monthly salary, at least the configured legal minimum.
    #[serde(rename = "salar")]
    pub gross_salary: f64,

    /// Department code, uppercased, alphanumeric.
    #[serde(rename = "departament")]
    pub department: String,

    /// Experience level.
    #[serde(rename = "senioritate")]
    pub seniority: Seniority,
}

impl Employee {
    /// Returns "Last First" as displayed in listings and payslips.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Projects the record into its listing summary.
    pub fn summary(&self) -> EmployeeSummary {
        EmployeeSummary {
            full_name: self.full_name(),
            identity_number: self.identity_number.clone(),
            department: self.department.clone(),
            seniority: self.seniority,
        }
    }
}

// =============================================================================
// Employee Summary
// =============================================================================

/// Compact projection of an employee for list output.
///
/// Produced by [`Employee::summary`]; carries no salary or age data so the
/// roster listing stays terse.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeSummary {
    pub full_name: String,
    pub identity_number: String,
    pub department: String,
    pub seniority: Seniority,
}

impl fmt::Display for EmployeeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | CNP: {} | Department: {} | Seniority: {}",
            self.full_name, self.identity_number, self.department, self.seniority
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            identity_number: "1234567890123".to_string(),
            last_name: "Popescu".to_string(),
            first_name: "Ion".to_string(),
            age: 30,
            gross_salary: 5000.0,
            department: "IT".to_string(),
            seniority: Seniority::Mid,
        }
    }

    #[test]
    fn test_seniority_parse_case_insensitive() {
        assert_eq!("junior".parse::<Seniority>().unwrap(), Seniority::Junior);
        assert_eq!("JUNIOR".parse::<Seniority>().unwrap(), Seniority::Junior);
        assert_eq!(" Senior ".parse::<Seniority>().unwrap(), Seniority::Senior);
        assert!("lead".parse::<Seniority>().is_err());
        assert!("".parse::<Seniority>().is_err());
    }

    #[test]
    fn test_seniority_display_round_trip() {
        for level in Seniority::ALL {
            assert_eq!(level.as_str().parse::<Seniority>().unwrap(), level);
        }
    }

    #[test]
    fn test_employee_serializes_to_document_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["cnp"], "1234567890123");
        assert_eq!(json["nume"], "Popescu");
        assert_eq!(json["prenume"], "Ion");
        assert_eq!(json["varsta"], 30);
        assert_eq!(json["salar"], 5000.0);
        assert_eq!(json["departament"], "IT");
        assert_eq!(json["senioritate"], "mid");
    }

    #[test]
    fn test_employee_json_round_trip() {
        let original = sample();
        let json = serde_json::to_string(&original).unwrap();
        let restored: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_full_name_and_summary() {
        let employee = sample();
        assert_eq!(employee.full_name(), "Popescu Ion");

        let summary = employee.summary();
        assert_eq!(
            summary.to_string(),
            "Popescu Ion | CNP: 1234567890123 | Department: IT | Seniority: mid"
        );
    }
}
