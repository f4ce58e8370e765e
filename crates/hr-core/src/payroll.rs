//! # Payroll Module
//!
//! Gross-to-net payslip math and salary totals.
//!
//! ## The Breakdown Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GROSS → NET                                                            │
//! │                                                                         │
//! │  gross ──► social  = gross × social_rate        (25%)                  │
//! │        ──► health  = gross × health_rate        (10%)                  │
//! │        ──► taxable = gross − social − health                           │
//! │        ──► tax     = taxable × income_tax_rate  (10%)                  │
//! │        ──► net     = taxable − tax                                     │
//! │                                                                         │
//! │  Identity: net = gross − social − health − tax  (pre-rounding)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Discipline
//! All values are computed and held unrounded. Rounding to 2 decimals
//! happens once, at the display/export boundary, via
//! [`PayslipBreakdown::rounded`]. Internal comparisons never see rounded
//! values.
//!
//! ## Usage
//! ```rust
//! use hr_core::payroll::compute_breakdown;
//! use hr_core::policy::PayrollPolicy;
//!
//! let slip = compute_breakdown(4050.0, &PayrollPolicy::default());
//! assert_eq!(slip.rounded().social, 1012.5); // 25% of gross
//! ```

use crate::policy::PayrollPolicy;
use crate::types::Employee;

// =============================================================================
// Payslip Breakdown
// =============================================================================

/// The derived gross-to-net figures for one salary.
///
/// This is a pure function result, never persisted in the roster. It is
/// recomputed on demand and optionally externalized as a payslip artifact
/// (see hr-store).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayslipBreakdown {
    /// Gross salary the breakdown was computed from.
    pub gross: f64,
    /// Social security contribution (fraction of gross).
    pub social: f64,
    /// Health insurance contribution (fraction of gross).
    pub health: f64,
    /// Taxable base: gross − social − health.
    pub taxable: f64,
    /// Income tax (fraction of the taxable base).
    pub tax: f64,
    /// Net salary: taxable − tax.
    pub net: f64,
}

impl PayslipBreakdown {
    /// Returns a copy with every figure rounded to 2 decimal places.
    ///
    /// Use only at the display/export boundary.
    pub fn rounded(&self) -> PayslipBreakdown {
        PayslipBreakdown {
            gross: round2(self.gross),
            social: round2(self.social),
            health: round2(self.health),
            taxable: round2(self.taxable),
            tax: round2(self.tax),
            net: round2(self.net),
        }
    }
}

// =============================================================================
// Breakdown Computation
// =============================================================================

/// Computes the full payslip breakdown for a gross salary.
///
/// Pure function of `gross` and the policy rates; see the module docs for
/// the formula. The result is unrounded.
///
/// ## Example
/// ```rust
/// use hr_core::payroll::compute_breakdown;
/// use hr_core::policy::PayrollPolicy;
///
/// let slip = compute_breakdown(5000.0, &PayrollPolicy::default());
/// assert_eq!(slip.social, 1250.0);  // 25%
/// assert_eq!(slip.health, 500.0);   // 10%
/// assert_eq!(slip.taxable, 3250.0);
/// assert_eq!(slip.tax, 325.0);      // 10% of taxable
/// assert_eq!(slip.net, 2925.0);
/// ```
pub fn compute_breakdown(gross: f64, policy: &PayrollPolicy) -> PayslipBreakdown {
    let social = policy.social_rate.apply(gross);
    let health = policy.health_rate.apply(gross);
    let taxable = gross - social - health;
    let tax = policy.income_tax_rate.apply(taxable);
    let net = taxable - tax;

    PayslipBreakdown {
        gross,
        social,
        health,
        taxable,
        tax,
        net,
    }
}

// =============================================================================
// Salary Totals
// =============================================================================

/// Sums gross salaries over the whole collection.
///
/// Returns 0.0 for an empty collection.
pub fn total_gross(employees: &[Employee]) -> f64 {
    employees.iter().map(|e| e.gross_salary).sum()
}

/// Sums gross salaries for one department.
///
/// The department match is case-insensitive. Returns the total and how
/// many records matched; a count of 0 means the department does not
/// exist, which the caller reports.
pub fn total_gross_for_department(employees: &[Employee], department: &str) -> (f64, usize) {
    let mut total = 0.0;
    let mut matched = 0;

    for employee in employees {
        if employee.department.eq_ignore_ascii_case(department) {
            total += employee.gross_salary;
            matched += 1;
        }
    }

    (total, matched)
}

// =============================================================================
// Rounding
// =============================================================================

/// Rounds to 2 decimal places, half away from zero.
///
/// This is the only rounding used anywhere in the system; payslip
/// artifacts and on-screen figures both go through it.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Seniority;

    fn employee(identity: &str, salary: f64, department: &str) -> Employee {
        Employee {
            identity_number: identity.to_string(),
            last_name: "Popescu".to_string(),
            first_name: "Ion".to_string(),
            age: 30,
            gross_salary: salary,
            department: department.to_string(),
            seniority: Seniority::Junior,
        }
    }

    #[test]
    fn test_breakdown_known_values() {
        let slip = compute_breakdown(5000.0, &PayrollPolicy::default());
        assert_eq!(slip.gross, 5000.0);
        assert_eq!(slip.social, 1250.0);
        assert_eq!(slip.health, 500.0);
        assert_eq!(slip.taxable, 3250.0);
        assert_eq!(slip.tax, 325.0);
        assert_eq!(slip.net, 2925.0);
    }

    /// net = gross − social − health − tax must hold exactly before
    /// rounding, and every component must be non-negative.
    #[test]
    fn test_breakdown_identity_holds() {
        let policy = PayrollPolicy::default();
        for gross in [4050.0, 4051.37, 5000.0, 123456.78, 1_000_000.0] {
            let slip = compute_breakdown(gross, &policy);
            let reconstructed = slip.gross - slip.social - slip.health - slip.tax;
            assert!(
                (slip.net - reconstructed).abs() < 1e-9,
                "identity broken for gross {gross}"
            );
            assert!(slip.social >= 0.0);
            assert!(slip.health >= 0.0);
            assert!(slip.tax >= 0.0);
            assert!(slip.net >= 0.0);
        }
    }

    #[test]
    fn test_breakdown_rounded() {
        let slip = compute_breakdown(4051.37, &PayrollPolicy::default());
        let rounded = slip.rounded();
        // 25% of 4051.37 = 1012.8425 → 1012.84
        assert_eq!(rounded.social, 1012.84);
        // 10% of 4051.37 = 405.137 → 405.14
        assert_eq!(rounded.health, 405.14);
    }

    #[test]
    fn test_total_gross_empty_is_zero() {
        assert_eq!(total_gross(&[]), 0.0);
    }

    #[test]
    fn test_total_gross_sums_all() {
        let staff = vec![
            employee("1000000000001", 4050.0, "IT"),
            employee("1000000000002", 5000.0, "HR"),
            employee("1000000000003", 6000.0, "IT"),
        ];
        assert_eq!(total_gross(&staff), 15050.0);
    }

    #[test]
    fn test_department_total_case_insensitive() {
        let staff = vec![
            employee("1000000000001", 4050.0, "IT"),
            employee("1000000000002", 5000.0, "HR"),
            employee("1000000000003", 6000.0, "IT"),
        ];

        let (total, matched) = total_gross_for_department(&staff, "it");
        assert_eq!(total, 10050.0);
        assert_eq!(matched, 2);
    }

    #[test]
    fn test_department_total_missing_department() {
        let staff = vec![employee("1000000000001", 4050.0, "IT")];
        let (total, matched) = total_gross_for_department(&staff, "SALES");
        assert_eq!(total, 0.0);
        assert_eq!(matched, 0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1012.8425), 1012.84);
        assert_eq!(round2(405.137), 405.14);
        assert_eq!(round2(2.005), 2.01);
        assert_eq!(round2(-4.567), -4.57);
        assert_eq!(round2(0.0), 0.0);
    }
}
