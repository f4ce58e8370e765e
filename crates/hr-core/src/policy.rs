//! # Payroll Policy
//!
//! Configuration values for validation and payroll math.
//!
//! ## Why a Policy Value?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CONFIGURATION, NOT GLOBALS                                             │
//! │                                                                         │
//! │  Minimum wage and contribution rates are legal parameters, not         │
//! │  constants of the code. They are constructed once at startup and       │
//! │  passed by reference into validation, payroll math, and the store.    │
//! │                                                                         │
//! │  One policy value feeding every call site also makes it impossible     │
//! │  for two code paths to disagree about which rate is social and        │
//! │  which is health.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Default legal minimum gross salary.
pub const DEFAULT_MINIMUM_GROSS: f64 = 4050.0;

// =============================================================================
// Rate
// =============================================================================

/// A payroll rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2500 bps = 25% (social security contribution)
///
/// Storing the rate as an integer keeps the policy exactly representable
/// and comparable; it is only turned into a float at the moment it is
/// applied to a salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Applies the rate to an amount.
    ///
    /// ## Example
    /// ```rust
    /// use hr_core::policy::Rate;
    ///
    /// let social = Rate::from_bps(2500); // 25%
    /// assert_eq!(social.apply(4000.0), 1000.0);
    /// ```
    #[inline]
    pub fn apply(&self, amount: f64) -> f64 {
        amount * self.0 as f64 / 10_000.0
    }
}

// =============================================================================
// Payroll Policy
// =============================================================================

/// The payroll parameters in force for the company.
///
/// ## Fields
/// - `minimum_gross` - legal minimum gross salary; validation floor
/// - `social_rate` - social security contribution, fraction of gross
/// - `health_rate` - health insurance contribution, fraction of gross
/// - `income_tax_rate` - income tax, fraction of the taxable base
///
/// ## Defaults
/// Minimum 4050.00, social 25%, health 10%, income tax 10%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayrollPolicy {
    pub minimum_gross: f64,
    pub social_rate: Rate,
    pub health_rate: Rate,
    pub income_tax_rate: Rate,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        PayrollPolicy {
            minimum_gross: DEFAULT_MINIMUM_GROSS,
            social_rate: Rate::from_bps(2500),     // 25%
            health_rate: Rate::from_bps(1000),     // 10%
            income_tax_rate: Rate::from_bps(1000), // 10%
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
