//! # hr-core: Pure Business Logic for HR Ledger
//!
//! This crate is the heart of HR Ledger. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        HR Ledger Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Terminal Menu (apps/cli)                    │   │
//! │  │    add ──► find ──► update ──► delete ──► payroll reports      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ hr-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  payroll  │  │  policy   │  │ validation│  │   │
//! │  │   │ Employee  │  │ Breakdown │  │  Rates    │  │   rules   │  │   │
//! │  │   │ Seniority │  │  Totals   │  │  Minimum  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO PROMPTS • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    hr-store (Storage Layer)                     │   │
//! │  │          Roster JSON document, payslip artifact files           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Employee, Seniority, EmployeeSummary)
//! - [`policy`] - Payroll configuration (contribution rates, minimum wage)
//! - [`payroll`] - Gross-to-net breakdown and salary totals
//! - [`error`] - Validation error types
//! - [`validation`] - Field-level validation predicates and normalizers
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system and console access is FORBIDDEN here
//! 3. **Explicit Configuration**: Rates and thresholds travel in a
//!    [`policy::PayrollPolicy`] value, never in mutable globals
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use hr_core::payroll::compute_breakdown;
//! use hr_core::policy::PayrollPolicy;
//!
//! let policy = PayrollPolicy::default();
//! let slip = compute_breakdown(5000.0, &policy);
//!
//! // 5000 - 25% social - 10% health = 3250 taxable, minus 10% tax
//! assert_eq!(slip.rounded().net, 2925.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod payroll;
pub mod policy;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use hr_core::Employee` instead of
// `use hr_core::types::Employee`

pub use error::ValidationError;
pub use payroll::PayslipBreakdown;
pub use policy::{PayrollPolicy, Rate};
pub use types::{Employee, EmployeeSummary, Seniority};
