//! # hr-store: Storage Layer for HR Ledger
//!
//! This crate owns every filesystem operation in the system: the single
//! roster JSON document and the per-employee payslip artifacts.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        HR Ledger Data Flow                              │
//! │                                                                         │
//! │  Menu option (add / update / delete / export ...)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     hr-store (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ EmployeeStore │    │   registry    │    │PayslipArchive│  │   │
//! │  │   │  (roster.rs)  │    │ (registry.rs) │    │ (payslip.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ add/find/     │───►│ load_roster   │    │ export/read  │  │   │
//! │  │   │ update/delete │    │ save_roster   │    │ rekey/remove │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                    │                            │
//! │       ▼                                    ▼                            │
//! │  angajati.json                 fluturasi_angajati/fluturas_<cnp>.json  │
//! │  (whole roster, rewritten      (one artifact per employee,             │
//! │   after every mutation)         last write wins)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`error`] - Storage error types
//! - [`registry`] - Roster document load/save
//! - [`roster`] - The record store (CRUD, filters)
//! - [`payslip`] - Payslip artifact archive
//!
//! ## Consistency Rule
//!
//! Every mutating operation leaves the collection either fully updated
//! and fully persisted, or fully unchanged. When a save fails the
//! in-memory mutation is rolled back and the error is returned to the
//! caller; nothing fails silently.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod payslip;
pub mod registry;
pub mod roster;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use payslip::{PayslipArchive, PayslipArtifact};
pub use roster::{DeleteOutcome, EmployeeStore, EmployeeUpdate, UpdateOutcome};
