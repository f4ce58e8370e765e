//! # HR Ledger Terminal Application Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         HR Ledger CLI                                   │
//! │                                                                         │
//! │  main.rs ────► Sets up logging, policy, store; hands off to the menu   │
//! │                                                                         │
//! │  menu.rs ────► Numbered dispatch 0-12, one handler per option          │
//! │                                                                         │
//! │  prompt.rs ──► Interactive retry loops over the hr-core predicates     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging), filtered by `RUST_LOG` (default: warn)
//! 2. Construct the payroll policy
//! 3. Open the store (loads `angajati.json`, tolerant of missing/corrupt)
//! 4. Run the menu loop until the user picks 0

mod menu;
mod prompt;

use hr_core::PayrollPolicy;
use hr_store::EmployeeStore;
use tracing_subscriber::EnvFilter;

/// Roster document in the working directory.
const ROSTER_PATH: &str = "angajati.json";

/// Directory holding per-employee payslip artifacts.
const ARTIFACTS_DIR: &str = "fluturasi_angajati";

fn main() {
    // Logging goes to stderr so it never interleaves with the menu.
    // Default to warnings only; RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let policy = PayrollPolicy::default();
    let mut store = EmployeeStore::open(ROSTER_PATH, ARTIFACTS_DIR, policy);

    menu::run(&mut store);
}
