//! # Payslip Artifact Archive
//!
//! One JSON artifact per employee, keyed by identity number, holding a
//! snapshot of a payroll computation. Artifacts live independently of the
//! roster: reading one back works even after the employee is deleted.
//!
//! ## Artifact Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fluturasi_angajati/fluturas_<cnp>.json                                 │
//! │                                                                         │
//! │  export  → compute breakdown, write file (overwrite, last write wins)  │
//! │  read    → load it back for display; NotFound when no file exists      │
//! │  rekey   → identity change: rewrite cnp inside, move to new filename   │
//! │  remove  → delete the file (employee deletion, caller's choice)        │
//! │                                                                         │
//! │  No cross-artifact consistency is guaranteed; each file stands alone.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use hr_core::payroll::{compute_breakdown, round2};
use hr_core::{Employee, PayrollPolicy};

use crate::error::{StoreError, StoreResult};

/// Filename prefix for payslip artifacts.
const ARTIFACT_PREFIX: &str = "fluturas_";

// =============================================================================
// Payslip Artifact
// =============================================================================

/// The externalized payslip for one employee.
///
/// Money figures are rounded to 2 decimals at export time; the artifact
/// is a display snapshot, not an input to further computation. Field
/// names on disk are the document's stable keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipArtifact {
    #[serde(rename = "cnp")]
    pub identity_number: String,

    #[serde(rename = "nume")]
    pub last_name: String,

    #[serde(rename = "prenume")]
    pub first_name: String,

    #[serde(rename = "departament")]
    pub department: String,

    /// Gross salary the figures were derived from.
    #[serde(rename = "salariu_brut")]
    pub gross: f64,

    /// Social security contribution.
    #[serde(rename = "cas")]
    pub social: f64,

    /// Health insurance contribution.
    #[serde(rename = "cass")]
    pub health: f64,

    /// Income tax on the taxable base.
    #[serde(rename = "impozit")]
    pub tax: f64,

    /// Net salary.
    #[serde(rename = "salariu_net")]
    pub net: f64,
}

impl PayslipArtifact {
    /// Builds the artifact for an employee under the given policy.
    pub fn from_employee(employee: &Employee, policy: &PayrollPolicy) -> Self {
        let slip = compute_breakdown(employee.gross_salary, policy).rounded();

        PayslipArtifact {
            identity_number: employee.identity_number.clone(),
            last_name: employee.last_name.clone(),
            first_name: employee.first_name.clone(),
            department: employee.department.clone(),
            gross: round2(employee.gross_salary),
            social: slip.social,
            health: slip.health,
            tax: slip.tax,
            net: slip.net,
        }
    }
}

// =============================================================================
// Payslip Archive
// =============================================================================

/// The on-disk collection of payslip artifacts.
///
/// ## Usage
/// ```rust,no_run
/// use hr_store::PayslipArchive;
/// # use hr_core::{Employee, PayrollPolicy, Seniority};
///
/// let archive = PayslipArchive::new("fluturasi_angajati");
/// # let employee = Employee {
/// #     identity_number: "1234567890123".into(), last_name: "Popescu".into(),
/// #     first_name: "Ion".into(), age: 30, gross_salary: 5000.0,
/// #     department: "IT".into(), seniority: Seniority::Mid,
/// # };
/// let path = archive.export(&employee, &PayrollPolicy::default()).unwrap();
/// let artifact = archive.read("1234567890123").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PayslipArchive {
    dir: PathBuf,
}

impl PayslipArchive {
    /// Creates an archive rooted at the given directory.
    ///
    /// The directory itself is created lazily on the first export.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        PayslipArchive { dir: dir.into() }
    }

    /// Returns the archive directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the deterministic artifact path for an identity number.
    pub fn path_for(&self, cnp: &str) -> PathBuf {
        self.dir.join(format!("{ARTIFACT_PREFIX}{cnp}.json"))
    }

    /// Checks whether an artifact exists for the given identity number.
    pub fn exists(&self, cnp: &str) -> bool {
        self.path_for(cnp).exists()
    }

    /// Computes and writes the payslip artifact for an employee.
    ///
    /// Any existing artifact for that identity number is overwritten
    /// unconditionally. Returns the path written.
    pub fn export(&self, employee: &Employee, policy: &PayrollPolicy) -> StoreResult<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let artifact = PayslipArtifact::from_employee(employee, policy);
        let path = self.path_for(&employee.identity_number);

        let json = serde_json::to_string_pretty(&artifact)?;
        fs::write(&path, json)?;

        debug!(cnp = %employee.identity_number, path = %path.display(), "payslip artifact exported");
        Ok(path)
    }

    /// Reads a previously exported artifact back.
    ///
    /// Fails with NotFound when no file exists for that key. The roster
    /// is not consulted: the artifact file is the sole source here.
    pub fn read(&self, cnp: &str) -> StoreResult<PayslipArtifact> {
        let path = self.path_for(cnp);
        if !path.exists() {
            return Err(StoreError::not_found(cnp));
        }

        let contents = fs::read_to_string(&path)?;
        let artifact = serde_json::from_str(&contents)?;
        Ok(artifact)
    }

    /// Moves an artifact from an old identity number to a new one.
    ///
    /// The `cnp` field inside the document is rewritten before the file
    /// is written under the new name; the old file is then removed.
    /// Returns `false` (and does nothing) when no artifact exists for
    /// the old key.
    pub fn rekey(&self, old_cnp: &str, new_cnp: &str) -> StoreResult<bool> {
        let old_path = self.path_for(old_cnp);
        if !old_path.exists() {
            return Ok(false);
        }

        let contents = fs::read_to_string(&old_path)?;
        let mut artifact: PayslipArtifact = serde_json::from_str(&contents)?;
        artifact.identity_number = new_cnp.to_string();

        let new_path = self.path_for(new_cnp);
        let json = serde_json::to_string_pretty(&artifact)?;
        fs::write(&new_path, json)?;
        fs::remove_file(&old_path)?;

        debug!(old = %old_cnp, new = %new_cnp, "payslip artifact re-keyed");
        Ok(true)
    }

    /// Removes the artifact for an identity number, if one exists.
    ///
    /// Returns whether a file was actually deleted.
    pub fn remove(&self, cnp: &str) -> StoreResult<bool> {
        let path = self.path_for(cnp);
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)?;
        debug!(cnp = %cnp, "payslip artifact removed");
        Ok(true)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
