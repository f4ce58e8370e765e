//! # Employee Record Store
//!
//! CRUD operations over the in-memory employee list, with a full roster
//! save after every mutation.
//!
//! ## Mutation Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every mutating operation:                                              │
//! │                                                                         │
//! │  1. validate the incoming fields (hr-core predicates)                  │
//! │  2. apply the change to the in-memory Vec                              │
//! │  3. save the whole roster document                                     │
//! │  4. on save failure: roll the Vec back, return the error               │
//! │                                                                         │
//! │  Result: memory and disk are either both updated or both unchanged.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The collection is an ordered Vec - insertion order is display order -
//! and lookups are linear scans by identity number. At this scale an
//! index would buy nothing.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use hr_core::validation::{
    normalize_department, normalize_person_name, validate_age, validate_department,
    validate_employee, validate_gross_salary, validate_identity_number, validate_person_name,
};
use hr_core::{Employee, EmployeeSummary, PayrollPolicy, Seniority};

use crate::error::{StoreError, StoreResult};
use crate::payslip::PayslipArchive;
use crate::registry::{load_roster, save_roster};

// =============================================================================
// Partial Update
// =============================================================================

/// A partial, per-field update for one employee.
///
/// `None` means "keep the current value". Provided values are validated
/// and normalized by [`EmployeeStore::update`].
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub identity_number: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub age: Option<u32>,
    pub gross_salary: Option<f64>,
    pub department: Option<String>,
    pub seniority: Option<Seniority>,
}

impl EmployeeUpdate {
    /// True when no field is provided.
    pub fn is_empty(&self) -> bool {
        self.identity_number.is_none()
            && self.last_name.is_none()
            && self.first_name.is_none()
            && self.age.is_none()
            && self.gross_salary.is_none()
            && self.department.is_none()
            && self.seniority.is_none()
    }
}

/// What an update actually did.
///
/// The record change itself is durable once [`EmployeeStore::update`]
/// returns `Ok`; these flags cover the side effects around it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// The requested identity change collided with another record and
    /// was skipped; the other provided fields were still applied.
    pub identity_rejected: bool,
    /// An existing payslip artifact was moved to the new identity key.
    pub artifact_rekeyed: bool,
    /// An existing payslip artifact was refreshed with the new figures.
    pub artifact_refreshed: bool,
    /// A payslip artifact operation failed after the roster was already
    /// saved. The update itself succeeded; the artifact may be stale or
    /// stranded under the old key.
    pub artifact_warning: Option<String>,
}

/// What a delete actually did.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    /// The record that was removed from the roster.
    pub removed: Employee,
    /// The payslip artifact was deleted alongside the record.
    pub artifact_removed: bool,
    /// The requested artifact removal failed after the roster was
    /// already saved; the record is gone but the artifact file remains.
    pub artifact_warning: Option<String>,
}

// =============================================================================
// Employee Store
// =============================================================================

/// The record store: owns the employee list for the session and keeps it
/// in lockstep with the roster document and the payslip archive.
///
/// ## Usage
/// ```rust,no_run
/// use hr_core::PayrollPolicy;
/// use hr_store::EmployeeStore;
///
/// let mut store = EmployeeStore::open(
///     "angajati.json",
///     "fluturasi_angajati",
///     PayrollPolicy::default(),
/// );
/// for summary in store.list_all() {
///     println!("{summary}");
/// }
/// ```
#[derive(Debug)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
    roster_path: PathBuf,
    archive: PayslipArchive,
    policy: PayrollPolicy,
}

impl EmployeeStore {
    /// Opens the store, loading the roster document.
    ///
    /// A missing or corrupt roster degrades to an empty collection (see
    /// [`crate::registry::load_roster`]); opening never fails.
    pub fn open(
        roster_path: impl Into<PathBuf>,
        artifacts_dir: impl Into<PathBuf>,
        policy: PayrollPolicy,
    ) -> Self {
        let roster_path = roster_path.into();
        let employees = load_roster(&roster_path);

        EmployeeStore {
            employees,
            roster_path,
            archive: PayslipArchive::new(artifacts_dir),
            policy,
        }
    }

    /// All records, in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// True when the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// The payroll policy in force.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// The payslip artifact archive.
    pub fn archive(&self) -> &PayslipArchive {
        &self.archive
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Adds a new employee.
    ///
    /// Names and department are normalized to their stored forms before
    /// validation. Fails with Duplicate when the identity number is
    /// already taken; the collection and the roster file are left
    /// unchanged on any failure.
    pub fn add(&mut self, candidate: Employee) -> StoreResult<()> {
        let mut candidate = candidate;
        candidate.last_name = normalize_person_name(&candidate.last_name);
        candidate.first_name = normalize_person_name(&candidate.first_name);
        candidate.department = normalize_department(&candidate.department);

        validate_employee(&candidate, &self.policy)?;

        if self.index_of(&candidate.identity_number).is_some() {
            return Err(StoreError::duplicate(&candidate.identity_number));
        }

        self.employees.push(candidate);
        if let Err(err) = self.persist() {
            self.employees.pop();
            return Err(err);
        }

        let added = self.employees.last().map(|e| e.full_name()).unwrap_or_default();
        info!(name = %added, "employee added");
        Ok(())
    }

    /// Finds a record by identity number.
    pub fn find(&self, cnp: &str) -> StoreResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.identity_number == cnp)
            .ok_or_else(|| StoreError::not_found(cnp))
    }

    /// Applies a partial update to the record with the given identity
    /// number.
    ///
    /// Each provided field is re-validated and normalized. A requested
    /// identity change that collides with a different record is skipped
    /// (reported in the outcome) while the remaining fields still apply.
    /// On an accepted identity change, any payslip artifact under the old
    /// key is re-keyed; an artifact that exists after the update is
    /// refreshed so its figures match the record. The roster is saved
    /// before the artifact work; a save failure rolls the record back,
    /// while an artifact failure after the save is reported in the
    /// outcome, not as an error - the update itself already stuck.
    pub fn update(&mut self, cnp: &str, update: EmployeeUpdate) -> StoreResult<UpdateOutcome> {
        let index = self.index_of(cnp).ok_or_else(|| StoreError::not_found(cnp))?;
        let snapshot = self.employees[index].clone();
        let mut outcome = UpdateOutcome::default();

        // Validate everything up front so a bad later field cannot leave
        // half the update applied.
        if let Some(new_cnp) = &update.identity_number {
            validate_identity_number(new_cnp)?;
        }
        if let Some(name) = &update.last_name {
            validate_person_name(name)?;
        }
        if let Some(name) = &update.first_name {
            validate_person_name(name)?;
        }
        if let Some(age) = update.age {
            validate_age(age)?;
        }
        if let Some(salary) = update.gross_salary {
            validate_gross_salary(salary, &self.policy)?;
        }
        if let Some(department) = &update.department {
            validate_department(&normalize_department(department))?;
        }

        let mut new_identity: Option<String> = None;
        if let Some(new_cnp) = &update.identity_number {
            if *new_cnp != snapshot.identity_number {
                let taken = self
                    .employees
                    .iter()
                    .enumerate()
                    .any(|(i, e)| i != index && e.identity_number == *new_cnp);
                if taken {
                    outcome.identity_rejected = true;
                } else {
                    new_identity = Some(new_cnp.clone());
                }
            }
        }

        {
            let record = &mut self.employees[index];
            if let Some(new_cnp) = &new_identity {
                record.identity_number = new_cnp.clone();
            }
            if let Some(name) = &update.last_name {
                record.last_name = normalize_person_name(name);
            }
            if let Some(name) = &update.first_name {
                record.first_name = normalize_person_name(name);
            }
            if let Some(age) = update.age {
                record.age = age;
            }
            if let Some(salary) = update.gross_salary {
                record.gross_salary = salary;
            }
            if let Some(department) = &update.department {
                record.department = normalize_department(department);
            }
            if let Some(seniority) = update.seniority {
                record.seniority = seniority;
            }
        }

        if let Err(err) = self.persist() {
            self.employees[index] = snapshot;
            return Err(err);
        }

        // The roster is durable; now bring the artifact in line. From
        // here on a failure must not look like a failed update.
        if let Some(new_cnp) = &new_identity {
            match self.archive.rekey(&snapshot.identity_number, new_cnp) {
                Ok(moved) => outcome.artifact_rekeyed = moved,
                Err(err) => {
                    warn!(old = %snapshot.identity_number, new = %new_cnp, error = %err, "payslip artifact re-key failed after update");
                    outcome.artifact_warning = Some(err.to_string());
                }
            }
        }
        let record = &self.employees[index];
        if outcome.artifact_warning.is_none() && self.archive.exists(&record.identity_number) {
            match self.archive.export(record, &self.policy) {
                Ok(_) => outcome.artifact_refreshed = true,
                Err(err) => {
                    warn!(cnp = %record.identity_number, error = %err, "payslip artifact refresh failed after update");
                    outcome.artifact_warning = Some(err.to_string());
                }
            }
        }

        info!(cnp = %record.identity_number, "employee updated");
        Ok(outcome)
    }

    /// Deletes the record with the given identity number.
    ///
    /// The caller must pass `confirmed = true`; an unconfirmed delete is
    /// a no-op reported as [`StoreError::Aborted`]. When
    /// `remove_artifact` is set, the payslip artifact (if any) is deleted
    /// too; an artifact removal failure after the roster save is reported
    /// in the outcome rather than as an error, since the record deletion
    /// is already durable.
    pub fn delete(
        &mut self,
        cnp: &str,
        confirmed: bool,
        remove_artifact: bool,
    ) -> StoreResult<DeleteOutcome> {
        let index = self.index_of(cnp).ok_or_else(|| StoreError::not_found(cnp))?;

        if !confirmed {
            return Err(StoreError::Aborted);
        }

        let removed = self.employees.remove(index);
        if let Err(err) = self.persist() {
            self.employees.insert(index, removed);
            return Err(err);
        }

        let mut outcome = DeleteOutcome {
            removed,
            artifact_removed: false,
            artifact_warning: None,
        };
        if remove_artifact {
            match self.archive.remove(cnp) {
                Ok(deleted) => outcome.artifact_removed = deleted,
                Err(err) => {
                    warn!(cnp = %cnp, error = %err, "payslip artifact removal failed after delete");
                    outcome.artifact_warning = Some(err.to_string());
                }
            }
        }

        info!(cnp = %cnp, name = %outcome.removed.full_name(), "employee deleted");
        Ok(outcome)
    }

    /// Summary projections of all records, in insertion order.
    ///
    /// The iterator is restartable (call again for a fresh pass) and
    /// does not mutate.
    pub fn list_all(&self) -> impl Iterator<Item = EmployeeSummary> + '_ {
        self.employees.iter().map(Employee::summary)
    }

    // =========================================================================
    // Filters and Projections
    // =========================================================================

    /// Records at the given seniority level.
    pub fn by_seniority(&self, level: Seniority) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(move |e| e.seniority == level)
    }

    /// Records in the given department (case-insensitive).
    pub fn by_department<'a>(&'a self, department: &'a str) -> impl Iterator<Item = &'a Employee> {
        self.employees
            .iter()
            .filter(move |e| e.department.eq_ignore_ascii_case(department))
    }

    /// Distinct department names, in first-seen order.
    pub fn departments(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for employee in &self.employees {
            if !seen.iter().any(|d| d == &employee.department) {
                seen.push(employee.department.clone());
            }
        }
        seen
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn index_of(&self, cnp: &str) -> Option<usize> {
        self.employees.iter().position(|e| e.identity_number == cnp)
    }

    fn persist(&self) -> StoreResult<()> {
        save_roster(&self.roster_path, &self.employees)?;
        debug!(count = self.employees.len(), "roster persisted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

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

    fn store_in(dir: &std::path::Path) -> EmployeeStore {
        EmployeeStore::open(
            dir.join("angajati.json"),
            dir.join("fluturasi_angajati"),
            PayrollPolicy::default(),
        )
    }

    #[test]
    fn test_add_and_find() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());

        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();

        let found = store.find("1234567890123").unwrap();
        assert_eq!(found.gross_salary, 5000.0);
        assert!(matches!(
            store.find("9999999999999").unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[test]
    fn test_add_normalizes_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());

        let mut candidate = employee("1234567890123", 5000.0, "it");
        candidate.last_name = "POPESCU".to_string();
        candidate.first_name = "ion-vlad".to_string();
        store.add(candidate).unwrap();

        let found = store.find("1234567890123").unwrap();
        assert_eq!(found.last_name, "Popescu");
        assert_eq!(found.first_name, "Ion-Vlad");
        assert_eq!(found.department, "IT");
    }

    #[test]
    fn test_add_rejects_invalid_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());

        let err = store.add(employee("1234567890123", 100.0, "IT")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.is_empty());
    }

    /// A duplicate add fails and leaves both the collection and the
    /// storage file unchanged.
    #[test]
    fn test_add_duplicate_leaves_everything_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());

        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();
        let file_before = fs::read_to_string(dir.path().join("angajati.json")).unwrap();

        let err = store.add(employee("1234567890123", 6000.0, "HR")).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));

        assert_eq!(store.len(), 1);
        assert_eq!(store.find("1234567890123").unwrap().gross_salary, 5000.0);
        let file_after = fs::read_to_string(dir.path().join("angajati.json")).unwrap();
        assert_eq!(file_after, file_before);
    }

    #[test]
    fn test_reopen_restores_collection() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = store_in(dir.path());
            store.add(employee("1234567890123", 5000.0, "IT")).unwrap();
            store.add(employee("2345678901234", 6000.0, "HR")).unwrap();
        }

        let store = store_in(dir.path());
        assert_eq!(store.len(), 2);
        // insertion order preserved
        assert_eq!(store.employees()[0].identity_number, "1234567890123");
        assert_eq!(store.employees()[1].identity_number, "2345678901234");
    }

    #[test]
    fn test_update_partial_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();

        let outcome = store
            .update(
                "1234567890123",
                EmployeeUpdate {
                    gross_salary: Some(7000.0),
                    department: Some("hr".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(!outcome.identity_rejected);
        let updated = store.find("1234567890123").unwrap();
        assert_eq!(updated.gross_salary, 7000.0);
        assert_eq!(updated.department, "HR");
        // untouched fields survive
        assert_eq!(updated.last_name, "Popescu");
        assert_eq!(updated.age, 30);
    }

    #[test]
    fn test_update_missing_record_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());

        let err = store
            .update("9999999999999", EmployeeUpdate::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_update_rejects_invalid_field_without_applying_any() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();

        let err = store
            .update(
                "1234567890123",
                EmployeeUpdate {
                    gross_salary: Some(7000.0),
                    age: Some(15), // invalid
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        // nothing applied
        let record = store.find("1234567890123").unwrap();
        assert_eq!(record.gross_salary, 5000.0);
        assert_eq!(record.age, 30);
    }

    #[test]
    fn test_update_identity_collision_skips_rename_applies_rest() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();
        store.add(employee("2345678901234", 6000.0, "HR")).unwrap();

        let outcome = store
            .update(
                "1234567890123",
                EmployeeUpdate {
                    identity_number: Some("2345678901234".to_string()), // taken
                    gross_salary: Some(7500.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(outcome.identity_rejected);
        // rename skipped, salary applied
        let record = store.find("1234567890123").unwrap();
        assert_eq!(record.gross_salary, 7500.0);
        assert_eq!(store.find("2345678901234").unwrap().gross_salary, 6000.0);
    }

    /// Updating the identity from A to B when an artifact exists for A
    /// leaves an artifact for B (with the new identity inside) and none
    /// for A.
    #[test]
    fn test_update_identity_rekeys_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();

        let record = store.find("1234567890123").unwrap().clone();
        store.archive().export(&record, store.policy()).unwrap();

        let outcome = store
            .update(
                "1234567890123",
                EmployeeUpdate {
                    identity_number: Some("2345678901234".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(outcome.artifact_rekeyed);
        assert!(!store.archive().exists("1234567890123"));
        let artifact = store.archive().read("2345678901234").unwrap();
        assert_eq!(artifact.identity_number, "2345678901234");
    }

    #[test]
    fn test_update_refreshes_existing_artifact_figures() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();

        let record = store.find("1234567890123").unwrap().clone();
        store.archive().export(&record, store.policy()).unwrap();

        let outcome = store
            .update(
                "1234567890123",
                EmployeeUpdate {
                    gross_salary: Some(8000.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(outcome.artifact_refreshed);
        let artifact = store.archive().read("1234567890123").unwrap();
        assert_eq!(artifact.gross, 8000.0);
        assert_eq!(artifact.social, 2000.0); // 25% of the new gross
    }

    /// Deleting a missing identity fails with NotFound and leaves the
    /// collection unchanged.
    #[test]
    fn test_delete_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();

        let err = store.delete("9999999999999", true, false).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_unconfirmed_is_aborted_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();

        let err = store.delete("1234567890123", false, false).unwrap_err();
        assert!(matches!(err, StoreError::Aborted));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_removes_record_and_optionally_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();

        let record = store.find("1234567890123").unwrap().clone();
        store.archive().export(&record, store.policy()).unwrap();

        let outcome = store.delete("1234567890123", true, true).unwrap();
        assert_eq!(outcome.removed.identity_number, "1234567890123");
        assert!(outcome.artifact_removed);
        assert!(outcome.artifact_warning.is_none());
        assert!(store.is_empty());
        assert!(!store.archive().exists("1234567890123"));

        // the roster file reflects the removal
        let reopened = store_in(dir.path());
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_delete_can_keep_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();

        let record = store.find("1234567890123").unwrap().clone();
        store.archive().export(&record, store.policy()).unwrap();

        let outcome = store.delete("1234567890123", true, false).unwrap();
        assert!(!outcome.artifact_removed);
        // artifact survives the record: read works from the file alone
        assert!(store.archive().read("1234567890123").is_ok());
    }

    /// A record deletion that sticks must not be reported as failed just
    /// because the artifact file could not be removed afterwards.
    #[test]
    fn test_delete_artifact_failure_is_a_warning_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();

        // a directory at the artifact path makes remove_file fail while
        // exists() still reports true
        let artifact_path = store.archive().path_for("1234567890123");
        fs::create_dir_all(&artifact_path).unwrap();

        let outcome = store.delete("1234567890123", true, true).unwrap();
        assert!(!outcome.artifact_removed);
        assert!(outcome.artifact_warning.is_some());

        // the deletion itself is durable
        assert!(store.is_empty());
        let reopened = store_in(dir.path());
        assert!(reopened.is_empty());
    }

    /// Same rule for update: a persisted field change must come back as
    /// `Ok` even when the artifact refresh fails afterwards.
    #[test]
    fn test_update_artifact_failure_is_a_warning_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();

        let artifact_path = store.archive().path_for("1234567890123");
        fs::create_dir_all(&artifact_path).unwrap();

        let outcome = store
            .update(
                "1234567890123",
                EmployeeUpdate {
                    gross_salary: Some(8000.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(!outcome.artifact_refreshed);
        assert!(outcome.artifact_warning.is_some());

        // the field change itself is durable
        assert_eq!(store.find("1234567890123").unwrap().gross_salary, 8000.0);
        let reopened = store_in(dir.path());
        assert_eq!(reopened.find("1234567890123").unwrap().gross_salary, 8000.0);
    }

    #[test]
    fn test_list_all_is_restartable() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();
        store.add(employee("2345678901234", 6000.0, "HR")).unwrap();

        let first_pass: Vec<_> = store.list_all().collect();
        let second_pass: Vec<_> = store.list_all().collect();
        assert_eq!(first_pass.len(), 2);
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass[0].identity_number, "1234567890123");
    }

    /// Department filtering is case-insensitive.
    #[test]
    fn test_filters() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.add(employee("1234567890123", 5000.0, "IT")).unwrap();
        store.add(employee("2345678901234", 6000.0, "HR")).unwrap();
        let mut senior = employee("3456789012345", 9000.0, "IT");
        senior.seniority = Seniority::Senior;
        store.add(senior).unwrap();

        assert_eq!(store.by_department("it").count(), 2);
        assert_eq!(store.by_department("SALES").count(), 0);
        assert_eq!(store.by_seniority(Seniority::Junior).count(), 2);
        assert_eq!(store.by_seniority(Seniority::Senior).count(), 1);
        assert_eq!(store.departments(), vec!["IT".to_string(), "HR".to_string()]);
    }
}
