//! # Roster Persistence
//!
//! Load and save of the roster document: a single JSON array holding
//! every employee record.
//!
//! ## Tolerance Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load_roster                                                            │
//! │                                                                         │
//! │  file missing    → empty roster (first run, not an error)              │
//! │  file unreadable → warn! + empty roster                                │
//! │  malformed JSON  → warn! + empty roster                                │
//! │  valid document  → Vec<Employee>                                       │
//! │                                                                         │
//! │  save_roster                                                            │
//! │                                                                         │
//! │  full overwrite of the document after every mutation, written to a     │
//! │  temp file and renamed into place; failures are returned, never        │
//! │  swallowed - the caller must not assume durability until Ok            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use hr_core::Employee;

use crate::error::StoreResult;

/// Loads the roster document.
///
/// Never fails the caller: a missing file is the first-run case and a
/// corrupt one is logged and treated as empty, so the application always
/// starts.
pub fn load_roster(path: &Path) -> Vec<Employee> {
    if !path.exists() {
        debug!(path = %path.display(), "roster file missing, starting empty");
        return Vec::new();
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read roster file, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Employee>>(&contents) {
        Ok(employees) => {
            debug!(count = employees.len(), "roster loaded");
            employees
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "roster file is malformed, starting empty");
            Vec::new()
        }
    }
}

/// Saves the full roster document, overwriting any previous content.
///
/// The document is pretty-printed and written through a temp file that is
/// renamed into place, so a failed write cannot leave a half-written
/// roster behind.
pub fn save_roster(path: &Path, employees: &[Employee]) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(employees)?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &json)?;
    fs::rename(&temp_path, path)?;

    debug!(path = %path.display(), count = employees.len(), "roster saved");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hr_core::Seniority;

    fn employee(identity: &str, salary: f64) -> Employee {
        Employee {
            identity_number: identity.to_string(),
            last_name: "Popescu".to_string(),
            first_name: "Ion".to_string(),
            age: 30,
            gross_salary: salary,
            department: "IT".to_string(),
            seniority: Seniority::Junior,
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let roster = load_roster(&dir.path().join("angajati.json"));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("angajati.json");

        let original = vec![
            employee("1234567890123", 4050.0),
            employee("2345678901234", 5000.5),
        ];
        save_roster(&path, &original).unwrap();

        let restored = load_roster(&path);
        assert_eq!(restored, original);
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("angajati.json");
        fs::write(&path, "{ not json at all").unwrap();

        let roster = load_roster(&path);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("angajati.json");

        save_roster(&path, &[employee("1234567890123", 4050.0)]).unwrap();
        save_roster(&path, &[]).unwrap();

        assert!(load_roster(&path).is_empty());
        // no stray temp file left behind
        assert!(!dir.path().join("angajati.json.tmp").exists());
    }

    #[test]
    fn test_document_uses_stored_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("angajati.json");

        save_roster(&path, &[employee("1234567890123", 4050.0)]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["cnp"], "1234567890123");
        assert_eq!(value[0]["salar"], 4050.0);
        assert_eq!(value[0]["senioritate"], "junior");
    }
}
