//! # Menu Controller
//!
//! Numbered dispatch over the store and the payroll calculator. Every
//! handler reports its outcome and falls back to the menu loop; no error
//! escapes it. A closed stdin (EOF) exits the loop like option 0.
//!
//! ## Options
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   0  Exit                          7  Department salary total          │
//! │   1  Add employee                  8  Payslip breakdown                │
//! │   2  Find employee                 9  Filter by seniority              │
//! │   3  Update employee              10  Filter by department             │
//! │   4  Delete employee              11  Export payslip                   │
//! │   5  List all employees           12  Show exported payslip            │
//! │   6  Company salary total                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hr_core::payroll::{compute_breakdown, round2, total_gross, total_gross_for_department};
use hr_store::{EmployeeStore, EmployeeUpdate, StoreError};

use crate::prompt;

const SEPARATOR: &str = "------------------------------";

/// Runs the menu loop until the user picks 0.
pub fn run(store: &mut EmployeeStore) {
    loop {
        print_menu();
        let Some(choice) = prompt::read_line("Pick an option (0-12): ") else {
            println!("Goodbye.");
            return;
        };

        let option: u32 = match choice.parse() {
            Ok(n) if n <= 12 => n,
            Ok(n) => {
                println!("Error: option must be between 0 and 12 (got {n})");
                continue;
            }
            Err(_) => {
                println!("Error: please enter a number (got '{choice}')");
                continue;
            }
        };

        match option {
            0 => {
                println!("Goodbye.");
                return;
            }
            1 => add_employee(store),
            2 => find_employee(store),
            3 => update_employee(store),
            4 => delete_employee(store),
            5 => list_all(store),
            6 => company_salary_total(store),
            7 => department_salary_total(store),
            8 => payslip_breakdown(store),
            9 => filter_by_seniority(store),
            10 => filter_by_department(store),
            11 => export_payslip(store),
            12 => show_exported_payslip(store),
            _ => unreachable!("range checked above"),
        }
    }
}

fn print_menu() {
    println!("{SEPARATOR}");
    println!(" HR Ledger");
    println!("{SEPARATOR}");
    println!(" 0. Exit");
    println!(" 1. Add employee");
    println!(" 2. Find employee (by identity number)");
    println!(" 3. Update employee (by identity number)");
    println!(" 4. Delete employee (by identity number)");
    println!(" 5. List all employees");
    println!(" 6. Company salary total");
    println!(" 7. Department salary total");
    println!(" 8. Payslip breakdown (by identity number)");
    println!(" 9. Filter employees by seniority");
    println!("10. Filter employees by department");
    println!("11. Export payslip");
    println!("12. Show exported payslip");
    println!("{SEPARATOR}");
}

// =============================================================================
// Record Management (1-5)
// =============================================================================

fn add_employee(store: &mut EmployeeStore) {
    println!("\n--> Add employee");

    let Some(cnp) = prompt::identity_number("Identity number") else {
        return;
    };
    if store.find(&cnp).is_ok() {
        println!("Error: identity number {cnp} is already registered");
        return;
    }

    let Some(last_name) = prompt::person_name("Last name") else {
        return;
    };
    let Some(first_name) = prompt::person_name("First name") else {
        return;
    };
    let Some(age) = prompt::age() else {
        return;
    };
    let Some(gross_salary) = prompt::gross_salary(store.policy()) else {
        return;
    };
    let Some(department) = prompt::department(&store.departments()) else {
        return;
    };
    let Some(seniority) = prompt::seniority() else {
        return;
    };

    let candidate = hr_core::Employee {
        identity_number: cnp,
        last_name,
        first_name,
        age,
        gross_salary,
        department,
        seniority,
    };

    match store.add(candidate) {
        Ok(()) => println!("Employee added and saved."),
        Err(err) => println!("Error: {err}"),
    }
}

fn find_employee(store: &EmployeeStore) {
    println!("\n--> Find employee");

    loop {
        let Some(cnp) = prompt::identity_number("Identity number") else {
            return;
        };
        match store.find(&cnp) {
            Ok(employee) => {
                println!("\nRecord for '{}'", employee.full_name());
                println!("Identity number: {}", employee.identity_number);
                println!("Age: {}", employee.age);
                println!("Gross salary: {:.2}", employee.gross_salary);
                println!("Department: {}", employee.department);
                println!("Seniority: {}", employee.seniority);
                return;
            }
            Err(err) => println!("{err}, try again or enter 0 for the menu"),
        }
    }
}

fn update_employee(store: &mut EmployeeStore) {
    println!("\n--> Update employee");

    let Some(cnp) = prompt::identity_number("Identity number") else {
        return;
    };
    let current = match store.find(&cnp) {
        Ok(employee) => employee.clone(),
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    println!("Updating '{}'; press enter to keep any field.", current.full_name());

    let update = EmployeeUpdate {
        identity_number: prompt::optional_identity_number(),
        last_name: prompt::optional_person_name("last name"),
        first_name: prompt::optional_person_name("first name"),
        age: prompt::optional_age(),
        gross_salary: prompt::optional_gross_salary(store.policy()),
        department: prompt::optional_department(&store.departments()),
        seniority: prompt::optional_seniority(),
    };

    if update.is_empty() {
        println!("Nothing to change.");
        return;
    }

    match store.update(&cnp, update) {
        Ok(outcome) => {
            println!("Employee updated and saved.");
            if outcome.identity_rejected {
                println!("Note: the new identity number belongs to another employee; it was not changed.");
            }
            if outcome.artifact_rekeyed {
                println!("The payslip file was moved to the new identity number.");
            }
            if outcome.artifact_refreshed {
                println!("The payslip file was refreshed.");
            }
            if let Some(warning) = &outcome.artifact_warning {
                println!("Warning: the payslip file could not be updated ({warning}); re-export it from the menu.");
            }
        }
        Err(err) => println!("Error: {err}"),
    }
}

fn delete_employee(store: &mut EmployeeStore) {
    println!("\n--> Delete employee");

    let Some(cnp) = prompt::identity_number("Identity number") else {
        return;
    };
    let target = match store.find(&cnp) {
        Ok(employee) => employee.clone(),
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    let confirmed = prompt::confirm(&format!(
        "Really delete '{}' ({})?",
        target.full_name(),
        target.identity_number
    ));

    let remove_artifact = confirmed
        && store.archive().exists(&cnp)
        && prompt::confirm("A payslip file exists for this employee. Delete it as well?");

    match store.delete(&cnp, confirmed, remove_artifact) {
        Ok(outcome) => {
            println!("Employee '{}' deleted.", outcome.removed.full_name());
            if let Some(warning) = &outcome.artifact_warning {
                println!("Warning: the payslip file could not be removed ({warning}).");
            }
        }
        Err(StoreError::Aborted) => println!("Operation stopped, nothing was deleted."),
        Err(err) => println!("Error: {err}"),
    }
}

fn list_all(store: &EmployeeStore) {
    println!("\n--> All employees [{} in the company]", store.len());

    if store.is_empty() {
        println!("No employees yet.");
        return;
    }

    for summary in store.list_all() {
        println!("{summary}");
    }
}

// =============================================================================
// Payroll Reports (6-8)
// =============================================================================

fn company_salary_total(store: &EmployeeStore) {
    println!("{SEPARATOR}");
    let total = total_gross(store.employees());
    println!("Total monthly gross salary cost: {:.2}", round2(total));
}

fn department_salary_total(store: &EmployeeStore) {
    println!("\n--> Department salary total");
    println!("{SEPARATOR}");

    let departments = store.departments();
    let hint = if departments.is_empty() {
        String::from("none yet")
    } else {
        departments.join(", ")
    };
    let Some(wanted) = prompt::read_line(&format!("Department (existing: {hint}): ")) else {
        return;
    };
    if wanted.is_empty() {
        return;
    }

    let (total, matched) = total_gross_for_department(store.employees(), &wanted);
    if matched == 0 {
        println!("Department not found.");
    } else {
        println!(
            "Total gross salary for {} ({} employees): {:.2}",
            wanted.to_uppercase(),
            matched,
            round2(total)
        );
    }
}

fn payslip_breakdown(store: &EmployeeStore) {
    println!("\n--> Payslip breakdown");

    loop {
        let Some(cnp) = prompt::identity_number("Identity number") else {
            return;
        };
        let employee = match store.find(&cnp) {
            Ok(employee) => employee,
            Err(err) => {
                println!("{err}, try again or enter 0 for the menu");
                continue;
            }
        };

        let policy = store.policy();
        let slip = compute_breakdown(employee.gross_salary, policy).rounded();
        println!("\nPayslip for {}", employee.full_name());
        println!("Gross salary: {:.2}", slip.gross);
        println!("Social security ({}%): {:.2}", policy.social_rate.percentage(), slip.social);
        println!("Health insurance ({}%): {:.2}", policy.health_rate.percentage(), slip.health);
        println!("Income tax ({}%): {:.2}", policy.income_tax_rate.percentage(), slip.tax);
        println!("Net salary: {:.2}", slip.net);

        if prompt::confirm("Export this payslip as JSON?") {
            match store.archive().export(employee, policy) {
                Ok(path) => println!("Payslip saved to {}", path.display()),
                Err(err) => println!("Error: {err}"),
            }
        } else {
            println!("Export skipped.");
        }
        return;
    }
}

// =============================================================================
// Filters (9-10)
// =============================================================================

fn filter_by_seniority(store: &EmployeeStore) {
    println!("\n--> Employees by seniority");

    let Some(level) = prompt::seniority() else {
        return;
    };
    let mut found = false;
    for employee in store.by_seniority(level) {
        println!(
            "{} is {} in the {} department",
            employee.full_name(),
            employee.seniority,
            employee.department
        );
        found = true;
    }
    if !found {
        println!("No employees at the '{level}' level.");
    }
}

fn filter_by_department(store: &EmployeeStore) {
    println!("\n--> Employees by department");
    println!("{SEPARATOR}");

    let departments = store.departments();
    let hint = if departments.is_empty() {
        String::from("none yet")
    } else {
        departments.join(", ")
    };
    let Some(wanted) = prompt::read_line(&format!("Department (existing: {hint}): ")) else {
        return;
    };
    if wanted.is_empty() {
        return;
    }

    let mut found = false;
    for employee in store.by_department(&wanted) {
        println!(
            "{} | {} | {}",
            employee.full_name(),
            employee.department,
            employee.seniority
        );
        found = true;
    }
    if !found {
        println!("No employees in the '{}' department.", wanted.to_uppercase());
    }
}

// =============================================================================
// Payslip Artifacts (11-12)
// =============================================================================

fn export_payslip(store: &EmployeeStore) {
    println!("\n--> Export payslip");

    loop {
        let Some(cnp) = prompt::identity_number("Identity number") else {
            return;
        };
        match store.find(&cnp) {
            Ok(employee) => {
                match store.archive().export(employee, store.policy()) {
                    Ok(path) => println!("Payslip saved to {}", path.display()),
                    Err(err) => println!("Error: {err}"),
                }
                return;
            }
            Err(err) => println!("{err}, try again or enter 0 for the menu"),
        }
    }
}

fn show_exported_payslip(store: &EmployeeStore) {
    println!("\n--> Show exported payslip");

    let Some(cnp) = prompt::identity_number("Identity number") else {
        return;
    };

    match store.archive().read(&cnp) {
        Ok(artifact) => {
            println!("{SEPARATOR}");
            println!("Payslip from {}", store.archive().path_for(&cnp).display());
            println!("{SEPARATOR}");
            println!("Name: {} {}", artifact.last_name, artifact.first_name);
            println!("Identity number: {}", artifact.identity_number);
            println!("Department: {}", artifact.department);
            println!("Gross salary: {:.2}", artifact.gross);
            println!("Social security: {:.2}", artifact.social);
            println!("Health insurance: {:.2}", artifact.health);
            println!("Income tax: {:.2}", artifact.tax);
            println!("Net salary: {:.2}", artifact.net);
        }
        Err(StoreError::NotFound { .. }) => {
            println!("No exported payslip found for identity number {cnp}.");
        }
        Err(err) => println!("Error: {err}"),
    }
}
