//! # Interactive Prompts
//!
//! Retry loops that keep asking until the hr-core predicate accepts the
//! input or the user backs out. The predicates themselves live in
//! `hr_core::validation`; this module is pure UI glue, so only the
//! line-reading helper carries tests - everything else it checks is
//! tested at the predicate level.
//!
//! Conventions:
//! - EOF (closed stdin) yields `None` from every prompt, so exhausted
//!   piped input or a terminal hangup backs out instead of spinning
//! - `0` at an identity-number prompt returns to the menu (`None`)
//! - empty input at an "optional" prompt means "keep the current value"

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use hr_core::validation::{
    normalize_department, normalize_person_name, validate_age, validate_department,
    validate_gross_salary, validate_identity_number, validate_person_name,
};
use hr_core::{PayrollPolicy, Seniority};

/// Prints a prompt and reads one trimmed line from stdin.
///
/// Returns `None` on EOF so every prompt loop terminates once stdin is
/// closed.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    read_trimmed(&mut io::stdin().lock())
}

/// Reads one line from any buffered reader; `None` means EOF (or a read
/// error, which is indistinguishable from a hangup here).
fn read_trimmed(reader: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

// =============================================================================
// Identity Number
// =============================================================================

/// Asks for an identity number until it validates; `0`, empty input, or
/// EOF returns `None`.
pub fn identity_number(label: &str) -> Option<String> {
    loop {
        let input = read_line(&format!("{label} (13 digits, or 0 for the menu): "))?;
        if input == "0" || input.is_empty() {
            return None;
        }
        match validate_identity_number(&input) {
            Ok(()) => return Some(input),
            Err(err) => println!("Error: {err}"),
        }
    }
}

// =============================================================================
// Required Fields (add flow)
// =============================================================================

/// Asks for a name until it validates; returns the title-cased form, or
/// `None` on EOF.
pub fn person_name(label: &str) -> Option<String> {
    loop {
        let input = read_line(&format!("{label}: "))?;
        match validate_person_name(&input) {
            Ok(()) => return Some(normalize_person_name(&input)),
            Err(err) => println!("Error: {err}"),
        }
    }
}

/// Asks for an age until it parses and validates, or `None` on EOF.
pub fn age() -> Option<u32> {
    loop {
        let input = read_line("Age (18 or older): ")?;
        match input.parse::<u32>() {
            Ok(value) => match validate_age(value) {
                Ok(()) => return Some(value),
                Err(err) => println!("Error: {err}"),
            },
            Err(_) => println!("Error: age must be a whole number (got '{input}')"),
        }
    }
}

/// Asks for a gross salary until it parses and clears the policy
/// minimum, or `None` on EOF.
pub fn gross_salary(policy: &PayrollPolicy) -> Option<f64> {
    loop {
        let input = read_line(&format!("Gross salary (minimum {:.2}): ", policy.minimum_gross))?;
        match input.parse::<f64>() {
            Ok(value) => match validate_gross_salary(value, policy) {
                Ok(()) => return Some(value),
                Err(err) => println!("Error: {err}"),
            },
            Err(_) => println!("Error: salary must be a number (got '{input}')"),
        }
    }
}

/// Asks for a department until it validates; returns the uppercase form,
/// or `None` on EOF.
///
/// Existing departments are shown as a hint; a new name is allowed.
pub fn department(available: &[String]) -> Option<String> {
    let hint = if available.is_empty() {
        String::from("none yet")
    } else {
        available.join(", ")
    };
    loop {
        let input = read_line(&format!("Department (existing: {hint}, or create a new one): "))?;
        let normalized = normalize_department(&input);
        match validate_department(&normalized) {
            Ok(()) => return Some(normalized),
            Err(err) => println!("Error: {err}"),
        }
    }
}

/// Asks for a seniority level until it parses, or `None` on EOF.
pub fn seniority() -> Option<Seniority> {
    loop {
        let input = read_line("Seniority (junior/mid/senior): ")?;
        match Seniority::from_str(&input) {
            Ok(level) => return Some(level),
            Err(err) => println!("Error: {err}"),
        }
    }
}

// =============================================================================
// Optional Fields (update flow)
// =============================================================================

/// Optional identity number: empty input or EOF keeps the current one.
pub fn optional_identity_number() -> Option<String> {
    loop {
        let input = read_line("New identity number (enter to keep): ")?;
        if input.is_empty() {
            return None;
        }
        match validate_identity_number(&input) {
            Ok(()) => return Some(input),
            Err(err) => println!("Error: {err}"),
        }
    }
}

/// Optional name: empty input or EOF keeps the current one.
pub fn optional_person_name(label: &str) -> Option<String> {
    loop {
        let input = read_line(&format!("New {label} (enter to keep): "))?;
        if input.is_empty() {
            return None;
        }
        match validate_person_name(&input) {
            Ok(()) => return Some(input),
            Err(err) => println!("Error: {err}"),
        }
    }
}

/// Optional age: empty input or EOF keeps the current one.
pub fn optional_age() -> Option<u32> {
    loop {
        let input = read_line("New age (enter to keep): ")?;
        if input.is_empty() {
            return None;
        }
        match input.parse::<u32>() {
            Ok(value) => match validate_age(value) {
                Ok(()) => return Some(value),
                Err(err) => println!("Error: {err}"),
            },
            Err(_) => println!("Error: age must be a whole number (got '{input}')"),
        }
    }
}

/// Optional salary: empty input or EOF keeps the current one.
pub fn optional_gross_salary(policy: &PayrollPolicy) -> Option<f64> {
    loop {
        let input = read_line(&format!(
            "New gross salary (minimum {:.2}, enter to keep): ",
            policy.minimum_gross
        ))?;
        if input.is_empty() {
            return None;
        }
        match input.parse::<f64>() {
            Ok(value) => match validate_gross_salary(value, policy) {
                Ok(()) => return Some(value),
                Err(err) => println!("Error: {err}"),
            },
            Err(_) => println!("Error: salary must be a number (got '{input}')"),
        }
    }
}

/// Optional department: empty input or EOF keeps the current one.
pub fn optional_department(available: &[String]) -> Option<String> {
    let hint = if available.is_empty() {
        String::from("none yet")
    } else {
        available.join(", ")
    };
    loop {
        let input = read_line(&format!("New department (existing: {hint}, enter to keep): "))?;
        if input.is_empty() {
            return None;
        }
        let normalized = normalize_department(&input);
        match validate_department(&normalized) {
            Ok(()) => return Some(normalized),
            Err(err) => println!("Error: {err}"),
        }
    }
}

/// Optional seniority: empty input or EOF keeps the current one.
pub fn optional_seniority() -> Option<Seniority> {
    loop {
        let input = read_line("New seniority (junior/mid/senior, enter to keep): ")?;
        if input.is_empty() {
            return None;
        }
        match Seniority::from_str(&input) {
            Ok(level) => return Some(level),
            Err(err) => println!("Error: {err}"),
        }
    }
}

// =============================================================================
// Confirmation
// =============================================================================

/// Asks a yes/no question until the answer is one of the two.
///
/// EOF answers "no": a hangup must never confirm a destructive action.
pub fn confirm(question: &str) -> bool {
    loop {
        let Some(input) = read_line(&format!("{question} (yes/no): ")) else {
            return false;
        };
        match input.to_lowercase().as_str() {
            "yes" | "y" => return true,
            "no" | "n" => return false,
            other => println!("Error: please answer yes or no (got '{other}')"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
