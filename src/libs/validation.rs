//! Field validation for user and task input.
//!
//! Every check is a pure function that either accepts the value or returns
//! [`TaskError::Validation`] with a human-readable reason. Checks never loop
//! or prompt; the interactive retry lives in the command layer, which plugs
//! these functions into `dialoguer`'s `validate_with`.
//!
//! ```rust
//! use taskman::libs::validation;
//!
//! assert!(validation::username("alice_01").is_ok());
//! assert!(validation::username("al").is_err());
//! ```

use super::error::{Result, TaskError};
use super::user::Role;
use chrono::NaiveDate;

/// On-disk and prompt date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between fields of a stored record.
pub const FIELD_SEPARATOR: &str = ", ";

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 20;
pub const CREDENTIAL_MIN_LEN: usize = 6;

fn invalid<T>(reason: impl Into<String>) -> Result<T> {
    Err(TaskError::Validation(reason.into()))
}

/// Checks that a username is 3-20 characters of letters, digits and underscores.
pub fn username(value: &str) -> Result<()> {
    let len = value.chars().count();
    if value.is_empty() {
        return invalid("Username cannot be empty.");
    }
    if len < USERNAME_MIN_LEN {
        return invalid("Username must be at least 3 characters long.");
    }
    if len > USERNAME_MAX_LEN {
        return invalid("Username must be no more than 20 characters long.");
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return invalid("Username can only contain letters, numbers, and underscores.");
    }
    Ok(())
}

/// Checks that a credential has at least six characters.
pub fn credential(value: &str) -> Result<()> {
    if value.is_empty() {
        return invalid("Password cannot be empty.");
    }
    if value.chars().count() < CREDENTIAL_MIN_LEN {
        return invalid("Password must be at least 6 characters long.");
    }
    if value.contains(FIELD_SEPARATOR) || value.contains(['\n', '\r']) {
        return invalid("Password cannot contain \", \" or line breaks.");
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` date.
pub fn date_format(value: &str) -> Result<NaiveDate> {
    if value.is_empty() {
        return invalid("Date cannot be empty.");
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| invalid("Invalid date format. Please use YYYY-MM-DD."))
}

/// Parses a due date and rejects anything earlier than `today`.
pub fn future_due_date(value: &str, today: NaiveDate) -> Result<NaiveDate> {
    let due = date_format(value)?;
    if due < today {
        return invalid("Due date cannot be in the past.");
    }
    Ok(due)
}

/// Rejects empty or whitespace-only text. `field` names the value in the reason.
pub fn non_empty(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return invalid(format!("{} cannot be empty.", field));
    }
    Ok(())
}

/// Non-empty text that can be stored in a single record field.
pub fn record_text(value: &str, field: &str) -> Result<()> {
    non_empty(value, field)?;
    if value.contains(FIELD_SEPARATOR) || value.contains(['\n', '\r']) {
        return invalid(format!("{} cannot contain \", \" or line breaks.", field));
    }
    Ok(())
}

/// Parses `admin` / `non-admin` in any letter case.
pub fn role(value: &str) -> Result<Role> {
    value
        .parse::<Role>()
        .or_else(|_| invalid("Role must be either 'Admin' or 'Non-Admin'."))
}
