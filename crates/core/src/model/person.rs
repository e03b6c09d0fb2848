//! Person entity, DTOs, and field validators.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::{CoreError, CoreResult};
use crate::types::DbId;

/// A member of the people catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    pub id: DbId,
    pub email: String,
    pub login: String,
    /// Display name. Defaults to the login when left blank at create or
    /// update time.
    pub name: String,
    pub birthday: NaiveDate,
}

/// A person record without an assigned identity. Produced by the service
/// layer after validation and name resolution; consumed by storage.
#[derive(Debug, Clone)]
pub struct PersonDraft {
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

/// DTO for creating a person.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePerson {
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

/// DTO for updating a person. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePerson {
    pub email: Option<String>,
    pub login: Option<String>,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// Logins must be a single run of non-whitespace characters.
fn login_pattern() -> &'static Regex {
    static LOGIN_RE: OnceLock<Regex> = OnceLock::new();
    LOGIN_RE.get_or_init(|| Regex::new(r"^\S+$").expect("login pattern is valid"))
}

/// Validate the field-shape rules shared by create and update:
/// email shape, non-blank whitespace-free login, birthday not in the
/// future.
pub fn validate_person_fields(email: &str, login: &str, birthday: NaiveDate) -> CoreResult<()> {
    if email.trim().is_empty() {
        return Err(CoreError::Validation("Email must not be blank".into()));
    }
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "Email '{email}' is not a valid address"
        )));
    }
    if login.is_empty() {
        return Err(CoreError::Validation("Login must not be blank".into()));
    }
    if !login_pattern().is_match(login) {
        return Err(CoreError::Validation(
            "Login must not contain whitespace".into(),
        ));
    }
    let today = chrono::Utc::now().date_naive();
    if birthday > today {
        return Err(CoreError::Validation(
            "Birthday must not be in the future".into(),
        ));
    }
    Ok(())
}

/// Resolve the display name: a missing or blank name falls back to the
/// login.
pub fn effective_name(name: Option<&str>, login: &str) -> String {
    match name {
        Some(n) if !n.trim().is_empty() => n.to_string(),
        _ => login.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birthday() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 5, 1).unwrap()
    }

    #[test]
    fn accepts_well_formed_fields() {
        assert!(validate_person_fields("ada@example.com", "ada", birthday()).is_ok());
    }

    #[test]
    fn rejects_blank_email() {
        let err = validate_person_fields("  ", "ada", birthday()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_malformed_email() {
        let err = validate_person_fields("not-an-email", "ada", birthday()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_login_with_spaces() {
        let err = validate_person_fields("ada@example.com", "ada lovelace", birthday()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_empty_login() {
        let err = validate_person_fields("ada@example.com", "", birthday()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_future_birthday() {
        let future = chrono::Utc::now().date_naive() + chrono::Days::new(2);
        let err = validate_person_fields("ada@example.com", "ada", future).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn today_is_a_valid_birthday() {
        let today = chrono::Utc::now().date_naive();
        assert!(validate_person_fields("ada@example.com", "ada", today).is_ok());
    }

    #[test]
    fn blank_name_falls_back_to_login() {
        assert_eq!(effective_name(None, "ada"), "ada");
        assert_eq!(effective_name(Some(""), "ada"), "ada");
        assert_eq!(effective_name(Some("   "), "ada"), "ada");
        assert_eq!(effective_name(Some("Ada Lovelace"), "ada"), "Ada Lovelace");
    }
}
