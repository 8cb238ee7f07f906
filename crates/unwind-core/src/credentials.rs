//! Login form validation.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::Display;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

pub const MIN_PASSWORD_LEN: usize = 6;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("email pattern is a valid regex");
}

/// Editable inputs of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LoginField {
    Email,
    Password,
}

/// Keys an error can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ErrorField {
    Email,
    Password,
    General,
}

impl From<LoginField> for ErrorField {
    fn from(field: LoginField) -> Self {
        match field {
            LoginField::Email => Self::Email,
            LoginField::Password => Self::Password,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialInput {
    pub email: String,
    pub password: String,
}

impl CredentialInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }
}

/// Field-level messages. Empty means the form is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ErrorField, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ErrorField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: ErrorField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: ErrorField) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

pub fn validate(input: &CredentialInput) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if input.email.trim().is_empty() {
        errors.insert(ErrorField::Email, EMAIL_REQUIRED);
    } else if !EMAIL_PATTERN.is_match(&input.email) {
        errors.insert(ErrorField::Email, EMAIL_INVALID);
    }

    if input.password.trim().is_empty() {
        errors.insert(ErrorField::Password, PASSWORD_REQUIRED);
    } else if input.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(ErrorField::Password, PASSWORD_TOO_SHORT);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_reports_both_fields() {
        let errors = validate(&CredentialInput::new("", ""));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(ErrorField::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(ErrorField::Password), Some(PASSWORD_REQUIRED));
        assert_eq!(errors.get(ErrorField::General), None);
    }

    #[test]
    fn test_short_password_only() {
        let errors = validate(&CredentialInput::new("a@b.com", "12345"));
        let mut expected = FieldErrors::default();
        expected.insert(ErrorField::Password, PASSWORD_TOO_SHORT);
        assert_eq!(errors, expected);
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let errors = validate(&CredentialInput::new("   ", " \t "));
        assert_eq!(errors.get(ErrorField::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(ErrorField::Password), Some(PASSWORD_REQUIRED));
    }

    #[test]
    fn test_email_pattern() {
        for bad in ["plain", "a@b", "@b.com", "a@.com", "a b@c.com", "a@b.", "a@@b.com"] {
            let errors = validate(&CredentialInput::new(bad, "secret1"));
            assert_eq!(errors.get(ErrorField::Email), Some(EMAIL_INVALID), "{bad}");
        }
        for good in ["a@b.co", "first.last@sub.example.org", "x@y.z"] {
            assert!(validate(&CredentialInput::new(good, "secret1")).is_empty(), "{good}");
        }
    }

    #[test]
    fn test_password_length_counts_characters() {
        assert!(validate(&CredentialInput::new("a@b.com", "ééééé")).get(ErrorField::Password).is_some());
        assert!(validate(&CredentialInput::new("a@b.com", "éééééé")).is_empty());
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let errors = validate(&CredentialInput::new("", "abc"));
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(
            json,
            r#"{"email":"Email is required","password":"Password must be at least 6 characters"}"#
        );
    }
}
