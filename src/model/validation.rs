use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Validation errors for intake form fields.
///
/// Validation is a caller responsibility: the store accepts any
/// [`SubmissionDraft`](super::SubmissionDraft) it is handed, and a draft can
/// only be constructed through its validating constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid age: {0}")]
    InvalidAge(String),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),
    #[error("invalid ZIP code: {0}")]
    InvalidZip(String),
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid hardcoded regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 .()\-]{5,19}$").expect("valid hardcoded regex"));

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("valid hardcoded regex"));

/// Validates that a required field is non-empty (ignoring whitespace).
pub fn validate_required(name: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(name))
    } else {
        Ok(())
    }
}

/// Parses and validates an age entered as text. Must be an integer in 1..=130.
pub fn validate_age(value: &str) -> Result<u32, ValidationError> {
    match value.trim().parse::<u32>() {
        Ok(age) => {
            validate_age_value(age)?;
            Ok(age)
        }
        Err(_) => Err(ValidationError::InvalidAge(value.to_string())),
    }
}

/// Validates an already-parsed age. Must be in 1..=130.
pub fn validate_age_value(age: u32) -> Result<(), ValidationError> {
    if (1..=130).contains(&age) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAge(age.to_string()))
    }
}

/// Validates an email address (`local@domain.tld`).
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// Validates a phone number: digits with common separators, 6-20 characters.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(phone.to_string()))
    }
}

/// Validates a US ZIP code (`90001` or `90001-1234`).
pub fn validate_zip(zip: &str) -> Result<(), ValidationError> {
    if ZIP_RE.is_match(zip) {
        Ok(())
    } else {
        Err(ValidationError::InvalidZip(zip.to_string()))
    }
}
