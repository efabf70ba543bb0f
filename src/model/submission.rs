use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{
    ValidationError, validate_age_value, validate_email, validate_phone, validate_required,
    validate_zip,
};

/// A stored intake form submission.
///
/// `id` and `timestamp` are assigned by the store at insert time and are
/// immutable afterwards; everything else comes from the caller's
/// [`SubmissionDraft`]. Field names serialize in camelCase to keep the
/// original on-disk record format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub comments: String,
    pub timestamp: DateTime<Utc>,
}

/// A validated, not-yet-stored submission payload.
///
/// The only way to obtain one is [`SubmissionDraft::new`], which enforces the
/// required fields, so the store never needs to re-validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDraft {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub comments: String,
}

impl SubmissionDraft {
    /// Creates a new draft, validating every required field.
    ///
    /// `last_name` and `comments` are optional and may be empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        age: u32,
        phone: String,
        email: String,
        street: String,
        city: String,
        state: String,
        zip: String,
        comments: String,
    ) -> Result<Self, ValidationError> {
        validate_required("firstName", &first_name)?;
        validate_age_value(age)?;
        validate_required("phone", &phone)?;
        validate_phone(&phone)?;
        validate_required("email", &email)?;
        validate_email(&email)?;
        validate_required("street", &street)?;
        validate_required("city", &city)?;
        validate_required("state", &state)?;
        validate_required("zip", &zip)?;
        validate_zip(&zip)?;
        Ok(Self {
            first_name,
            last_name,
            age,
            phone,
            email,
            street,
            city,
            state,
            zip,
            comments,
        })
    }

    /// Finalizes the draft into a [`Submission`] with store-assigned key
    /// and timestamp. Only the store calls this.
    pub(crate) fn into_submission(self, id: u64, timestamp: DateTime<Utc>) -> Submission {
        Submission {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            phone: self.phone,
            email: self.email,
            street: self.street,
            city: self.city,
            state: self.state,
            zip: self.zip,
            comments: self.comments,
            timestamp,
        }
    }
}

impl Submission {
    /// Display name: "First Last", or just "First" when no last name was given.
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}
