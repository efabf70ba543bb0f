mod submission;
mod validation;

pub use submission::{Submission, SubmissionDraft};
pub use validation::{
    ValidationError, validate_age, validate_age_value, validate_email, validate_phone,
    validate_required, validate_zip,
};
