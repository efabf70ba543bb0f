//! Submission persistence (JSONL).
//!
//! The whole collection lives in one `submissions.jsonl` file: line 1 is a
//! header carrying the schema version and the auto-increment counter, lines
//! 2+ are individual submission records. Every mutation commits through a
//! temp-file rename, so a crash never leaves a half-written database.

mod error;
mod manager;

pub use error::StoreError;
pub use manager::{SCHEMA_VERSION, SubmissionStore};
