//! Actions returned by screen event handlers.

use crate::model::SubmissionDraft;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to drive the store, the exporter, and screen
/// navigation; screens themselves never touch the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Persist a validated draft as a new submission.
    Submit(SubmissionDraft),
    /// Delete the submission with the given id.
    DeleteSubmission(u64),
    /// Export all stored submissions to a spreadsheet file.
    Export,
    /// Quit the application.
    Quit,
}
