use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use super::error::ExportError;
use super::sheet;
use crate::store::SubmissionStore;

/// Result of an export request.
///
/// An empty store is a reported condition, not an error: no file is written
/// and the caller tells the user there was nothing to export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The store holds no submissions; nothing was written.
    NoData,
    /// The export file was written.
    Written {
        /// Full path of the written file.
        path: PathBuf,
        /// Number of submission rows in the file.
        rows: usize,
    },
}

/// Export file name for the given date: `intake-form-submissions-<YYYY-MM-DD>.xlsx`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("intake-form-submissions-{}.xlsx", date.format("%Y-%m-%d"))
}

/// Default directory for export files: the user's home directory.
pub fn default_export_dir() -> Result<PathBuf, ExportError> {
    dirs::home_dir().ok_or(ExportError::NoHomeDir)
}

/// Exports every stored submission to a date-stamped `.xlsx` file in `dir`.
///
/// Reads through the store (`list_all`), so the file reflects the latest
/// committed state. Row order matches storage order.
pub async fn export_all(
    store: &SubmissionStore,
    dir: &Path,
) -> Result<ExportOutcome, ExportError> {
    let submissions = store.list_all().await?;
    if submissions.is_empty() {
        return Ok(ExportOutcome::NoData);
    }

    let mut workbook = sheet::build_workbook(&submissions)?;
    let buf = workbook.save_to_buffer()?;

    let path = dir.join(export_file_name(Local::now().date_naive()));
    tokio::fs::write(&path, &buf).await?;

    Ok(ExportOutcome::Written {
        path,
        rows: submissions.len(),
    })
}
