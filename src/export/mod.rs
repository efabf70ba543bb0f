//! Spreadsheet export of stored submissions.
//!
//! `sheet` does the pure workbook building (12 fixed columns, one sheet);
//! `exporter` is the thin I/O layer that reads through the store and writes
//! the date-stamped `.xlsx` file.

mod error;
mod exporter;
/// Workbook layout: columns, sheet name, date rendering.
mod sheet;

pub use error::ExportError;
pub use exporter::{ExportOutcome, default_export_dir, export_all, export_file_name};
pub use sheet::{COLUMNS, SHEET_NAME, build_workbook, format_date};
