use crate::store::StoreError;

/// Errors that can occur while exporting submissions to a spreadsheet.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Reading the submissions back from the store failed.
    #[error("could not read submissions for export: {0}")]
    Store(#[from] StoreError),

    /// The spreadsheet encoder failed.
    #[error("spreadsheet encoding failed: {0}")]
    Encode(#[from] rust_xlsxwriter::XlsxError),

    /// The export file could not be written.
    #[error("could not write export file: {0}")]
    Io(#[from] std::io::Error),

    /// The platform does not provide a home directory.
    #[error("could not determine home directory")]
    NoHomeDir,
}
