use std::io;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The platform offers no local data directory; the whole feature is
    /// unavailable.
    #[error("no local data directory is available on this platform")]
    StorageUnavailable,

    /// The database file could not be opened (I/O failure, corrupt header,
    /// or version conflict).
    #[error("could not open submission database: {reason}")]
    Open {
        /// Human-readable description of the underlying failure.
        reason: String,
    },

    /// The store's open attempt failed earlier; every operation on this
    /// handle now fails fast.
    #[error("submission store is not initialized")]
    NotInitialized,

    /// A write transaction could not commit.
    #[error("write transaction failed: {0}")]
    Write(#[source] io::Error),

    /// A read transaction failed.
    #[error("read transaction failed: {0}")]
    Read(#[source] io::Error),

    /// A header or record line could not be serialized or parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The database file exists but is missing its header line.
    #[error("submission database is missing its header: {}", .0.display())]
    MissingHeader(std::path::PathBuf),

    /// The database header declares a schema version newer than this build
    /// supports.
    #[error("unsupported schema version {found} (this build supports up to {supported})")]
    UnsupportedVersion {
        /// The version found in the database header.
        found: u32,
        /// The newest version this build understands.
        supported: u32,
    },
}
