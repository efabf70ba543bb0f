use std::io;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, OnceCell};

use super::error::StoreError;
use crate::model::{Submission, SubmissionDraft};

/// The newest database schema version this build understands.
pub const SCHEMA_VERSION: u32 = 1;

const DB_FILE: &str = "submissions.jsonl";

/// Database header, stored as the first line of the JSONL file.
///
/// `next_id` is the explicit auto-increment counter, committed together with
/// every insert so ids stay monotonic and are never reused after deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DbHeader {
    schema_version: u32,
    next_id: u64,
}

impl DbHeader {
    fn initial() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            next_id: 1,
        }
    }
}

/// Readiness of the store handle, resolved once per handle.
///
/// `Err` holds the rendered open failure; the handle never retries.
type OpenOutcome = Result<(), String>;

/// Durable, versioned submission storage.
///
/// One JSONL file holds the whole collection: line 1 is the [`DbHeader`],
/// lines 2+ are [`Submission`] records in insertion order. Every mutation
/// rewrites the file through a temp-file rename, which is the commit point.
/// Readers never observe a partial write, and an awaited `create` is visible
/// to any later `list_all` on the same or another handle.
///
/// The handle moves through `Uninitialized → Opening → Ready | Failed`
/// exactly once: all operations queue behind a single open attempt, and after
/// a failed open every call fails with [`StoreError::NotInitialized`].
pub struct SubmissionStore {
    path: PathBuf,
    open_state: OnceCell<OpenOutcome>,
    /// Serializes write transactions; reads go straight to the file.
    write_lock: Mutex<()>,
}

impl SubmissionStore {
    /// Creates a store handle rooted in the platform data directory
    /// (`~/.local/share/intake/submissions.jsonl` on Linux).
    ///
    /// Fails with [`StoreError::StorageUnavailable`] when the platform
    /// offers no data directory. The file itself is not touched until the
    /// first operation (or an explicit [`open`](Self::open)) runs.
    pub fn new() -> Result<Self, StoreError> {
        let data_dir = dirs::data_dir().ok_or(StoreError::StorageUnavailable)?;
        Ok(Self::at(data_dir.join("intake").join(DB_FILE)))
    }

    /// Creates a store handle for the given database file path.
    #[cfg(test)]
    pub(crate) fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::at(path.into())
    }

    fn at(path: PathBuf) -> Self {
        Self {
            path,
            open_state: OnceCell::new(),
            write_lock: Mutex::new(()),
        }
    }

    /// Opens the database, creating it (header only) if absent and running
    /// the idempotent migration step otherwise.
    ///
    /// Concurrent callers share a single open attempt. Reports
    /// [`StoreError::Open`] on failure, on every call.
    pub async fn open(&self) -> Result<(), StoreError> {
        match self.open_state.get_or_init(|| self.init()).await {
            Ok(()) => Ok(()),
            Err(reason) => Err(StoreError::Open {
                reason: reason.clone(),
            }),
        }
    }

    /// Inserts a validated draft, assigning the next id and the insertion
    /// timestamp. Returns the assigned id.
    pub async fn create(&self, draft: SubmissionDraft) -> Result<u64, StoreError> {
        self.ready().await?;
        let _tx = self.write_lock.lock().await;

        let (mut header, mut records) = self.load().await?;
        let id = header.next_id;
        header.next_id += 1;
        records.push(draft.into_submission(id, Utc::now()));

        self.commit(&header, &records).await?;
        Ok(id)
    }

    /// Returns every stored submission in insertion order (ascending id).
    pub async fn list_all(&self) -> Result<Vec<Submission>, StoreError> {
        self.ready().await?;
        let (_, records) = self.load().await?;
        Ok(records)
    }

    /// Deletes the submission with the given id.
    ///
    /// Deleting an unknown id succeeds silently; the id counter is not
    /// lowered, so deleted ids are never handed out again.
    pub async fn delete_by_id(&self, id: u64) -> Result<(), StoreError> {
        self.ready().await?;
        let _tx = self.write_lock.lock().await;

        let (header, mut records) = self.load().await?;
        let before = records.len();
        records.retain(|s| s.id != id);
        if records.len() == before {
            return Ok(());
        }

        self.commit(&header, &records).await
    }

    /// Awaits store readiness, driving the open attempt if nobody has yet.
    async fn ready(&self) -> Result<(), StoreError> {
        match self.open_state.get_or_init(|| self.init()).await {
            Ok(()) => Ok(()),
            Err(_) => Err(StoreError::NotInitialized),
        }
    }

    /// The one-shot open attempt stored in the readiness cell.
    async fn init(&self) -> OpenOutcome {
        self.open_db().await.map_err(|e| match e {
            StoreError::Open { reason } => reason,
            other => other.to_string(),
        })
    }

    async fn open_db(&self) -> Result<(), StoreError> {
        let open_err = |e: io::Error| StoreError::Open {
            reason: e.to_string(),
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(open_err)?;
        }

        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                let (header, records) = parse_db(&self.path, &content)?;
                self.migrate(header, records).await
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.commit(&DbHeader::initial(), &[]).await
            }
            Err(e) => Err(open_err(e)),
        }
    }

    /// Brings an existing database up to [`SCHEMA_VERSION`].
    ///
    /// Idempotent, and never destructive: a version bump rewrites the header
    /// and leaves every record untouched. A file already at the current
    /// version is left as-is.
    async fn migrate(&self, mut header: DbHeader, records: Vec<Submission>) -> Result<(), StoreError> {
        if header.schema_version == SCHEMA_VERSION {
            return Ok(());
        }
        header.schema_version = SCHEMA_VERSION;
        self.commit(&header, &records).await
    }

    /// Reads and parses the committed database state.
    async fn load(&self) -> Result<(DbHeader, Vec<Submission>), StoreError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(StoreError::Read)?;
        parse_db(&self.path, &content)
    }

    /// Writes header + records to a temp file and renames it into place.
    /// The rename is the transaction commit.
    async fn commit(&self, header: &DbHeader, records: &[Submission]) -> Result<(), StoreError> {
        let mut buf = serde_json::to_string(header)?;
        buf.push('\n');
        for record in records {
            buf.push_str(&serde_json::to_string(record)?);
            buf.push('\n');
        }

        let tmp = self.path.with_extension("jsonl.tmp");
        let mut file = fs::File::create(&tmp).await.map_err(StoreError::Write)?;
        file.write_all(buf.as_bytes())
            .await
            .map_err(StoreError::Write)?;
        file.sync_all().await.map_err(StoreError::Write)?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(StoreError::Write)
    }
}

/// Parses the full database file: header line, then one record per line.
fn parse_db(path: &std::path::Path, content: &str) -> Result<(DbHeader, Vec<Submission>), StoreError> {
    let mut lines = content.lines();
    let header_line = lines
        .next()
        .filter(|l| !l.is_empty())
        .ok_or_else(|| StoreError::MissingHeader(path.to_path_buf()))?;
    let header: DbHeader = serde_json::from_str(header_line)?;

    if header.schema_version > SCHEMA_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: header.schema_version,
            supported: SCHEMA_VERSION,
        });
    }

    let records = lines
        .filter(|l| !l.is_empty())
        .map(|line| serde_json::from_str(line).map_err(StoreError::Json))
        .collect::<Result<Vec<Submission>, StoreError>>()?;

    Ok((header, records))
}
