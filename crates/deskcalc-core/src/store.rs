//! History log persistence (load/save/clear).
//!
//! The persisted record is a JSON array of entries under a fixed file name.
//! Reads tolerate absent or unparsable data by yielding an empty log; the
//! full log is rewritten on every mutation.

use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::constants::{DATA_DIR_NAME, HISTORY_FILENAME};
use crate::history::HistoryLog;

/// Storage seam for the business history log.
pub trait HistoryStore {
    /// Load the persisted log. Absent or corrupt data yields an empty log.
    fn load(&self) -> HistoryLog;

    /// Persist the full log, replacing any previous record.
    fn save(&mut self, log: &HistoryLog) -> io::Result<()>;

    /// Remove the persisted record entirely. Removing an absent record is
    /// not an error.
    fn clear(&mut self) -> io::Result<()>;
}

/// JSON file store at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the standard location.
    /// Uses the XDG data dir, falling back to the working directory.
    #[must_use]
    pub fn at_default_location() -> Self {
        Self::new(default_history_path())
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> HistoryLog {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return HistoryLog::default();
        };
        match serde_json::from_str(&content) {
            Ok(log) => log,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "unreadable history record, starting empty");
                HistoryLog::default()
            }
        }
    }

    fn save(&mut self, log: &HistoryLog) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(log).map_err(io::Error::other)?;
        std::fs::write(&self.path, content)
    }

    fn clear(&mut self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// Get the standard history file path.
/// Tries `XDG_DATA_HOME`, then `~/.local/share`, then the working directory.
fn default_history_path() -> PathBuf {
    let data_dir = std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| {
                let mut p = PathBuf::from(home);
                p.push(".local");
                p.push("share");
                p
            })
        });

    match data_dir {
        Some(dir) => dir.join(DATA_DIR_NAME).join(HISTORY_FILENAME),
        None => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(format!(".{HISTORY_FILENAME}")),
    }
}

/// In-memory store. Used by tests and by one-shot evaluation, where nothing
/// should touch the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<String>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a serialized record, as a startup would see it.
    #[must_use]
    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: Some(record.into()),
        }
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> HistoryLog {
        self.record
            .as_deref()
            .and_then(|content| serde_json::from_str(content).ok())
            .unwrap_or_default()
    }

    fn save(&mut self, log: &HistoryLog) -> io::Result<()> {
        self.record = Some(serde_json::to_string(log).map_err(io::Error::other)?);
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.record = None;
        Ok(())
    }
}
