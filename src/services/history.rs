//! History collaborator interface
//!
//! The batch runner reports one entry per processed record. How entries
//! are persisted is the collaborator's business; entries are appended and
//! never mutated or removed from here.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;

use crate::models::outcome::HistoryEntry;

/// Receives one entry per processed record
pub trait HistoryStore: Send + Sync {
    fn append(&self, entry: HistoryEntry);
}

/// In-memory store for tests and end-of-run summaries
#[derive(Default)]
pub struct MemoryHistory {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.lock().expect("history lock poisoned").clone()
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&self, entry: HistoryEntry) {
        self.entries.lock().expect("history lock poisoned").push(entry);
    }
}

/// Append-only file store, one JSON line per entry.
///
/// Write problems are logged and swallowed: losing a history line must not
/// fail the record it describes.
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryStore for FileHistory {
    fn append(&self, entry: HistoryEntry) {
        let line = match serde_json::to_string(&entry) {
            Ok(line) => line,
            Err(e) => {
                warn!("history entry serialization failed (ignored): {}", e);
                return;
            }
        };
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", line));
        if let Err(e) = result {
            warn!(
                "history append to {} failed (ignored): {}",
                self.path.display(),
                e
            );
        }
    }
}
