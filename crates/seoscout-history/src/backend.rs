//! Persistence backends for the history store.
//!
//! The store holds its entries in memory and mirrors them through one of
//! these: a JSON file on disk, or a plain in-memory vector for tests.

use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::debug;

use seoscout_core::{Error, Result};

use crate::types::HistoryEntry;

/// Key-value style persistence for the history collection.
pub trait HistoryBackend: Send + Sync {
    fn load(&self) -> Result<Vec<HistoryEntry>>;
    fn save(&self, entries: &[HistoryEntry]) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// History persisted as one JSON blob on disk.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<HistoryEntry>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::Storage(e.to_string())),
        };
        serde_json::from_str(&raw).map_err(|e| Error::Storage(e.to_string()))
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        std::fs::write(&self.path, raw).map_err(|e| Error::Storage(e.to_string()))?;
        debug!("Saved {} history entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Storage(e.to_string())),
        }
    }
}

/// Volatile backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.lock().clone())
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        *self.entries.lock() = entries.to_vec();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.lock().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_backend_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("history.json"));
        assert!(backend.load().unwrap().is_empty());
    }

    #[test]
    fn test_json_backend_corrupt_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(JsonFileBackend::new(path).load().is_err());
    }

    #[test]
    fn test_json_backend_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("history.json"));
        backend.save(&[]).unwrap();
        backend.clear().unwrap();
        backend.clear().unwrap();
    }
}
