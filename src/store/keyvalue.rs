//! Key-value persistence abstraction
//!
//! The narrow seam between the release history and whatever actually
//! holds the bytes. The file-backed implementation keeps one small file
//! per key under the user's data directory; the in-memory one backs
//! tests and sessions where no data directory exists.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Persistence errors
///
/// All of these are swallowed (after logging) by callers; persistence
/// is a non-critical enhancement to the ritual.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no user data directory available")]
    NoDataDirectory,

    #[error("failed to write key {key}: {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Minimal string key-value store
pub trait KeyValue {
    /// Reads the value under `key`; absent or unreadable entries are None
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// One file per key under a base directory
///
/// Built with `at_user_data_dir` this degrades gracefully: when no data
/// directory exists every read is empty and every write fails, which the
/// history layer logs and ignores.
#[derive(Debug)]
pub struct FileKeyValue {
    dir: Option<PathBuf>,
}

impl FileKeyValue {
    /// Creates a store rooted at an explicit directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir: Some(dir) }
    }

    /// Creates a store under the per-user data directory (`<data>/letgo`)
    ///
    /// Never fails: a missing or uncreatable directory yields a store
    /// whose writes error, keeping the session purely in-memory.
    pub fn at_user_data_dir() -> Self {
        let dir = dirs::data_dir().map(|base| base.join("letgo"));
        match &dir {
            Some(path) => {
                if let Err(err) = fs::create_dir_all(path) {
                    tracing::warn!(path = %path.display(), %err, "could not create data directory");
                    return Self { dir: None };
                }
            }
            None => {
                tracing::warn!("no user data directory; history will not persist");
            }
        }
        Self { dir }
    }
}

impl KeyValue for FileKeyValue {
    fn get(&self, key: &str) -> Option<String> {
        let dir = self.dir.as_ref()?;
        fs::read_to_string(dir.join(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let dir = self.dir.as_ref().ok_or(StoreError::NoDataDirectory)?;
        fs::write(dir.join(key), value).map_err(|source| StoreError::WriteFailed {
            key: key.to_owned(),
            source,
        })
    }
}

/// Volatile store for tests and persistence-less sessions
#[derive(Debug, Default)]
pub struct MemoryKeyValue {
    entries: HashMap<String, String>,
}

impl MemoryKeyValue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryKeyValue {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
