//! Release history persistence
//!
//! Tracks how many thoughts the user has released, surviving restarts.
//! Loaded once at startup; written back immediately after every release.
//! Every failure path degrades to "count stays correct for this session":
//! missing, unreadable, or malformed data loads as zero, and a failed
//! write still advances the in-memory count.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::store::keyvalue::KeyValue;

/// Storage key for the history record
pub const HISTORY_KEY: &str = "letgo_release_history";

/// Storage key for the first-run drag onboarding hint; once set,
/// never reset
pub const DRAG_HINT_KEY: &str = "letgo-drag-hint-seen";

/// Persisted history record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseHistory {
    pub count: u64,
    #[serde(
        rename = "lastRelease",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_release: Option<String>,
}

/// Release counter over a key-value backend
///
/// Owns the authoritative in-memory count for the session; the backend
/// is best-effort durability on top.
#[derive(Debug)]
pub struct ReleaseHistoryStore<S: KeyValue> {
    store: S,
    count: u64,
    drag_hint_seen: bool,
}

impl<S: KeyValue> ReleaseHistoryStore<S> {
    /// Loads history from the backend
    ///
    /// Absent or malformed data yields a zero count; both cases log a
    /// warning and never surface an error.
    pub fn load(store: S) -> Self {
        let count = match store.get(HISTORY_KEY) {
            Some(raw) => match serde_json::from_str::<ReleaseHistory>(&raw) {
                Ok(history) => history.count,
                Err(err) => {
                    tracing::warn!(%err, "malformed release history, starting at zero");
                    0
                }
            },
            None => 0,
        };
        let drag_hint_seen = store.get(DRAG_HINT_KEY).is_some();
        tracing::debug!(count, drag_hint_seen, "release history loaded");
        Self {
            store,
            count,
            drag_hint_seen,
        }
    }

    /// Number of completed releases
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Records one completed release
    ///
    /// Increments the count and writes the record back with the current
    /// timestamp. A failed write is logged and ignored; the in-memory
    /// count still advances for this session.
    ///
    /// # Returns
    /// The new count.
    pub fn record_release(&mut self) -> u64 {
        self.count += 1;
        let record = ReleaseHistory {
            count: self.count,
            last_release: Some(Utc::now().to_rfc3339()),
        };
        match serde_json::to_string(&record) {
            Ok(json) => {
                if let Err(err) = self.store.set(HISTORY_KEY, &json) {
                    tracing::warn!(%err, "failed to persist release history");
                }
            }
            Err(err) => {
                tracing::warn!(%err, "failed to encode release history");
            }
        }
        self.count
    }

    /// Whether the first-run drag hint has already been shown
    pub fn drag_hint_seen(&self) -> bool {
        self.drag_hint_seen
    }

    /// Marks the drag hint as seen, permanently within this storage scope
    pub fn mark_drag_hint_seen(&mut self) {
        if self.drag_hint_seen {
            return;
        }
        self.drag_hint_seen = true;
        if let Err(err) = self.store.set(DRAG_HINT_KEY, "true") {
            tracing::warn!(%err, "failed to persist drag hint flag");
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::keyvalue::{FileKeyValue, MemoryKeyValue, StoreError};

    /// Backend whose writes always fail, for quota-exceeded style cases
    struct ReadOnly(MemoryKeyValue);

    impl KeyValue for ReadOnly {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::NoDataDirectory)
        }
    }

    #[test]
    fn load_on_empty_store_yields_zero() {
        let history = ReleaseHistoryStore::load(MemoryKeyValue::new());
        assert_eq!(history.count(), 0);
        assert!(!history.drag_hint_seen());
    }

    #[test]
    fn load_on_malformed_data_yields_zero() {
        let mut store = MemoryKeyValue::new();
        store.set(HISTORY_KEY, "not json at all").unwrap();
        let history = ReleaseHistoryStore::load(store);
        assert_eq!(history.count(), 0);
    }

    #[test]
    fn load_reads_existing_count() {
        let mut store = MemoryKeyValue::new();
        store
            .set(HISTORY_KEY, r#"{"count":7,"lastRelease":"2026-01-01T00:00:00Z"}"#)
            .unwrap();
        let history = ReleaseHistoryStore::load(store);
        assert_eq!(history.count(), 7);
    }

    #[test]
    fn record_release_increments_and_persists() {
        let mut history = ReleaseHistoryStore::load(MemoryKeyValue::new());
        assert_eq!(history.record_release(), 1);

        let raw = history.backend().get(HISTORY_KEY).unwrap();
        let record: ReleaseHistory = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.count, 1);
        assert!(!record.last_release.unwrap().is_empty());
    }

    #[test]
    fn repeated_releases_are_monotonic() {
        let mut store = MemoryKeyValue::new();
        store.set(HISTORY_KEY, r#"{"count":3}"#).unwrap();
        let mut history = ReleaseHistoryStore::load(store);

        let mut last = history.count();
        for _ in 0..5 {
            let next = history.record_release();
            assert_eq!(next, last + 1);
            last = next;
        }
        assert_eq!(history.count(), 8);

        let raw = history.backend().get(HISTORY_KEY).unwrap();
        let record: ReleaseHistory = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.count, 8);
    }

    #[test]
    fn write_failure_still_advances_session_count() {
        let mut history = ReleaseHistoryStore::load(ReadOnly(MemoryKeyValue::new()));
        assert_eq!(history.record_release(), 1);
        assert_eq!(history.record_release(), 2);
        assert_eq!(history.count(), 2);
    }

    #[test]
    fn drag_hint_flag_sticks_across_loads() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let store = FileKeyValue::new(tmp.path().to_path_buf());
            let mut history = ReleaseHistoryStore::load(store);
            assert!(!history.drag_hint_seen());
            history.mark_drag_hint_seen();
            assert!(history.drag_hint_seen());
        }
        let history = ReleaseHistoryStore::load(FileKeyValue::new(tmp.path().to_path_buf()));
        assert!(history.drag_hint_seen());
    }

    #[test]
    fn history_survives_reload_from_files() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let mut history =
                ReleaseHistoryStore::load(FileKeyValue::new(tmp.path().to_path_buf()));
            history.record_release();
            history.record_release();
        }
        let history = ReleaseHistoryStore::load(FileKeyValue::new(tmp.path().to_path_buf()));
        assert_eq!(history.count(), 2);
    }
}
