//! Persistence layer
//!
//! A narrow key-value seam plus the release-history record stored
//! through it. Everything here is best-effort: the ritual never blocks
//! on storage.

pub mod history;
pub mod keyvalue;

pub use history::{ReleaseHistory, ReleaseHistoryStore, DRAG_HINT_KEY, HISTORY_KEY};
pub use keyvalue::{FileKeyValue, KeyValue, MemoryKeyValue, StoreError};
