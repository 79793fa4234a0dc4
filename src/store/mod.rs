//! Local persistence: a small file-backed key-value layer plus the
//! bounded history store and profile/locale settings built on top of it.
//!
//! Corrupted or unparseable stored data is never fatal — every reader
//! self-heals to an empty/default value and logs a warning.

mod history;
mod kv;
mod settings;

pub use history::{HistoryStore, HISTORY_CAP};
pub use kv::{KvStore, StoreError};
pub use settings::SettingsStore;
