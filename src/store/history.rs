//! Bounded per-category history of past analyses.
//!
//! Append-only with silent eviction: inserts prepend (newest-first) and
//! the sequence is truncated to the cap. Categories are fully isolated —
//! each lives under its own key.

use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};

use super::kv::{KvStore, StoreError};
use crate::models::{Category, HistoryEntry};

/// Retention limit per category. Entries beyond it are discarded on
/// insert, not archived.
pub const HISTORY_CAP: usize = 50;

/// Per-category persisted log, capped at [`HISTORY_CAP`] entries.
pub struct HistoryStore {
    kv: KvStore,
    /// Guards read-modify-write cycles and the id high-water mark, so
    /// every store operation is atomic end to end.
    last_id: Mutex<i64>,
}

impl HistoryStore {
    pub fn new(kv: KvStore) -> Self {
        Self {
            kv,
            last_id: Mutex::new(0),
        }
    }

    fn key(category: Category) -> String {
        format!("{category}_history")
    }

    /// Record a new entry: fresh time-derived id (bumped past the last
    /// issued id if two inserts land in the same millisecond), current
    /// timestamp, prepended, then truncated to the cap.
    pub fn record(
        &self,
        category: Category,
        data: serde_json::Value,
    ) -> Result<HistoryEntry, StoreError> {
        let mut last_id = self.last_id.lock().unwrap_or_else(|e| e.into_inner());

        let now = Utc::now();
        let id = now.timestamp_millis().max(*last_id + 1);
        *last_id = id;

        let entry = HistoryEntry {
            id,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            data,
        };

        let key = Self::key(category);
        let mut entries: Vec<HistoryEntry> = self.kv.get(&key);
        entries.insert(0, entry.clone());
        entries.truncate(HISTORY_CAP);
        self.kv.set(&key, &entries)?;

        Ok(entry)
    }

    /// Full current sequence, newest-first; empty if nothing recorded
    /// (including when the stored data is corrupted).
    pub fn list(&self, category: Category) -> Vec<HistoryEntry> {
        let _guard = self.last_id.lock().unwrap_or_else(|e| e.into_inner());
        self.kv.get(&Self::key(category))
    }

    /// Remove exactly the entry with the matching id; no-op if absent.
    pub fn remove(&self, category: Category, id: i64) -> Result<(), StoreError> {
        let _guard = self.last_id.lock().unwrap_or_else(|e| e.into_inner());
        let key = Self::key(category);
        let mut entries: Vec<HistoryEntry> = self.kv.get(&key);
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() != before {
            self.kv.set(&key, &entries)?;
        }
        Ok(())
    }

    /// Empty the category entirely.
    pub fn clear(&self, category: Category) -> Result<(), StoreError> {
        let _guard = self.last_id.lock().unwrap_or_else(|e| e.into_inner());
        self.kv.remove(&Self::key(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (HistoryStore, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let kv = KvStore::open(tmp.path()).unwrap();
        (HistoryStore::new(kv), tmp)
    }

    fn payload(n: usize) -> serde_json::Value {
        serde_json::json!({ "n": n })
    }

    #[test]
    fn record_prepends_newest_first() {
        let (store, _tmp) = store();
        store.record(Category::Symptom, payload(1)).unwrap();
        store.record(Category::Symptom, payload(2)).unwrap();
        store.record(Category::Symptom, payload(3)).unwrap();

        let entries = store.list(Category::Symptom);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].data["n"], 3);
        assert_eq!(entries[2].data["n"], 1);
        assert!(entries[0].id > entries[1].id);
        assert!(entries[1].id > entries[2].id);
    }

    #[test]
    fn cap_evicts_oldest_beyond_fifty() {
        let (store, _tmp) = store();
        for n in 0..55 {
            store.record(Category::Symptom, payload(n)).unwrap();
        }
        let entries = store.list(Category::Symptom);
        assert_eq!(entries.len(), HISTORY_CAP);
        // Newest first: 54 down to 5; 0..=4 are unrecoverable.
        assert_eq!(entries[0].data["n"], 54);
        assert_eq!(entries[49].data["n"], 5);
        assert!(entries.iter().all(|e| e.data["n"].as_u64().unwrap() >= 5));
    }

    #[test]
    fn categories_are_isolated() {
        let (store, _tmp) = store();
        store.record(Category::Symptom, payload(1)).unwrap();
        let symptom_before = store.list(Category::Symptom);

        store.record(Category::Plant, payload(2)).unwrap();
        store.clear(Category::Plant).unwrap();

        assert_eq!(store.list(Category::Symptom), symptom_before);
        assert!(store.list(Category::Plant).is_empty());
    }

    #[test]
    fn remove_nonexistent_id_is_a_noop() {
        let (store, _tmp) = store();
        store.record(Category::Symptom, payload(1)).unwrap();
        store.record(Category::Symptom, payload(2)).unwrap();
        let before = store.list(Category::Symptom);

        store.remove(Category::Symptom, 42).unwrap();

        assert_eq!(store.list(Category::Symptom), before);
    }

    #[test]
    fn remove_deletes_exactly_one_entry() {
        let (store, _tmp) = store();
        store.record(Category::Symptom, payload(1)).unwrap();
        let target = store.record(Category::Symptom, payload(2)).unwrap();
        store.record(Category::Symptom, payload(3)).unwrap();

        store.remove(Category::Symptom, target.id).unwrap();

        let entries = store.list(Category::Symptom);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.id != target.id));
    }

    #[test]
    fn ids_are_unique_even_within_one_millisecond() {
        let (store, _tmp) = store();
        let mut ids: Vec<i64> = (0..20)
            .map(|n| store.record(Category::Plant, payload(n)).unwrap().id)
            .collect();
        let len = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn corrupted_stored_data_lists_as_empty() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("symptom_history.json"), "not json at all").unwrap();
        let store = HistoryStore::new(KvStore::open(tmp.path()).unwrap());

        assert!(store.list(Category::Symptom).is_empty());

        // Recording over the corrupted state works and starts fresh.
        store.record(Category::Symptom, payload(1)).unwrap();
        assert_eq!(store.list(Category::Symptom).len(), 1);
    }

    #[test]
    fn clear_then_list_is_empty() {
        let (store, _tmp) = store();
        store.record(Category::Plant, payload(1)).unwrap();
        store.clear(Category::Plant).unwrap();
        assert!(store.list(Category::Plant).is_empty());
    }
}
