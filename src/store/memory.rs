use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::types::{TodoEntry, TodoLabel};

/// A record held by the in-memory backend.
///
/// Entries and labels share one id-keyed map, which is why their id ranges
/// must not overlap.
#[derive(Debug, Clone)]
pub enum Record {
    Entry(TodoEntry),
    Label(TodoLabel),
}

/// Process-local associative store, id to record.
///
/// The map is guarded by an `RwLock` so concurrent requests cannot race on
/// check-then-insert id allocation or on label attachment. State is lost on
/// restart; this backend is meant for tests and demos, not durability.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<HashMap<i64, Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the demo entry `id:1`, mirroring what the
    /// service seeds at startup when the memory backend is selected.
    pub fn with_demo_entry() -> Self {
        let store = Self::new();
        let entry = TodoEntry::new("Lorem Ipsum", None, chrono::Utc::now()).with_id(1);
        store
            .records
            .try_write()
            .expect("fresh store is uncontended")
            .insert(1, Record::Entry(entry));
        store
    }

    pub async fn get(&self, id: i64) -> Option<Record> {
        self.records.read().await.get(&id).cloned()
    }

    pub async fn insert(&self, id: i64, record: Record) {
        self.records.write().await.insert(id, record);
    }

    /// Runs `mutate` while holding the write guard, so lookups and the
    /// mutation itself happen under one critical section.
    pub async fn mutate<R>(&self, mutate: impl FnOnce(&mut HashMap<i64, Record>) -> R) -> R {
        let mut records = self.records.write().await;
        mutate(&mut records)
    }
}
