//! In-memory implementation of `KeyValueStore`.
//!
//! `InMemoryStore` keeps every value in a `BTreeMap` behind a `Mutex`, so a
//! single store can be cloned into several `TriageHistory` handles (the form,
//! the reminder list) and they all observe the same data.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use triage_contracts::error::{Result, TriageError};
use triage_core::traits::KeyValueStore;

/// A process-local string store. Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub(crate) entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries.lock().map_err(|e| TriageError::StorageFailed {
            reason: format!("store lock poisoned: {}", e),
        })
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}
