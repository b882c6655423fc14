//! Ports the triage engine exposes to its host application.
//!
//! The scoring and question logic is pure and never touches these. They
//! exist so the calling layer can persist assessments without reaching for
//! a global store.

use triage_contracts::error::Result;

/// A string key-value store, the shape of browser local storage.
///
/// Implementations are shared between UI components, so every method takes
/// `&self` and synchronizes internally.
pub trait KeyValueStore: Send + Sync {
    /// Return the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String) -> Result<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// All keys currently present, in ascending order.
    fn keys(&self) -> Result<Vec<String>>;
}
