//! # triage-store
//!
//! Persistence for completed assessments.
//!
//! `InMemoryStore` is the reference `KeyValueStore`; `TriageHistory` layers
//! the assessment list and follow-up reminders on top of any store.

pub mod history;
pub mod memory;

pub use history::TriageHistory;
pub use memory::InMemoryStore;
