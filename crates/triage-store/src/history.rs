//! Assessment history and follow-up reminders.
//!
//! Both lists are stored as JSON arrays under fixed keys, the same layout the
//! web form keeps in local storage:
//!
//!   `triageHistory`     newest first, at most [`HISTORY_LIMIT`] entries
//!   `followUpReminders` append order
//!
//! A value that fails to parse is read as an empty list, so one corrupt write
//! never locks the patient out of new assessments.

use chrono::{DateTime, Duration, Utc};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use triage_contracts::{
    error::{Result, TriageError},
    history::{FollowUpReminder, TriageEntry, TriageEvent},
    report::SymptomReport,
    result::TriageResult,
};
use triage_core::traits::KeyValueStore;

pub const HISTORY_KEY: &str = "triageHistory";
pub const REMINDERS_KEY: &str = "followUpReminders";

/// Maximum number of assessments kept in the history list.
pub const HISTORY_LIMIT: usize = 50;

/// Days until the default follow-up reminder.
pub const DEFAULT_FOLLOW_UP_DAYS: i64 = 7;

/// How far ahead a reminder counts as due.
pub const DUE_WINDOW_MINUTES: i64 = 5;

/// Persists assessments and their follow-up reminders in a `KeyValueStore`.
#[derive(Debug, Clone)]
pub struct TriageHistory<S> {
    store: S,
}

impl<S: KeyValueStore> TriageHistory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a completed assessment.
    ///
    /// The entry is prepended to the history, which is then truncated to
    /// [`HISTORY_LIMIT`]. A reminder is scheduled when the caller picked a
    /// follow-up date or the result recommends follow-up; without an explicit
    /// date it falls [`DEFAULT_FOLLOW_UP_DAYS`] after `now`.
    pub fn record(
        &self,
        report: &SymptomReport,
        result: &TriageResult,
        follow_up_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<TriageEvent> {
        let entry_id = Uuid::new_v4().to_string();
        let entry = TriageEntry::new(entry_id.clone(), now, report, result, follow_up_date);

        let mut history: Vec<TriageEntry> = self.load(HISTORY_KEY)?;
        history.insert(0, entry);
        history.truncate(HISTORY_LIMIT);
        self.save(HISTORY_KEY, &history)?;

        let reminder_scheduled = follow_up_date.is_some() || result.follow_up_recommended;
        if reminder_scheduled {
            let date =
                follow_up_date.unwrap_or_else(|| now + Duration::days(DEFAULT_FOLLOW_UP_DAYS));
            let mut reminders: Vec<FollowUpReminder> = self.load(REMINDERS_KEY)?;
            reminders.push(FollowUpReminder {
                id: entry_id.clone(),
                date,
                symptoms: report.symptoms.clone(),
                severity: report.severity,
                created: now,
                completed: false,
            });
            self.save(REMINDERS_KEY, &reminders)?;
            debug!(entry_id = %entry_id, date = %date, "follow-up reminder scheduled");
        }

        info!(
            entry_id = %entry_id,
            recommendation = %result.recommendation,
            history_len = history.len(),
            reminder_scheduled,
            "assessment recorded"
        );

        Ok(TriageEvent::Created {
            entry_id,
            reminder_scheduled,
        })
    }

    /// All recorded assessments, newest first.
    pub fn entries(&self) -> Result<Vec<TriageEntry>> {
        self.load(HISTORY_KEY)
    }

    /// Drop the whole history. Reminders are kept.
    pub fn clear(&self) -> Result<TriageEvent> {
        self.store.remove(HISTORY_KEY)?;
        info!("assessment history cleared");
        Ok(TriageEvent::Cleared)
    }

    pub fn reminders(&self) -> Result<Vec<FollowUpReminder>> {
        self.load(REMINDERS_KEY)
    }

    pub fn mark_completed(&self, id: &str) -> Result<()> {
        let mut reminders: Vec<FollowUpReminder> = self.load(REMINDERS_KEY)?;
        let reminder = reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| reminder_not_found(id))?;
        reminder.completed = true;
        self.save(REMINDERS_KEY, &reminders)
    }

    pub fn delete_reminder(&self, id: &str) -> Result<()> {
        let mut reminders: Vec<FollowUpReminder> = self.load(REMINDERS_KEY)?;
        let before = reminders.len();
        reminders.retain(|r| r.id != id);
        if reminders.len() == before {
            return Err(reminder_not_found(id));
        }
        self.save(REMINDERS_KEY, &reminders)
    }

    /// Open reminders falling due within the next few minutes.
    ///
    /// A reminder is due when `0 < date - now <= DUE_WINDOW_MINUTES`.
    /// Reminders already in the past are not reported again.
    pub fn due_reminders(&self, now: DateTime<Utc>) -> Result<Vec<FollowUpReminder>> {
        let window = Duration::minutes(DUE_WINDOW_MINUTES);
        let due = self
            .reminders()?
            .into_iter()
            .filter(|r| {
                let until = r.date - now;
                !r.completed && until > Duration::zero() && until <= window
            })
            .collect();
        Ok(due)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(key, error = %e, "stored list is not valid JSON; treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items).map_err(|e| TriageError::Serialization {
            reason: format!("failed to encode '{}': {}", key, e),
        })?;
        self.store.set(key, json)
    }
}

fn reminder_not_found(id: &str) -> TriageError {
    TriageError::NotFound {
        kind: "reminder".to_string(),
        id: id.to_string(),
    }
}
