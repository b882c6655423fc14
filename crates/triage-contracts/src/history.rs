//! Records kept by the assessment history.
//!
//! These are snapshots the caller persists after an assessment. The engine
//! never reads them back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    report::SymptomReport,
    result::{CareLevel, TriageResult, UrgencyLevel},
};

/// One completed assessment as stored in the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// Short description shown in the history list.
    pub summary: String,
    pub result: CareLevel,
    pub confidence: u8,
    pub urgency_level: UrgencyLevel,
    pub reasoning: Vec<String>,
    pub next_steps: Vec<String>,
    pub red_flags: Vec<String>,
    pub estimated_wait_time: String,
    /// The report exactly as submitted.
    pub raw: SymptomReport,
    pub follow_up_date: Option<DateTime<Utc>>,
    pub severity: u8,
    pub has_photos: bool,
    pub has_voice_note: bool,
    pub follow_up_recommended: bool,
}

impl TriageEntry {
    /// Summary used when the patient submitted an empty description.
    pub const DEFAULT_SUMMARY: &'static str = "Enhanced triage assessment";

    /// Snapshot `result` for `report` under the given id and time.
    pub fn new(
        id: impl Into<String>,
        timestamp: DateTime<Utc>,
        report: &SymptomReport,
        result: &TriageResult,
        follow_up_date: Option<DateTime<Utc>>,
    ) -> Self {
        let summary = if report.symptoms.is_empty() {
            Self::DEFAULT_SUMMARY.to_string()
        } else {
            report.symptoms.clone()
        };

        Self {
            id: id.into(),
            timestamp,
            summary,
            result: result.recommendation,
            confidence: result.confidence,
            urgency_level: result.urgency_level,
            reasoning: result.reasoning.clone(),
            next_steps: result.next_steps.clone(),
            red_flags: result.red_flags.clone(),
            estimated_wait_time: result.estimated_wait_time.clone(),
            raw: report.clone(),
            follow_up_date,
            severity: report.severity,
            has_photos: report.has_photos,
            has_voice_note: report.has_voice_note,
            follow_up_recommended: result.follow_up_recommended,
        }
    }
}

/// A scheduled check-in on an earlier assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpReminder {
    /// Same id as the `TriageEntry` it follows up on.
    pub id: String,
    pub date: DateTime<Utc>,
    pub symptoms: String,
    pub severity: u8,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
}

/// Notification returned to the caller after the history changes.
///
/// The caller decides how to dispatch it (refresh a list, show a toast);
/// nothing in the triage crates listens for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum TriageEvent {
    /// A new assessment was recorded.
    #[serde(rename_all = "camelCase")]
    Created {
        entry_id: String,
        reminder_scheduled: bool,
    },
    /// The history list was emptied.
    Cleared,
}
