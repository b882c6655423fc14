//! Symptom report types: the input to every assessment.
//!
//! A `SymptomReport` is created fresh for each assessment and never mutated
//! by the engine. Field names serialize in camelCase to match the form
//! payloads the UI produces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};

/// How long the patient has had the symptoms.
///
/// Serialized as the kebab-case bucket names the intake form uses,
/// e.g. `"less-than-hour"` or `"few-days"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationBucket {
    LessThanHour,
    FewHours,
    Today,
    Yesterday,
    FewDays,
    Week,
    Weeks,
    Months,
}

impl DurationBucket {
    /// Every bucket, shortest first.
    pub const ALL: [DurationBucket; 8] = [
        DurationBucket::LessThanHour,
        DurationBucket::FewHours,
        DurationBucket::Today,
        DurationBucket::Yesterday,
        DurationBucket::FewDays,
        DurationBucket::Week,
        DurationBucket::Weeks,
        DurationBucket::Months,
    ];

    /// The wire name of this bucket.
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationBucket::LessThanHour => "less-than-hour",
            DurationBucket::FewHours => "few-hours",
            DurationBucket::Today => "today",
            DurationBucket::Yesterday => "yesterday",
            DurationBucket::FewDays => "few-days",
            DurationBucket::Week => "week",
            DurationBucket::Weeks => "weeks",
            DurationBucket::Months => "months",
        }
    }

    /// Human-readable label shown next to the option in the form.
    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::LessThanHour => "Less than an hour",
            DurationBucket::FewHours => "A few hours",
            DurationBucket::Today => "Started today",
            DurationBucket::Yesterday => "Since yesterday",
            DurationBucket::FewDays => "A few days",
            DurationBucket::Week => "About a week",
            DurationBucket::Weeks => "Several weeks",
            DurationBucket::Months => "Months",
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationBucket {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self> {
        DurationBucket::ALL
            .iter()
            .copied()
            .find(|bucket| bucket.as_str() == s)
            .ok_or_else(|| TriageError::UnknownDuration {
                value: s.to_string(),
            })
    }
}

/// A patient's description of their symptoms.
///
/// The scoring engine is total over every value of this type: a severity
/// outside 1–10 simply lands in the nearest band, and an absent duration
/// contributes nothing. Use [`SymptomReport::new`] or
/// [`SymptomReport::validate`] at the boundary to reject out-of-scale input
/// before it reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomReport {
    /// Free-text symptom description as typed by the patient.
    pub symptoms: String,
    /// Self-reported severity on a 1–10 scale.
    pub severity: u8,
    /// Duration bucket, or `None` when the patient left it unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationBucket>,
    /// At least one photo was attached.
    #[serde(default)]
    pub has_photos: bool,
    /// A voice note was recorded.
    #[serde(default)]
    pub has_voice_note: bool,
    /// Anything else the patient wanted to add.
    #[serde(default)]
    pub additional_info: String,
}

impl SymptomReport {
    pub const MIN_SEVERITY: u8 = 1;
    pub const MAX_SEVERITY: u8 = 10;

    /// Build a report, rejecting severities outside the 1–10 scale.
    pub fn new(symptoms: impl Into<String>, severity: i64) -> Result<Self> {
        if severity < i64::from(Self::MIN_SEVERITY) || severity > i64::from(Self::MAX_SEVERITY) {
            return Err(TriageError::InvalidSeverity { value: severity });
        }
        Ok(Self {
            symptoms: symptoms.into(),
            severity: severity as u8,
            duration: None,
            has_photos: false,
            has_voice_note: false,
            additional_info: String::new(),
        })
    }

    pub fn with_duration(mut self, duration: DurationBucket) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_photos(mut self, has_photos: bool) -> Self {
        self.has_photos = has_photos;
        self
    }

    pub fn with_voice_note(mut self, has_voice_note: bool) -> Self {
        self.has_voice_note = has_voice_note;
        self
    }

    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = info.into();
        self
    }

    /// Re-check the severity scale on a report that was deserialized or
    /// built field by field.
    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_SEVERITY..=Self::MAX_SEVERITY).contains(&self.severity) {
            return Err(TriageError::InvalidSeverity {
                value: i64::from(self.severity),
            });
        }
        Ok(())
    }
}
