//! Assessment output types.
//!
//! `TriageResult` is what the engine hands back to the caller. The urgency
//! level is never chosen independently: it always follows from the
//! recommendation via [`CareLevel::urgency_level`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};

/// Where the patient should seek care, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareLevel {
    #[serde(rename = "ER")]
    Er,
    #[serde(rename = "Urgent_Care")]
    UrgentCare,
    Clinic,
    Telehealth,
    #[serde(rename = "Self_Care")]
    SelfCare,
}

impl CareLevel {
    /// All care levels in descending urgency. Ties in scoring are broken by
    /// this order.
    pub const PRIORITY: [CareLevel; 5] = [
        CareLevel::Er,
        CareLevel::UrgentCare,
        CareLevel::Clinic,
        CareLevel::Telehealth,
        CareLevel::SelfCare,
    ];

    /// The fixed care-level to urgency mapping.
    pub fn urgency_level(&self) -> UrgencyLevel {
        match self {
            CareLevel::Er => UrgencyLevel::Critical,
            CareLevel::UrgentCare => UrgencyLevel::High,
            CareLevel::Clinic => UrgencyLevel::Medium,
            CareLevel::Telehealth | CareLevel::SelfCare => UrgencyLevel::Low,
        }
    }

    /// The wire name, e.g. `"Urgent_Care"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CareLevel::Er => "ER",
            CareLevel::UrgentCare => "Urgent_Care",
            CareLevel::Clinic => "Clinic",
            CareLevel::Telehealth => "Telehealth",
            CareLevel::SelfCare => "Self_Care",
        }
    }
}

impl fmt::Display for CareLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CareLevel {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self> {
        CareLevel::PRIORITY
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| TriageError::ConfigError {
                reason: format!("unknown care level '{}'", s),
            })
    }
}

/// Coarse urgency derived from the care level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UrgencyLevel::Critical => "Critical",
            UrgencyLevel::High => "High",
            UrgencyLevel::Medium => "Medium",
            UrgencyLevel::Low => "Low",
        };
        f.write_str(s)
    }
}

/// The care recommendation produced for one symptom report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    pub recommendation: CareLevel,
    /// Percentage, always within `[MIN_CONFIDENCE, MAX_CONFIDENCE]`.
    pub confidence: u8,
    pub urgency_level: UrgencyLevel,
    /// Why the recommendation was made, in the order the evidence was found.
    pub reasoning: Vec<String>,
    pub next_steps: Vec<String>,
    /// Only populated when an emergency-indicating signal was detected.
    pub red_flags: Vec<String>,
    pub estimated_wait_time: String,
    pub follow_up_recommended: bool,
}

impl TriageResult {
    pub const MIN_CONFIDENCE: u8 = 45;
    pub const MAX_CONFIDENCE: u8 = 95;

    /// Clamp a raw confidence value into the published range.
    pub fn clamp_confidence(raw: i32) -> u8 {
        raw.clamp(
            i32::from(Self::MIN_CONFIDENCE),
            i32::from(Self::MAX_CONFIDENCE),
        ) as u8
    }

    /// Replace the recommendation, keeping the urgency level in step with it.
    pub fn set_recommendation(&mut self, recommendation: CareLevel) {
        self.recommendation = recommendation;
        self.urgency_level = recommendation.urgency_level();
    }
}

/// What the follow-up answers add to an assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpAnalysis {
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    /// Steps to move the recommendation toward higher urgency, within
    /// `[MIN_URGENCY_MODIFIER, MAX_URGENCY_MODIFIER]`.
    pub urgency_modifier: i8,
}

impl FollowUpAnalysis {
    pub const MIN_URGENCY_MODIFIER: i8 = -2;
    pub const MAX_URGENCY_MODIFIER: i8 = 3;
}
