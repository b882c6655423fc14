//! The three-step quick symptom check.
//!
//! A coarser classifier used by the short intake form. It takes a handful of
//! yes/no signals instead of free-text keyword scoring and maps a single
//! additive score onto four outcomes.

use serde::{Deserialize, Serialize};

/// Inputs collected by the quick form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickCheckInput {
    pub symptoms: String,
    /// Severity on the quick form's 1–5 slider.
    pub severity: u8,
    pub has_bleeding: bool,
    pub short_of_breath: bool,
    /// Free text such as `"2"` or `"about 5 days"`.
    #[serde(default)]
    pub duration_days: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuickLevel {
    #[serde(rename = "ER")]
    Er,
    Urgent,
    Clinic,
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickCheckOutcome {
    pub result: QuickLevel,
    pub confidence: u8,
    pub score: u32,
}

/// Classify a quick-form submission.
pub fn quick_check(input: &QuickCheckInput) -> QuickCheckOutcome {
    let lowered = input.symptoms.to_lowercase();

    let mut score = u32::from(input.severity) * 2;
    if input.has_bleeding {
        score += 4;
    }
    if input.short_of_breath {
        score += 5;
    }
    if lowered.contains("chest") {
        score += 6;
    }
    if lowered.contains("fever") {
        score += 2;
    }
    if reports_more_than_three_days(&input.duration_days) {
        score += 3;
    }

    let (result, confidence) = match score {
        s if s >= 12 => (QuickLevel::Er, 90),
        s if s >= 8 => (QuickLevel::Urgent, 78),
        s if s >= 4 => (QuickLevel::Clinic, 68),
        _ => (QuickLevel::Home, 55),
    };

    QuickCheckOutcome {
        result,
        confidence,
        score,
    }
}

/// True when the first run of digits in `duration` is a number above 3.
///
/// A run too long to parse is certainly above 3.
fn reports_more_than_three_days(duration: &str) -> bool {
    let digits: String = duration
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return false;
    }
    digits.parse::<u64>().map_or(true, |days| days > 3)
}
