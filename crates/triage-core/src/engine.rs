//! The deterministic triage scoring engine.
//!
//! Scoring runs in five passes over a `SymptomReport`, each adding points to
//! one or more of five independent care-level scores:
//!
//!   Keywords → Severity band → Duration bucket → Attachments → Ranking
//!
//! The highest score wins. Ties go to the more urgent care level, following
//! `CareLevel::PRIORITY`. Confidence grows with the gap between the winner
//! and the runner-up.

use tracing::debug;

use triage_contracts::{
    report::{DurationBucket, SymptomReport},
    result::{CareLevel, TriageResult},
};
use triage_rules::RuleSet;

/// Emergency score above which the generic emergency warnings are added.
const EMERGENCY_WARNING_THRESHOLD: u32 = 5;

/// Accumulated points per care level. Scores only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCard {
    pub emergency: u32,
    pub urgent: u32,
    pub clinic: u32,
    pub telehealth: u32,
    pub self_care: u32,
}

impl ScoreCard {
    pub fn get(&self, level: CareLevel) -> u32 {
        match level {
            CareLevel::Er => self.emergency,
            CareLevel::UrgentCare => self.urgent,
            CareLevel::Clinic => self.clinic,
            CareLevel::Telehealth => self.telehealth,
            CareLevel::SelfCare => self.self_care,
        }
    }

    fn add(&mut self, level: CareLevel, points: u32) {
        let slot = match level {
            CareLevel::Er => &mut self.emergency,
            CareLevel::UrgentCare => &mut self.urgent,
            CareLevel::Clinic => &mut self.clinic,
            CareLevel::Telehealth => &mut self.telehealth,
            CareLevel::SelfCare => &mut self.self_care,
        };
        *slot = slot.saturating_add(points);
    }

    /// Care levels ordered by descending score.
    ///
    /// The sort is stable over `CareLevel::PRIORITY`, so equal scores keep
    /// the more urgent level first.
    pub fn ranked(&self) -> [(CareLevel, u32); 5] {
        let mut ranked = CareLevel::PRIORITY.map(|level| (level, self.get(level)));
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Everything the scoring passes found, before a recommendation is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoring {
    pub scores: ScoreCard,
    pub reasoning: Vec<String>,
    pub red_flags: Vec<String>,
}

/// Run the keyword, severity, duration, and attachment passes.
pub fn score_report(report: &SymptomReport, rules: &RuleSet) -> Scoring {
    let mut scoring = Scoring::default();

    // ── Keywords ─────────────────────────────────────────────────────────────
    for hit in rules.scan(&report.symptoms) {
        scoring.scores.add(hit.category, hit.weight);
        if hit.red_flag {
            scoring.red_flags.push(hit.red_flag_message());
        }
    }

    // ── Severity band (exactly one fires) ────────────────────────────────────
    let severity = report.severity;
    if severity >= 8 {
        scoring.scores.add(CareLevel::Er, 8);
        scoring.reasoning.push(format!(
            "High severity level ({}/10) suggests urgent medical attention",
            severity
        ));
    } else if severity >= 6 {
        scoring.scores.add(CareLevel::UrgentCare, 6);
        scoring.reasoning.push(format!(
            "Moderate-high severity ({}/10) requires prompt care",
            severity
        ));
    } else if severity >= 4 {
        scoring.scores.add(CareLevel::Clinic, 4);
        scoring.reasoning.push(format!(
            "Moderate severity ({}/10) suitable for clinic visit",
            severity
        ));
    } else if severity >= 2 {
        scoring.scores.add(CareLevel::Telehealth, 3);
        scoring.reasoning.push(format!(
            "Low-moderate severity ({}/10) may be addressed via telehealth",
            severity
        ));
    } else {
        scoring.scores.add(CareLevel::SelfCare, 2);
        scoring.reasoning.push(format!(
            "Low severity ({}/10) may be manageable with self-care",
            severity
        ));
    }

    // ── Duration bucket ──────────────────────────────────────────────────────
    if let Some(duration) = report.duration {
        let reason = match duration {
            DurationBucket::LessThanHour => {
                if severity >= 7 {
                    scoring.scores.add(CareLevel::Er, 5);
                }
                "Recent onset of symptoms"
            }
            DurationBucket::FewHours => {
                if severity >= 6 {
                    scoring.scores.add(CareLevel::UrgentCare, 3);
                }
                "Symptoms developed within hours"
            }
            DurationBucket::Today => {
                scoring.scores.add(CareLevel::Clinic, 2);
                "Same-day symptom onset"
            }
            DurationBucket::Yesterday => {
                scoring.scores.add(CareLevel::Clinic, 1);
                "Symptoms started yesterday"
            }
            DurationBucket::FewDays => {
                scoring.scores.add(CareLevel::Telehealth, 2);
                "Ongoing symptoms for several days"
            }
            DurationBucket::Week | DurationBucket::Weeks => {
                scoring.scores.add(CareLevel::Telehealth, 3);
                "Chronic or persistent symptoms"
            }
            DurationBucket::Months => {
                scoring.scores.add(CareLevel::Clinic, 2);
                "Long-term symptoms requiring evaluation"
            }
        };
        scoring.reasoning.push(reason.to_string());
    }

    // ── Attachments ──────────────────────────────────────────────────────────
    if report.has_photos {
        scoring
            .reasoning
            .push("Visual documentation provided for assessment".to_string());
        scoring.scores.add(CareLevel::Clinic, 1);
    }
    if report.has_voice_note {
        scoring
            .reasoning
            .push("Voice description provided for detailed assessment".to_string());
        scoring.scores.add(CareLevel::Clinic, 1);
    }

    scoring
}

/// The four recommended actions for a care level.
pub fn next_steps(level: CareLevel) -> [&'static str; 4] {
    match level {
        CareLevel::Er => [
            "Go to Emergency Department immediately",
            "Call 999 if symptoms worsen",
            "Bring list of current medications",
            "Have someone drive you or call ambulance",
        ],
        CareLevel::UrgentCare => [
            "Visit Urgent Care within 2-4 hours",
            "Call ahead to check wait times",
            "Bring insurance card and ID",
            "Monitor symptoms closely",
        ],
        CareLevel::Clinic => [
            "Schedule appointment with primary care physician",
            "Book within 1-3 days if possible",
            "Prepare list of symptoms and questions",
            "Bring current medications list",
        ],
        CareLevel::Telehealth => [
            "Schedule telehealth consultation",
            "Prepare quiet space with good internet",
            "Have symptoms list and medications ready",
            "Consider in-person visit if symptoms worsen",
        ],
        CareLevel::SelfCare => [
            "Monitor symptoms at home",
            "Rest and stay hydrated",
            "Use over-the-counter remedies as appropriate",
            "Seek medical care if symptoms worsen",
        ],
    }
}

/// Typical wait before the patient is seen at a care level.
pub fn estimated_wait_time(level: CareLevel) -> &'static str {
    match level {
        CareLevel::Er => "15-45 minutes (priority based)",
        CareLevel::UrgentCare => "30-90 minutes",
        CareLevel::Clinic => "1-3 days for appointment",
        CareLevel::Telehealth => "Same day or next day",
        CareLevel::SelfCare => "Immediate self-management",
    }
}

/// Assess a report against the built-in keyword rules.
pub fn analyze_symptoms(report: &SymptomReport) -> TriageResult {
    analyze_symptoms_with(report, RuleSet::builtin())
}

/// Assess a report against a caller-supplied rule set.
pub fn analyze_symptoms_with(report: &SymptomReport, rules: &RuleSet) -> TriageResult {
    let Scoring {
        scores,
        reasoning,
        mut red_flags,
    } = score_report(report, rules);

    let ranked = scores.ranked();
    let (recommendation, top_score) = ranked[0];
    let (_, second_score) = ranked[1];

    let gap = i32::try_from(top_score - second_score).unwrap_or(i32::MAX);
    let mut confidence = gap
        .saturating_mul(3)
        .saturating_add(60)
        .min(i32::from(TriageResult::MAX_CONFIDENCE));
    if report.severity >= 8 && recommendation == CareLevel::Er {
        confidence += 10;
    }
    if report.severity <= 3 && recommendation == CareLevel::SelfCare {
        confidence += 5;
    }
    let confidence = TriageResult::clamp_confidence(confidence);

    if scores.emergency > EMERGENCY_WARNING_THRESHOLD {
        red_flags.push("Symptoms may indicate serious medical condition".to_string());
        red_flags.push("Do not delay seeking immediate medical attention".to_string());
    }

    let follow_up_recommended = report.severity >= 4
        || matches!(
            report.duration,
            Some(DurationBucket::Weeks) | Some(DurationBucket::Months)
        )
        || recommendation != CareLevel::SelfCare;

    debug!(
        emergency = scores.emergency,
        urgent = scores.urgent,
        clinic = scores.clinic,
        telehealth = scores.telehealth,
        self_care = scores.self_care,
        recommendation = %recommendation,
        confidence,
        "symptoms scored"
    );

    TriageResult {
        recommendation,
        confidence,
        urgency_level: recommendation.urgency_level(),
        reasoning,
        next_steps: next_steps(recommendation).iter().map(|s| s.to_string()).collect(),
        red_flags,
        estimated_wait_time: estimated_wait_time(recommendation).to_string(),
        follow_up_recommended,
    }
}
