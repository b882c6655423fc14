//! Canned assessments that show the engine's main behaviours end to end.
//!
//! Each scenario is run through the same `Assessor` the `assess` subcommand
//! uses, without the variation pass, and checked against the care levels it
//! is allowed to produce.

use triage_contracts::{
    error::{Result, TriageError},
    question::ResponseSet,
    report::{DurationBucket, SymptomReport},
    result::CareLevel,
};
use triage_core::Assessor;

struct Scenario {
    name: &'static str,
    symptoms: &'static str,
    severity: i64,
    duration: Option<DurationBucket>,
    answers: &'static [(&'static str, &'static str)],
    expected: &'static [CareLevel],
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "Chest pain at high severity",
        symptoms: "chest pain radiating to left arm",
        severity: 9,
        duration: Some(DurationBucket::LessThanHour),
        answers: &[],
        expected: &[CareLevel::Er],
    },
    Scenario {
        name: "Severe abdominal pain, recent onset",
        symptoms: "severe abdominal pain",
        severity: 9,
        duration: Some(DurationBucket::LessThanHour),
        answers: &[],
        expected: &[CareLevel::Er],
    },
    Scenario {
        name: "Mild cold",
        symptoms: "mild cold",
        severity: 2,
        duration: Some(DurationBucket::Today),
        answers: &[],
        expected: &[CareLevel::Clinic, CareLevel::Telehealth, CareLevel::SelfCare],
    },
    Scenario {
        name: "Ongoing anxiety and insomnia",
        symptoms: "anxiety and insomnia",
        severity: 3,
        duration: Some(DurationBucket::Weeks),
        answers: &[],
        expected: &[CareLevel::Telehealth],
    },
    Scenario {
        name: "Shortness of breath with sudden onset",
        symptoms: "mild shortness of breath",
        severity: 3,
        duration: Some(DurationBucket::FewHours),
        answers: &[("breathing_onset", "Suddenly")],
        expected: &[CareLevel::Er, CareLevel::UrgentCare],
    },
    Scenario {
        name: "Productive cough with green mucus",
        symptoms: "cough",
        severity: 4,
        duration: Some(DurationBucket::FewDays),
        answers: &[("cough_mucus", "Green")],
        expected: &[CareLevel::UrgentCare, CareLevel::Clinic],
    },
];

/// Run every scenario, printing each outcome. Fails if any scenario lands
/// outside its expected care levels.
pub fn run_all(assessor: &Assessor) -> Result<()> {
    let mut failures = Vec::new();

    for (index, scenario) in SCENARIOS.iter().enumerate() {
        println!("=== Scenario {}: {} ===", index + 1, scenario.name);

        let mut report = SymptomReport::new(scenario.symptoms, scenario.severity)?;
        report.duration = scenario.duration;

        let mut responses = ResponseSet::new();
        for (id, answer) in scenario.answers {
            responses.answer(*id, *answer);
        }

        let result = assessor.assess(&report, &responses);
        let ok = scenario.expected.contains(&result.recommendation);

        println!("  Symptoms       : {}", scenario.symptoms);
        println!("  Severity       : {}/10", scenario.severity);
        if let Some(duration) = scenario.duration {
            println!("  Duration       : {}", duration.label());
        }
        if !responses.is_empty() {
            println!("  Answers        : {}", responses.len());
        }
        println!(
            "  Recommendation : {} ({}%, {})",
            result.recommendation, result.confidence, result.urgency_level
        );
        for flag in &result.red_flags {
            println!("  Red flag       : {flag}");
        }
        println!("  Outcome        : {}", if ok { "as expected" } else { "UNEXPECTED" });
        println!();

        if !ok {
            failures.push(format!(
                "scenario '{}' produced {}",
                scenario.name, result.recommendation
            ));
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(TriageError::Validation { failures })
    }
}

#[cfg(test)]
mod tests {
    use triage_core::get_follow_up_questions;

    use super::{run_all, SCENARIOS};

    #[test]
    fn test_scenario_answers_match_selected_questions() {
        for scenario in SCENARIOS {
            let selected = get_follow_up_questions(scenario.symptoms);
            for (id, _) in scenario.answers {
                assert!(
                    selected.iter().any(|q| q.id == *id),
                    "scenario '{}' answers '{}' which its text never asks",
                    scenario.name,
                    id
                );
            }
        }
    }

    #[test]
    fn test_all_scenarios_land_as_expected() {
        run_all(&triage_core::Assessor::default()).unwrap();
    }
}
