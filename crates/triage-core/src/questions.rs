//! Follow-up question selection and answer analysis.

use std::collections::HashSet;

use tracing::debug;

use triage_contracts::{
    question::{FollowUpQuestion, QuestionResponse},
    result::FollowUpAnalysis,
};

use crate::catalog::CATALOG;

/// Return the clarifying questions for a free-text symptom description.
///
/// Every catalog keyword contained in the lower-cased text contributes its
/// full question group, in catalog order. Duplicate ids are dropped, keeping
/// the first occurrence. Text matching no keyword yields an empty list.
pub fn get_follow_up_questions(symptom_text: &str) -> Vec<FollowUpQuestion> {
    let lowered = symptom_text.to_lowercase();
    let mut seen = HashSet::new();
    let mut questions = Vec::new();

    for entry in CATALOG.iter().filter(|e| lowered.contains(e.keyword)) {
        debug!(keyword = entry.keyword, "follow-up keyword matched");
        for question in entry.to_questions() {
            if seen.insert(question.id.clone()) {
                questions.push(question);
            }
        }
    }

    questions
}

/// An answer that raises concern: `(question id, answer, risk factor, urgency delta)`.
type AnswerRule = (&'static str, &'static str, &'static str, i32);

const ANSWER_RULES: &[AnswerRule] = &[
    (
        "fever_temperature",
        "Above 103°F (39.4°C)",
        "High fever (>103°F) indicates serious infection",
        2,
    ),
    (
        "fever_temperature",
        "102-103°F (38.9-39.4°C)",
        "Significant fever requires medical attention",
        1,
    ),
    (
        "fever_duration",
        "More than 5 days",
        "Prolonged fever may indicate serious condition",
        1,
    ),
    (
        "chest_pain_type",
        "Pressure or squeezing",
        "Chest pressure may indicate cardiac issue",
        3,
    ),
    (
        "chest_pain_type",
        "Tight band around chest",
        "Chest pressure may indicate cardiac issue",
        3,
    ),
    (
        "chest_pain_breathing",
        "yes",
        "Chest pain with breathing difficulty requires immediate attention",
        2,
    ),
    (
        "headache_vision",
        "yes",
        "Vision changes with headache may indicate serious condition",
        1,
    ),
    (
        "cough_mucus",
        "Blood-tinged",
        "Blood in cough requires immediate medical evaluation",
        2,
    ),
    (
        "cough_mucus",
        "Green",
        "Green mucus may indicate bacterial infection",
        1,
    ),
    (
        "breathing_onset",
        "Suddenly",
        "Sudden breathing difficulty requires immediate attention",
        3,
    ),
    (
        "abdominal_location",
        "Lower right abdomen",
        "Lower right abdominal pain may indicate appendicitis",
        2,
    ),
];

fn concerning_answer(response: &QuestionResponse) -> Option<&'static AnswerRule> {
    ANSWER_RULES
        .iter()
        .find(|(id, answer, _, _)| response.question_id == *id && response.answer.is(answer))
}

/// Turn follow-up answers into risk factors, advice, and an urgency modifier.
///
/// Advice is chosen from the raw accumulated modifier; the returned modifier
/// is clamped to `[-2, 3]`. Answers with no rule contribute nothing.
pub fn analyze_follow_up_responses<'a, I>(responses: I) -> FollowUpAnalysis
where
    I: IntoIterator<Item = &'a QuestionResponse>,
{
    let mut risk_factors = Vec::new();
    let mut modifier: i32 = 0;

    for response in responses {
        if let Some((id, _, risk, delta)) = concerning_answer(response) {
            debug!(question_id = id, delta, "concerning follow-up answer");
            risk_factors.push(risk.to_string());
            modifier += delta;
        }
    }

    let recommendations: &[&str] = if modifier >= 2 {
        &["Seek immediate medical attention", "Do not delay treatment"]
    } else if modifier >= 1 {
        &["Schedule urgent care visit within 24 hours", "Monitor symptoms closely"]
    } else {
        &["Continue monitoring symptoms", "Seek care if symptoms worsen"]
    };

    FollowUpAnalysis {
        risk_factors,
        recommendations: recommendations.iter().map(|s| s.to_string()).collect(),
        urgency_modifier: modifier.clamp(
            i32::from(FollowUpAnalysis::MIN_URGENCY_MODIFIER),
            i32::from(FollowUpAnalysis::MAX_URGENCY_MODIFIER),
        ) as i8,
    }
}
