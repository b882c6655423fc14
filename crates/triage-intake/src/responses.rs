//! Validation of raw follow-up answer payloads.
//!
//! The payload is a JSON array of `{ "questionId", "answer" }` objects. After
//! the structural check each answer is matched against the catalog question
//! it claims to answer.

use jsonschema::Validator;
use serde_json::{json, Value};
use tracing::{debug, warn};

use triage_contracts::{
    error::{Result, TriageError},
    question::{Answer, FollowUpQuestion, QuestionType, ResponseSet},
};
use triage_core::catalog::find_question;

/// Inclusive bounds of a `scale` answer.
const SCALE_RANGE: std::ops::RangeInclusive<f64> = 1.0..=10.0;

pub fn responses_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "required": ["questionId", "answer"],
            "properties": {
                "questionId": { "type": "string" },
                "answer": { "type": ["string", "number"] }
            }
        }
    })
}

/// Turns raw answer payloads into a `ResponseSet`.
pub struct ResponseValidator {
    validator: Validator,
}

impl ResponseValidator {
    pub fn new() -> Result<Self> {
        let validator = jsonschema::validator_for(&responses_schema()).map_err(|e| {
            TriageError::ConfigError {
                reason: format!("invalid response schema: {e}"),
            }
        })?;
        Ok(Self { validator })
    }

    /// Validate `payload` and collect the answers in submission order.
    ///
    /// Numeric answers to `scale` and `number` questions may arrive as
    /// strings (`"7"`); they are stored as numbers.
    pub fn validate(&self, payload: &Value) -> Result<ResponseSet> {
        let mut failures: Vec<String> = self
            .validator
            .iter_errors(payload)
            .map(|error| format!("JSON Schema violation at {}: {}", error.instance_path, error))
            .collect();

        let mut responses = ResponseSet::new();
        if failures.is_empty() {
            for item in payload.as_array().map(Vec::as_slice).unwrap_or_default() {
                let id = item["questionId"].as_str().unwrap_or_default();
                let Some(question) = find_question(id) else {
                    failures.push(format!("unknown question id '{id}'"));
                    continue;
                };
                match check_answer(&question, &item["answer"]) {
                    Ok(answer) => responses.answer(id, answer),
                    Err(message) => failures.push(message),
                }
            }
        }

        if !failures.is_empty() {
            for message in &failures {
                warn!(%message, "follow-up answer rejected");
            }
            return Err(TriageError::Validation { failures });
        }

        debug!(answers = responses.len(), "follow-up answers accepted");
        Ok(responses)
    }
}

/// Check one answer against its question, returning the typed answer or a
/// failure message.
fn check_answer(question: &FollowUpQuestion, raw: &Value) -> std::result::Result<Answer, String> {
    let id = &question.id;
    match question.question_type {
        QuestionType::MultipleChoice => match raw.as_str() {
            Some(text) if question.options.iter().any(|o| o == text) => Ok(Answer::from(text)),
            _ => Err(format!("answer {raw} is not an option of '{id}'")),
        },
        QuestionType::YesNo => match raw.as_str() {
            Some(text @ ("yes" | "no")) => Ok(Answer::from(text)),
            _ => Err(format!("answer {raw} to '{id}' must be \"yes\" or \"no\"")),
        },
        QuestionType::Text => match raw.as_str() {
            Some(text) => Ok(Answer::from(text)),
            None => Err(format!("answer {raw} to '{id}' must be text")),
        },
        QuestionType::Number => numeric(raw)
            .map(Answer::Number)
            .ok_or_else(|| format!("answer {raw} to '{id}' must be a number")),
        QuestionType::Scale => match numeric(raw) {
            Some(n) if SCALE_RANGE.contains(&n) => Ok(Answer::Number(n)),
            _ => Err(format!("answer {raw} to '{id}' must be between 1 and 10")),
        },
    }
}

/// A finite number, given either as a JSON number or as numeric text.
fn numeric(raw: &Value) -> Option<f64> {
    raw.as_f64()
        .or_else(|| raw.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
        .filter(|n| n.is_finite())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use triage_contracts::{
        error::TriageError,
        question::{Answer, FollowUpQuestion, QuestionType},
    };

    use super::{check_answer, ResponseValidator};

    fn failures(payload: serde_json::Value) -> Vec<String> {
        let validator = ResponseValidator::new().unwrap();
        match validator.validate(&payload) {
            Err(TriageError::Validation { failures }) => failures,
            other => panic!("expected Validation error, got {:?}", other),
        }
    }

    fn question(question_type: QuestionType) -> FollowUpQuestion {
        FollowUpQuestion {
            id: "pain_scale".to_string(),
            question: "Rate your pain".to_string(),
            question_type,
            options: Vec::new(),
            required: true,
            category: "pain".to_string(),
        }
    }

    // ── Catalog answers ───────────────────────────────────────────────────────

    #[test]
    fn test_valid_answers_accepted_in_order() {
        let validator = ResponseValidator::new().unwrap();
        let set = validator
            .validate(&json!([
                { "questionId": "chest_pain_type", "answer": "Pressure or squeezing" },
                { "questionId": "chest_pain_breathing", "answer": "yes" },
                { "questionId": "fever_chills", "answer": "no" }
            ]))
            .unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.as_slice()[0].question_id, "chest_pain_type");
        assert_eq!(set.get("chest_pain_breathing"), Some(&Answer::from("yes")));
    }

    #[test]
    fn test_empty_array_is_empty_set() {
        let validator = ResponseValidator::new().unwrap();
        assert!(validator.validate(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_repeated_answer_replaces_earlier_one() {
        let validator = ResponseValidator::new().unwrap();
        let set = validator
            .validate(&json!([
                { "questionId": "rash_itchy", "answer": "yes" },
                { "questionId": "rash_location", "answer": "Arms" },
                { "questionId": "rash_itchy", "answer": "no" }
            ]))
            .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[1].question_id, "rash_itchy");
        assert_eq!(set.get("rash_itchy"), Some(&Answer::from("no")));
    }

    #[test]
    fn test_bad_answers_all_reported() {
        let failures = failures(json!([
            { "questionId": "heart_rate", "answer": "fast" },
            { "questionId": "cough_mucus", "answer": "Purple" },
            { "questionId": "headache_vision", "answer": "Yes" }
        ]));

        assert_eq!(failures.len(), 3);
        assert!(failures[0].contains("unknown question id 'heart_rate'"));
        assert!(failures[1].contains("cough_mucus"));
        assert!(failures[2].contains("\"yes\" or \"no\""));
    }

    #[test]
    fn test_structural_failures() {
        assert!(!failures(json!({ "questionId": "rash_itchy" })).is_empty());

        let failures = failures(json!([{ "questionId": "rash_itchy", "answer": true }]));
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("/0/answer"), "{}", failures[0]);
    }

    // ── Typed answers ─────────────────────────────────────────────────────────

    #[test]
    fn test_scale_answers() {
        let scale = question(QuestionType::Scale);
        assert_eq!(check_answer(&scale, &json!(7)), Ok(Answer::Number(7.0)));
        assert_eq!(check_answer(&scale, &json!("3")), Ok(Answer::Number(3.0)));
        assert!(check_answer(&scale, &json!(0)).is_err());
        assert!(check_answer(&scale, &json!(11)).is_err());
        assert!(check_answer(&scale, &json!("very")).is_err());
    }

    #[test]
    fn test_text_and_number_answers() {
        assert_eq!(
            check_answer(&question(QuestionType::Text), &json!("since Tuesday")),
            Ok(Answer::from("since Tuesday"))
        );
        assert!(check_answer(&question(QuestionType::Text), &json!(4)).is_err());
        assert_eq!(
            check_answer(&question(QuestionType::Number), &json!("38.5")),
            Ok(Answer::Number(38.5))
        );
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        let number = question(QuestionType::Number);
        for raw in ["NaN", "inf", "-infinity"] {
            assert!(check_answer(&number, &json!(raw)).is_err(), "accepted {raw}");
        }
        assert!(check_answer(&question(QuestionType::Scale), &json!("NaN")).is_err());
    }
}
