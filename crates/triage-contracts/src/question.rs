//! Follow-up question and answer types.
//!
//! Questions are static catalog data; answers are collected one at a time
//! as the patient works through the form.

use serde::{Deserialize, Serialize};

/// The input control a question is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    YesNo,
    Text,
    Number,
    Scale,
}

/// A structured clarifying question shown after a symptom keyword match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    /// Unique identifier, e.g. `"fever_temperature"`.
    pub id: String,
    /// The question text shown to the patient.
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Ordered answer options. Only populated for multiple-choice questions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub required: bool,
    /// Groups the question with the symptom keyword that selected it.
    pub category: String,
}

/// An answer to a follow-up question.
///
/// Yes/no answers are the lower-case strings `"yes"` and `"no"`; scale and
/// number answers are numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Number(f64),
    Text(String),
}

impl Answer {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(s) => Some(s),
            Answer::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Answer::Number(n) => Some(*n),
            Answer::Text(_) => None,
        }
    }

    /// True when this is a text answer exactly equal to `expected`.
    pub fn is(&self, expected: &str) -> bool {
        self.as_text() == Some(expected)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_string())
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

impl From<f64> for Answer {
    fn from(n: f64) -> Self {
        Answer::Number(n)
    }
}

impl From<i32> for Answer {
    fn from(n: i32) -> Self {
        Answer::Number(f64::from(n))
    }
}

/// One answered question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub question_id: String,
    pub answer: Answer,
}

impl QuestionResponse {
    pub fn new(question_id: impl Into<String>, answer: impl Into<Answer>) -> Self {
        Self {
            question_id: question_id.into(),
            answer: answer.into(),
        }
    }
}

/// The set of answers collected so far, keyed by question id.
///
/// Re-answering a question replaces the earlier answer and moves it to the
/// end, so iteration order is the order in which each question was last
/// answered. The same holds when a set is deserialized from a wire array
/// that answers a question more than once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<QuestionResponse>", into = "Vec<QuestionResponse>")]
pub struct ResponseSet {
    responses: Vec<QuestionResponse>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `answer` for `question_id`, replacing any earlier answer.
    pub fn answer(&mut self, question_id: impl Into<String>, answer: impl Into<Answer>) {
        let response = QuestionResponse::new(question_id, answer);
        self.responses
            .retain(|existing| existing.question_id != response.question_id);
        self.responses.push(response);
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.responses
            .iter()
            .find(|r| r.question_id == question_id)
            .map(|r| &r.answer)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionResponse> {
        self.responses.iter()
    }

    pub fn as_slice(&self) -> &[QuestionResponse] {
        &self.responses
    }

    /// Drop every answer, e.g. when the symptom text changes.
    pub fn clear(&mut self) {
        self.responses.clear();
    }
}

impl FromIterator<QuestionResponse> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = QuestionResponse>>(iter: I) -> Self {
        let mut set = ResponseSet::new();
        for response in iter {
            set.answer(response.question_id, response.answer);
        }
        set
    }
}

impl From<Vec<QuestionResponse>> for ResponseSet {
    fn from(responses: Vec<QuestionResponse>) -> Self {
        responses.into_iter().collect()
    }
}

impl From<ResponseSet> for Vec<QuestionResponse> {
    fn from(set: ResponseSet) -> Self {
        set.responses
    }
}
