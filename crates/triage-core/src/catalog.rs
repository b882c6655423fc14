//! The fixed follow-up question catalog.
//!
//! Each entry pairs a symptom keyword with the clarifying questions shown
//! when that keyword appears in a report. Entry order is significant: it is
//! the order in which question groups are returned.

use triage_contracts::question::{FollowUpQuestion, QuestionType};

/// A catalog question in static form.
#[derive(Debug)]
pub struct QuestionTemplate {
    pub id: &'static str,
    pub question: &'static str,
    pub kind: QuestionType,
    pub options: &'static [&'static str],
    pub required: bool,
}

/// The questions attached to one symptom keyword.
#[derive(Debug)]
pub struct CatalogEntry {
    /// Lower-case phrase matched as a substring of the report text.
    pub keyword: &'static str,
    pub category: &'static str,
    pub questions: &'static [QuestionTemplate],
}

impl CatalogEntry {
    /// Owned copies of this entry's questions, ready to hand to the UI.
    pub fn to_questions(&self) -> Vec<FollowUpQuestion> {
        self.questions
            .iter()
            .map(|t| FollowUpQuestion {
                id: t.id.to_string(),
                question: t.question.to_string(),
                question_type: t.kind,
                options: t.options.iter().map(|o| o.to_string()).collect(),
                required: t.required,
                category: self.category.to_string(),
            })
            .collect()
    }
}

const NO_OPTIONS: &[&str] = &[];

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        keyword: "fever",
        category: "fever",
        questions: &[
            QuestionTemplate {
                id: "fever_temperature",
                question: "What is your current temperature?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "Below 100°F (37.8°C)",
                    "100-101°F (37.8-38.3°C)",
                    "101-102°F (38.3-38.9°C)",
                    "102-103°F (38.9-39.4°C)",
                    "Above 103°F (39.4°C)",
                    "I haven't measured it",
                ],
                required: true,
            },
            QuestionTemplate {
                id: "fever_duration",
                question: "How long have you had the fever?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "Just started (less than 6 hours)",
                    "6-12 hours",
                    "1-2 days",
                    "3-5 days",
                    "More than 5 days",
                ],
                required: true,
            },
            QuestionTemplate {
                id: "fever_chills",
                question: "Are you experiencing chills or shivering?",
                kind: QuestionType::YesNo,
                options: NO_OPTIONS,
                required: true,
            },
            QuestionTemplate {
                id: "fever_other_symptoms",
                question: "What other symptoms are you experiencing with the fever?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "Headache",
                    "Body aches",
                    "Sore throat",
                    "Cough",
                    "Nausea/Vomiting",
                    "Diarrhea",
                    "Rash",
                    "Difficulty breathing",
                    "None of the above",
                ],
                required: false,
            },
        ],
    },
    CatalogEntry {
        keyword: "chest pain",
        category: "chest_pain",
        questions: &[
            QuestionTemplate {
                id: "chest_pain_type",
                question: "How would you describe the chest pain?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "Sharp, stabbing pain",
                    "Dull, aching pain",
                    "Burning sensation",
                    "Pressure or squeezing",
                    "Tight band around chest",
                ],
                required: true,
            },
            QuestionTemplate {
                id: "chest_pain_location",
                question: "Where exactly is the pain located?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "Center of chest",
                    "Left side of chest",
                    "Right side of chest",
                    "Upper chest",
                    "Lower chest",
                    "Radiating to arm/jaw/back",
                ],
                required: true,
            },
            QuestionTemplate {
                id: "chest_pain_triggers",
                question: "What makes the pain worse?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "Physical activity",
                    "Deep breathing",
                    "Coughing",
                    "Lying down",
                    "Stress/anxiety",
                    "Nothing specific",
                ],
                required: false,
            },
            QuestionTemplate {
                id: "chest_pain_breathing",
                question: "Are you having difficulty breathing?",
                kind: QuestionType::YesNo,
                options: NO_OPTIONS,
                required: true,
            },
        ],
    },
    CatalogEntry {
        keyword: "headache",
        category: "headache",
        questions: &[
            QuestionTemplate {
                id: "headache_type",
                question: "How would you describe your headache?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "Throbbing/pulsating",
                    "Tight band around head",
                    "Sharp, stabbing",
                    "Dull, constant ache",
                    "Pressure behind eyes",
                ],
                required: true,
            },
            QuestionTemplate {
                id: "headache_location",
                question: "Where is the headache located?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "Forehead",
                    "Temples",
                    "Back of head",
                    "Top of head",
                    "Behind eyes",
                    "One side only",
                    "All over",
                ],
                required: true,
            },
            QuestionTemplate {
                id: "headache_nausea",
                question: "Are you experiencing nausea or vomiting?",
                kind: QuestionType::YesNo,
                options: NO_OPTIONS,
                required: true,
            },
            QuestionTemplate {
                id: "headache_vision",
                question: "Any vision changes or sensitivity to light?",
                kind: QuestionType::YesNo,
                options: NO_OPTIONS,
                required: true,
            },
        ],
    },
    CatalogEntry {
        keyword: "cough",
        category: "cough",
        questions: &[
            QuestionTemplate {
                id: "cough_type",
                question: "What type of cough do you have?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "Dry cough (no mucus)",
                    "Productive cough (with mucus)",
                    "Barking cough",
                    "Whooping cough",
                ],
                required: true,
            },
            QuestionTemplate {
                id: "cough_mucus",
                question: "If you're coughing up mucus, what color is it?",
                kind: QuestionType::MultipleChoice,
                options: &["Clear/white", "Yellow", "Green", "Brown", "Blood-tinged", "No mucus"],
                required: false,
            },
            QuestionTemplate {
                id: "cough_timing",
                question: "When is the cough worse?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "At night",
                    "In the morning",
                    "During the day",
                    "After eating",
                    "When lying down",
                    "Consistent throughout day",
                ],
                required: false,
            },
        ],
    },
    CatalogEntry {
        keyword: "abdominal pain",
        category: "abdominal_pain",
        questions: &[
            QuestionTemplate {
                id: "abdominal_location",
                question: "Where is the abdominal pain located?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "Upper right abdomen",
                    "Upper left abdomen",
                    "Lower right abdomen",
                    "Lower left abdomen",
                    "Around navel",
                    "All over abdomen",
                ],
                required: true,
            },
            QuestionTemplate {
                id: "abdominal_type",
                question: "How would you describe the pain?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "Sharp, stabbing",
                    "Dull, aching",
                    "Cramping",
                    "Burning",
                    "Constant pressure",
                ],
                required: true,
            },
            QuestionTemplate {
                id: "abdominal_nausea",
                question: "Are you experiencing nausea or vomiting?",
                kind: QuestionType::YesNo,
                options: NO_OPTIONS,
                required: true,
            },
            QuestionTemplate {
                id: "abdominal_bowel",
                question: "Any changes in bowel movements?",
                kind: QuestionType::MultipleChoice,
                options: &["Diarrhea", "Constipation", "Blood in stool", "No changes"],
                required: false,
            },
        ],
    },
    CatalogEntry {
        keyword: "shortness of breath",
        category: "breathing",
        questions: &[
            QuestionTemplate {
                id: "breathing_onset",
                question: "When did the breathing difficulty start?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "Suddenly",
                    "Gradually over hours",
                    "Gradually over days",
                    "Has been ongoing",
                ],
                required: true,
            },
            QuestionTemplate {
                id: "breathing_triggers",
                question: "What makes the breathing difficulty worse?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "Physical activity",
                    "Lying flat",
                    "Cold air",
                    "Stress/anxiety",
                    "Nothing specific",
                ],
                required: false,
            },
            QuestionTemplate {
                id: "breathing_chest_pain",
                question: "Do you have chest pain with the breathing difficulty?",
                kind: QuestionType::YesNo,
                options: NO_OPTIONS,
                required: true,
            },
        ],
    },
    CatalogEntry {
        keyword: "rash",
        category: "rash",
        questions: &[
            QuestionTemplate {
                id: "rash_appearance",
                question: "How would you describe the rash?",
                kind: QuestionType::MultipleChoice,
                options: &[
                    "Red, flat spots",
                    "Raised bumps",
                    "Blisters",
                    "Dry, scaly patches",
                    "Hives (welts)",
                ],
                required: true,
            },
            QuestionTemplate {
                id: "rash_itchy",
                question: "Is the rash itchy?",
                kind: QuestionType::YesNo,
                options: NO_OPTIONS,
                required: true,
            },
            QuestionTemplate {
                id: "rash_location",
                question: "Where is the rash located?",
                kind: QuestionType::MultipleChoice,
                options: &["Face", "Arms", "Legs", "Torso", "Hands/feet", "All over body"],
                required: true,
            },
        ],
    },
];

/// Look up a catalog question by id.
pub fn find_question(id: &str) -> Option<FollowUpQuestion> {
    CATALOG.iter().find_map(|entry| {
        entry
            .to_questions()
            .into_iter()
            .find(|question| question.id == id)
    })
}
