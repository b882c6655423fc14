//! # triage-core
//!
//! Deterministic symptom triage for the hospital intake demo.
//!
//! This crate provides:
//! - The follow-up question catalog and selector (`questions`, `catalog`)
//! - The keyword and severity scoring engine (`engine`)
//! - The optional demo variation pass (`variation`)
//! - The `Assessor` pipeline that composes them (`assessment`)
//! - The quick three-step check (`quick`)
//! - The `KeyValueStore` port for hosts that persist results (`traits`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use triage_core::{Assessor, get_follow_up_questions};
//!
//! let assessor = Assessor::default();
//! let result = assessor.assess(&report, &responses);
//! ```

pub mod assessment;
pub mod catalog;
pub mod engine;
pub mod questions;
pub mod quick;
pub mod traits;
pub mod variation;

pub use assessment::{apply_follow_up, assess, escalate, Assessor};
pub use engine::{analyze_symptoms, analyze_symptoms_with};
pub use questions::{analyze_follow_up_responses, get_follow_up_questions};
pub use quick::quick_check;
pub use traits::KeyValueStore;
pub use variation::generate_demo_variation;

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use triage_contracts::{
        question::{QuestionResponse, QuestionType, ResponseSet},
        report::{DurationBucket, SymptomReport},
        result::{CareLevel, TriageResult, UrgencyLevel},
    };

    use super::*;
    use crate::engine::{score_report, ScoreCard};
    use crate::quick::{QuickCheckInput, QuickLevel};
    use crate::variation::alternative_for;

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn report(symptoms: &str, severity: i64) -> SymptomReport {
        SymptomReport::new(symptoms, severity).unwrap()
    }

    fn ids(text: &str) -> Vec<String> {
        get_follow_up_questions(text).into_iter().map(|q| q.id).collect()
    }

    fn responses(pairs: &[(&str, &str)]) -> ResponseSet {
        let mut set = ResponseSet::new();
        for (id, answer) in pairs {
            set.answer(*id, *answer);
        }
        set
    }

    // ── Follow-up question selection ─────────────────────────────────────────

    #[test]
    fn questions_empty_text_yields_nothing() {
        assert!(get_follow_up_questions("").is_empty());
        assert!(get_follow_up_questions("stubbed toe").is_empty());
    }

    #[test]
    fn questions_for_fever() {
        assert_eq!(
            ids("fever"),
            vec![
                "fever_temperature",
                "fever_duration",
                "fever_chills",
                "fever_other_symptoms"
            ]
        );
    }

    #[test]
    fn questions_compose_across_keywords_without_duplicates() {
        let questions = ids("fever and chest pain");
        assert_eq!(questions.len(), 8);

        let unique: std::collections::HashSet<&String> = questions.iter().collect();
        assert_eq!(unique.len(), 8);

        // Catalog order, not text order.
        assert_eq!(questions[0], "fever_temperature");
        assert_eq!(questions[4], "chest_pain_type");
    }

    #[test]
    fn questions_match_case_insensitively_and_by_substring() {
        assert_eq!(ids("Severe HEADACHE").len(), 4);
        // "feverish" literally contains "fever".
        assert_eq!(ids("feeling feverish").len(), 4);
        assert!(ids("fevered").len() == 4);
        assert!(ids("chestpain").is_empty(), "no word-boundary fuzzing");
    }

    #[test]
    fn questions_carry_type_options_and_category() {
        let questions = get_follow_up_questions("shortness of breath");
        assert_eq!(questions.len(), 3);

        let onset = &questions[0];
        assert_eq!(onset.id, "breathing_onset");
        assert_eq!(onset.question_type, QuestionType::MultipleChoice);
        assert_eq!(onset.options.len(), 4);
        assert_eq!(onset.category, "breathing");

        let chest = &questions[2];
        assert_eq!(chest.question_type, QuestionType::YesNo);
        assert!(chest.options.is_empty());
    }

    #[test]
    fn catalog_ids_are_globally_unique() {
        let mut seen = std::collections::HashSet::new();
        for entry in catalog::CATALOG {
            assert!((3..=4).contains(&entry.questions.len()), "{}", entry.keyword);
            for question in entry.questions {
                assert!(seen.insert(question.id), "duplicate id {}", question.id);
            }
        }
        assert!(catalog::find_question("rash_itchy").is_some());
        assert!(catalog::find_question("rash_color").is_none());
    }

    // ── Follow-up answer analysis ────────────────────────────────────────────

    #[test]
    fn sudden_breathing_onset_is_maximal() {
        let set = responses(&[("breathing_onset", "Suddenly")]);
        let analysis = analyze_follow_up_responses(set.iter());

        assert_eq!(analysis.urgency_modifier, 3);
        assert_eq!(
            analysis.risk_factors,
            vec!["Sudden breathing difficulty requires immediate attention"]
        );
        assert_eq!(
            analysis.recommendations,
            vec!["Seek immediate medical attention", "Do not delay treatment"]
        );
    }

    #[test]
    fn modifier_is_clamped_to_three() {
        let set = responses(&[
            ("chest_pain_type", "Tight band around chest"),
            ("chest_pain_breathing", "yes"),
            ("breathing_onset", "Suddenly"),
        ]);
        let analysis = analyze_follow_up_responses(set.iter());

        assert_eq!(analysis.urgency_modifier, 3);
        assert_eq!(analysis.risk_factors.len(), 3);
    }

    #[test]
    fn single_point_answer_suggests_urgent_visit() {
        let set = responses(&[("cough_mucus", "Green")]);
        let analysis = analyze_follow_up_responses(set.iter());

        assert_eq!(analysis.urgency_modifier, 1);
        assert_eq!(
            analysis.recommendations,
            vec!["Schedule urgent care visit within 24 hours", "Monitor symptoms closely"]
        );
    }

    #[test]
    fn benign_answers_keep_monitoring_advice() {
        let set = responses(&[
            ("fever_temperature", "Below 100°F (37.8°C)"),
            ("chest_pain_breathing", "no"),
            ("rash_itchy", "yes"),
        ]);
        let analysis = analyze_follow_up_responses(set.iter());

        assert_eq!(analysis.urgency_modifier, 0);
        assert!(analysis.risk_factors.is_empty());
        assert_eq!(
            analysis.recommendations,
            vec!["Continue monitoring symptoms", "Seek care if symptoms worsen"]
        );
    }

    #[test]
    fn answer_matching_is_exact() {
        let set: ResponseSet = vec![
            QuestionResponse::new("chest_pain_breathing", "Yes"),
            QuestionResponse::new("headache_vision", 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(analyze_follow_up_responses(set.iter()).urgency_modifier, 0);
    }

    // ── Scoring engine ───────────────────────────────────────────────────────

    #[test]
    fn chest_pain_with_high_severity_goes_to_er() {
        for severity in 8..=10 {
            let result = analyze_symptoms(&report("crushing chest pain", severity));
            assert_eq!(result.recommendation, CareLevel::Er);
            assert_eq!(result.urgency_level, UrgencyLevel::Critical);
            assert_eq!(
                result.red_flags,
                vec![
                    "\"chest pain\" indicates potential emergency",
                    "Symptoms may indicate serious medical condition",
                    "Do not delay seeking immediate medical attention",
                ]
            );
        }
    }

    #[test]
    fn severe_abdominal_pain_recent_onset() {
        let input = report("severe abdominal pain", 9).with_duration(DurationBucket::LessThanHour);
        let scoring = score_report(&input, triage_rules::RuleSet::builtin());
        assert_eq!(scoring.scores.emergency, 10 + 8 + 5);

        let result = analyze_symptoms(&input);
        assert_eq!(result.recommendation, CareLevel::Er);
        assert_eq!(result.confidence, 95);
        assert_eq!(result.estimated_wait_time, "15-45 minutes (priority based)");
        assert_eq!(result.next_steps[0], "Go to Emergency Department immediately");
        assert!(result.follow_up_recommended);
    }

    /// "cold" is a clinic keyword, so a mild cold lands in Clinic: the
    /// literal keyword table outranks the low severity band.
    #[test]
    fn mild_cold_never_escalates_to_acute_care() {
        let result = analyze_symptoms(&report("mild cold", 2).with_duration(DurationBucket::Today));
        assert!(!matches!(
            result.recommendation,
            CareLevel::Er | CareLevel::UrgentCare
        ));
        assert_eq!(result.recommendation, CareLevel::Clinic);
        assert!(result.red_flags.is_empty());
        // clinic 3 + 2, telehealth 3: gap of 2.
        assert_eq!(result.confidence, 66);
    }

    #[test]
    fn ties_break_toward_more_urgent_care() {
        // urgent: "fever" 5; clinic: severity 4 + yesterday 1.
        let input = report("fever", 4).with_duration(DurationBucket::Yesterday);
        let scoring = score_report(&input, triage_rules::RuleSet::builtin());
        assert_eq!(scoring.scores.urgent, 5);
        assert_eq!(scoring.scores.clinic, 5);

        let result = analyze_symptoms(&input);
        assert_eq!(result.recommendation, CareLevel::UrgentCare);
        assert_eq!(result.confidence, 60);
    }

    #[test]
    fn ranked_is_stable_over_priority() {
        let card = ScoreCard {
            emergency: 0,
            urgent: 3,
            clinic: 7,
            telehealth: 3,
            self_care: 7,
        };
        let order: Vec<CareLevel> = card.ranked().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            order,
            vec![
                CareLevel::Clinic,
                CareLevel::SelfCare,
                CareLevel::UrgentCare,
                CareLevel::Telehealth,
                CareLevel::Er,
            ]
        );
    }

    #[test]
    fn exactly_one_severity_band_fires() {
        let expected = [
            (1, CareLevel::SelfCare, 2),
            (2, CareLevel::Telehealth, 3),
            (3, CareLevel::Telehealth, 3),
            (4, CareLevel::Clinic, 4),
            (5, CareLevel::Clinic, 4),
            (6, CareLevel::UrgentCare, 6),
            (7, CareLevel::UrgentCare, 6),
            (8, CareLevel::Er, 8),
            (9, CareLevel::Er, 8),
            (10, CareLevel::Er, 8),
        ];
        for (severity, level, points) in expected {
            let scoring = score_report(&report("", severity), triage_rules::RuleSet::builtin());
            let total: u32 = CareLevel::PRIORITY.iter().map(|l| scoring.scores.get(*l)).sum();
            assert_eq!(total, points, "severity {severity}");
            assert_eq!(scoring.scores.get(level), points, "severity {severity}");
            assert_eq!(scoring.reasoning.len(), 1);
        }
    }

    #[test]
    fn recent_onset_only_scores_when_severe() {
        let mild = report("", 5).with_duration(DurationBucket::LessThanHour);
        let scoring = score_report(&mild, triage_rules::RuleSet::builtin());
        assert_eq!(scoring.scores.emergency, 0);
        assert_eq!(scoring.reasoning[1], "Recent onset of symptoms");

        let severe = report("", 7).with_duration(DurationBucket::LessThanHour);
        let scoring = score_report(&severe, triage_rules::RuleSet::builtin());
        assert_eq!(scoring.scores.emergency, 5);
    }

    #[test]
    fn attachments_add_clinic_evidence() {
        let input = report("", 1).with_photos(true).with_voice_note(true);
        let scoring = score_report(&input, triage_rules::RuleSet::builtin());

        assert_eq!(scoring.scores.clinic, 2);
        assert_eq!(
            &scoring.reasoning[1..],
            &[
                "Visual documentation provided for assessment".to_string(),
                "Voice description provided for detailed assessment".to_string(),
            ]
        );
    }

    #[test]
    fn self_care_bonus_and_follow_up_flag() {
        let result = analyze_symptoms(&report("", 1));
        assert_eq!(result.recommendation, CareLevel::SelfCare);
        // 60 + 3 * 2, plus the low-severity self-care bonus.
        assert_eq!(result.confidence, 71);
        assert!(!result.follow_up_recommended);
        assert_eq!(result.estimated_wait_time, "Immediate self-management");

        let long_running = analyze_symptoms(&report("", 1).with_duration(DurationBucket::Weeks));
        assert!(long_running.follow_up_recommended);
    }

    #[test]
    fn high_severity_without_keywords_still_warns() {
        let result = analyze_symptoms(&report("it hurts", 9));
        assert_eq!(result.recommendation, CareLevel::Er);
        assert_eq!(result.red_flags.len(), 2);
    }

    #[test]
    fn analysis_is_idempotent() {
        let input = report("cough and sore throat, some anxiety", 5)
            .with_duration(DurationBucket::FewDays)
            .with_photos(true);
        let rules = triage_rules::RuleSet::builtin();

        assert_eq!(score_report(&input, rules), score_report(&input, rules));
        assert_eq!(analyze_symptoms(&input), analyze_symptoms(&input));
    }

    #[test]
    fn confidence_and_urgency_invariants_hold_everywhere() {
        let texts = [
            "",
            "chest pain",
            "mild headache and minor cold",
            "anxiety stress insomnia depression",
            "rash with fever and a cut",
            "prescription refill",
        ];
        for text in texts {
            for severity in 1..=10 {
                let mut durations: Vec<Option<DurationBucket>> =
                    DurationBucket::ALL.iter().copied().map(Some).collect();
                durations.push(None);
                for duration in durations {
                    let mut input = report(text, severity);
                    input.duration = duration;
                    let result = analyze_symptoms(&input);
                    assert!((45..=95).contains(&result.confidence));
                    assert_eq!(result.urgency_level, result.recommendation.urgency_level());
                    assert_eq!(result.next_steps.len(), 4);
                }
            }
        }
    }

    // ── Composition ──────────────────────────────────────────────────────────

    #[test]
    fn escalate_caps_at_er() {
        assert_eq!(escalate(CareLevel::SelfCare, 1), CareLevel::Telehealth);
        assert_eq!(escalate(CareLevel::Telehealth, 2), CareLevel::UrgentCare);
        assert_eq!(escalate(CareLevel::Clinic, 3), CareLevel::Er);
        assert_eq!(escalate(CareLevel::Er, 3), CareLevel::Er);
        assert_eq!(escalate(CareLevel::Clinic, 0), CareLevel::Clinic);
    }

    #[test]
    fn follow_up_escalates_and_boosts_confidence() {
        // severity 3 alone: telehealth 3, gap 3 → 69.
        let base = analyze_symptoms(&report("", 3));
        assert_eq!(base.recommendation, CareLevel::Telehealth);
        assert_eq!(base.confidence, 69);

        let set = responses(&[("breathing_onset", "Suddenly"), ("breathing_triggers", "Cold air")]);
        let adjusted = apply_follow_up(base.clone(), &set);

        assert_eq!(adjusted.recommendation, CareLevel::Er);
        assert_eq!(adjusted.urgency_level, UrgencyLevel::Critical);
        assert_eq!(adjusted.confidence, 73);
        assert_eq!(adjusted.reasoning.len(), base.reasoning.len() + 1);
        assert_eq!(adjusted.next_steps.len(), 6);
        // Next steps and wait time still describe the scored level.
        assert_eq!(adjusted.estimated_wait_time, base.estimated_wait_time);
    }

    #[test]
    fn follow_up_confidence_caps_at_95() {
        let base = analyze_symptoms(&report("chest pain", 9));
        let set = responses(&[("chest_pain_breathing", "no"), ("chest_pain_location", "Upper chest")]);
        assert_eq!(apply_follow_up(base, &set).confidence, 95);
    }

    #[test]
    fn repeated_wire_answer_counts_once() {
        let set: ResponseSet = serde_json::from_str(
            r#"[
                { "questionId": "cough_mucus", "answer": "Green" },
                { "questionId": "cough_mucus", "answer": "Green" }
            ]"#,
        )
        .unwrap();
        assert_eq!(set.len(), 1);

        // severity 3 alone: Telehealth at 69.
        let adjusted = apply_follow_up(analyze_symptoms(&report("", 3)), &set);
        assert_eq!(adjusted.recommendation, CareLevel::Clinic);
        assert_eq!(adjusted.confidence, 71);
        assert_eq!(
            adjusted
                .reasoning
                .iter()
                .filter(|r| *r == "Green mucus may indicate bacterial infection")
                .count(),
            1
        );
    }

    #[test]
    fn no_answers_leaves_result_untouched() {
        let base = analyze_symptoms(&report("sore throat", 4));
        assert_eq!(apply_follow_up(base.clone(), &ResponseSet::new()), base);
    }

    #[test]
    fn assessor_uses_its_own_rules() {
        let rules = triage_rules::RuleSet::from_toml_str(
            r#"
            [[rules]]
            id = "dental"
            description = "Dental pain"
            category = "Clinic"
            weight = 20
            keywords = ["toothache"]
            "#,
        )
        .unwrap();
        let assessor = Assessor::new(rules);
        let result = assessor.assess(&report("toothache", 9), &ResponseSet::new());
        assert_eq!(result.recommendation, CareLevel::Clinic);
        assert!(result.red_flags.len() == 2, "high severity still warns");
    }

    // ── Demo variation ───────────────────────────────────────────────────────

    fn borderline() -> TriageResult {
        // telehealth 3 vs nothing else: confidence 69, below the ceiling.
        analyze_symptoms(&report("", 3))
    }

    #[test]
    fn variation_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let bases = [
            analyze_symptoms(&report("chest pain", 9)),
            analyze_symptoms(&report("", 1)),
            borderline(),
        ];
        for _ in 0..1000 {
            for base in &bases {
                let varied = generate_demo_variation(base, &mut rng);
                assert!((45..=95).contains(&varied.confidence));
                assert_eq!(varied.urgency_level, varied.recommendation.urgency_level());
            }
        }
    }

    #[test]
    fn variation_with_zero_source_is_exact() {
        // An all-zero source picks the first jitter (-5) and always takes
        // the alternative branch.
        let mut rng = StepRng::new(0, 0);
        let base = borderline();
        let varied = generate_demo_variation(&base, &mut rng);

        assert_eq!(varied.confidence, 64);
        assert_eq!(varied.recommendation, CareLevel::SelfCare);
        assert_eq!(varied.urgency_level, UrgencyLevel::Low);
        assert_eq!(
            varied.reasoning.last().map(String::as_str),
            Some("Alternative recommendation based on symptom analysis")
        );
    }

    #[test]
    fn confident_results_keep_their_recommendation() {
        let base = analyze_symptoms(&report("chest pain", 9));
        let mut rng = StepRng::new(0, 0);
        let varied = generate_demo_variation(&base, &mut rng);
        assert_eq!(varied.recommendation, CareLevel::Er);
        assert_eq!(varied.confidence, 90);
        assert_eq!(varied.reasoning, base.reasoning);
    }

    #[test]
    fn seeded_variation_is_reproducible() {
        let base = borderline();
        let a = generate_demo_variation(&base, &mut ChaCha8Rng::seed_from_u64(7));
        let b = generate_demo_variation(&base, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn alternatives_follow_the_downgrade_map() {
        assert_eq!(alternative_for(CareLevel::Er), CareLevel::UrgentCare);
        assert_eq!(alternative_for(CareLevel::SelfCare), CareLevel::Telehealth);

        let base = borderline();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut swapped = 0;
        for _ in 0..500 {
            let varied = generate_demo_variation(&base, &mut rng);
            if varied.recommendation != base.recommendation {
                assert_eq!(varied.recommendation, alternative_for(base.recommendation));
                swapped += 1;
            }
        }
        assert!(swapped > 0 && swapped < 500);
    }

    // ── Quick check ──────────────────────────────────────────────────────────

    fn quick(symptoms: &str, severity: u8) -> QuickCheckInput {
        QuickCheckInput {
            symptoms: symptoms.to_string(),
            severity,
            ..Default::default()
        }
    }

    #[test]
    fn quick_check_thresholds() {
        assert_eq!(quick_check(&quick("Chest tightness", 3)).result, QuickLevel::Er);
        assert_eq!(quick_check(&quick("fever", 3)).result, QuickLevel::Urgent);
        assert_eq!(quick_check(&quick("sniffles", 2)).result, QuickLevel::Clinic);

        let home = quick_check(&quick("sniffles", 1));
        assert_eq!(home.result, QuickLevel::Home);
        assert_eq!(home.confidence, 55);
        assert_eq!(home.score, 2);
    }

    #[test]
    fn quick_check_signals_and_duration() {
        let mut input = quick("", 1);
        input.has_bleeding = true;
        input.short_of_breath = true;
        assert_eq!(quick_check(&input).score, 2 + 4 + 5);

        input.duration_days = "about 5 days".to_string();
        let outcome = quick_check(&input);
        assert_eq!(outcome.score, 14);
        assert_eq!(outcome.result, QuickLevel::Er);
        assert_eq!(outcome.confidence, 90);

        input.duration_days = "3".to_string();
        assert_eq!(quick_check(&input).score, 11);
        input.duration_days = "a while".to_string();
        assert_eq!(quick_check(&input).score, 11);
    }
}
