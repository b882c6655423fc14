//! The full assessment pipeline.
//!
//!   analyze_symptoms → follow-up analysis → escalation → [demo variation]
//!
//! `Assessor` owns the keyword rules and exposes every stage the intake form
//! needs, so the UI never calls the scoring functions piecemeal.

use rand::Rng;
use tracing::{debug, info};

use triage_contracts::{
    question::{FollowUpQuestion, ResponseSet},
    report::SymptomReport,
    result::{CareLevel, TriageResult},
};
use triage_rules::RuleSet;

use crate::{
    engine::analyze_symptoms_with,
    questions::{analyze_follow_up_responses, get_follow_up_questions},
    variation::generate_demo_variation,
};

/// Care levels from least to most urgent; escalation walks up this list.
pub const ESCALATION: [CareLevel; 5] = [
    CareLevel::SelfCare,
    CareLevel::Telehealth,
    CareLevel::Clinic,
    CareLevel::UrgentCare,
    CareLevel::Er,
];

/// Confidence gained per answered follow-up question.
const CONFIDENCE_PER_ANSWER: usize = 2;

/// Move `level` up `steps` places toward ER, stopping at ER.
pub fn escalate(level: CareLevel, steps: u32) -> CareLevel {
    let current = ESCALATION
        .iter()
        .position(|l| *l == level)
        .unwrap_or_default();
    let target = current
        .saturating_add(steps as usize)
        .min(ESCALATION.len() - 1);
    ESCALATION[target]
}

/// Fold follow-up answers into a base result.
///
/// With no answers the result is returned unchanged. Otherwise risk factors
/// extend the reasoning, the analyzer's advice extends the next steps,
/// confidence rises two points per answer (capped at 95), and a positive
/// urgency modifier escalates the recommendation.
pub fn apply_follow_up(mut result: TriageResult, responses: &ResponseSet) -> TriageResult {
    if responses.is_empty() {
        return result;
    }

    let analysis = analyze_follow_up_responses(responses.iter());
    result.reasoning.extend(analysis.risk_factors);
    result.next_steps.extend(analysis.recommendations);

    let boosted = usize::from(result.confidence)
        .saturating_add(responses.len().saturating_mul(CONFIDENCE_PER_ANSWER))
        .min(usize::from(TriageResult::MAX_CONFIDENCE));
    result.confidence = boosted as u8;

    if analysis.urgency_modifier > 0 {
        let escalated = escalate(result.recommendation, analysis.urgency_modifier as u32);
        debug!(
            from = %result.recommendation,
            to = %escalated,
            modifier = analysis.urgency_modifier,
            "follow-up answers escalated recommendation"
        );
        result.set_recommendation(escalated);
    }

    result
}

/// Deterministic assessment: scoring plus follow-up adjustment.
pub fn assess(report: &SymptomReport, responses: &ResponseSet, rules: &RuleSet) -> TriageResult {
    apply_follow_up(analyze_symptoms_with(report, rules), responses)
}

/// Runs assessments against one rule set.
#[derive(Debug, Clone)]
pub struct Assessor {
    rules: RuleSet,
}

impl Assessor {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Questions to show for the text typed so far.
    pub fn questions(&self, symptom_text: &str) -> Vec<FollowUpQuestion> {
        get_follow_up_questions(symptom_text)
    }

    /// See [`assess`].
    pub fn assess(&self, report: &SymptomReport, responses: &ResponseSet) -> TriageResult {
        let result = assess(report, responses, &self.rules);

        info!(
            recommendation = %result.recommendation,
            confidence = result.confidence,
            answers = responses.len(),
            red_flags = result.red_flags.len(),
            "assessment complete"
        );

        result
    }

    /// The demo form's pipeline: [`Assessor::assess`] followed by the
    /// random variation pass.
    pub fn assess_with_variation<R: Rng + ?Sized>(
        &self,
        report: &SymptomReport,
        responses: &ResponseSet,
        rng: &mut R,
    ) -> TriageResult {
        let adjusted = self.assess(report, responses);
        generate_demo_variation(&adjusted, rng)
    }
}

impl Default for Assessor {
    fn default() -> Self {
        Self::new(RuleSet::builtin().clone())
    }
}
