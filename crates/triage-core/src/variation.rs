//! Demo-only result variation.
//!
//! Repeated demo runs with the same input should not look canned, so this
//! pass nudges confidence and occasionally swaps a borderline recommendation
//! for its neighbour. It is kept apart from scoring so deterministic callers
//! can skip it, and it draws from a caller-supplied RNG so tests can seed it.

use rand::Rng;
use tracing::debug;

use triage_contracts::result::{CareLevel, TriageResult};

/// Confidence offsets, drawn uniformly.
pub const CONFIDENCE_JITTER: [i32; 7] = [-5, -3, -1, 0, 1, 3, 5];

/// Results below this confidence are candidates for an alternative.
pub const ALTERNATIVE_CONFIDENCE_CEILING: u8 = 70;

pub const ALTERNATIVE_PROBABILITY: f64 = 0.3;

/// The neighbouring recommendation offered for a borderline result.
pub fn alternative_for(level: CareLevel) -> CareLevel {
    match level {
        CareLevel::Er => CareLevel::UrgentCare,
        CareLevel::UrgentCare => CareLevel::Clinic,
        CareLevel::Clinic => CareLevel::Telehealth,
        CareLevel::Telehealth => CareLevel::SelfCare,
        CareLevel::SelfCare => CareLevel::Telehealth,
    }
}

/// Apply bounded random variation to `base`.
///
/// The jitter is always drawn. The alternative-recommendation draw only
/// happens for results under [`ALTERNATIVE_CONFIDENCE_CEILING`], and the
/// threshold test uses the confidence before jitter.
pub fn generate_demo_variation<R: Rng + ?Sized>(base: &TriageResult, rng: &mut R) -> TriageResult {
    let jitter = CONFIDENCE_JITTER[rng.gen_range(0..CONFIDENCE_JITTER.len())];
    let mut varied = base.clone();
    varied.confidence = TriageResult::clamp_confidence(i32::from(base.confidence) + jitter);

    if base.confidence < ALTERNATIVE_CONFIDENCE_CEILING
        && rng.gen::<f64>() < ALTERNATIVE_PROBABILITY
    {
        let alternative = alternative_for(base.recommendation);
        debug!(
            from = %base.recommendation,
            to = %alternative,
            "offering alternative recommendation"
        );
        varied.set_recommendation(alternative);
        varied
            .reasoning
            .push("Alternative recommendation based on symptom analysis".to_string());
    }

    varied
}
