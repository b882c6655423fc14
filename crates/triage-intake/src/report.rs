//! Validation of raw symptom report payloads.
//!
//! Validation runs in two phases:
//!
//! 1. **Structural**: the payload is checked against [`report_schema`] with
//!    the `jsonschema` crate.
//! 2. **Semantic**: checks a schema cannot express, such as a description
//!    made only of whitespace.
//!
//! Every failure from both phases is collected before returning, so the form
//! can highlight all bad fields at once.

use std::str::FromStr;

use jsonschema::Validator;
use serde_json::{json, Value};
use tracing::{debug, warn};

use triage_contracts::{
    error::{Result, TriageError},
    report::{DurationBucket, SymptomReport},
};

/// The JSON Schema a raw report must satisfy.
///
/// `duration` may be absent, `null`, or `""` for "not selected"; otherwise it
/// must name one of the duration buckets.
pub fn report_schema() -> Value {
    let mut buckets: Vec<Value> = DurationBucket::ALL
        .iter()
        .map(|bucket| Value::from(bucket.as_str()))
        .collect();
    buckets.push(Value::from(""));

    json!({
        "type": "object",
        "required": ["symptoms", "severity"],
        "properties": {
            "symptoms": { "type": "string" },
            "severity": {
                "type": "integer",
                "minimum": SymptomReport::MIN_SEVERITY,
                "maximum": SymptomReport::MAX_SEVERITY
            },
            "duration": {
                "anyOf": [
                    { "type": "null" },
                    { "enum": buckets }
                ]
            },
            "hasPhotos": { "type": "boolean" },
            "hasVoiceNote": { "type": "boolean" },
            "additionalInfo": { "type": "string" }
        }
    })
}

/// Turns raw form payloads into `SymptomReport`s.
pub struct ReportValidator {
    validator: Validator,
}

impl ReportValidator {
    pub fn new() -> Result<Self> {
        let validator =
            jsonschema::validator_for(&report_schema()).map_err(|e| TriageError::ConfigError {
                reason: format!("invalid report schema: {e}"),
            })?;
        Ok(Self { validator })
    }

    /// Validate `payload` and build the report it describes.
    pub fn validate(&self, payload: &Value) -> Result<SymptomReport> {
        let mut failures: Vec<String> = Vec::new();

        // ── Phase 1: JSON Schema structural validation ────────────────────────
        for error in self.validator.iter_errors(payload) {
            failures.push(format!(
                "JSON Schema violation at {}: {}",
                error.instance_path, error
            ));
        }

        // ── Phase 2: Semantic checks ─────────────────────────────────────────
        if let Some(symptoms) = payload.get("symptoms").and_then(Value::as_str) {
            if symptoms.trim().is_empty() {
                failures.push("Please describe your symptoms".to_string());
            }
        }

        if !failures.is_empty() {
            for message in &failures {
                warn!(%message, "symptom report rejected");
            }
            return Err(TriageError::Validation { failures });
        }

        let report = build_report(payload)?;
        debug!(
            severity = report.severity,
            duration = ?report.duration,
            "symptom report accepted"
        );
        Ok(report)
    }
}

/// Build a report from a payload that already passed the schema.
fn build_report(payload: &Value) -> Result<SymptomReport> {
    let symptoms = payload["symptoms"].as_str().unwrap_or_default();
    // The schema admits integral floats such as `5.0`.
    let severity = payload["severity"]
        .as_i64()
        .or_else(|| payload["severity"].as_f64().map(|s| s as i64))
        .unwrap_or_default();

    let mut report = SymptomReport::new(symptoms, severity)?
        .with_photos(payload["hasPhotos"].as_bool().unwrap_or(false))
        .with_voice_note(payload["hasVoiceNote"].as_bool().unwrap_or(false))
        .with_additional_info(payload["additionalInfo"].as_str().unwrap_or_default());

    match payload["duration"].as_str() {
        None | Some("") => {}
        Some(duration) => report = report.with_duration(DurationBucket::from_str(duration)?),
    }

    Ok(report)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
