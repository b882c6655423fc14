//! Symptom triage demo CLI.
//!
//! Exercises the triage engine the way the intake form does: follow-up
//! questions for free text, a full assessment with answers, the quick check,
//! and a set of canned scenarios.
//!
//! Usage:
//!   cargo run -p demo -- questions "fever and chest pain"
//!   cargo run -p demo -- assess --symptoms "chest pain" --severity 8 --duration few-hours
//!   cargo run -p demo -- assess --symptoms cough --severity 4 --answer cough_mucus=Green --seed 7
//!   cargo run -p demo -- quick --symptoms "chest tightness" --severity 3 --short-of-breath
//!   cargo run -p demo -- scenarios

mod render;
mod scenarios;

use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

use triage_contracts::{
    error::{Result, TriageError},
    report::DurationBucket,
    result::TriageResult,
};
use triage_core::{
    quick::{quick_check, QuickCheckInput},
    Assessor,
};
use triage_intake::{ReportValidator, ResponseValidator};
use triage_store::{InMemoryStore, TriageHistory};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Symptom triage demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Symptom triage engine demo",
    long_about = "Scores free-text symptom reports into a care level (ER, Urgent Care,\n\
                  Clinic, Telehealth, Self Care) with follow-up questions and answers."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the follow-up questions for a symptom description.
    Questions {
        /// Free-text symptom description.
        text: String,
    },
    /// Run a full assessment and record it in an in-memory history.
    Assess {
        #[arg(long)]
        symptoms: String,
        /// Severity on the 1-10 scale.
        #[arg(long)]
        severity: i64,
        /// Duration bucket, e.g. less-than-hour, few-hours, today, few-days, weeks.
        #[arg(long)]
        duration: Option<DurationBucket>,
        #[arg(long)]
        photos: bool,
        #[arg(long)]
        voice_note: bool,
        /// Follow-up answer as question_id=answer. Repeatable.
        #[arg(long = "answer", value_parser = parse_answer)]
        answers: Vec<(String, String)>,
        /// Seed for the demo variation pass.
        #[arg(long)]
        seed: Option<u64>,
        /// Skip the demo variation pass.
        #[arg(long)]
        no_variation: bool,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Run the three-step quick check.
    Quick {
        #[arg(long)]
        symptoms: String,
        /// Severity on the 1-5 scale.
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        severity: u8,
        #[arg(long)]
        bleeding: bool,
        #[arg(long)]
        short_of_breath: bool,
        /// How long, in days (free text).
        #[arg(long, default_value = "")]
        days: String,
    },
    /// Run the canned assessment scenarios.
    Scenarios,
}

fn parse_answer(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(id, answer)| (id.trim().to_string(), answer.trim().to_string()))
        .ok_or_else(|| format!("expected question_id=answer, got '{raw}'"))
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see per-step scoring detail.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let assessor = Assessor::default();

    let result = match cli.command {
        Command::Questions { text } => {
            render::print_questions(&assessor.questions(&text));
            Ok(())
        }
        Command::Assess {
            symptoms,
            severity,
            duration,
            photos,
            voice_note,
            answers,
            seed,
            no_variation,
            json,
        } => {
            let report = json!({
                "symptoms": symptoms,
                "severity": severity,
                "duration": duration.map(|d| d.as_str()),
                "hasPhotos": photos,
                "hasVoiceNote": voice_note,
            });
            let answers: Value = answers
                .into_iter()
                .map(|(id, answer)| json!({ "questionId": id, "answer": answer }))
                .collect();
            let variation = if no_variation {
                Variation::Off
            } else {
                Variation::On { seed }
            };
            run_assess(&assessor, &report, &answers, variation, json)
        }
        Command::Quick {
            symptoms,
            severity,
            bleeding,
            short_of_breath,
            days,
        } => {
            let input = QuickCheckInput {
                symptoms,
                severity,
                has_bleeding: bleeding,
                short_of_breath,
                duration_days: days,
            };
            render::print_quick(&quick_check(&input));
            Ok(())
        }
        Command::Scenarios => scenarios::run_all(&assessor),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// ── Assessment ────────────────────────────────────────────────────────────────

enum Variation {
    Off,
    On { seed: Option<u64> },
}

fn run_assess(
    assessor: &Assessor,
    report: &Value,
    answers: &Value,
    variation: Variation,
    as_json: bool,
) -> Result<()> {
    let report = ReportValidator::new()?.validate(report)?;
    let responses = ResponseValidator::new()?.validate(answers)?;

    let result: TriageResult = match variation {
        Variation::Off => assessor.assess(&report, &responses),
        Variation::On { seed: Some(seed) } => {
            assessor.assess_with_variation(&report, &responses, &mut ChaCha8Rng::seed_from_u64(seed))
        }
        Variation::On { seed: None } => {
            assessor.assess_with_variation(&report, &responses, &mut rand::thread_rng())
        }
    };

    let history = TriageHistory::new(InMemoryStore::new());
    let event = history.record(&report, &result, None, Utc::now())?;
    info!(event = ?event, "history updated");

    if as_json {
        let output = json!({ "result": result, "event": event });
        let text = serde_json::to_string_pretty(&output).map_err(|e| TriageError::Serialization {
            reason: format!("failed to encode result: {e}"),
        })?;
        println!("{text}");
    } else {
        render::print_result(&result);
        println!();
        println!("Recorded: {}", serde_json::to_string(&event).unwrap_or_default());
    }

    Ok(())
}
