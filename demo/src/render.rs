//! Plain-text rendering of triage output for the terminal.

use triage_contracts::{question::FollowUpQuestion, result::TriageResult};
use triage_core::quick::QuickCheckOutcome;

pub fn print_questions(questions: &[FollowUpQuestion]) {
    if questions.is_empty() {
        println!("No follow-up questions for this description.");
        return;
    }
    for question in questions {
        let marker = if question.required { "*" } else { " " };
        println!(
            "{marker} [{}] {} ({:?})",
            question.id, question.question, question.question_type
        );
        for option in &question.options {
            println!("      - {option}");
        }
    }
}

pub fn print_result(result: &TriageResult) {
    println!("Recommendation : {}", result.recommendation);
    println!("Urgency        : {}", result.urgency_level);
    println!("Confidence     : {}%", result.confidence);
    println!("Estimated wait : {}", result.estimated_wait_time);
    println!(
        "Follow-up      : {}",
        if result.follow_up_recommended { "recommended" } else { "not needed" }
    );

    print_list("Red flags", &result.red_flags);
    print_list("Reasoning", &result.reasoning);
    print_list("Next steps", &result.next_steps);
}

pub fn print_quick(outcome: &QuickCheckOutcome) {
    println!("Result     : {:?}", outcome.result);
    println!("Confidence : {}%", outcome.confidence);
    println!("Score      : {}", outcome.score);
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
}
