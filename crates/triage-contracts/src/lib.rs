//! # triage-contracts
//!
//! Shared types and error contracts for the symptom triage engine.
//!
//! Every other crate in the workspace imports from here. Apart from
//! validating constructors and the fixed care-level to urgency mapping, no
//! business logic lives in this crate.

pub mod error;
pub mod history;
pub mod question;
pub mod report;
pub mod result;
