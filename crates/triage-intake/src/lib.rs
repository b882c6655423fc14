//! # triage-intake
//!
//! Boundary validation for the triage engine.
//!
//! The scoring crates accept only typed input. This crate turns raw JSON from
//! the intake form into that input, rejecting anything malformed with a
//! `TriageError::Validation` that lists every problem found:
//!
//! - [`ReportValidator`] for symptom reports
//! - [`ResponseValidator`] for follow-up answers, checked against the
//!   question catalog

pub mod report;
pub mod responses;

pub use report::ReportValidator;
pub use responses::ResponseValidator;
