//! # triage-rules
//!
//! TOML-driven keyword rules for the symptom triage engine.
//!
//! ## Overview
//!
//! This crate provides [`RuleSet`], which holds the weighted keyword lists the
//! scoring engine applies to free-text symptom descriptions. A built-in rule
//! file ships with the crate; sites can load their own with
//! [`RuleSet::from_file`].
//!
//! ## Rule matching
//!
//! Text is lower-cased, then each keyword is tested as a literal substring.
//! There is no tokenization or word-boundary handling, so `"cold"` also
//! matches `"scolding"`. Scoring outcomes depend on this exact behaviour.

pub mod engine;
pub mod rule;

pub use engine::RuleSet;
pub use rule::{KeywordHit, KeywordRule, RuleConfig};

// ── Tests ─────────────────────────────────────────────────────────────────────
