//! Keyword rule types and configuration schema.
//!
//! A `RuleConfig` is deserialized from TOML and holds an ordered list of
//! `KeywordRule`s. Unlike first-match policy rules, every rule is applied to
//! every report: a symptom description may score in several care levels at
//! once.

use serde::{Deserialize, Serialize};

use triage_contracts::result::CareLevel;

/// A weighted keyword list feeding one care-level score.
///
/// Example in TOML:
/// ```toml
/// [[rules]]
/// id = "urgent"
/// description = "Problems an urgent care centre should see within hours"
/// category = "Urgent_Care"
/// weight = 5
/// keywords = ["fever", "sprain"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Stable identifier used in logs and error messages.
    pub id: String,

    /// Human-readable explanation of what this rule detects.
    pub description: String,

    /// The care level whose score each match increases.
    pub category: CareLevel,

    /// Points added per matched keyword.
    pub weight: u32,

    /// When set, every match also produces a red-flag warning.
    #[serde(default)]
    pub red_flag: bool,

    /// Lower-case phrases matched as literal substrings of the report text.
    pub keywords: Vec<String>,
}

/// The top-level structure deserialized from a TOML rule file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Rules in declaration order. Match order in scan results follows it.
    pub rules: Vec<KeywordRule>,
}

/// One keyword found in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordHit<'a> {
    pub rule_id: &'a str,
    pub category: CareLevel,
    pub keyword: &'a str,
    pub weight: u32,
    pub red_flag: bool,
}

impl KeywordHit<'_> {
    /// The warning shown for a red-flag match.
    pub fn red_flag_message(&self) -> String {
        format!("\"{}\" indicates potential emergency", self.keyword)
    }
}
