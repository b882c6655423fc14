//! Rule set loading and keyword scanning.
//!
//! `RuleSet` loads a `RuleConfig` from a TOML string or file, checks it for
//! keywords that could never match, and scans symptom text against it.
//!
//! Scan algorithm:
//!
//! 1. Lower-case the text once.
//! 2. For every rule in declaration order, test every keyword in declaration
//!    order with a literal substring check.
//! 3. Emit one `KeywordHit` per contained keyword.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, trace};

use triage_contracts::error::{Result, TriageError};

use crate::rule::{KeywordHit, KeywordRule, RuleConfig};

/// The rule file compiled into the crate.
const BUILTIN_RULES: &str = include_str!("../rules/triage.toml");

/// A validated, ready-to-scan set of keyword rules.
///
/// ```rust,ignore
/// use triage_rules::RuleSet;
///
/// let rules = RuleSet::from_file(Path::new("rules/site.toml"))?;
/// let hits = rules.scan("Chest pain since this morning");
/// ```
#[derive(Debug, Clone)]
pub struct RuleSet {
    config: RuleConfig,
}

impl RuleSet {
    /// The built-in rules shipped with the crate.
    ///
    /// Parsed once and shared for the life of the process.
    ///
    /// # Panics
    ///
    /// Panics if the embedded rule file is invalid, which the crate's own
    /// tests rule out.
    pub fn builtin() -> &'static RuleSet {
        static BUILTIN: OnceLock<RuleSet> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            RuleSet::from_toml_str(BUILTIN_RULES).expect("built-in triage rules must be valid")
        })
    }

    /// Parse `s` as TOML and build a `RuleSet`.
    ///
    /// Returns `TriageError::ConfigError` if the TOML is malformed, does not
    /// match `RuleConfig`, or contains a keyword that can never match.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: RuleConfig = toml::from_str(s).map_err(|e| TriageError::ConfigError {
            reason: format!("failed to parse rule TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a TOML rule file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TriageError::ConfigError {
            reason: format!("failed to read rule file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Validate an already-built configuration.
    pub fn from_config(config: RuleConfig) -> Result<Self> {
        for rule in &config.rules {
            check_rule(rule)?;
        }
        debug!(rule_count = config.rules.len(), "keyword rules loaded");
        Ok(Self { config })
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.config.rules
    }

    /// Every keyword contained in `text`, rule by rule.
    pub fn scan<'a>(&'a self, text: &str) -> Vec<KeywordHit<'a>> {
        let lowered = text.to_lowercase();
        let mut hits = Vec::new();

        for rule in &self.config.rules {
            for keyword in &rule.keywords {
                if lowered.contains(keyword.as_str()) {
                    trace!(rule_id = %rule.id, keyword = %keyword, "keyword matched");
                    hits.push(KeywordHit {
                        rule_id: rule.id.as_str(),
                        category: rule.category,
                        keyword: keyword.as_str(),
                        weight: rule.weight,
                        red_flag: rule.red_flag,
                    });
                }
            }
        }

        hits
    }
}

/// Reject keywords the scanner could never match and duplicates that would
/// double-count.
fn check_rule(rule: &KeywordRule) -> Result<()> {
    let mut seen = HashSet::new();

    for keyword in &rule.keywords {
        if keyword.trim().is_empty() {
            return Err(TriageError::ConfigError {
                reason: format!("rule '{}' contains an empty keyword", rule.id),
            });
        }
        if keyword.to_lowercase() != *keyword {
            return Err(TriageError::ConfigError {
                reason: format!(
                    "rule '{}' keyword '{}' must be lower case; text is lower-cased before matching",
                    rule.id, keyword
                ),
            });
        }
        if !seen.insert(keyword.as_str()) {
            return Err(TriageError::ConfigError {
                reason: format!("rule '{}' lists keyword '{}' twice", rule.id, keyword),
            });
        }
    }

    Ok(())
}
