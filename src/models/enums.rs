//! Closed-set enums for model-provided fields.
//!
//! LLM output is inconsistent about casing and vocabulary, so every enum
//! here deserializes leniently: match case-insensitively, and map anything
//! outside the expected set to an explicit default/unknown member instead
//! of failing the whole parse.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Locale ─────────────────────────────────────────────────────

/// Requested reply language. Unrecognized codes fall back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Locale {
    En,
    Hi,
    Es,
    Fr,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Full language name, as spelled out in prompts.
    pub fn language_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "Hindi",
            Self::Es => "Spanish",
            Self::Fr => "French",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}

impl From<String> for Locale {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "hi" => Self::Hi,
            "es" => Self::Es,
            "fr" => Self::Fr,
            _ => Self::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ── RiskLevel ──────────────────────────────────────────────────

/// Disease candidate risk level. Unknown strings normalize to `Moderate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Emergency,
}

impl Default for RiskLevel {
    fn default() -> Self {
        Self::Moderate
    }
}

impl From<String> for RiskLevel {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            "emergency" => Self::Emergency,
            _ => Self::Moderate,
        }
    }
}

// ── Severity ───────────────────────────────────────────────────

/// Warning/interaction severity. Serialized capitalized, matching the
/// schema spelled out in prompts. `Unknown` is the fallback member used
/// when the reply could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Severity {
    High,
    Moderate,
    Low,
    None,
    Unknown,
}

impl Default for Severity {
    fn default() -> Self {
        Self::None
    }
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "moderate" => Self::Moderate,
            "low" => Self::Low,
            "none" => Self::None,
            _ => Self::Unknown,
        }
    }
}

// ── WarningType ────────────────────────────────────────────────

/// What kind of profile conflict a plant warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum WarningType {
    Allergy,
    Interaction,
    Condition,
    None,
}

impl Default for WarningType {
    fn default() -> Self {
        Self::None
    }
}

impl From<String> for WarningType {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "allergy" => Self::Allergy,
            "interaction" => Self::Interaction,
            "condition" => Self::Condition,
            _ => Self::None,
        }
    }
}

// ── MatchScore ─────────────────────────────────────────────────

/// How strongly a disease candidate matches the user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum MatchScore {
    High,
    Medium,
    Low,
    Unknown,
}

impl Default for MatchScore {
    fn default() -> Self {
        Self::Unknown
    }
}

impl From<String> for MatchScore {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_falls_back_to_english() {
        assert_eq!(Locale::from("de".to_string()), Locale::En);
        assert_eq!(Locale::from("".to_string()), Locale::En);
        assert_eq!(Locale::from("HI".to_string()), Locale::Hi);
    }

    #[test]
    fn locale_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Locale::Fr).unwrap(), "\"fr\"");
        let parsed: Locale = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(parsed, Locale::Es);
    }

    #[test]
    fn risk_level_normalizes_casing() {
        assert_eq!(RiskLevel::from("EMERGENCY".to_string()), RiskLevel::Emergency);
        assert_eq!(RiskLevel::from(" Low ".to_string()), RiskLevel::Low);
    }

    #[test]
    fn risk_level_unknown_maps_to_moderate() {
        assert_eq!(RiskLevel::from("critical".to_string()), RiskLevel::Moderate);
    }

    #[test]
    fn risk_level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
    }

    #[test]
    fn severity_outside_vocabulary_is_unknown() {
        assert_eq!(Severity::from("severe".to_string()), Severity::Unknown);
        assert_eq!(Severity::from("MODERATE".to_string()), Severity::Moderate);
    }

    #[test]
    fn severity_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"High\"");
        assert_eq!(serde_json::to_string(&Severity::Unknown).unwrap(), "\"Unknown\"");
    }

    #[test]
    fn warning_type_defaults_to_none() {
        assert_eq!(WarningType::from("allergy".to_string()), WarningType::Allergy);
        assert_eq!(WarningType::from("???".to_string()), WarningType::None);
    }

    #[test]
    fn match_score_lenient_parse() {
        let parsed: MatchScore = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, MatchScore::Medium);
        let parsed: MatchScore = serde_json::from_str("\"very high\"").unwrap();
        assert_eq!(parsed, MatchScore::Unknown);
    }
}
