//! Response Extractor/Validator — turns the model's free-form reply into
//! a typed result, or a deterministic fallback when that is impossible.
//!
//! An LLM reply is unreliable input by nature. The contract here is:
//! never fail the caller, always return a renderable typed object, and
//! never silently discard the model's words — unparseable replies are
//! threaded verbatim into the fallback's free-text field.
//!
//! Extraction is an ordered chain of strategies:
//! 1. first fenced code block with a language tag (any tag accepted);
//! 2. first unlabeled fenced block;
//! 3. first `{` to last `}` brace scan, for short schemas the model
//!    tends to emit without fencing.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::models::analysis::MAX_DISEASE_CANDIDATES;
use crate::models::{
    AnalysisResult, DiseaseCandidate, InteractionResult, PlantIdentification, RiskLevel,
    Severity,
};

fn labeled_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```[A-Za-z0-9_+-]+\n(.*?)\n```").expect("valid regex"))
}

fn unlabeled_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```\n(.*?)\n```").expect("valid regex"))
}

/// Locate the candidate payload inside a raw reply. Returns `None` when
/// no strategy finds one.
fn locate_payload(raw: &str) -> Option<&str> {
    if let Some(captures) = labeled_fence().captures(raw) {
        return captures.get(1).map(|m| m.as_str().trim());
    }
    if let Some(captures) = unlabeled_fence().captures(raw) {
        return captures.get(1).map(|m| m.as_str().trim());
    }
    // Greedy brace scan: first `{` to the matching last `}`.
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(raw[start..=end].trim())
}

/// Run the strategy chain and parse the candidate into `T`.
/// Parse failures are diagnostic-logged, never surfaced.
pub fn parse_reply<T: DeserializeOwned>(raw: &str) -> Option<T> {
    let candidate = locate_payload(raw)?;
    match serde_json::from_str(candidate) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to parse extracted payload");
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Per-use-case results with fallbacks
// ═══════════════════════════════════════════════════════════

/// Symptom analysis result, capped at 5 candidates, or the fallback.
pub fn symptom_result(raw: &str) -> AnalysisResult {
    match parse_reply::<AnalysisResult>(raw) {
        Some(mut result) => {
            result.diseases.truncate(MAX_DISEASE_CANDIDATES);
            result
        }
        None => symptom_fallback(raw),
    }
}

fn symptom_fallback(raw: &str) -> AnalysisResult {
    AnalysisResult {
        diseases: vec![DiseaseCandidate {
            name: "Unable to analyze".into(),
            confidence: 0,
            reasoning: "The AI response could not be parsed. Please try again.".into(),
            risk_level: RiskLevel::Moderate,
            ..Default::default()
        }],
        follow_up_questions: None,
        general_advice: Some(raw.to_string()),
    }
}

/// Plant identification result, or the fallback.
pub fn plant_result(raw: &str) -> PlantIdentification {
    parse_reply(raw).unwrap_or_else(plant_fallback)
}

fn plant_fallback() -> PlantIdentification {
    PlantIdentification {
        plant_name: "Unknown".into(),
        scientific_name: "Unable to identify".into(),
        confidence: 0.0,
        identification_reasoning:
            "The AI response could not be parsed. Please try again with clearer images."
                .into(),
        warnings: vec!["Unable to identify plant. Do not consume unknown plants.".into()],
        ..Default::default()
    }
}

/// Interaction check result, or the fallback.
pub fn interaction_result(raw: &str) -> InteractionResult {
    parse_reply(raw).unwrap_or_else(|| InteractionResult {
        interaction: true,
        severity: Severity::Unknown,
        mechanism: raw.to_string(),
        recommendation: "Consult a doctor.".into(),
    })
}
