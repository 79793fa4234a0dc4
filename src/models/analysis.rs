//! Symptom analysis request and result types.

use serde::{Deserialize, Serialize};

use super::enums::{Locale, MatchScore, RiskLevel};
use super::profile::HealthProfile;

/// At most this many ranked disease candidates per analysis.
pub const MAX_DISEASE_CANDIDATES: usize = 5;

/// `POST /api/symptoms/analyze` request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub follow_up_answers: Option<serde_json::Value>,
    #[serde(default)]
    pub user_profile: Option<HealthProfile>,
    #[serde(default)]
    pub language: Locale,
}

/// Structured symptom assessment. All fields are model-provided and
/// therefore optional or defaulted; absent is never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub diseases: Vec<DiseaseCandidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_questions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_advice: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiseaseCandidate {
    pub name: String,
    /// 0-100.
    pub confidence: u8,
    pub reasoning: String,
    pub risk_level: RiskLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_analysis: Option<ProfileAnalysis>,
    pub recommended_plants: Vec<String>,
    pub remedies: Vec<String>,
    pub preventive_measures: Vec<String>,
    pub diet: Vec<String>,
    pub exercises: Vec<String>,
}

/// Why a candidate does or doesn't fit the user's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileAnalysis {
    pub match_score: MatchScore,
    pub explanation: String,
}
