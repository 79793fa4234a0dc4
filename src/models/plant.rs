//! Plant identification result types.

use serde::{Deserialize, Serialize};

use super::enums::{Severity, WarningType};

/// Structured botanical assessment of an uploaded plant photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlantIdentification {
    pub plant_name: String,
    pub scientific_name: String,
    /// 0.0-1.0.
    pub confidence: f64,
    pub identification_reasoning: String,
    pub medicinal_benefits: Vec<String>,
    pub treats_conditions: Vec<String>,
    pub preparation: Vec<String>,
    pub dosage: String,
    pub side_effects: Vec<String>,
    pub warnings: Vec<String>,
    pub alternative_plants: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_warning: Option<ProfileWarning>,
}

/// Profile-specific safety warning the model must raise when the
/// identified plant conflicts with the user's allergies, medications
/// or conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileWarning {
    pub has_warning: bool,
    #[serde(rename = "type")]
    pub warning_type: WarningType,
    pub severity: Severity,
    pub description: String,
    pub action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_identification() {
        let plant: PlantIdentification = serde_json::from_str(
            r#"{
                "plantName": "Ginger",
                "scientificName": "Zingiber officinale",
                "confidence": 0.93,
                "identificationReasoning": "Rhizome shape and leaf pattern",
                "medicinalBenefits": ["Anti-nausea"],
                "treatsConditions": ["Nausea"],
                "preparation": ["Tea"],
                "dosage": "1-2g dried root daily",
                "sideEffects": ["Heartburn"],
                "warnings": [],
                "alternativePlants": ["Peppermint"],
                "profileWarning": {
                    "hasWarning": true,
                    "type": "Interaction",
                    "severity": "High",
                    "description": "Ginger potentiates Warfarin.",
                    "action": "Avoid completely"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(plant.plant_name, "Ginger");
        let warning = plant.profile_warning.unwrap();
        assert!(warning.has_warning);
        assert_eq!(warning.warning_type, WarningType::Interaction);
        assert_eq!(warning.severity, Severity::High);
    }

    #[test]
    fn profile_warning_is_optional() {
        let plant: PlantIdentification =
            serde_json::from_str(r#"{"plantName":"Tulsi","confidence":0.8}"#).unwrap();
        assert!(plant.profile_warning.is_none());
        assert!(plant.scientific_name.is_empty());
        let json = serde_json::to_value(&plant).unwrap();
        assert!(json.get("profileWarning").is_none());
    }

    #[test]
    fn warning_round_trips_through_wire_names() {
        let warning = ProfileWarning {
            has_warning: true,
            warning_type: WarningType::Allergy,
            severity: Severity::Moderate,
            description: "Contains peanut-family compounds".into(),
            action: "Consult your doctor first".into(),
        };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["hasWarning"], true);
        assert_eq!(json["type"], "Allergy");
        assert_eq!(json["severity"], "Moderate");
        let back: ProfileWarning = serde_json::from_value(json).unwrap();
        assert_eq!(back, warning);
    }
}
