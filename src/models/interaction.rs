//! Herb/medication interaction check types.

use serde::{Deserialize, Serialize};

use super::enums::Severity;

/// `POST /api/interactions/check` request body.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionRequest {
    #[serde(default)]
    pub herb: String,
    #[serde(default)]
    pub medication: String,
}

/// Fixed 4-field interaction verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionResult {
    pub interaction: bool,
    pub severity: Severity,
    pub mechanism: String,
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_verdict() {
        let result: InteractionResult =
            serde_json::from_str(r#"{"interaction":false,"severity":"None"}"#).unwrap();
        assert!(!result.interaction);
        assert_eq!(result.severity, Severity::None);
        assert!(result.mechanism.is_empty());
    }

    #[test]
    fn unknown_severity_is_tolerated() {
        let result: InteractionResult = serde_json::from_str(
            r#"{"interaction":true,"severity":"catastrophic","mechanism":"m","recommendation":"r"}"#,
        )
        .unwrap();
        assert_eq!(result.severity, Severity::Unknown);
    }
}
