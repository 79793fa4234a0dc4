//! Profile Context Builder — turns a health profile into the
//! natural-language safety annex injected into prompts.
//!
//! Pure functions of their input. Which annex a use case gets is decided
//! by its prompt template: symptom analysis always embeds the structurally
//! complete annex (explicit "None"/"Unknown" placeholders), plant
//! identification embeds the safety-check annex only when a profile was
//! supplied, and chat gets none.

use crate::models::HealthProfile;

fn join_or(list: &[String], fallback: &str) -> String {
    if list.is_empty() {
        fallback.to_string()
    } else {
        list.join(", ")
    }
}

/// Annex for symptom analysis. Always emitted, structurally complete.
pub fn symptom_annex(profile: &HealthProfile) -> String {
    format!(
        "\nUser Profile:\n\
         - Age: {}\n\
         - Gender: {}\n\
         - Known Conditions: {}\n\
         - Current Medications: {}\n\
         - Allergies: {}\n\n\
         IMPORTANT: Check for any potential conflicts between recommended \
         remedies/plants and the user's medications or conditions. Warn \
         specifically if any exist.\n",
        profile.age.as_deref().unwrap_or("Unknown"),
        profile.gender.as_deref().unwrap_or("Unknown"),
        join_or(&profile.conditions, "None"),
        join_or(&profile.medications, "None"),
        join_or(&profile.allergies, "None"),
    )
}

/// Annex for plant identification: three explicit safety checks and the
/// mandate to flag any detected risk in the output schema.
pub fn plant_safety_annex(profile: &HealthProfile) -> String {
    let medications = join_or(&profile.medications, "any medications");
    let conditions = join_or(&profile.conditions, "any conditions");
    format!(
        "\nUser Profile for Safety Check:\n\
         - Allergies: {}\n\
         - Current Medications: {}\n\
         - Medical Conditions: {}\n\n\
         CRITICAL SAFETY INSTRUCTION:\n\
         You MUST cross-reference the identified plant with the User Profile above.\n\
         1. Check for ALLERGIES: Is the user allergic to this plant, its family, or its compounds?\n\
         2. Check for DRUG INTERACTIONS: Does this plant interact with {}? \
         (e.g., Ginger/Garlic + Warfarin/Blood Thinners is a MAJOR RISK).\n\
         3. Check for CONDITIONS: Is this plant contraindicated for {}?\n\n\
         If ANY risk is found, you MUST set \"hasWarning\": true in the JSON \
         response and provide a severe warning.\n",
        join_or(&profile.allergies, "None"),
        join_or(&profile.medications, "None"),
        join_or(&profile.conditions, "None"),
        medications,
        conditions,
    )
}

/// Parse a serialized profile (e.g. a multipart form field). A missing or
/// unparseable profile is logged and treated as "no profile", never fatal.
pub fn parse_profile(raw: Option<&str>) -> Option<HealthProfile> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unparseable user profile");
            None
        }
    }
}
