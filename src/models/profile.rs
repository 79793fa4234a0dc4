//! Personal health profile.
//!
//! Owned by the client installation; never transmitted to persistent
//! server-side storage. The gateway only ever sees text derived from it.

use serde::{Deserialize, Serialize};

/// A user's health profile. All collections stay free of case-insensitive
/// duplicates; mutate only through the add/remove/update operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthProfile {
    pub name: String,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub conditions: Vec<String>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
}

impl HealthProfile {
    /// True when any of the safety-relevant collections carries data.
    pub fn has_clinical_data(&self) -> bool {
        !self.conditions.is_empty()
            || !self.medications.is_empty()
            || !self.allergies.is_empty()
    }

    pub fn add_condition(&mut self, condition: &str) -> bool {
        add_unique(&mut self.conditions, condition)
    }

    pub fn remove_condition(&mut self, condition: &str) -> bool {
        remove_entry(&mut self.conditions, condition)
    }

    pub fn add_medication(&mut self, medication: &str) -> bool {
        add_unique(&mut self.medications, medication)
    }

    pub fn remove_medication(&mut self, medication: &str) -> bool {
        remove_entry(&mut self.medications, medication)
    }

    pub fn add_allergy(&mut self, allergy: &str) -> bool {
        add_unique(&mut self.allergies, allergy)
    }

    pub fn remove_allergy(&mut self, allergy: &str) -> bool {
        remove_entry(&mut self.allergies, allergy)
    }

    /// Update basic fields; empty strings clear the optional ones.
    pub fn update_details(&mut self, name: &str, age: &str, gender: &str) {
        self.name = name.trim().to_string();
        self.age = non_empty(age);
        self.gender = non_empty(gender);
    }

    /// Reset to the empty default (explicit clear is the only deletion path).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn add_unique(list: &mut Vec<String>, entry: &str) -> bool {
    let entry = entry.trim();
    if entry.is_empty() {
        return false;
    }
    if list.iter().any(|e| e.eq_ignore_ascii_case(entry)) {
        return false;
    }
    list.push(entry.to_string());
    true
}

fn remove_entry(list: &mut Vec<String>, entry: &str) -> bool {
    let before = list.len();
    list.retain(|e| !e.eq_ignore_ascii_case(entry.trim()));
    before != list.len()
}
