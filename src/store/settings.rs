//! Profile record and locale preference persistence.

use super::kv::{KvStore, StoreError};
use crate::models::{HealthProfile, Locale};

const PROFILE_KEY: &str = "profile";
const LOCALE_KEY: &str = "locale";

/// Persisted client-side settings: one profile record, one locale
/// preference. Corrupt stored data degrades to defaults.
pub struct SettingsStore {
    kv: KvStore,
}

impl SettingsStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    pub fn load_profile(&self) -> HealthProfile {
        self.kv.get(PROFILE_KEY)
    }

    pub fn save_profile(&self, profile: &HealthProfile) -> Result<(), StoreError> {
        self.kv.set(PROFILE_KEY, profile)
    }

    /// Explicit clear is the only profile deletion path.
    pub fn clear_profile(&self) -> Result<(), StoreError> {
        self.kv.remove(PROFILE_KEY)
    }

    pub fn locale(&self) -> Locale {
        self.kv.get::<Option<Locale>>(LOCALE_KEY).unwrap_or_default()
    }

    pub fn set_locale(&self, locale: Locale) -> Result<(), StoreError> {
        self.kv.set(LOCALE_KEY, &Some(locale))
    }
}
