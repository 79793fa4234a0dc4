//! History entry and category types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which history log an entry belongs to. Categories are fully isolated:
/// no operation on one ever touches the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Symptom,
    Plant,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[Self::Symptom, Self::Plant]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Symptom => "symptom",
            Self::Plant => "plant",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One persisted analysis. `data` carries the result plus the original
/// input as an opaque JSON value; the store never constrains its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Millisecond-timestamp-derived; unique within a category for a
    /// given process.
    pub id: i64,
    /// ISO 8601 instant of recording.
    pub timestamp: String,
    pub data: serde_json::Value,
}
