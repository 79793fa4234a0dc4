//! Wire and domain data model.
//!
//! Everything the model (the LLM) is allowed to fill in is lenient:
//! optional fields default instead of failing the parse, and enum-like
//! strings normalize into closed sets (see `enums`).

pub mod analysis;
pub mod conversation;
pub mod enums;
pub mod history;
pub mod interaction;
pub mod plant;
pub mod profile;

pub use analysis::{AnalysisRequest, AnalysisResult, DiseaseCandidate, ProfileAnalysis};
pub use conversation::{ContentPart, Conversation, ConversationMessage, MessageContent, Role};
pub use enums::{Locale, MatchScore, RiskLevel, Severity, WarningType};
pub use history::{Category, HistoryEntry};
pub use interaction::{InteractionRequest, InteractionResult};
pub use plant::{PlantIdentification, ProfileWarning};
pub use profile::HealthProfile;
