use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "MedLeaf";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default completion service endpoint (OpenRouter-compatible).
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default text model for chat, symptom analysis and interaction checks.
pub const DEFAULT_MODEL: &str = "x-ai/grok-4.1-fast:free";

/// Default vision-capable model for plant identification.
pub const DEFAULT_VISION_MODEL: &str = "google/gemini-2.0-flash-exp:free";

/// Attribution headers sent to the completion service.
pub const HTTP_REFERER: &str = "http://localhost:5173";

pub const DEFAULT_PORT: u16 = 3000;

pub fn default_log_filter() -> String {
    format!("{}=info,tower_http=info", env!("CARGO_PKG_NAME"))
}

/// Runtime configuration, resolved once at startup from the environment.
///
/// Recognized variables: `PORT`, `OPENROUTER_API_KEY`, `AI_MODEL`,
/// `VISION_MODEL`, `MEDLEAF_DATA_DIR`. Nothing else is consulted.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Upstream credential. `None` means gateway calls will fail with a
    /// missing-credential error; the server itself still starts.
    pub api_key: Option<String>,
    pub model: String,
    pub vision_model: String,
    pub base_url: String,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_key = std::env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let model =
            std::env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let vision_model = std::env::var("VISION_MODEL")
            .unwrap_or_else(|_| DEFAULT_VISION_MODEL.to_string());

        let data_dir = std::env::var("MEDLEAF_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| app_data_dir());

        Self {
            port,
            api_key,
            model,
            vision_model,
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir,
        }
    }
}

/// Get the application data directory (~/MedLeaf/ on all platforms).
pub fn app_data_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(APP_NAME),
        None => PathBuf::from(".").join(APP_NAME),
    }
}
