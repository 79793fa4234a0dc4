//! Open-ended chat endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::gateway::{CompletionClient, CompletionOptions};
use crate::models::ConversationMessage;
use crate::prompts;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ConversationMessage>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_details: Option<serde_json::Value>,
    pub suggestions: Vec<String>,
}

/// `POST /api/chat` — send a message with prior history, get the
/// assistant's reply plus its opaque reasoning trace if one was attached.
pub async fn send<C: CompletionClient>(
    State(state): State<AppState<C>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let conversation = prompts::chat(&req.history, &req.message)?;

    let reply = state
        .client
        .complete(
            &state.config.model,
            &conversation,
            CompletionOptions { reasoning: true },
        )
        .await?;

    Ok(Json(ChatResponse {
        reply: reply.content,
        reasoning_details: reply.reasoning_details,
        suggestions: Vec::new(),
    }))
}
