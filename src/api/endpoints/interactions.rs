//! Herb/medication interaction check endpoint.
//!
//! Dedicated request type for what the original client did by asking the
//! chat endpoint for ad hoc JSON; prompt and fallback are identical, so
//! observable behavior is unchanged.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::extract;
use crate::gateway::{CompletionClient, CompletionOptions};
use crate::models::{InteractionRequest, InteractionResult};
use crate::prompts;

/// `POST /api/interactions/check` — fixed 4-field interaction verdict.
pub async fn check<C: CompletionClient>(
    State(state): State<AppState<C>>,
    Json(req): Json<InteractionRequest>,
) -> Result<Json<InteractionResult>, ApiError> {
    let conversation = prompts::interaction_check(&req.herb, &req.medication)?;

    let reply = state
        .client
        .complete(
            &state.config.model,
            &conversation,
            CompletionOptions { reasoning: true },
        )
        .await?;

    Ok(Json(extract::interaction_result(&reply.content)))
}
