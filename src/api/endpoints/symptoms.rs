//! Symptom analysis endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::extract;
use crate::gateway::{CompletionClient, CompletionOptions};
use crate::models::{AnalysisRequest, AnalysisResult};
use crate::prompts;

/// `POST /api/symptoms/analyze` — structured assessment of a symptom list.
///
/// An unparseable model reply is not an error: the extractor substitutes
/// the "Unable to analyze" fallback carrying the raw reply, and the
/// endpoint still answers 200.
pub async fn analyze<C: CompletionClient>(
    State(state): State<AppState<C>>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let conversation = prompts::symptom_analysis(&req)?;

    let reply = state
        .client
        .complete(
            &state.config.model,
            &conversation,
            CompletionOptions { reasoning: true },
        )
        .await?;

    Ok(Json(extract::symptom_result(&reply.content)))
}
