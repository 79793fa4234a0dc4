//! API router: routes under `/api`, CORS/trace/body-limit layers, and a
//! JSON 404 fallback.

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::endpoints::plants::MAX_IMAGE_BYTES;
use crate::api::AppState;
use crate::gateway::CompletionClient;
use crate::prompts::MAX_PLANT_IMAGES;

/// Routes mounted under `/api`.
fn api_routes<C: CompletionClient + 'static>(state: AppState<C>) -> Router {
    Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/chat", post(endpoints::chat::send::<C>))
        .route("/symptoms/analyze", post(endpoints::symptoms::analyze::<C>))
        .route("/plants/identify", post(endpoints::plants::identify::<C>))
        .route("/interactions/check", post(endpoints::interactions::check::<C>))
        .with_state(state)
}

/// Build the full application router.
pub fn app<C: CompletionClient + 'static>(state: AppState<C>) -> Router {
    // Room for 3 images at the per-file cap plus form overhead.
    let body_limit = MAX_IMAGE_BYTES * MAX_PLANT_IMAGES + 1024 * 1024;

    Router::new()
        .nest("/api", api_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Route not found" })),
    )
}
