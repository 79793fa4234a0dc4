//! API error types with structured JSON responses.
//!
//! Mapping policy: caller input violations fail fast as 400 before any
//! network call; gateway failures surface as 502 with the upstream
//! detail attached. Extraction failures never reach this type — they
//! become fallback results and HTTP 200.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::gateway::GatewayError;
use crate::prompts::PromptError;
use crate::store::StoreError;

/// `{error, message}` response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Upstream(#[from] GatewayError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            ApiError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                "Invalid request".to_string(),
                detail.clone(),
            ),
            ApiError::Upstream(err) => {
                tracing::error!(error = %err, "Completion service request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Completion service request failed".to_string(),
                    err.to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".to_string(),
                    detail.clone(),
                )
            }
        };

        (status, Json(ErrorBody { error, message })).into_response()
    }
}

impl From<PromptError> for ApiError {
    fn from(err: PromptError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn bad_request_returns_400_with_both_fields() {
        let response = ApiError::BadRequest("Symptoms are required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid request");
        assert_eq!(json["message"], "Symptoms are required");
    }

    #[tokio::test]
    async fn upstream_failure_returns_502_with_detail() {
        let response = ApiError::from(GatewayError::Upstream {
            status: 503,
            body: "model overloaded".into(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert!(json["message"].as_str().unwrap().contains("503"));
        assert!(json["message"].as_str().unwrap().contains("model overloaded"));
    }

    #[tokio::test]
    async fn prompt_error_maps_to_bad_request() {
        let response = ApiError::from(PromptError::EmptyMessage).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Message is required");
    }

    #[tokio::test]
    async fn internal_returns_500() {
        let response = ApiError::Internal("disk full".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
