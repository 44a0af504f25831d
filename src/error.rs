use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Fixed failure text returned for every relay failure, regardless of cause.
pub const FAILURE_REPLY: &str = "后端处理失败";

/// Everything that can go wrong while relaying a chat request. All variants
/// collapse to the same 500 response so the client never sees internal
/// detail; the distinction only survives in the logs.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to parse request body: {0}")]
    BadRequestBody(#[from] serde_json::Error),
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::error!("chat relay failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "reply": FAILURE_REPLY })),
        )
            .into_response()
    }
}
