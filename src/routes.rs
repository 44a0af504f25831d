use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // Chat relay + gesture classification
        .route("/api/chat", post(handlers::chat).fallback(method_not_allowed))
        .route(
            "/api/gesture",
            post(handlers::classify_gesture).fallback(method_not_allowed),
        )
        // Landing page and assets
        .fallback_service(ServeDir::new(&system_config.site_dir))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
