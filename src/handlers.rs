use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

use crate::error::RelayError;
use crate::gesture::{self, Classification, Landmark};
use crate::llm::ChatMessage;
use crate::prompt;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Relays a conversation to the upstream completion provider.
///
/// The body is parsed by hand so malformed input collapses into the generic
/// failure response instead of an extractor rejection.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatReply>, RelayError> {
    let request: ChatRequest = serde_json::from_slice(&body)?;

    let request_id = Uuid::new_v4();
    debug!(%request_id, turns = request.messages.len(), "relaying chat request");

    let system = state
        .config
        .llm_config
        .system_prompt
        .as_deref()
        .unwrap_or(prompt::SYSTEM_PROMPT);
    let messages = prompt::with_system_prompt(system, request.messages);
    let result = state.provider.complete(messages).await?;

    // A response without the expected field is an empty reply, not a failure.
    let reply = result
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    debug!(%request_id, reply_len = reply.len(), "upstream completion received");

    Ok(Json(ChatReply { reply }))
}

#[derive(Debug, Deserialize)]
pub struct GestureRequest {
    pub landmarks: Vec<Landmark>,
}

/// Classifies posted hand landmarks as an open palm or a fist.
pub async fn classify_gesture(
    Json(request): Json<GestureRequest>,
) -> Result<Json<Classification>, (StatusCode, Json<Value>)> {
    match gesture::classify(&request.landmarks) {
        Some(classification) => Ok(Json(classification)),
        None => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("expected {} hand landmarks", gesture::LANDMARK_COUNT)
            })),
        )),
    }
}
