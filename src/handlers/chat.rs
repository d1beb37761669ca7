// src/handlers/chat.rs
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::chat::{ChatAnalytics, ChatResponse};
use crate::AppState;

pub fn chat_routes() -> Router {
    Router::new()
        .route("/api/chat/send", post(send_message))
        .route("/api/chat/history", get(get_history).delete(clear_history))
        .route("/api/chat/analytics", get(get_analytics))
}

/// POST /api/chat/send - run one turn against the simulated assistant.
/// The body is inspected by hand so a missing, non-string, or empty
/// `message` produces the exact 400 messages the chat widget expects.
async fn send_message(
    Extension(state): Extension<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> Result<Json<ChatResponse>, ApiError> {
    let payload = body.map(|Json(v)| v).unwrap_or(Value::Null);
    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::validation("Message is required and must be a string"))?;

    if message.trim().is_empty() {
        return Err(ApiError::validation("Message cannot be empty"));
    }

    Ok(Json(state.chat.chat(message).await))
}

/// GET /api/chat/history - full conversation, oldest first.
async fn get_history(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    let history = state.chat.history().await;
    Json(json!({ "history": history }))
}

/// DELETE /api/chat/history - reset the conversation.
async fn clear_history(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    state.chat.clear_history().await;
    Json(json!({ "message": "History cleared" }))
}

/// GET /api/chat/analytics
async fn get_analytics(Extension(state): Extension<Arc<AppState>>) -> Json<ChatAnalytics> {
    Json(state.chat.analytics().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ChatService, FileStore};

    async fn test_state() -> Arc<AppState> {
        let dir = std::env::temp_dir().join(format!("nextgen-api-{}", uuid::Uuid::new_v4()));
        Arc::new(AppState {
            chat: ChatService::restore(FileStore::new(dir)).await,
            started_at: std::time::Instant::now(),
        })
    }

    #[tokio::test]
    async fn test_send_rejects_missing_message_without_mutating_history() {
        let state = test_state().await;

        let result = send_message(Extension(state.clone()), Some(Json(json!({})))).await;
        assert!(matches!(result, Err(ApiError::Validation(m)) if m.contains("required")));

        let result = send_message(Extension(state.clone()), None).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));

        let result = send_message(
            Extension(state.clone()),
            Some(Json(json!({ "message": 42 }))),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));

        assert!(state.chat.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_send_rejects_blank_message() {
        let state = test_state().await;

        let result = send_message(
            Extension(state.clone()),
            Some(Json(json!({ "message": "   " }))),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Validation(m)) if m == "Message cannot be empty"));
        assert!(state.chat.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_send_runs_a_full_turn() {
        let state = test_state().await;

        let Json(response) = send_message(
            Extension(state.clone()),
            Some(Json(json!({ "message": "What's your pricing?" }))),
        )
        .await
        .unwrap();

        assert_eq!(response.intent, "Sales: Enterprise");
        assert_eq!(response.confidence, 0.92);
        assert_eq!(state.chat.history().await.len(), 2);
    }
}
