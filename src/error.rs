// src/error.rs
//! API error taxonomy: validation failures become 400s with the message
//! in the body; anything else becomes a 500 whose detail is only exposed
//! in development. Persistence errors never reach this type on the chat
//! path - they are swallowed inside the chat service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::config;
use crate::services::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            other => {
                tracing::error!("Request failed: {}", other);
                let message = if config::get().expose_error_detail() {
                    other.to_string()
                } else {
                    "An error occurred".to_string()
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error", "message": message })),
                )
                    .into_response()
            }
        }
    }
}
