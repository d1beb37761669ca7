// src/models/chat.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat message. Serialized lowercase to match the wire
/// format the frontend widget expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// One entry in the conversation history. Two are appended per turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn now(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Result of keyword intent detection. Transient, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntentResult {
    pub intent: &'static str,
    pub confidence: f64,
}

/// Simulated inference metrics attached to every reply. Display-only.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMetadata {
    pub tokens_per_second: i64,
    pub latency: i64,
    pub model: String,
}

/// Full response to one chat turn.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub intent: String,
    pub confidence: f64,
    pub metadata: ChatMetadata,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatAnalytics {
    pub total_messages: usize,
    pub user_messages: usize,
    pub bot_messages: usize,
    pub average_tokens_per_second: f64,
    pub average_latency: i64,
}
