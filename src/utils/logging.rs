//! Logging utilities
//!
//! Shared helpers for keeping prompts and messages short in logs and output

use crate::models::{ChatRequest, InferenceRequest};

/// Set to true to include full prompts and messages in debug logs
pub const VERBOSE_REQUEST_LOGGING: bool = false;

/// Truncate a string to `max_chars` characters, appending "..." when cut
pub fn truncate_content(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

/// Create a filtered summary of an inference request for logging
pub fn inference_log_summary(request: &InferenceRequest) -> serde_json::Value {
    if VERBOSE_REQUEST_LOGGING {
        serde_json::to_value(request).unwrap_or(serde_json::json!({"error": "serialize failed"}))
    } else {
        serde_json::json!({
            "model": request.model,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
            "prompt": truncate_content(&request.prompt, 100),
        })
    }
}

/// Create a filtered summary of a chat request for logging
pub fn chat_log_summary(request: &ChatRequest) -> serde_json::Value {
    if VERBOSE_REQUEST_LOGGING {
        serde_json::to_value(request).unwrap_or(serde_json::json!({"error": "serialize failed"}))
    } else {
        let messages: Vec<serde_json::Value> = request
            .messages
            .iter()
            .map(|msg| {
                let max_len = if msg.role == "system" { 100 } else { 200 };
                serde_json::json!({
                    "role": msg.role,
                    "content": truncate_content(&msg.content, max_len),
                })
            })
            .collect();

        serde_json::json!({
            "model": request.model,
            "max_tokens": request.max_tokens,
            "messages": messages,
            "orchestration": request.orchestration.as_ref().map(|o| &o.workflow),
        })
    }
}
