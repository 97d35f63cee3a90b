//! Data model tests

use nataris_example::models::chat::{DEFAULT_CHAT_MODEL, NOT_AVAILABLE};
use nataris_example::models::*;
use serde_json::json;

#[test]
fn test_usage_response_shape() {
    let usage: UsageResponse =
        serde_json::from_value(json!({"balance_usd": 5.2, "total_requests": 12})).unwrap();

    assert_eq!(usage.balance_usd, 5.2);
    assert_eq!(usage.total_requests, 12);
}

#[test]
fn test_models_response_shape() {
    let models: ModelsResponse = serde_json::from_value(json!({
        "data": [
            {"id": "qwen2.5-0.5b-instruct-q6_k", "type": "llm"},
            {"id": "whisper-small", "type": "stt"}
        ]
    }))
    .unwrap();

    assert_eq!(models.data.len(), 2);
    assert_eq!(models.data[1].id, "whisper-small");
    assert_eq!(models.data[1].model_type, "stt");
}

#[test]
fn test_inference_request_body() {
    let request = InferenceRequest::new("Explain AI in one sentence.", InferenceOptions::default());
    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(
        body,
        json!({
            "model": "qwen2.5-0.5b-instruct-q6_k",
            "prompt": "Explain AI in one sentence.",
            "max_tokens": 100,
            "temperature": 0.7
        })
    );
}

#[test]
fn test_inference_response_shape() {
    let response: InferenceResponse = serde_json::from_value(json!({
        "model": "qwen2.5-0.5b-instruct-q6_k",
        "output": "Machine learning finds patterns in data.",
        "usage": {"total_tokens": 17}
    }))
    .unwrap();

    assert_eq!(response.model, "qwen2.5-0.5b-instruct-q6_k");
    assert_eq!(response.output, "Machine learning finds patterns in data.");
    assert_eq!(response.usage.total_tokens, 17);
}

#[test]
fn test_orchestrated_chat_request_body() {
    let request = ChatRequest::user(DEFAULT_CHAT_MODEL, "Research the impact of AI on healthcare")
        .with_orchestration(Orchestration::default());
    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(
        body,
        json!({
            "model": "llama-3.2-1b-instruct-q4_k_m",
            "messages": [{"role": "user", "content": "Research the impact of AI on healthcare"}],
            "orchestration": {"enabled": true, "workflow": "research", "max_cost_usd": 1.0}
        })
    );
}

#[test]
fn test_chat_response_with_metadata() {
    let response: ChatResponse = serde_json::from_value(json!({
        "choices": [{"message": {"role": "assistant", "content": "Summary"}}],
        "nataris": {"workflow_id": "wf_9", "steps_executed": 5, "total_cost_usd": 0.31}
    }))
    .unwrap();

    assert_eq!(response.first_content(), Some("Summary"));
    let metadata = response.nataris.as_ref().unwrap();
    assert_eq!(metadata.workflow_id.as_deref(), Some("wf_9"));
    assert_eq!(metadata.steps_executed, Some(5));
    assert_eq!(metadata.total_cost_usd, Some(0.31));
}

#[test]
fn test_chat_response_without_metadata() {
    let response: ChatResponse = serde_json::from_value(json!({
        "choices": [{"message": {"content": null}}]
    }))
    .unwrap();

    assert_eq!(response.first_content(), None);

    let summary = response.orchestration_summary();
    assert_eq!(summary.workflow_id, NOT_AVAILABLE);
    assert_eq!(summary.steps_executed, NOT_AVAILABLE);
    assert_eq!(summary.total_cost_usd, NOT_AVAILABLE);
}
