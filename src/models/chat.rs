//! Chat completion data models
//!
//! OpenAI-compatible chat request/response plus the Nataris orchestration
//! extension (`orchestration` on the request, `nataris` on the response).

use serde::{Deserialize, Serialize};

/// Model used by the chat examples
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.2-1b-instruct-q4_k_m";

/// Workflow requested when orchestration is forced on without a block
pub const DEFAULT_WORKFLOW: &str = "research";

/// Cost ceiling for the default orchestration block
pub const DEFAULT_MAX_COST_USD: f64 = 1.0;

/// Placeholder printed for missing orchestration metadata
pub const NOT_AVAILABLE: &str = "N/A";

/// `POST /chat/completions` request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model name
    pub model: String,
    /// Message list, in conversation order
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens to generate (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Server-side multi-step workflow (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orchestration: Option<Orchestration>,
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role (system/user/assistant)
    pub role: String,
    pub content: String,
}

/// Orchestration block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orchestration {
    pub enabled: bool,
    /// Workflow name, e.g. "research"
    pub workflow: String,
    /// Upper bound on the accumulated cost of all steps
    pub max_cost_usd: f64,
}

impl Default for Orchestration {
    fn default() -> Self {
        Self {
            enabled: true,
            workflow: DEFAULT_WORKFLOW.to_string(),
            max_cost_usd: DEFAULT_MAX_COST_USD,
        }
    }
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

impl ChatRequest {
    /// Single user message request
    pub fn user(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(content)],
            max_tokens: None,
            orchestration: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_orchestration(mut self, orchestration: Orchestration) -> Self {
        self.orchestration = Some(orchestration);
        self
    }
}

/// `POST /chat/completions` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    /// Present only when orchestration ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nataris: Option<OrchestrationMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Workflow metadata attached to an orchestrated response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrchestrationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps_executed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost_usd: Option<f64>,
}

impl ChatResponse {
    /// Content of the first choice, the primary result
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }

    pub fn orchestration_summary(&self) -> OrchestrationSummary {
        OrchestrationSummary::from_metadata(self.nataris.as_ref())
    }
}

/// Printable view of the orchestration metadata
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestrationSummary {
    pub workflow_id: String,
    pub steps_executed: String,
    pub total_cost_usd: String,
}

impl OrchestrationSummary {
    /// Each missing field becomes "N/A"
    pub fn from_metadata(metadata: Option<&OrchestrationMetadata>) -> Self {
        let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            workflow_id: or_na(metadata.and_then(|m| m.workflow_id.clone())),
            steps_executed: or_na(metadata.and_then(|m| m.steps_executed).map(|s| s.to_string())),
            total_cost_usd: or_na(metadata.and_then(|m| m.total_cost_usd).map(|c| c.to_string())),
        }
    }
}
