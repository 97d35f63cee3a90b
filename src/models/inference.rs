//! Inference data models
//!
//! Single-prompt text completion request and response

use serde::{Deserialize, Serialize};

/// Model used when the caller does not pick one
pub const DEFAULT_INFERENCE_MODEL: &str = "qwen2.5-0.5b-instruct-q6_k";

/// Default generation limit
pub const DEFAULT_MAX_TOKENS: u32 = 100;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// `POST /inference` request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Optional knobs for an inference call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InferenceOptions {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

impl InferenceOptions {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl InferenceRequest {
    /// Build a request body, filling unset options with the defaults
    pub fn new(prompt: impl Into<String>, options: InferenceOptions) -> Self {
        Self {
            model: options
                .model
                .unwrap_or_else(|| DEFAULT_INFERENCE_MODEL.to_string()),
            prompt: prompt.into(),
            max_tokens: options.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            temperature: options.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        }
    }
}

/// `POST /inference` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResponse {
    /// Model that served the request
    pub model: String,
    /// Generated text
    pub output: String,
    pub usage: InferenceUsage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceUsage {
    pub total_tokens: u64,
}
