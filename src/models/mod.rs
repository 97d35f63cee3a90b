//! Data models module
//!
//! Defines request and response data structures for the Nataris API

pub mod account;
pub mod chat;
pub mod inference;

pub use account::{ModelInfo, ModelsResponse, UsageResponse};
pub use chat::{
    ChatChoice, ChatMessage, ChoiceMessage, ChatRequest, ChatResponse, Orchestration, OrchestrationMetadata,
    OrchestrationSummary,
};
pub use inference::{InferenceOptions, InferenceRequest, InferenceResponse, InferenceUsage};
