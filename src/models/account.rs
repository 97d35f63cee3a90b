//! Account data models
//!
//! Balance snapshot and model catalogue

use serde::{Deserialize, Serialize};

/// `GET /usage` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageResponse {
    /// Remaining balance in USD
    pub balance_usd: f64,
    /// Requests made in the current period
    pub total_requests: u64,
}

/// `GET /models` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub data: Vec<ModelInfo>,
}

/// Catalogue entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model id
    pub id: String,
    /// Model type (e.g. "llm")
    #[serde(rename = "type")]
    pub model_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_type_field_name() {
        let model: ModelInfo =
            serde_json::from_str(r#"{"id":"qwen2.5-0.5b-instruct-q6_k","type":"llm"}"#).unwrap();
        assert_eq!(model.model_type, "llm");

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["type"], "llm");
    }
}
