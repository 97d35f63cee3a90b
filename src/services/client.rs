//! HTTP client service
//!
//! Encapsulates HTTP communication with the Nataris API

use crate::config::settings::ApiConfig;
use crate::models::*;
use crate::utils::error::{NatarisError, NatarisResult};
use crate::utils::logging::{chat_log_summary, inference_log_summary};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

/// How a failed response is turned into an error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorSource {
    /// Status text only
    Status,
    /// `error.message` from the body, falling back to the status text
    Body,
}

/// Operations offered by the Nataris API
#[async_trait]
pub trait NatarisApi: Send + Sync {
    /// Account balance and request count
    async fn get_usage(&self) -> NatarisResult<UsageResponse>;

    /// Available models
    async fn list_models(&self) -> NatarisResult<ModelsResponse>;

    /// Single-prompt text completion
    async fn inference(
        &self,
        prompt: &str,
        options: InferenceOptions,
    ) -> NatarisResult<InferenceResponse>;

    /// OpenAI-compatible chat completion
    async fn chat_completion(&self, request: ChatRequest) -> NatarisResult<ChatResponse>;

    /// Chat completion with server-side orchestration forced on
    async fn orchestrated_chat(&self, mut request: ChatRequest) -> NatarisResult<ChatResponse> {
        request
            .orchestration
            .get_or_insert_with(Orchestration::default)
            .enabled = true;

        self.chat_completion(request).await
    }
}

/// Nataris API client
#[derive(Debug, Clone)]
pub struct NatarisClient {
    client: Client,
    config: ApiConfig,
}

impl NatarisClient {
    /// Create a new client instance
    pub fn new(config: ApiConfig) -> NatarisResult<Self> {
        let client = Client::builder()
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .build()
            .map_err(|e| NatarisError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Authorization", format!("Bearer {}", self.config.api_key))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> NatarisResult<T> {
        debug!("Sending GET {}", path);

        let response = self
            .authorized(self.client.get(self.url(path)))
            .send()
            .await?;

        Self::handle_response(path, response, ErrorSource::Status).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> NatarisResult<T>
    where
        B: serde::Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .authorized(self.client.post(self.url(path)))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        Self::handle_response(path, response, ErrorSource::Body).await
    }

    /// Handle HTTP response
    async fn handle_response<T: DeserializeOwned>(
        path: &str,
        response: Response,
        error_source: ErrorSource,
    ) -> NatarisResult<T> {
        let status = response.status();

        if status.is_success() {
            let parsed = response
                .json::<T>()
                .await
                .map_err(|e| NatarisError::Api(format!("Failed to parse {} response: {}", path, e)))?;

            debug!("{} completed successfully", path);
            Ok(parsed)
        } else {
            let err = match error_source {
                ErrorSource::Status => NatarisError::from_status(status),
                ErrorSource::Body => {
                    let error_text = response.text().await.unwrap_or_default();
                    NatarisError::from_response(status, &error_text)
                }
            };
            error!("{} failed with {}: {}", path, status, err);
            Err(err)
        }
    }
}

#[async_trait]
impl NatarisApi for NatarisClient {
    async fn get_usage(&self) -> NatarisResult<UsageResponse> {
        self.get("/usage").await
    }

    async fn list_models(&self) -> NatarisResult<ModelsResponse> {
        let models: ModelsResponse = self.get("/models").await?;
        debug!("Retrieved {} models", models.data.len());
        Ok(models)
    }

    async fn inference(
        &self,
        prompt: &str,
        options: InferenceOptions,
    ) -> NatarisResult<InferenceResponse> {
        let request = InferenceRequest::new(prompt, options);
        debug!(request = %inference_log_summary(&request), "Sending inference request");

        let response: InferenceResponse = self.post("/inference", &request).await?;
        info!(
            model = response.model.as_str(),
            total_tokens = response.usage.total_tokens,
            "Inference completed"
        );
        Ok(response)
    }

    async fn chat_completion(&self, request: ChatRequest) -> NatarisResult<ChatResponse> {
        debug!(request = %chat_log_summary(&request), "Sending chat completion request");

        let response: ChatResponse = self.post("/chat/completions", &request).await?;
        info!(
            choices = response.choices.len(),
            orchestrated = response.nataris.is_some(),
            "Chat completion finished"
        );
        Ok(response)
    }
}
