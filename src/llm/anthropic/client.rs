//! Anthropic client implementation

use async_trait::async_trait;
use reqwest::Client;

use crate::llm::core::{
    error::LlmError,
    provider::ModelProvider,
    types::{ImageAnalysis, TextCompletion},
};

use super::mapper::{to_image_request, to_text_request};
use super::types::{MessagesRequest, MessagesResponse};

/// Messages API endpoint
const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";

/// Anthropic API version header value
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic model identifiers
#[derive(Debug, Clone)]
pub enum AnthropicModel {
    /// Claude 3 Haiku (released 2024-03-07)
    Haiku3,
}

impl AnthropicModel {
    /// Get the model identifier string for the Messages API
    pub fn as_str(&self) -> &str {
        match self {
            AnthropicModel::Haiku3 => "claude-3-haiku-20240307",
        }
    }
}

/// Client for the Anthropic Messages API
pub struct AnthropicClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Credential sent as `x-api-key`
    api_key: String,
    /// Model to use
    model: AnthropicModel,
}

impl AnthropicClient {
    /// Create a new Anthropic client.
    ///
    /// The connect timeout bounds connection establishment only; the
    /// request itself has no deadline, so a hung provider call hangs the
    /// corresponding response.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(api_key: String, model: AnthropicModel) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key,
            model,
        })
    }

    /// Make one request to the Messages endpoint.
    async fn send(&self, request: MessagesRequest) -> Result<MessagesResponse, LlmError> {
        let response = self
            .http_client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        // Check status
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let reply = response.json::<MessagesResponse>().await?;
        Ok(reply)
    }
}

#[async_trait]
impl ModelProvider for AnthropicClient {
    async fn text_completion(&self, request: TextCompletion) -> Result<String, LlmError> {
        let reply = self
            .send(to_text_request(self.model.as_str(), request))
            .await?;
        reply
            .first_text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyResponse)
    }

    async fn image_analysis(&self, request: ImageAnalysis) -> Result<String, LlmError> {
        let reply = self
            .send(to_image_request(self.model.as_str(), request))
            .await?;
        reply
            .first_text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyResponse)
    }
}
