//! Provider trait for model clients

use async_trait::async_trait;

use super::error::LlmError;
use super::types::{ImageAnalysis, TextCompletion};

/// Interface the gateway talks to.
///
/// Implementations make a single attempt per call, with no retry layer;
/// any failure is surfaced to the caller.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Request a text completion and return the first text block of the reply.
    async fn text_completion(&self, request: TextCompletion) -> Result<String, LlmError>;

    /// Request an image analysis and return the first text block of the reply.
    async fn image_analysis(&self, request: ImageAnalysis) -> Result<String, LlmError>;
}
