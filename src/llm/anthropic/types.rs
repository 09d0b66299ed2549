//! Anthropic-specific request and response types
//!
//! These types map directly to the Messages API schema.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesRequest {
    /// Model identifier
    pub model: String,
    /// Maximum number of tokens to generate (required)
    pub max_tokens: u32,
    /// Array of messages in the conversation
    pub messages: Vec<ApiMessage>,
    /// System prompt (top-level field)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Temperature (0.0-1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A single message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Role: "user" or "assistant"
    pub role: String,
    /// Content (can be string or array of content blocks)
    pub content: ApiContent,
}

/// Content can be either a simple string or an array of content blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiContent {
    /// Simple text content
    Text(String),
    /// Array of content blocks
    Blocks(Vec<ContentBlock>),
}

/// A content block within a request message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Text content
    Text { text: String },
    /// Image content, base64-encoded
    Image { source: ImageSource },
}

/// Base64 image source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSource {
    /// Always "base64"
    #[serde(rename = "type")]
    pub source_type: String,
    /// MIME type of the encoded image
    pub media_type: String,
    /// The encoded payload
    pub data: String,
}

impl ImageSource {
    /// Base64 PNG source, the only encoding clients send.
    pub fn base64_png(data: impl Into<String>) -> Self {
        Self {
            source_type: "base64".to_string(),
            media_type: "image/png".to_string(),
            data: data.into(),
        }
    }
}

/// Response body from `POST /v1/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    /// Message ID
    pub id: String,
    /// Message role (always "assistant" for responses)
    pub role: String,
    /// Model that produced the reply
    pub model: String,
    /// Content blocks of the reply
    pub content: Vec<ResponseBlock>,
    /// Why generation stopped
    pub stop_reason: Option<String>,
    /// Token usage
    pub usage: Usage,
}

/// A content block within a reply
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseBlock {
    /// Text content
    Text { text: String },
}

/// Token usage counts
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    /// Input tokens consumed
    pub input_tokens: u32,
    /// Output tokens generated
    pub output_tokens: u32,
}

impl MessagesResponse {
    /// Text of the first text content block, if any. Everything else in
    /// the reply is discarded.
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|block| match block {
            ResponseBlock::Text { text } => Some(text.as_str()),
        })
    }
}
