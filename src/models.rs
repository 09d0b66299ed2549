// Request payloads accepted over the gateway socket

use serde::{Deserialize, Deserializer};

use crate::llm::{ImageAnalysis, TextCompletion};

fn default_prompt() -> String {
    "Say this is a test".to_string()
}

fn default_system_prompt() -> String {
    "You are William Shakespeare and speak like in the 1590s.".to_string()
}

fn default_max_tokens() -> u32 {
    7
}

fn default_temperature() -> f32 {
    0.7
}

/// A chat completion request as sent by a browser client.
///
/// Sketches historically sent `maxTokens` and `temperature` as strings,
/// so both fields accept a number or a numeric string. Absent fields take
/// the defaults the relay has always used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default = "default_max_tokens", deserialize_with = "lenient_u32")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature", deserialize_with = "lenient_f32")]
    pub temperature: f32,
}

/// An image analysis request: a base64-encoded PNG plus the prompt to run
/// against it. The image data is passed through opaquely, never decoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    pub base64_image: String,
    pub prompt: String,
    pub system_prompt: String,
}

impl From<ChatRequest> for TextCompletion {
    fn from(request: ChatRequest) -> Self {
        TextCompletion {
            prompt: request.prompt,
            system_prompt: request.system_prompt,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

impl From<ImageRequest> for ImageAnalysis {
    fn from(request: ImageRequest) -> Self {
        ImageAnalysis {
            base64_image: request.base64_image,
            prompt: request.prompt,
            system_prompt: request.system_prompt,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::<u32>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn lenient_f32<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::<f32>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
