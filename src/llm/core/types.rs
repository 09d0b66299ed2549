//! Request types for the model adapter

/// A single-turn text completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCompletion {
    /// The user prompt
    pub prompt: String,
    /// System instruction
    pub system_prompt: String,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Randomness (0.0-1.0, higher = more random)
    pub temperature: f32,
}

/// A single-turn image-plus-text request.
///
/// The image is base64-encoded PNG data, forwarded to the provider
/// without decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAnalysis {
    /// Base64 PNG payload
    pub base64_image: String,
    /// The user prompt, sent after the image
    pub prompt: String,
    /// System instruction
    pub system_prompt: String,
}
