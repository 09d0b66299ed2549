//! Integration tests for the Anthropic client
//!
//! These tests require a valid API key and will make real API calls.
//! To run them:
//! 1. Put the key in `secret.txt` or export `ANTHROPIC_API_KEY`
//!    (a `.env` file works too)
//! 2. Run: `cargo test --test anthropic_integration_test -- --ignored`

use std::path::Path;

use model_relay::auth;
use model_relay::llm::{
    AnthropicClient, AnthropicModel, ImageAnalysis, ModelProvider, TextCompletion,
};

/// A 1x1 black PNG.
const TINY_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

/// Helper to create a test client
fn create_test_client() -> AnthropicClient {
    dotenvy::dotenv().ok();

    let api_key = auth::resolve_api_key(Path::new(auth::SECRET_FILE), auth::API_KEY_ENV)
        .expect("API key required (secret.txt or ANTHROPIC_API_KEY)");

    AnthropicClient::new(api_key, AnthropicModel::Haiku3)
        .expect("Failed to create Anthropic client")
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_simple_completion() {
    let client = create_test_client();

    let text = client
        .text_completion(TextCompletion {
            prompt: "What is 2+2? Answer with just the number.".to_string(),
            system_prompt: "You are a terse assistant.".to_string(),
            max_tokens: 16,
            temperature: 0.0,
        })
        .await
        .expect("Completion failed");

    assert!(!text.is_empty());
    assert!(text.contains('4'), "Expected '4' in: {}", text);
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_image_analysis() {
    let client = create_test_client();

    let text = client
        .image_analysis(ImageAnalysis {
            base64_image: TINY_PNG_BASE64.to_string(),
            prompt: "What color is this image? Answer in one word.".to_string(),
            system_prompt: "You are a terse assistant.".to_string(),
        })
        .await
        .expect("Image analysis failed");

    assert!(!text.is_empty());
}
