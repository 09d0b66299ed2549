//! Mapping between adapter requests and the Messages API schema

use crate::llm::core::types::{ImageAnalysis, TextCompletion};

use super::types::{ApiContent, ApiMessage, ContentBlock, ImageSource, MessagesRequest};

/// Output-token ceiling for image analysis; chat requests carry their own.
pub const IMAGE_MAX_TOKENS: u32 = 1000;

/// Build the request body for a text completion: one user message with
/// plain text content, plus the system instruction and sampling
/// parameters.
pub fn to_text_request(model: &str, request: TextCompletion) -> MessagesRequest {
    MessagesRequest {
        model: model.to_string(),
        max_tokens: request.max_tokens,
        messages: vec![ApiMessage {
            role: "user".to_string(),
            content: ApiContent::Text(request.prompt),
        }],
        system: Some(request.system_prompt),
        temperature: Some(request.temperature),
    }
}

/// Build the request body for an image analysis: one user message whose
/// content is the base64 PNG block followed by the prompt as a text
/// block.
pub fn to_image_request(model: &str, request: ImageAnalysis) -> MessagesRequest {
    MessagesRequest {
        model: model.to_string(),
        max_tokens: IMAGE_MAX_TOKENS,
        messages: vec![ApiMessage {
            role: "user".to_string(),
            content: ApiContent::Blocks(vec![
                ContentBlock::Image {
                    source: ImageSource::base64_png(request.base64_image),
                },
                ContentBlock::Text {
                    text: request.prompt,
                },
            ]),
        }],
        system: Some(request.system_prompt),
        temperature: None,
    }
}
