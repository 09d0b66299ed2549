// Wire frames exchanged with browser clients

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Greeting broadcast when a new connection arrives.
pub const GREETING: &str = "hello";

/// Fixed receipt confirmation for chat requests.
pub const CHAT_ACK: &str = "the server received your chat request";

/// Fixed receipt confirmation for image requests.
pub const IMAGE_ACK: &str = "the server received your image request";

/// Frames sent by clients.
///
/// The payload stays untyped here; it is validated when the request is
/// actually run, after the ack has gone out.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event")]
pub enum ClientFrame {
    /// Ask the model for a text completion.
    #[serde(rename = "chat request")]
    ChatRequest { seq: u64, data: Value },
    /// Ask the model to describe an image.
    #[serde(rename = "image request")]
    ImageRequest { seq: u64, data: Value },
}

/// Frames sent by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum ServerFrame {
    /// Connection greeting, broadcast on each new connection.
    #[serde(rename = "message")]
    Message { data: String },
    /// Receipt confirmation, sent to the requester only.
    #[serde(rename = "ack")]
    Ack { seq: u64, data: String },
    /// A completed (or failed, empty-string) chat completion.
    #[serde(rename = "chat response")]
    ChatResponse { data: String },
    /// A completed (or failed, empty-string) image analysis.
    #[serde(rename = "image response")]
    ImageResponse { data: String },
}

impl ServerFrame {
    pub fn greeting() -> Self {
        ServerFrame::Message {
            data: GREETING.to_string(),
        }
    }

    pub fn chat_ack(seq: u64) -> Self {
        ServerFrame::Ack {
            seq,
            data: CHAT_ACK.to_string(),
        }
    }

    pub fn image_ack(seq: u64) -> Self {
        ServerFrame::Ack {
            seq,
            data: IMAGE_ACK.to_string(),
        }
    }

    pub fn chat_response(text: impl Into<String>) -> Self {
        ServerFrame::ChatResponse { data: text.into() }
    }

    pub fn image_response(text: impl Into<String>) -> Self {
        ServerFrame::ImageResponse { data: text.into() }
    }

    /// Serialize for the wire. These frames cannot fail to serialize; an
    /// empty object is sent rather than panicking in the send path.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
