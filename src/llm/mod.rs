//! Model client adapter
//!
//! This module wraps the Anthropic Messages API behind a small provider
//! trait: one single-turn text completion call and one single-turn
//! image-plus-text call, each returning the first text block of the
//! reply.

pub mod anthropic;
pub mod core;

// Re-export commonly used types
pub use self::core::{
    error::LlmError,
    provider::ModelProvider,
    types::{ImageAnalysis, TextCompletion},
};

pub use anthropic::{AnthropicClient, AnthropicModel};
