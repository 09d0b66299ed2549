//! Anthropic provider implementation
//!
//! This module provides a client for the Anthropic Messages API,
//! authenticated with an API key.

pub mod client;
pub mod mapper;
pub mod types;

// Re-export commonly used types
pub use client::{AnthropicClient, AnthropicModel};
