// OpenAI API client module
// Author: kelexine (https://github.com/kelexine)

mod client;

pub use client::OpenAiClient;

use crate::error::Result;
use crate::models::openai::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;

/// Capability to submit one vision request to a completion backend.
///
/// Implementations surface transport and API failures as
/// [`crate::error::AltTextError::Upstream`] with a human-readable message.
#[async_trait]
pub trait VisionClient: Send + Sync {
    async fn complete(&self, request: ChatCompletionRequest) -> Result<ChatCompletionResponse>;
}
