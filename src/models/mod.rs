//! Data models for the upstream OpenAI chat completions API.
//!
//! This module contains the request/response bodies exchanged with the
//! vision model (`openai`).

// Author: kelexine (https://github.com/kelexine)

pub mod openai;

pub use openai::{
    ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice,
    ContentPart, ImageUrl, ResponseMessage, Usage,
};
