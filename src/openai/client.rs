// OpenAI chat completions client
// Author: kelexine (https://github.com/kelexine)

use super::VisionClient;
use crate::config::OpenAiConfig;
use crate::error::{AltTextError, Result};
use crate::metrics;
use crate::models::openai::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};
use crate::utils::logging::sanitize;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Client for the OpenAI chat completions API.
///
/// One request per call; failures are returned immediately without retry.
pub struct OpenAiClient {
    http_client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .use_rustls_tls()
            .build()
            .map_err(|e| AltTextError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        if config.api_key.is_empty() {
            warn!("OPENAI_API_KEY is not set; vision requests will be rejected upstream");
        }

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Get the API base_url
    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.api_base_url.trim_end_matches('/'))
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorResponse>(response_text)
            .ok()
            .and_then(|resp| resp.error.message.or(resp.error.error_type))
            .filter(|message| !message.is_empty())
    }

    async fn send(&self, request: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        let url = self.completions_url();
        debug!("Calling chat completions API for model: {}", request.model);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AltTextError::Upstream(sanitize(&e.to_string())))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AltTextError::Upstream(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            error!(
                "OpenAI API error: HTTP {} - Response body: {}",
                status,
                sanitize(&response_text)
            );
            let message = Self::extract_error_message(&response_text)
                .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text));
            return Err(AltTextError::Upstream(sanitize(&message)));
        }

        debug!(
            "Raw OpenAI response (first 500 chars): {}",
            response_text.chars().take(500).collect::<String>()
        );

        serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse OpenAI response: {}", e);
            AltTextError::Upstream(format!("Invalid response: {}", e))
        })
    }
}

#[async_trait]
impl VisionClient for OpenAiClient {
    async fn complete(&self, request: ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        let start = Instant::now();
        let result = self.send(&request).await;
        let elapsed = start.elapsed().as_secs_f64();

        match &result {
            Ok(response) => {
                metrics::record_openai_call(&request.model, "success", elapsed);
                if let Some(usage) = &response.usage {
                    metrics::record_tokens(&request.model, usage);
                }
            }
            Err(_) => metrics::record_openai_call(&request.model, "error", elapsed),
        }

        result
    }
}
