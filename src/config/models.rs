//! Configuration data structures for img-alt-api.
//!
//! This module defines the schema for the application settings: the HTTP
//! listener, the upstream OpenAI connection, image/prompt limits, logging
//! and metrics.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// Prompt sent alongside every image.
pub const DEFAULT_PROMPT: &str = "What's in this image? Be brief, it's for image alt description on a social network. Don't write in the first person.";

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port, service name).
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream OpenAI API settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Image validation and prompt settings.
    #[serde(default)]
    pub vision: VisionConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Prometheus exposition settings.
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `0.0.0.0`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8000`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Service name reported by the identity payload on `GET /`.
    /// Default: `img-alt-api`
    #[serde(default = "default_name")]
    pub name: String,
}

/// Settings for the upstream OpenAI API connection.
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// Secret API key sent as a bearer token.
    /// Default: empty (calls will be rejected upstream).
    #[serde(default)]
    pub api_key: String,

    /// Vision-capable chat model used for every request.
    /// Default: `gpt-4o-mini`
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible API.
    /// Default: `https://api.openai.com/v1`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Whole-request timeout in seconds.
    /// Default: `60`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

// Custom Debug impl that never logs the API key
impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.api_key.is_empty() { "[UNSET]" } else { "[REDACTED]" };
        f.debug_struct("OpenAiConfig")
            .field("api_key", &api_key)
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Settings for image validation and the outbound prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    /// Maximum accepted upload size in bytes.
    /// Default: `10485760` (10 MiB)
    #[serde(default = "default_upload_limit")]
    pub upload_limit: u64,

    /// Upper bound on generated tokens.
    /// Default: `50`
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Instruction sent with every image.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Settings for the Prometheus endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Whether `GET /metrics` is routed.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            name: default_name(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            api_base_url: default_api_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            upload_limit: default_upload_limit(),
            max_tokens: default_max_tokens(),
            prompt: default_prompt(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_name() -> String {
    "img-alt-api".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_upload_limit() -> u64 {
    10 * 1024 * 1024 // 10MB
}

fn default_max_tokens() -> u32 {
    50
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}
