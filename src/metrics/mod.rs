// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics,
    REQUESTS_TOTAL,
    REQUEST_DURATION,
    UPLOAD_BYTES,
    OPENAI_API_CALLS,
    OPENAI_API_DURATION,
    TOKENS_TOTAL,
};

use crate::models::openai::Usage;

/// Helper to record request metrics
pub fn record_request(method: &str, endpoint: &str, status_code: u16, duration_secs: f64) {
    let status = status_code.to_string();
    REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[method, endpoint, &status])
        .observe(duration_secs);
}

/// Helper to record OpenAI API call metrics
pub fn record_openai_call(model: &str, status: &str, duration_secs: f64) {
    OPENAI_API_CALLS
        .with_label_values(&[model, status])
        .inc();

    OPENAI_API_DURATION
        .with_label_values(&[model])
        .observe(duration_secs);
}

/// Helper to record token usage
pub fn record_tokens(model: &str, usage: &Usage) {
    if usage.prompt_tokens > 0 {
        TOKENS_TOTAL
            .with_label_values(&[model, "prompt"])
            .inc_by(usage.prompt_tokens as f64);
    }
    if usage.completion_tokens > 0 {
        TOKENS_TOTAL
            .with_label_values(&[model, "completion"])
            .inc_by(usage.completion_tokens as f64);
    }
}

pub fn record_upload(bytes: usize) {
    UPLOAD_BYTES.observe(bytes as f64);
}
