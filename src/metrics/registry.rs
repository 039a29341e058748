// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use crate::error::{AltTextError, Result};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Histogram, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder, Encoder,
    register_counter_vec_with_registry, register_histogram_vec_with_registry,
    register_histogram_with_registry,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // REQUEST METRICS
    // ============================================================================

    /// Total number of API requests
    pub static ref REQUESTS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("requests_total", "Total number of API requests"),
        &["method", "endpoint", "status_code"],
        REGISTRY
    ).unwrap();

    /// Request duration histogram
    pub static ref REQUEST_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        HistogramOpts::new("request_duration_seconds", "Request duration in seconds")
            .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["method", "endpoint", "status_code"],
        REGISTRY
    ).unwrap();

    /// Size of accepted uploads
    pub static ref UPLOAD_BYTES: Histogram = register_histogram_with_registry!(
        HistogramOpts::new("upload_bytes", "Size of uploaded images in bytes")
            .buckets(prometheus::exponential_buckets(16_384.0, 4.0, 8).unwrap()),
        REGISTRY
    ).unwrap();

    // ============================================================================
    // OPENAI API METRICS
    // ============================================================================

    /// Total OpenAI API calls
    pub static ref OPENAI_API_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("openai_api_calls_total", "Total OpenAI API calls"),
        &["model", "status"], // status: success, error
        REGISTRY
    ).unwrap();

    /// OpenAI API call duration
    pub static ref OPENAI_API_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        HistogramOpts::new("openai_api_duration_seconds", "OpenAI API call duration")
            .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["model"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // TOKEN METRICS
    // ============================================================================

    /// Total tokens processed
    pub static ref TOKENS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("tokens_total", "Total tokens processed"),
        &["model", "type"], // type: prompt, completion
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| AltTextError::Internal(format!("Failed to encode metrics: {}", e)))?;
    String::from_utf8(buffer)
        .map_err(|e| AltTextError::Internal(format!("Metrics were not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        REQUESTS_TOTAL.with_label_values(&["GET", "/", "200"]).inc();
        OPENAI_API_CALLS.with_label_values(&["test-model", "success"]).inc();
        TOKENS_TOTAL.with_label_values(&["test-model", "prompt"]).inc_by(3.0);
        UPLOAD_BYTES.observe(1024.0);

        let metrics = gather_metrics().unwrap();
        assert!(metrics.contains("requests_total"));
        assert!(metrics.contains("openai_api_calls_total"));
        assert!(metrics.contains("tokens_total"));
        assert!(metrics.contains("upload_bytes"));
    }
}
