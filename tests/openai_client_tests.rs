// OpenAI client tests against a mock HTTP server
// Author: kelexine (https://github.com/kelexine)

use img_alt_api::config::{OpenAiConfig, VisionConfig};
use img_alt_api::error::AltTextError;
use img_alt_api::openai::{OpenAiClient, VisionClient};
use img_alt_api::vision::{build_vision_request, extract_description, ImageReference};
use mockito::Matcher;
use serde_json::json;

fn client_for(base_url: String) -> OpenAiClient {
    OpenAiClient::new(&OpenAiConfig {
        api_key: "sk-test-0123456789".to_string(),
        model: "gpt-4o-mini".to_string(),
        api_base_url: base_url,
        timeout_seconds: 5,
    })
    .unwrap()
}

fn sample_request() -> img_alt_api::models::openai::ChatCompletionRequest {
    let image = ImageReference::Url("https://example.com/cat.jpg".to_string());
    build_vision_request(&image, None, "gpt-4o-mini", &VisionConfig::default())
}

#[tokio::test]
async fn test_successful_completion() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test-0123456789")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 50,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text" },
                    { "type": "image_url", "image_url": { "url": "https://example.com/cat.jpg" } }
                ]
            }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "chatcmpl-123",
                "model": "gpt-4o-mini",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": "A tabby cat on a sofa." },
                    "finish_reason": "stop"
                }],
                "usage": { "prompt_tokens": 120, "completion_tokens": 8, "total_tokens": 128 }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(format!("{}/v1", server.url()));
    let response = client.complete(sample_request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(extract_description(&response).unwrap(), "A tabby cat on a sofa.");
    assert_eq!(response.usage.unwrap().total_tokens, 128);
}

#[tokio::test]
async fn test_api_error_message_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "message": "Invalid image URL: unable to download",
                    "type": "invalid_request_error",
                    "code": "invalid_image_url"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(format!("{}/v1", server.url()));
    let error = client.complete(sample_request()).await.unwrap_err();

    assert!(matches!(error, AltTextError::Upstream(_)));
    assert_eq!(error.to_string(), "Invalid image URL: unable to download");
}

#[tokio::test]
async fn test_non_json_error_falls_back_to_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(502)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let client = client_for(format!("{}/v1", server.url()));
    let error = client.complete(sample_request()).await.unwrap_err();

    assert_eq!(error.to_string(), "HTTP 502 Bad Gateway: upstream unavailable");
}

#[tokio::test]
async fn test_api_key_is_scrubbed_from_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_body(
            json!({ "error": { "message": "Incorrect API key provided: sk-test-0123456789." } })
                .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(format!("{}/v1", server.url()));
    let message = client.complete(sample_request()).await.unwrap_err().to_string();

    assert!(message.starts_with("Incorrect API key provided"));
    assert!(!message.contains("sk-test-0123456789"));
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = client_for(format!("{}/v1", server.url()));
    let error = client.complete(sample_request()).await.unwrap_err();

    assert!(matches!(error, AltTextError::Upstream(_)));
    assert!(error.to_string().starts_with("Invalid response"));
}

#[tokio::test]
async fn test_null_content_yields_empty_description() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(
            json!({
                "choices": [{ "index": 0, "message": { "role": "assistant", "content": null }, "finish_reason": "length" }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(format!("{}/v1", server.url()));
    let response = client.complete(sample_request()).await.unwrap();

    assert!(matches!(
        extract_description(&response),
        Err(AltTextError::EmptyDescription)
    ));
}

#[tokio::test]
async fn test_transport_failure_is_upstream_error() {
    // Nothing listens on port 9 (discard) in the test environment
    let client = client_for("http://127.0.0.1:9/v1".to_string());
    let error = client.complete(sample_request()).await.unwrap_err();

    assert!(matches!(error, AltTextError::Upstream(_)));
    assert!(!error.to_string().is_empty());
}
