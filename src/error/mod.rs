// Error types for img-alt-api
// Author: kelexine (https://github.com/kelexine)

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AltTextError {
    #[error("No image provided")]
    NoImage,

    #[error("Invalid image type")]
    InvalidImageType,

    #[error("Image size too large")]
    ImageTooLarge,

    /// Upstream failure; the message is surfaced to the caller verbatim.
    #[error("{0}")]
    Upstream(String),

    #[error("Failed to generate description")]
    EmptyDescription,

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Multipart(#[from] MultipartError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AltTextError {
    /// HTTP status reported to the caller for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AltTextError::NoImage | AltTextError::InvalidImageType | AltTextError::ImageTooLarge => {
                StatusCode::BAD_REQUEST
            }
            AltTextError::Multipart(e) => e.status(),
            AltTextError::NotFound => StatusCode::NOT_FOUND,
            AltTextError::Upstream(_)
            | AltTextError::EmptyDescription
            | AltTextError::Config(_)
            | AltTextError::ConfigParsing(_)
            | AltTextError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Convert AltTextError to HTTP responses for Axum
impl IntoResponse for AltTextError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({ "error": self.to_string() });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AltTextError>;
