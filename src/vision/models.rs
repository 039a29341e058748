// Vision models and types
// Author: kelexine (https://github.com/kelexine)

use crate::error::{AltTextError, Result};
use base64::Engine;
use bytes::Bytes;
use once_cell::sync::Lazy;
use regex::Regex;

static REMOTE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://").unwrap());

// ISO 639 primary subtag with optional BCP 47 subtags, e.g. "fr", "pt-BR", "zh-Hant-TW"
static LANGUAGE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());

/// Supported upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    WebP,
    Gif,
}

impl ImageFormat {
    /// Get MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Gif => "image/gif",
        }
    }

    /// Match a declared MIME type exactly; aliases and parameters are rejected.
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime {
            "image/png" => Some(ImageFormat::Png),
            "image/jpeg" => Some(ImageFormat::Jpeg),
            "image/webp" => Some(ImageFormat::WebP),
            "image/gif" => Some(ImageFormat::Gif),
            _ => None,
        }
    }
}

/// An uploaded image that passed type and size validation.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    format: ImageFormat,
    data: Bytes,
}

impl ImageUpload {
    /// Validate an upload that has been fully read into memory.
    pub fn new(format: ImageFormat, data: Bytes, upload_limit: u64) -> Result<Self> {
        validate_image_size(data.len(), upload_limit)?;
        Ok(Self { format, data })
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Encode as `data:<mime>;base64,<payload>`.
    pub fn to_data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.data);
        format!("data:{};base64,{}", self.format.mime_type(), encoded)
    }
}

/// Reject payloads larger than the configured limit
pub fn validate_image_size(data_len: usize, upload_limit: u64) -> Result<()> {
    if data_len as u64 > upload_limit {
        return Err(AltTextError::ImageTooLarge);
    }
    Ok(())
}

/// How the image is handed to the vision model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageReference {
    /// Remote `http(s)://` URL, forwarded unmodified.
    Url(String),
    /// Inline `data:` URI built from an upload.
    DataUri(String),
}

impl ImageReference {
    /// Accept a query value only if it looks like an `http(s)://` URL.
    pub fn from_query(raw: Option<&str>) -> Option<Self> {
        raw.filter(|value| REMOTE_URL.is_match(value))
            .map(|value| ImageReference::Url(value.to_string()))
    }

    pub fn from_upload(upload: &ImageUpload) -> Self {
        ImageReference::DataUri(upload.to_data_uri())
    }

    pub fn as_str(&self) -> &str {
        match self {
            ImageReference::Url(url) => url,
            ImageReference::DataUri(uri) => uri,
        }
    }

    /// Log-friendly form; data URIs are reduced to their header and length.
    pub fn summary(&self) -> String {
        match self {
            ImageReference::Url(url) => url.clone(),
            ImageReference::DataUri(uri) => match uri.split_once(',') {
                Some((header, payload)) => format!("{},<{} bytes>", header, payload.len()),
                None => format!("<{} bytes>", uri.len()),
            },
        }
    }
}

/// Target language for the description, e.g. `fr` or `pt-BR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Returns `None` for empty or implausible tags.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if LANGUAGE_TAG.is_match(raw) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
