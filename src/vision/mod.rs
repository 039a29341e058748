//! Image handling for alt text generation.
//!
//! This module turns a URL or an uploaded file into an image reference the
//! vision model accepts, builds the outbound chat completions request, and
//! pulls the description back out of the response.
//!
//! # Submodules
//!
//! - `models`: Image formats, upload validation, image references and language codes.
//! - `request`: Construction of the outbound vision request.
//! - `response`: Extraction of the generated description.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod models;
pub mod request;
pub mod response;

pub use models::{ImageFormat, ImageReference, ImageUpload, LanguageCode};
pub use request::build_vision_request;
pub use response::extract_description;
