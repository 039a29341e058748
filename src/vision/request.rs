// Vision request construction
// Author: kelexine (https://github.com/kelexine)

use super::models::{ImageReference, LanguageCode};
use crate::config::VisionConfig;
use crate::models::openai::{ChatCompletionRequest, ChatMessage, ContentPart};
use tracing::debug;

/// Instruction appended when the caller asks for a specific language.
pub fn language_directive(lang: &LanguageCode) -> String {
    format!("Answer only in the language with code \"{}\".", lang)
}

/// Build the chat completions body for one image.
///
/// The user turn carries the configured prompt, the image reference and,
/// when `lang` is set, a directive restricting the answer language.
pub fn build_vision_request(
    image: &ImageReference,
    lang: Option<&LanguageCode>,
    model: &str,
    vision: &VisionConfig,
) -> ChatCompletionRequest {
    debug!(
        "Building vision request: model={}, image={}, lang={:?}",
        model,
        image.summary(),
        lang.map(LanguageCode::as_str)
    );

    let mut content = vec![
        ContentPart::text(vision.prompt.clone()),
        ContentPart::image_url(image.as_str()),
    ];

    if let Some(lang) = lang {
        content.push(ContentPart::text(language_directive(lang)));
    }

    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content,
        }],
        max_tokens: vision.max_tokens,
    }
}
