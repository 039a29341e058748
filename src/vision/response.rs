// Description extraction from chat completions
// Author: kelexine (https://github.com/kelexine)

use crate::error::{AltTextError, Result};
use crate::models::openai::ChatCompletionResponse;
use tracing::warn;

/// Read `choices[0].message.content` as the alt text.
///
/// A missing or blank value is reported as [`AltTextError::EmptyDescription`],
/// distinct from transport failures.
pub fn extract_description(response: &ChatCompletionResponse) -> Result<String> {
    let Some(choice) = response.choices.first() else {
        warn!("Vision response contained no choices");
        return Err(AltTextError::EmptyDescription);
    };

    match choice.message.content.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => {
            warn!(
                "Vision response had no content (finish_reason={:?}, refusal={:?})",
                choice.finish_reason, choice.message.refusal
            );
            Err(AltTextError::EmptyDescription)
        }
    }
}
