//! Chat-title generation contract.
//!
//! The title action resolves the `title-model` role through the router, sends
//! the serialized first user message as the prompt, and expects a short plain
//! title back. The length and punctuation limits are part of the prompt
//! contract; [`sanitize_title`] enforces them on whatever the model returns.

use crate::handle::ModelHandle;
use crate::routing::{LogicalRole, ModelRouter};

/// Hard cap on title length, matching the prompt contract.
pub const MAX_TITLE_LEN: usize = 80;

/// System prompt for the title model.
pub const TITLE_SYSTEM_PROMPT: &str = "\
- you will generate a short title based on the first message a user begins a conversation with
- ensure it is not more than 80 characters long
- the title should be a summary of the user's message
- do not use quotes or colons";

/// Resolve the handle the title action generates with.
pub fn title_model(router: &ModelRouter) -> ModelHandle {
    router.language_model(LogicalRole::Title.model_id())
}

/// Enforce the title contract on model output: trim whitespace, strip
/// wrapping quote and colon characters, and cap at [`MAX_TITLE_LEN`]
/// characters (on a char boundary).
pub fn sanitize_title(raw: &str) -> String {
    let trimmed = raw
        .trim()
        .trim_matches(|c| matches!(c, '"' | '\'' | '\u{201c}' | '\u{201d}' | ':'))
        .trim();

    match trimmed.char_indices().nth(MAX_TITLE_LEN) {
        Some((byte_index, _)) => trimmed[..byte_index].trim_end().to_string(),
        None => trimmed.to_string(),
    }
}
