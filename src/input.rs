//! Chat message checks applied before a message reaches the query parser.

use crate::error::{UiError, UiResult};

pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// Reject empty, whitespace-only and over-long messages. Length is counted in
/// characters after trimming.
pub fn validate_message(content: &str, max_len: usize) -> UiResult<()> {
    if content.is_empty() {
        return Err(UiError::EmptyMessage);
    }
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(UiError::WhitespaceMessage);
    }
    if trimmed.chars().count() > max_len {
        return Err(UiError::MessageTooLong { max: max_len });
    }
    Ok(())
}

/// Trim, drop angle brackets and cap the length.
pub fn sanitize_input(content: &str, max_len: usize) -> String {
    content
        .trim()
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .take(max_len)
        .collect()
}
