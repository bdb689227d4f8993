//! Request field checks shared by the handlers.

use crate::ApiError;
use crate::ApiResult;

/// Trim `value` and require it to be non-empty and at most `max_len` characters
pub fn require_text(field: &str, value: Option<&str>, max_len: usize) -> ApiResult<String> {
    let trimmed = value.map(str::trim).unwrap_or_default();

    if trimmed.is_empty() {
        return Err(ApiError::validation(field, format!("{} is required", field)));
    }

    limit_length(field, trimmed, max_len)?;

    Ok(trimmed.to_string())
}

/// Require an opaque identifier to be non-blank and at most `max_len` characters.
///
/// The identifier itself is left untouched: `" u1 "` and `"u1"` are different ids.
pub fn require_id(field: &str, value: &str, max_len: usize) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(field, format!("{} is required", field)));
    }

    limit_length(field, value, max_len)
}

/// Reject `value` when it is longer than `max_len` characters
pub fn limit_length(field: &str, value: &str, max_len: usize) -> ApiResult<()> {
    if value.chars().count() > max_len {
        return Err(ApiError::validation(
            field,
            format!("{} must be at most {} characters", field, max_len),
        ));
    }

    Ok(())
}
