//! Required-field validation for generation requests.
//!
//! A field counts as present only when it is supplied and non-empty. The
//! error messages below are part of the public API contract.

use serde_json::Value;

use crate::error::CoreError;

pub const IDEAS_REQUIRED: &str = "Topic and channel type are required";
pub const SCRIPT_REQUIRED: &str = "Title, duration, and tone are required";
pub const THUMBNAIL_REQUIRED: &str = "Video title and style are required";
pub const OPTIMIZE_REQUIRED: &str = "Title and description are required";

/// Check that every field is present and non-empty.
///
/// Returns the unwrapped values in the same order, or a
/// [`CoreError::Validation`] carrying `message` if any field is missing.
pub fn require_fields<'a, const N: usize>(
    fields: [Option<&'a str>; N],
    message: &str,
) -> Result<[&'a str; N], CoreError> {
    let mut values = [""; N];
    for (slot, field) in values.iter_mut().zip(fields) {
        match field {
            Some(value) if !value.is_empty() => *slot = value,
            _ => return Err(CoreError::Validation(message.to_string())),
        }
    }
    Ok(values)
}

/// Read a loosely-typed JSON field as text.
///
/// Only non-empty strings count; numbers, booleans, `null` and anything else
/// are treated as absent, so a wrongly-typed required field is reported as
/// missing rather than as a malformed body.
pub fn text_field(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|v| !v.is_empty())
}
