//! Validation error types and field helpers

use std::fmt;

/// Maximum length for any text field
pub const MAX_FIELD_LEN: usize = 256;

/// Validation error for form and query input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field absent from the submitted form
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value doesn't parse (e.g., non-numeric capacity)
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Required, non-blank text field. Surrounding whitespace is dropped.
pub fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }

    Ok(trimmed.to_owned())
}

/// Required non-negative integer field.
pub fn required_count(field: &'static str, value: Option<String>) -> Result<i32, ValidationError> {
    let text = required_text(field, value)?;
    parse_count(field, &text)
}

/// Optional non-negative integer; blank means absent.
pub fn optional_count(field: &'static str, value: &str) -> Result<Option<i32>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    parse_count(field, value).map(Some)
}

fn parse_count(field: &'static str, value: &str) -> Result<i32, ValidationError> {
    let n: i32 = value.parse().map_err(|_| ValidationError::InvalidFormat {
        field,
        reason: "must be a whole number",
    })?;

    if n < 0 {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "must not be negative",
        });
    }
    Ok(n)
}
