//! Field validation shared by every mutation path.
//!
//! Employee names and designation titles follow the same rules:
//! non-empty, 2-30 characters, ASCII letters and spaces only.

use crate::constants::{NAME_MAX_LEN, NAME_MIN_LEN};
use crate::error::ValidationError;

/// Validate an employee name or designation title.
///
/// `field` names the offending field in the error ("name" or "title").
pub fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }

    let len = value.chars().count();
    if len < NAME_MIN_LEN {
        return Err(ValidationError::TooShort {
            field,
            min: NAME_MIN_LEN,
            len,
        });
    }
    if len > NAME_MAX_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: NAME_MAX_LEN,
            len,
        });
    }

    if !value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(ValidationError::InvalidCharacters { field });
    }

    Ok(())
}
