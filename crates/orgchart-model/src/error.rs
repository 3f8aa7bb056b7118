use thiserror::Error;

/// Rejection reasons for employee names and designation titles.
///
/// Always recoverable: the caller corrects the input and retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must be at least {min} characters, got {len}")]
    TooShort {
        field: &'static str,
        min: usize,
        len: usize,
    },

    #[error("{field} must be at most {max} characters, got {len}")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("{field} may only contain letters and spaces")]
    InvalidCharacters { field: &'static str },
}
