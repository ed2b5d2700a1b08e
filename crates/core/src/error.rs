//! Decoder errors.

use thiserror::Error;

/// Rejected decoder input.
///
/// Both variants are invalid-argument errors: they are detected before any
/// letter is decoded and no partial output is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input was empty or absent.
    #[error("input cannot be empty")]
    EmptyInput,
    /// Input does not end with the `#` terminator.
    #[error("input must end with '#'")]
    MissingTerminator,
}

impl DecodeError {
    pub fn code(self) -> &'static str {
        match self {
            DecodeError::EmptyInput => "empty_input",
            DecodeError::MissingTerminator => "missing_terminator",
        }
    }

    /// Every decoder error is an invalid-argument error.
    pub fn is_invalid_argument(self) -> bool {
        match self {
            DecodeError::EmptyInput | DecodeError::MissingTerminator => true,
        }
    }
}
