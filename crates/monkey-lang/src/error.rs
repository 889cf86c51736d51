//! Parse-time failures.
//!
//! Structural parse failures (a missing `)`, `}`, `]`, `:`, `=`, or an
//! identifier where one is required; a token with no registered prefix
//! parser) are reported as [`ParseError`]. This mirrors the teacher's
//! `SpannedError` (message + [`std::fmt::Display`] + [`std::error::Error`])
//! minus the span field: source-location tracking is explicitly out of
//! scope for this language (see spec Non-goals), so errors are flat
//! strings.
//!
//! Runtime failures are a different channel entirely: they are first-class
//! `Object::Error` values (see [`crate::object::Object`]) that flow through
//! ordinary evaluation rather than `Result::Err`, since the language lets a
//! function receive or return an error value directly.

use std::fmt;

/// A structural failure encountered while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_displays_its_message() {
        let err = ParseError::new("expected next token to be =, got + instead");
        assert_eq!(err.to_string(), "expected next token to be =, got + instead");
    }
}
