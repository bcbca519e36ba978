use crate::position::Position;
use std::fmt;

/// Discriminant for the public error record, mirroring the decoder's
/// diagnostic taxonomy one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Allocator,
    Token,
    String,
    Literal,
    Number,
    Object,
    Array,
    Value,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCode::Allocator => "allocator",
            ErrorCode::Token => "token",
            ErrorCode::String => "string",
            ErrorCode::Literal => "literal",
            ErrorCode::Number => "number",
            ErrorCode::Object => "object",
            ErrorCode::Array => "array",
            ErrorCode::Value => "value",
        };
        f.write_str(name)
    }
}

/// Longest message we will construct; guards against an adversarial input
/// producing an unbounded diagnostic string.
const MAX_MESSAGE_LEN: usize = 256;

/// The caller-visible diagnostic record: a code, a human-readable message,
/// and the source position at which the failure was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code} error at {position}: {message}")]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub position: Position,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, position: Position) -> Self {
        let mut message = message.into();
        if message.len() > MAX_MESSAGE_LEN {
            message.truncate(MAX_MESSAGE_LEN);
        }
        Error {
            code,
            message,
            position,
        }
    }

    /// Allocator failures have no meaningful source position; this
    /// constructor skips interpolating one, matching the allocator's own
    /// error-reporting shortcut.
    pub fn allocator(message: impl Into<String>) -> Self {
        Error::new(ErrorCode::Allocator, message, Position::new(0, 0))
    }
}
