//! Error types for parsing, value access, and serialization.
//!
//! All errors are terminal at the point they are raised: a failed parse must
//! be retried with a fresh [`Parser`](crate::Parser), and none of the
//! operations below retry internally. Diagnostic context travels entirely in
//! the error payload; the crate never logs.

use alloc::string::String;

use thiserror::Error;

use crate::value::ValueKind;

/// A malformed-input error raised by the event parser.
///
/// Carries what was wrong ([`SyntaxErrorKind`]), the name of the parser
/// state that rejected the input, and the 1-based line number of the
/// offending character.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} in {state} state at line {line}")]
pub struct SyntaxError {
    /// What was wrong with the input.
    pub kind: SyntaxErrorKind,
    /// Name of the parser state that rejected the input.
    pub state: &'static str,
    /// 1-based input line of the offending character.
    pub line: usize,
}

/// The grammar violation behind a [`SyntaxError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A character that is not valid in the current parser state.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    /// An unquoted literal that is none of `true`, `false`, `null`, nor a
    /// valid JSON number.
    #[error("invalid literal {0:?}")]
    InvalidLiteral(String),
    /// A `\` followed by a character that does not name an escape.
    #[error("invalid escape character {0:?}")]
    InvalidEscape(char),
    /// A `\uXXXX` escape that does not denote a Unicode scalar value
    /// (a lone surrogate half).
    #[error("invalid unicode escape sequence \\u{0:04X}")]
    InvalidUnicodeEscape(u32),
    /// Input bytes that are not valid UTF-8.
    #[error("invalid utf-8 sequence")]
    InvalidUtf8,
    /// The input ended in the middle of a document.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

/// A typed accessor was invoked against a [`Value`](crate::Value) holding a
/// different alternative.
///
/// This is a usage error, never a parse-time condition: the discriminant and
/// payload of a `Value` are always consistent, and a mismatched access is
/// reported instead of returning anything.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("could not access {requested} value, stored value is of another type ({actual})")]
pub struct AccessError {
    /// The alternative the caller asked for.
    pub requested: ValueKind,
    /// The alternative the value actually holds.
    pub actual: ValueKind,
}

/// An error raised while writing a document.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The tree handed to the document writer does not have an object root.
    #[error("cannot write a JSON document whose root is not an object")]
    NonObjectRoot,
    /// The underlying writer failed.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// An error raised while reading a document from a byte stream.
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The stream did not contain a well-formed JSON document.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
