//! Incremental, SAX-style JSON parsing into a DOM with verbatim number
//! literals.
//!
//! The crate has two layers. [`Parser`] is a push parser: it consumes input
//! in chunks of any size and drives the nine callbacks of an [`EventSink`]
//! as structure is recognized, pausing mid-token at chunk boundaries and
//! resuming on the next feed. [`TreeBuilder`] is the bundled sink that
//! assembles a [`Value`] tree; the serializer walks a finished tree back
//! into compact JSON text.
//!
//! Numbers are kept as the exact source substring ([`StringNumber`]) and
//! only converted to machine types on demand, so a parse → serialize round
//! trip reproduces the original digits, sign, and exponent.
//!
//! # Examples
//!
//! ```rust
//! use jsondom::from_str;
//!
//! let doc = from_str(r#"{"name": "jsondom", "major": 0, "stable": false}"#)?;
//! assert_eq!(doc.object()?.len(), 3);
//! assert_eq!(doc.object()?["major"].number()?.to_i64()?, 0);
//! assert_eq!(doc.to_string(), r#"{"major":0,"name":"jsondom","stable":false}"#);
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod builder;
mod error;
mod escape_buffer;
mod literal;
mod number;
mod parser;
mod value;
mod writer;

#[cfg(feature = "std")]
mod io;

#[cfg(test)]
mod tests;

pub use builder::TreeBuilder;
#[cfg(feature = "std")]
pub use error::ReadError;
pub use error::{AccessError, SyntaxError, SyntaxErrorKind, WriteError};
#[cfg(feature = "std")]
pub use io::{read, write};
pub use number::StringNumber;
pub use parser::{EventSink, Parser};
pub use value::{Array, Map, Value, ValueKind};

/// Parses a complete JSON document from a string.
///
/// The root value must be an object. An empty (or whitespace-only) input
/// yields [`Value::Null`].
///
/// # Errors
///
/// Returns a [`SyntaxError`] if the input violates the JSON grammar or ends
/// mid-document.
///
/// # Examples
///
/// ```rust
/// use jsondom::from_str;
///
/// let doc = from_str(r#"{"a": [1, 2.5e1]}"#)?;
/// assert_eq!(doc.object()?["a"].array()?[1].number()?.as_str(), "2.5e1");
/// # Ok::<(), Box<dyn core::error::Error>>(())
/// ```
pub fn from_str(text: &str) -> Result<Value, SyntaxError> {
    let mut parser = Parser::new(TreeBuilder::new());
    parser.feed(text)?;
    Ok(parser.finish()?.into_value())
}

/// Parses a complete JSON document from UTF-8 bytes.
///
/// Behaves like [`from_str`]; invalid UTF-8 is a [`SyntaxError`].
///
/// # Errors
///
/// Returns a [`SyntaxError`] if the input is not valid UTF-8, violates the
/// JSON grammar, or ends mid-document.
pub fn from_slice(bytes: &[u8]) -> Result<Value, SyntaxError> {
    let mut parser = Parser::new(TreeBuilder::new());
    parser.feed_bytes(bytes)?;
    Ok(parser.finish()?.into_value())
}
