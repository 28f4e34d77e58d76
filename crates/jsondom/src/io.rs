//! Stream entry points for reading and writing documents.
//!
//! The core never performs I/O itself: these functions drive the parser
//! from any [`std::io::Read`] source and stream the serializer into any
//! [`std::io::Write`] sink. In-memory parsing lives in the crate root
//! ([`from_str`](crate::from_str), [`from_slice`](crate::from_slice)).

use core::fmt;
use std::io::{ErrorKind, Read, Write};

use crate::builder::TreeBuilder;
use crate::error::{ReadError, WriteError};
use crate::parser::Parser;
use crate::value::Value;
use crate::writer::write_value;

/// Reads a complete JSON document from a byte stream.
///
/// Bytes are pulled in 4 KiB chunks and fed to an incremental parse, so
/// the whole input is never buffered. The root value must be an object; an
/// empty stream yields [`Value::Null`].
///
/// # Errors
///
/// Returns [`ReadError::Io`] if the reader fails, or [`ReadError::Syntax`]
/// if the stream is not a well-formed document.
///
/// # Examples
///
/// ```rust
/// let doc = jsondom::read(&b"{\"n\": 1}"[..])?;
/// assert_eq!(doc.object()?["n"].number()?.as_str(), "1");
/// # Ok::<(), Box<dyn core::error::Error>>(())
/// ```
pub fn read<R: Read>(mut reader: R) -> Result<Value, ReadError> {
    let mut parser = Parser::new(TreeBuilder::new());
    let mut buf = [0u8; 4096];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        parser.feed_bytes(&buf[..n])?;
    }
    Ok(parser.finish()?.into_value())
}

/// Bridges `fmt::Write` output into an `io::Write` sink, holding on to the
/// first I/O error so it can be reported with its original payload.
struct IoWriter<W: Write> {
    inner: W,
    error: Option<std::io::Error>,
}

impl<W: Write> fmt::Write for IoWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

/// Writes the compact JSON rendering of a document to a byte sink.
///
/// The root value must be an object; serialization streams through the
/// writer without buffering the whole document.
///
/// # Errors
///
/// Returns [`WriteError::NonObjectRoot`] if `value` is not an object, or
/// [`WriteError::Io`] if the writer fails.
///
/// # Examples
///
/// ```rust
/// use jsondom::from_str;
///
/// let doc = from_str(r#"{"a": [1, 2]}"#)?;
/// let mut out = Vec::new();
/// jsondom::write(&mut out, &doc)?;
/// assert_eq!(out, br#"{"a":[1,2]}"#);
/// # Ok::<(), Box<dyn core::error::Error>>(())
/// ```
pub fn write<W: Write>(writer: W, value: &Value) -> Result<(), WriteError> {
    if !value.is_object() {
        return Err(WriteError::NonObjectRoot);
    }
    let mut out = IoWriter {
        inner: writer,
        error: None,
    };
    if write_value(&mut out, value).is_err() {
        let e = out
            .error
            .take()
            .unwrap_or_else(|| std::io::Error::other("formatter error"));
        return Err(e.into());
    }
    out.inner.flush()?;
    Ok(())
}
