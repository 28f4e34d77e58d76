//! The incremental SAX-style event parser.
//!
//! [`Parser`] consumes input in chunks of any size, down to a single byte
//! per call, and drives the callbacks of its [`EventSink`] synchronously as
//! each structural element completes. State that depends on partial input
//! (a half-read string, number, escape, or unicode hex run) lives in the
//! parser's own buffers and state stack between calls: nothing is lost and
//! nothing is reprocessed.
//!
//! Nesting is handled by an explicit stack of states rather than recursion,
//! so document depth is bounded by memory, not by the call stack. When an
//! inner container closes, the parser pops back to the exact point where the
//! outer container was interrupted.
//!
//! # Examples
//!
//! ```rust
//! use jsondom::{EventSink, Parser};
//!
//! #[derive(Default)]
//! struct KeyCounter(usize);
//!
//! impl EventSink for KeyCounter {
//!     fn on_object_start(&mut self) {}
//!     fn on_object_end(&mut self) {}
//!     fn on_array_start(&mut self) {}
//!     fn on_array_end(&mut self) {}
//!     fn on_key(&mut self, _key: &str) {
//!         self.0 += 1;
//!     }
//!     fn on_string(&mut self, _value: &str) {}
//!     fn on_number(&mut self, _literal: &str) {}
//!     fn on_boolean(&mut self, _value: bool) {}
//!     fn on_null(&mut self) {}
//! }
//!
//! let mut parser = Parser::new(KeyCounter::default());
//! parser.feed(r#"{"a": 1, "b"#)?;
//! parser.feed(r#"": {"c": null}}"#)?;
//! assert_eq!(parser.finish()?.0, 3);
//! # Ok::<(), jsondom::SyntaxError>(())
//! ```

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::escape_buffer::{UnicodeEscapeBuffer, UnicodeEscapeError};
use crate::literal;

/// Receiver for the parser's structural events.
///
/// One callback fires exactly once per syntactic element, in the same
/// depth-first order the characters appear in the input. Borrowed text
/// arguments point into the parser's scratch buffer and are only valid for
/// the duration of the call.
pub trait EventSink {
    /// A `{` opened an object.
    fn on_object_start(&mut self);
    /// A `}` closed the current object.
    fn on_object_end(&mut self);
    /// A `[` opened an array.
    fn on_array_start(&mut self);
    /// A `]` closed the current array.
    fn on_array_end(&mut self);
    /// A member key completed, escapes already decoded. The paired value
    /// arrives through one of the value callbacks that follows.
    fn on_key(&mut self, key: &str);
    /// A string value completed, escapes already decoded.
    fn on_string(&mut self, value: &str);
    /// A number value completed; `literal` is the verbatim source text.
    fn on_number(&mut self, literal: &str);
    /// A `true` or `false` literal completed.
    fn on_boolean(&mut self, value: bool);
    /// A `null` literal completed.
    fn on_null(&mut self);
}

// ------------------------------------------------------------------------
// Parse states
// ------------------------------------------------------------------------

/// One entry of the parse-state stack.
///
/// The stack, not a flat state, is what makes interruption cheap: the state
/// beneath the top records where to resume once the current construct ends,
/// and for a `Comma` entry it identifies which container type the next
/// closer must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before the root value (and again after it closes).
    Idle,
    /// Just entered `{`; expect a key or `}`.
    Object,
    /// Just entered `[`; expect a value or `]`.
    Array,
    /// Inside a quoted key.
    Key,
    /// Between a key and its value; expect `:`.
    Colon,
    /// Expect any value start.
    Value,
    /// Just finished a value; expect `,` or the matching closer.
    Comma,
    /// Inside a quoted string value.
    String,
    /// Just consumed `\` inside a key or string.
    StringEscape,
    /// Accumulating the 4 hex digits of `\uXXXX`.
    UnicodeEscape,
    /// Accumulating an unquoted literal until a delimiter.
    Literal,
}

impl State {
    fn name(self) -> &'static str {
        match self {
            State::Idle => "idle",
            State::Object => "object",
            State::Array => "array",
            State::Key => "key",
            State::Colon => "colon",
            State::Value => "value",
            State::Comma => "comma",
            State::String => "string",
            State::StringEscape => "string_escape_sequence",
            State::UnicodeEscape => "unicode_escape",
            State::Literal => "boolean_or_null_or_number",
        }
    }
}

/// Incomplete UTF-8 sequence carried between `feed_bytes` calls.
#[derive(Debug, Default)]
struct Utf8Carry {
    buf: [u8; 4],
    len: u8,
    need: u8,
}

fn utf8_sequence_len(lead: u8) -> u8 {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}

// ------------------------------------------------------------------------
// Parser
// ------------------------------------------------------------------------

/// The incremental event parser.
///
/// Owns its [`EventSink`] and drives it re-entrantly from [`feed`] /
/// [`feed_bytes`]; [`finish`] verifies the document completed and hands the
/// sink back. Each parser instance handles one document and is exclusively
/// owned by one caller; concurrent parses use independent instances.
///
/// The root value must be an object: the initial state accepts only `{` as
/// the first non-whitespace character.
///
/// An error is terminal for the parse. Subsequent `feed` calls return the
/// same error and the partially-delivered events should be discarded by the
/// caller.
///
/// [`feed`]: Parser::feed
/// [`feed_bytes`]: Parser::feed_bytes
/// [`finish`]: Parser::finish
#[derive(Debug)]
pub struct Parser<S> {
    sink: S,
    stack: Vec<State>,
    /// Decoded characters of the string / key / literal in flight; cleared
    /// each time a token completes.
    buf: String,
    unicode: UnicodeEscapeBuffer,
    carry: Utf8Carry,
    line: usize,
    error: Option<SyntaxError>,
}

impl<S: EventSink> Parser<S> {
    /// Creates a parser delivering events to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            stack: vec![State::Idle],
            buf: String::new(),
            unicode: UnicodeEscapeBuffer::new(),
            carry: Utf8Carry::default(),
            line: 1,
            error: None,
        }
    }

    /// The sink events are delivered to.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the parser, returning the sink without checking that the
    /// document completed. Prefer [`finish`](Parser::finish).
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Feeds a chunk of JSON text.
    ///
    /// Consumes the whole chunk, firing callbacks for every element that
    /// completes within it; a token cut off by the chunk boundary is
    /// carried over and resumed by the next call.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] at the first character that violates the
    /// grammar in the current state. The error is latched: further calls
    /// keep returning it.
    pub fn feed(&mut self, text: &str) -> Result<(), SyntaxError> {
        self.guard()?;
        if self.carry.need > 0 {
            // A previous feed_bytes call left a split UTF-8 sequence; finish
            // (or fault) it before taking this chunk's characters.
            return self.feed_bytes(text.as_bytes());
        }
        self.feed_str(text)
    }

    /// Feeds a chunk of UTF-8 bytes.
    ///
    /// Like [`feed`](Parser::feed), but additionally tolerates chunk
    /// boundaries that split a multi-byte UTF-8 sequence: the incomplete
    /// tail is carried and completed by the following call.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] on malformed JSON or invalid UTF-8.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<(), SyntaxError> {
        self.guard()?;
        let mut rest = bytes;

        if self.carry.need > 0 {
            while self.carry.len < self.carry.need {
                let Some((&b, tail)) = rest.split_first() else {
                    return Ok(());
                };
                self.carry.buf[usize::from(self.carry.len)] = b;
                self.carry.len += 1;
                rest = tail;
            }
            let seq = self.carry.buf;
            let need = usize::from(self.carry.need);
            self.carry = Utf8Carry::default();
            let (decoded, n) = bstr::decode_utf8(&seq[..need]);
            match decoded {
                Some(c) if n == need => self.step_checked(c)?,
                _ => return Err(self.latch(self.fail(SyntaxErrorKind::InvalidUtf8))),
            }
        }

        match core::str::from_utf8(rest) {
            Ok(text) => self.feed_str(text),
            Err(e) => {
                let (valid, tail) = rest.split_at(e.valid_up_to());
                if let Ok(text) = core::str::from_utf8(valid) {
                    self.feed_str(text)?;
                }
                if e.error_len().is_some() {
                    return Err(self.latch(self.fail(SyntaxErrorKind::InvalidUtf8)));
                }
                // A valid but incomplete sequence at the end of the chunk:
                // stash it and wait for the rest.
                self.carry.need = utf8_sequence_len(tail[0]);
                self.carry.buf[..tail.len()].copy_from_slice(tail);
                self.carry.len = tail.len() as u8;
                Ok(())
            }
        }
    }

    /// Declares the end of input and returns the sink.
    ///
    /// # Errors
    ///
    /// Returns the latched error if the parse already failed, or an
    /// `unexpected end of input` [`SyntaxError`] if the input stopped
    /// mid-document (an open container, string, or escape, or a truncated
    /// UTF-8 sequence). An empty input counts as a complete document.
    pub fn finish(mut self) -> Result<S, SyntaxError> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        if self.carry.need > 0 || self.stack.len() > 1 {
            return Err(self.fail(SyntaxErrorKind::UnexpectedEndOfInput));
        }
        Ok(self.sink)
    }

    // --------------------------------------------------------------------
    // Character loop
    // --------------------------------------------------------------------

    fn feed_str(&mut self, text: &str) -> Result<(), SyntaxError> {
        for c in text.chars() {
            self.step_checked(c)?;
        }
        Ok(())
    }

    fn guard(&self) -> Result<(), SyntaxError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn latch(&mut self, e: SyntaxError) -> SyntaxError {
        self.error = Some(e.clone());
        e
    }

    fn step_checked(&mut self, c: char) -> Result<(), SyntaxError> {
        match self.step(c) {
            Ok(()) => Ok(()),
            Err(e) => Err(self.latch(e)),
        }
    }

    fn state(&self) -> State {
        self.stack.last().copied().unwrap_or(State::Idle)
    }

    fn fail(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError {
            kind,
            state: self.state().name(),
            line: self.line,
        }
    }

    fn unexpected(&self, c: char) -> SyntaxError {
        self.fail(SyntaxErrorKind::UnexpectedCharacter(c))
    }

    /// Consumes whitespace, keeping the line count. Returns `true` if `c`
    /// was whitespace.
    fn whitespace(&mut self, c: char) -> bool {
        match c {
            '\n' => {
                self.line += 1;
                true
            }
            ' ' | '\r' | '\t' => true,
            _ => false,
        }
    }

    fn step(&mut self, c: char) -> Result<(), SyntaxError> {
        match self.state() {
            State::Idle => self.idle(c),
            State::Object => self.object(c),
            State::Array => self.array(c),
            State::Key => self.key(c),
            State::Colon => self.colon(c),
            State::Value => self.value(c),
            State::Comma => self.comma(c),
            State::String => self.string(c),
            State::StringEscape => self.string_escape(c),
            State::UnicodeEscape => self.unicode_escape(c),
            State::Literal => self.literal(c),
        }
    }

    // --------------------------------------------------------------------
    // Per-state handlers
    // --------------------------------------------------------------------

    fn idle(&mut self, c: char) -> Result<(), SyntaxError> {
        if self.whitespace(c) {
            return Ok(());
        }
        match c {
            '{' => {
                self.stack.push(State::Object);
                self.sink.on_object_start();
                Ok(())
            }
            _ => Err(self.unexpected(c)),
        }
    }

    fn object(&mut self, c: char) -> Result<(), SyntaxError> {
        if self.whitespace(c) {
            return Ok(());
        }
        match c {
            '"' => {
                self.buf.clear();
                self.stack.push(State::Key);
                Ok(())
            }
            '}' => self.close_container(c),
            _ => Err(self.unexpected(c)),
        }
    }

    fn array(&mut self, c: char) -> Result<(), SyntaxError> {
        if self.whitespace(c) {
            return Ok(());
        }
        match c {
            ']' => self.close_container(c),
            _ => self.begin_value(c),
        }
    }

    fn key(&mut self, c: char) -> Result<(), SyntaxError> {
        match c {
            '"' => {
                self.stack.pop();
                self.sink.on_key(&self.buf);
                self.buf.clear();
                self.stack.push(State::Colon);
                Ok(())
            }
            '\\' => {
                self.stack.push(State::StringEscape);
                Ok(())
            }
            _ => {
                if c == '\n' {
                    self.line += 1;
                }
                self.buf.push(c);
                Ok(())
            }
        }
    }

    fn colon(&mut self, c: char) -> Result<(), SyntaxError> {
        if self.whitespace(c) {
            return Ok(());
        }
        match c {
            ':' => {
                self.stack.pop();
                self.stack.push(State::Value);
                Ok(())
            }
            _ => Err(self.unexpected(c)),
        }
    }

    fn value(&mut self, c: char) -> Result<(), SyntaxError> {
        if self.whitespace(c) {
            return Ok(());
        }
        self.stack.pop();
        match self.begin_value(c) {
            Ok(()) => Ok(()),
            Err(mut e) => {
                // Report the error against the value position it occurred in.
                e.state = State::Value.name();
                Err(e)
            }
        }
    }

    /// Starts a value at `c`. The current top of the stack is the enclosing
    /// container (or `Idle` for the root); the new construct's state is
    /// pushed above it.
    fn begin_value(&mut self, c: char) -> Result<(), SyntaxError> {
        match c {
            '{' => {
                self.stack.push(State::Object);
                self.sink.on_object_start();
                Ok(())
            }
            '[' => {
                self.stack.push(State::Array);
                self.sink.on_array_start();
                Ok(())
            }
            '"' => {
                self.buf.clear();
                self.stack.push(State::String);
                Ok(())
            }
            't' | 'f' | 'n' | '-' | '0'..='9' => {
                self.buf.clear();
                self.buf.push(c);
                self.stack.push(State::Literal);
                Ok(())
            }
            _ => Err(self.unexpected(c)),
        }
    }

    fn comma(&mut self, c: char) -> Result<(), SyntaxError> {
        if self.whitespace(c) {
            return Ok(());
        }
        match c {
            ',' => {
                self.stack.pop();
                Ok(())
            }
            '}' | ']' => {
                let err = self.unexpected(c);
                self.stack.pop();
                self.close_container(c).map_err(|_| err)
            }
            _ => Err(self.unexpected(c)),
        }
    }

    fn string(&mut self, c: char) -> Result<(), SyntaxError> {
        match c {
            '"' => {
                self.stack.pop();
                self.sink.on_string(&self.buf);
                self.buf.clear();
                self.stack.push(State::Comma);
                Ok(())
            }
            '\\' => {
                self.stack.push(State::StringEscape);
                Ok(())
            }
            _ => {
                if c == '\n' {
                    self.line += 1;
                }
                self.buf.push(c);
                Ok(())
            }
        }
    }

    fn string_escape(&mut self, c: char) -> Result<(), SyntaxError> {
        let decoded = match c {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'f' => '\u{000C}',
            'b' => '\u{0008}',
            '\\' => '\\',
            '/' => '/',
            '"' => '"',
            'u' => {
                self.stack.pop();
                self.unicode.reset();
                self.stack.push(State::UnicodeEscape);
                return Ok(());
            }
            _ => return Err(self.fail(SyntaxErrorKind::InvalidEscape(c))),
        };
        self.buf.push(decoded);
        self.stack.pop();
        Ok(())
    }

    fn unicode_escape(&mut self, c: char) -> Result<(), SyntaxError> {
        match self.unicode.feed(c) {
            Ok(None) => Ok(()),
            Ok(Some(decoded)) => {
                self.buf.push(decoded);
                self.stack.pop();
                Ok(())
            }
            Err(UnicodeEscapeError::NonHexDigit(c)) => Err(self.unexpected(c)),
            Err(UnicodeEscapeError::NonScalar(code)) => {
                Err(self.fail(SyntaxErrorKind::InvalidUnicodeEscape(code)))
            }
        }
    }

    fn literal(&mut self, c: char) -> Result<(), SyntaxError> {
        match c {
            ' ' | '\t' | '\r' | '\n' => {
                self.end_literal()?;
                if c == '\n' {
                    self.line += 1;
                }
                self.stack.push(State::Comma);
                Ok(())
            }
            ',' => self.end_literal(),
            '}' | ']' => {
                let err = self.unexpected(c);
                self.end_literal()?;
                self.close_container(c).map_err(|_| err)
            }
            _ => {
                self.buf.push(c);
                Ok(())
            }
        }
    }

    /// Dispatches the accumulated literal text and pops the literal state,
    /// leaving the enclosing container on top.
    fn end_literal(&mut self) -> Result<(), SyntaxError> {
        let text = self.buf.as_str();
        match text {
            "true" => self.sink.on_boolean(true),
            "false" => self.sink.on_boolean(false),
            "null" => self.sink.on_null(),
            _ if literal::is_valid_number(text) => self.sink.on_number(text),
            _ => {
                let kind = SyntaxErrorKind::InvalidLiteral(text.into());
                return Err(self.fail(kind));
            }
        }
        self.buf.clear();
        self.stack.pop();
        Ok(())
    }

    /// Closes the container on top of the stack, verifying it matches the
    /// closing character. When a parent container remains, it is left
    /// awaiting a comma or its own closer; closing the root returns the
    /// parser to idle.
    fn close_container(&mut self, c: char) -> Result<(), SyntaxError> {
        let expected = if c == '}' { State::Object } else { State::Array };
        if self.state() != expected {
            return Err(self.unexpected(c));
        }
        self.stack.pop();
        if matches!(self.state(), State::Object | State::Array) {
            self.stack.push(State::Comma);
        }
        if expected == State::Object {
            self.sink.on_object_end();
        } else {
            self.sink.on_array_end();
        }
        Ok(())
    }
}
