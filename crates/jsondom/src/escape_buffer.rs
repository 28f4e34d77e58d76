//! Buffering and decoding of four-digit `\uXXXX` escape sequences.
//!
//! The [`UnicodeEscapeBuffer`] accumulates up to four ASCII hexadecimal
//! digits of a Unicode escape and converts them to a [`char`] once exactly
//! four have been provided. Digits may arrive one at a time across separate
//! `feed` calls, so an escape split across input chunks resumes where it
//! left off. After a successful conversion the buffer resets automatically.
//!
//! Each escape is decoded as an independent code unit; surrogate halves are
//! not combined into supplementary-plane characters and are reported as
//! [`UnicodeEscapeError::NonScalar`] instead.

/// Why a fed character could not extend or complete the escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnicodeEscapeError {
    /// The character is not an ASCII hex digit.
    NonHexDigit(char),
    /// The four digits name a code point that is not a Unicode scalar
    /// value (a surrogate half).
    NonScalar(u32),
}

/// Accumulator for the four hex digits of a `\uXXXX` escape.
#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    buffer: [u8; 4],
    len: u8,
}

impl UnicodeEscapeBuffer {
    /// Creates a new, empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears any accumulated digits.
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Feeds one hex digit.
    ///
    /// Returns `Ok(None)` while fewer than four digits have arrived, and
    /// `Ok(Some(ch))` on the fourth digit, resetting the buffer for the
    /// next escape.
    pub fn feed(&mut self, c: char) -> Result<Option<char>, UnicodeEscapeError> {
        if !c.is_ascii_hexdigit() {
            return Err(UnicodeEscapeError::NonHexDigit(c));
        }

        self.buffer[usize::from(self.len)] = c as u8;
        self.len += 1;
        if self.len < 4 {
            return Ok(None);
        }

        let mut code = 0u32;
        for b in self.buffer {
            // to_digit can't fail: only hex digits are stored above
            code = code << 4 | (b as char).to_digit(16).unwrap_or(0);
        }
        self.reset();
        match char::from_u32(code) {
            Some(ch) => Ok(Some(ch)),
            None => Err(UnicodeEscapeError::NonScalar(code)),
        }
    }
}
