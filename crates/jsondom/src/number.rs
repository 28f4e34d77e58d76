//! Numbers as verbatim source text.

use alloc::string::{String, ToString};
use core::fmt;
use core::num::{ParseFloatError, ParseIntError};

/// A JSON number kept in the textual form it had in the document.
///
/// Parsing never converts numbers: the exact source substring (digits,
/// sign, exponent) is stored, so serializing a parsed document reproduces
/// the literal byte for byte. Conversion to machine types happens on demand
/// via the `to_*` methods and may fail if the text is out of range or not
/// representable in the requested type; that is a caller concern, not a
/// parse-time concern.
///
/// # Examples
///
/// ```rust
/// use jsondom::StringNumber;
///
/// let n = StringNumber::new("2.50");
/// assert_eq!(n.as_str(), "2.50");
/// assert_eq!(n.to_f64()?, 2.5);
/// assert!(n.to_i64().is_err());
/// # Ok::<(), Box<dyn core::error::Error>>(())
/// ```
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringNumber(String);

impl StringNumber {
    /// Wraps literal text as a number.
    ///
    /// The text is not validated here; numbers produced by the parser have
    /// already passed the JSON number grammar, and callers constructing
    /// their own are responsible for handing in something serializable.
    pub fn new(literal: impl Into<String>) -> Self {
        Self(literal.into())
    }

    /// The underlying literal text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the number, returning the literal text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Converts the literal to an `i32`.
    ///
    /// # Errors
    ///
    /// Fails if the text is not an integer literal or is out of range.
    pub fn to_i32(&self) -> Result<i32, ParseIntError> {
        self.0.parse()
    }

    /// Converts the literal to a `u32`.
    ///
    /// # Errors
    ///
    /// Fails if the text is not an unsigned integer literal or is out of
    /// range.
    pub fn to_u32(&self) -> Result<u32, ParseIntError> {
        self.0.parse()
    }

    /// Converts the literal to an `i64`.
    ///
    /// # Errors
    ///
    /// Fails if the text is not an integer literal or is out of range.
    pub fn to_i64(&self) -> Result<i64, ParseIntError> {
        self.0.parse()
    }

    /// Converts the literal to a `u64`.
    ///
    /// # Errors
    ///
    /// Fails if the text is not an unsigned integer literal or is out of
    /// range.
    pub fn to_u64(&self) -> Result<u64, ParseIntError> {
        self.0.parse()
    }

    /// Converts the literal to an `f32`.
    ///
    /// # Errors
    ///
    /// Fails if the text is not a number literal.
    pub fn to_f32(&self) -> Result<f32, ParseFloatError> {
        self.0.parse()
    }

    /// Converts the literal to an `f64`.
    ///
    /// # Errors
    ///
    /// Fails if the text is not a number literal.
    pub fn to_f64(&self) -> Result<f64, ParseFloatError> {
        self.0.parse()
    }
}

impl fmt::Display for StringNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! from_primitive {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StringNumber {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

from_primitive!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
