//! The JSON value model.
//!
//! [`Value`] is a closed tagged union over the six JSON alternatives. The
//! discriminant and payload are always consistent: accessors for a
//! different alternative return an [`AccessError`] instead of a payload,
//! and no accessor ever coerces.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::AccessError;
use crate::number::StringNumber;
use crate::writer::write_value;

/// The mapping stored by an object value.
///
/// Keys are unique; inserting an existing key overwrites (last write wins).
/// Iteration, and therefore serialization, is in ascending key order.
pub type Map = BTreeMap<String, Value>;

/// The sequence stored by an array value. Length and order are significant.
pub type Array = Vec<Value>;

/// A JSON value.
///
/// Values own their children outright: arrays own their elements, objects
/// own the values of their members. The builder only ever appends and
/// inserts, so a tree can contain no sharing and no cycles.
///
/// # Examples
///
/// ```rust
/// use jsondom::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".into(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A number, kept as its verbatim source text.
    Number(StringNumber),
    /// A string with escape sequences already decoded.
    String(String),
    /// An ordered sequence of values.
    Array(Array),
    /// A mapping from string keys to values.
    Object(Map),
}

/// The six JSON value kinds, used as the [`Value`] discriminant in
/// diagnostics and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        })
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<StringNumber> for Value {
    fn from(v: StringNumber) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

macro_rules! from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Number(StringNumber::from(value))
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl Value {
    /// Returns the kind of value currently held.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(..) => ValueKind::Boolean,
            Self::Number(..) => ValueKind::Number,
            Self::String(..) => ValueKind::String,
            Self::Array(..) => ValueKind::Array,
            Self::Object(..) => ValueKind::Object,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is a [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is a [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is a [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is an [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is an [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    fn mismatch(&self, requested: ValueKind) -> AccessError {
        AccessError {
            requested,
            actual: self.kind(),
        }
    }

    /// Returns the stored boolean.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the value is not a boolean.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondom::Value;
    ///
    /// assert_eq!(Value::Boolean(true).boolean()?, true);
    /// assert!(Value::Null.boolean().is_err());
    /// # Ok::<(), jsondom::AccessError>(())
    /// ```
    pub fn boolean(&self) -> Result<bool, AccessError> {
        match self {
            Self::Boolean(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Boolean)),
        }
    }

    /// Returns a mutable reference to the stored boolean.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the value is not a boolean.
    pub fn boolean_mut(&mut self) -> Result<&mut bool, AccessError> {
        match self {
            Self::Boolean(b) => Ok(b),
            other => Err(other.mismatch(ValueKind::Boolean)),
        }
    }

    /// Returns the stored number.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the value is not a number.
    pub fn number(&self) -> Result<&StringNumber, AccessError> {
        match self {
            Self::Number(n) => Ok(n),
            other => Err(other.mismatch(ValueKind::Number)),
        }
    }

    /// Returns a mutable reference to the stored number.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the value is not a number.
    pub fn number_mut(&mut self) -> Result<&mut StringNumber, AccessError> {
        match self {
            Self::Number(n) => Ok(n),
            other => Err(other.mismatch(ValueKind::Number)),
        }
    }

    /// Returns the stored string.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the value is not a string.
    pub fn string(&self) -> Result<&str, AccessError> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    /// Returns a mutable reference to the stored string.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the value is not a string.
    pub fn string_mut(&mut self) -> Result<&mut String, AccessError> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    /// Returns the stored array.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the value is not an array.
    pub fn array(&self) -> Result<&Array, AccessError> {
        match self {
            Self::Array(a) => Ok(a),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    /// Returns a mutable reference to the stored array.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the value is not an array.
    pub fn array_mut(&mut self) -> Result<&mut Array, AccessError> {
        match self {
            Self::Array(a) => Ok(a),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    /// Returns the stored object mapping.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the value is not an object.
    pub fn object(&self) -> Result<&Map, AccessError> {
        match self {
            Self::Object(m) => Ok(m),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    /// Returns a mutable reference to the stored object mapping.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the value is not an object.
    pub fn object_mut(&mut self) -> Result<&mut Map, AccessError> {
        match self {
            Self::Object(m) => Ok(m),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }
}

/// Renders the value as compact JSON text.
///
/// This serializes *a value*, not *a document*: unlike the document-level
/// write entry points there is no object-root restriction here.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self)
    }
}
