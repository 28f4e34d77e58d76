//! Serialization of a value tree to compact JSON text.
//!
//! An independent depth-first walk with no parsing dependency. Output is
//! compact: no inserted whitespace, no trailing commas, object members in
//! the mapping's (ascending key) iteration order, number literals emitted
//! verbatim. Serializing the same tree twice yields byte-identical text.

use core::fmt;

use crate::value::Value;

/// Escapes a string for inclusion in a JSON string literal, writing to `f`.
///
/// `"` and `\` are escaped, the named control characters take their textual
/// forms (`\n \r \t \f \b`), and the remaining ASCII control characters are
/// written as `\uXXXX`. Everything else, non-ASCII text included, passes
/// through unescaped. `/` is not escaped on output, though `\/` is decoded
/// on input.
pub(crate) fn write_escaped_string<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{000C}' => f.write_str("\\f")?,
            '\u{0008}' => f.write_str("\\b")?,
            c if c.is_ascii_control() => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Convenience wrapper around [`write_escaped_string`] returning a `String`.
#[cfg(test)]
pub(crate) fn escape_string(src: &str) -> alloc::string::String {
    let mut out = alloc::string::String::with_capacity(src.len());
    let _ = write_escaped_string(src, &mut out);
    out
}

/// Writes the compact JSON rendering of `value` to `f`.
pub(crate) fn write_value<W: fmt::Write>(f: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
        Value::Number(n) => f.write_str(n.as_str()),
        Value::String(s) => {
            f.write_char('"')?;
            write_escaped_string(s, f)?;
            f.write_char('"')
        }
        Value::Array(items) => {
            f.write_char('[')?;
            let mut first = true;
            for item in items {
                if !first {
                    f.write_char(',')?;
                }
                first = false;
                write_value(f, item)?;
            }
            f.write_char(']')
        }
        Value::Object(map) => {
            f.write_char('{')?;
            let mut first = true;
            for (key, member) in map {
                if !first {
                    f.write_char(',')?;
                }
                first = false;
                f.write_char('"')?;
                write_escaped_string(key, f)?;
                f.write_str("\":")?;
                write_value(f, member)?;
            }
            f.write_char('}')
        }
    }
}
