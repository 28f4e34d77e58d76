//! Assembling a [`Value`] tree from parse events.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::number::StringNumber;
use crate::parser::EventSink;
use crate::value::{Array, Map, Value};

/// One open container being filled in.
#[derive(Debug)]
enum Frame {
    Array(Array),
    Object {
        map: Map,
        /// Key waiting for its value.
        pending_key: Option<String>,
    },
}

/// An [`EventSink`] that materializes the document as a [`Value`] tree.
///
/// The builder keeps a stack of open containers, seeded with an implicit
/// top-level array that collects the root. Scalars attach to the top
/// container as they arrive; a container attaches to its parent when it
/// closes, so every value is owned by exactly one parent.
///
/// Driven by a [`Parser`](crate::Parser) the event sequence is always well
/// formed. When driven by hand, stray end events and keys outside an object
/// are ignored rather than panicking.
///
/// # Examples
///
/// ```rust
/// use jsondom::{Parser, TreeBuilder};
///
/// let mut parser = Parser::new(TreeBuilder::new());
/// parser.feed(r#"{"tags": ["a", "b"]}"#)?;
/// let doc = parser.finish()?.into_value();
/// assert_eq!(doc.object()?["tags"].array()?.len(), 2);
/// # Ok::<(), Box<dyn core::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    stack: Vec<Frame>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Creates a builder with the implicit root container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Frame::Array(Array::new())],
        }
    }

    /// Returns the finished document.
    ///
    /// This is the sole child of the implicit root container (the first
    /// one, if the input carried several concatenated roots), or
    /// [`Value::Null`] when no value was produced. Containers still open
    /// (possible only when the builder was driven by hand) are discarded.
    #[must_use]
    pub fn into_value(mut self) -> Value {
        match self.stack.drain(..).next() {
            Some(Frame::Array(items)) => items.into_iter().next().unwrap_or(Value::Null),
            _ => Value::Null,
        }
    }

    /// Attaches a finished value to the container on top of the stack.
    fn attach(&mut self, value: Value) {
        match self.stack.last_mut() {
            Some(Frame::Array(items)) => items.push(value),
            Some(Frame::Object { map, pending_key }) => {
                // last write wins on duplicate keys
                map.insert(pending_key.take().unwrap_or_default(), value);
            }
            None => {}
        }
    }

    fn close(&mut self) {
        // the implicit root frame never closes
        if self.stack.len() < 2 {
            return;
        }
        let value = match self.stack.pop() {
            Some(Frame::Array(items)) => Value::Array(items),
            Some(Frame::Object { map, .. }) => Value::Object(map),
            None => return,
        };
        self.attach(value);
    }
}

impl EventSink for TreeBuilder {
    fn on_object_start(&mut self) {
        self.stack.push(Frame::Object {
            map: Map::new(),
            pending_key: None,
        });
    }

    fn on_object_end(&mut self) {
        self.close();
    }

    fn on_array_start(&mut self) {
        self.stack.push(Frame::Array(Array::new()));
    }

    fn on_array_end(&mut self) {
        self.close();
    }

    fn on_key(&mut self, key: &str) {
        if let Some(Frame::Object { pending_key, .. }) = self.stack.last_mut() {
            *pending_key = Some(key.to_string());
        }
    }

    fn on_string(&mut self, value: &str) {
        self.attach(Value::String(value.to_string()));
    }

    fn on_number(&mut self, literal: &str) {
        self.attach(Value::Number(StringNumber::new(literal)));
    }

    fn on_boolean(&mut self, value: bool) {
        self.attach(Value::Boolean(value));
    }

    fn on_null(&mut self) {
        self.attach(Value::Null);
    }
}
