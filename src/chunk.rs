//! Chunk - the unit of data flowing through a tapped stream
//!
//! Streams carry chunks of different runtime shapes: decoded text, raw byte
//! buffers, parsed server-sent events, or anything else the producer emits.
//! `Chunk` models that upfront as a tagged variant, with `Other` absorbing
//! every unstructured shape, so the tap never branches on runtime types.
//!
//! The tap reads chunks only to describe them; it never validates, mutates,
//! or owns their content beyond what a trace record needs.

use bytes::Bytes;
use serde_json::{Map, Value};

#[cfg(test)]
#[path = "chunk_test.rs"]
mod tests;

/// A single unit of stream data
///
/// The variant is the classification - there is no duck typing at trace
/// time. Kind labels match what the records carry on the wire:
/// `string`, `Uint8Array`, `object`, or the primitive type name.
#[derive(Debug, Clone, PartialEq)]
pub enum Chunk {
    /// Decoded text (raw string chunks on regular streams)
    Text(String),
    /// Raw byte buffer, decoded lazily for trace records only
    Binary(Bytes),
    /// Keyed record, typically a parsed server-sent event with
    /// `event` and `data` fields
    Object(Map<String, Value>),
    /// Anything unstructured: numbers, booleans, null, arrays
    Other(Value),
}

impl Chunk {
    /// Kind label recorded in trace records
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Binary(_) => "Uint8Array",
            Self::Object(_) => "object",
            Self::Other(value) => match value {
                Value::Null => "null",
                Value::Bool(_) => "boolean",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Array(_) => "array",
                Value::Object(_) => "object",
            },
        }
    }

    /// Content as a trace record carries it
    ///
    /// Binary chunks are decoded as UTF-8 best-effort: invalid sequences
    /// become replacement characters and are logged as-is. This is
    /// observability, not validation - decoding never fails.
    pub fn content(&self) -> Value {
        match self {
            Self::Text(text) => Value::String(text.clone()),
            Self::Binary(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
            Self::Object(map) => Value::Object(map.clone()),
            Self::Other(value) => value.clone(),
        }
    }

    /// The `event` field of an object chunk, if present
    pub fn event(&self) -> Option<&str> {
        match self {
            Self::Object(map) => map.get("event").and_then(Value::as_str),
            _ => None,
        }
    }

    /// The `data` field of an object chunk, if present
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Object(map) => map.get("data"),
            _ => None,
        }
    }
}

impl From<&str> for Chunk {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Chunk {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Bytes> for Chunk {
    fn from(bytes: Bytes) -> Self {
        Self::Binary(bytes)
    }
}

impl From<Vec<u8>> for Chunk {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(Bytes::from(bytes))
    }
}

impl From<Value> for Chunk {
    /// JSON strings become `Text` and JSON objects become `Object`;
    /// everything else lands in `Other`.
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(map) => Self::Object(map),
            other => Self::Other(other),
        }
    }
}
