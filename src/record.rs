//! Trace records emitted by the stream tap
//!
//! A tap produces two record shapes: one `ChunkRecord` per chunk observed,
//! and exactly one `SummaryRecord` when the stream ends. `TapRecord` is the
//! single structured value a sink accepts for both.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;

/// Marker prepended to every trace message for easy log filtering
pub const TRACE_MARKER: &str = "*JB*";

/// Which logical stream a tap belongs to
///
/// Purely a label carried in every record; it has no effect on tap behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamType {
    /// Parsed agent streams (server-sent events)
    Agent,
    /// Raw passthrough streams
    #[default]
    Regular,
}

impl StreamType {
    /// Get the string name of this stream type
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Regular => "regular",
        }
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trace record describing one observed chunk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChunkRecord {
    /// 1-based position of the chunk within its stream
    pub chunk_number: u64,
    /// Stream the chunk belongs to
    pub stream_type: StreamType,
    /// Kind label of the chunk (`string`, `Uint8Array`, `object`, ...)
    pub chunk_type: &'static str,
    /// Event name, present only for object chunks that carry one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Event payload, present only for object chunks that carry one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Chunk content (decoded text for binary chunks, as-is otherwise)
    pub chunk_content: Value,
    /// Human-readable message, cosmetic only
    pub msg: String,
}

/// Summary record emitted once at stream end
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    /// Total number of chunks observed on the stream
    pub total_chunks: u64,
    /// Stream the summary belongs to
    pub stream_type: StreamType,
    /// Human-readable message, cosmetic only
    pub msg: String,
}

/// The structured value handed to a trace sink
///
/// Serializes untagged so sinks see the flat field mapping of whichever
/// record shape this is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TapRecord {
    /// Per-chunk trace record
    Chunk(ChunkRecord),
    /// Stream-end summary record
    Summary(SummaryRecord),
}

impl TapRecord {
    /// The record's human-readable message
    pub fn msg(&self) -> &str {
        match self {
            Self::Chunk(record) => &record.msg,
            Self::Summary(record) => &record.msg,
        }
    }

    /// The stream type carried by the record
    pub fn stream_type(&self) -> StreamType {
        match self {
            Self::Chunk(record) => record.stream_type,
            Self::Summary(record) => record.stream_type,
        }
    }

    /// Get the chunk record, if this is one
    pub fn as_chunk(&self) -> Option<&ChunkRecord> {
        match self {
            Self::Chunk(record) => Some(record),
            Self::Summary(_) => None,
        }
    }

    /// Get the summary record, if this is one
    pub fn as_summary(&self) -> Option<&SummaryRecord> {
        match self {
            Self::Summary(record) => Some(record),
            Self::Chunk(_) => None,
        }
    }
}
