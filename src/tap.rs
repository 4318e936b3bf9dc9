//! StreamTap - observe-and-forward core
//!
//! One tap per stream instance. Every chunk handed to `transform` is counted,
//! described to the sink (if any), and returned by move, unchanged. `finish`
//! records the stream-end summary exactly once.
//!
//! # Design
//!
//! - **Forwarding is unconditional**: no sink, unrecognized shape - the chunk
//!   still comes back untouched; the tap never drops, delays, or reorders
//! - **Logging is fail-silent**: a missing sink skips record construction
//!   entirely, with no other observable difference on the data path
//! - **Single-owner counter**: plain `u64`, one instance per stream, never
//!   shared across concurrent streams

use std::fmt;
use std::sync::Arc;

use crate::chunk::Chunk;
use crate::record::{ChunkRecord, StreamType, SummaryRecord, TapRecord, TRACE_MARKER};
use crate::sink::TraceSink;

#[cfg(test)]
#[path = "tap_test.rs"]
mod tests;

/// Transparent stream tap
///
/// Construction performs no I/O and no logging; all work happens per chunk.
///
/// # Example
///
/// ```ignore
/// let sink = Arc::new(MemorySink::new());
/// let mut tap = StreamTap::new(Some(sink.clone()), StreamType::Agent).with_prefix("SSE");
///
/// let chunk = tap.transform(chunk);  // chunk comes back unchanged
/// tap.finish();                      // one summary record
/// ```
pub struct StreamTap {
    /// Where trace records go; `None` disables logging entirely
    sink: Option<Arc<dyn TraceSink>>,

    /// Label identifying the logical stream this tap belongs to
    stream_type: StreamType,

    /// Optional free-form label woven into trace messages
    prefix: String,

    /// Chunks observed so far, incremented before each record is built
    chunks_seen: u64,

    /// Whether the stream-end summary has been recorded
    finished: bool,
}

impl StreamTap {
    /// Create a new tap
    ///
    /// Pass `None` for the sink to disable logging; passthrough behavior is
    /// identical either way.
    pub fn new(sink: Option<Arc<dyn TraceSink>>, stream_type: StreamType) -> Self {
        Self {
            sink,
            stream_type,
            prefix: String::new(),
            chunks_seen: 0,
            finished: false,
        }
    }

    /// Set the message prefix label
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Stream type this tap was configured with
    #[inline]
    pub fn stream_type(&self) -> StreamType {
        self.stream_type
    }

    /// Number of chunks observed so far
    #[inline]
    pub fn chunks_seen(&self) -> u64 {
        self.chunks_seen
    }

    /// Whether the stream-end summary has been recorded
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Observe one chunk and forward it unchanged
    ///
    /// Increments the sequence counter, records a `ChunkRecord` when a sink
    /// is configured, and returns the chunk by move. Never fails.
    pub fn transform(&mut self, chunk: Chunk) -> Chunk {
        self.chunks_seen += 1;

        if let Some(sink) = &self.sink {
            sink.trace(&TapRecord::Chunk(self.chunk_record(&chunk)));
        }

        chunk
    }

    /// Record the stream-end summary
    ///
    /// Emits exactly one `SummaryRecord` with the final chunk count when a
    /// sink is configured. Subsequent calls are no-ops; the tap is inert
    /// afterwards.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        if let Some(sink) = &self.sink {
            sink.trace(&TapRecord::Summary(SummaryRecord {
                total_chunks: self.chunks_seen,
                stream_type: self.stream_type,
                msg: format!(
                    "{} stream completed - {} chunks processed ({})",
                    TRACE_MARKER, self.chunks_seen, self.stream_type
                ),
            }));
        }
    }

    fn chunk_record(&self, chunk: &Chunk) -> ChunkRecord {
        let msg = if self.prefix.is_empty() {
            format!(
                "{} streaming chunk #{} ({})",
                TRACE_MARKER, self.chunks_seen, self.stream_type
            )
        } else {
            format!(
                "{} {} streaming chunk #{}",
                TRACE_MARKER, self.prefix, self.chunks_seen
            )
        };

        ChunkRecord {
            chunk_number: self.chunks_seen,
            stream_type: self.stream_type,
            chunk_type: chunk.kind(),
            event: chunk.event().map(str::to_owned),
            data: chunk.data().cloned(),
            chunk_content: chunk.content(),
            msg,
        }
    }
}

impl fmt::Debug for StreamTap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamTap")
            .field("stream_type", &self.stream_type)
            .field("prefix", &self.prefix)
            .field("chunks_seen", &self.chunks_seen)
            .field("finished", &self.finished)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
