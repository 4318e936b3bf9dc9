//! Trace sinks - where tap records go
//!
//! The tap consumes a single capability from its logging system: accept one
//! structured record at trace level. `TraceSink` is that capability and
//! nothing more; the tap never awaits, retries, or interprets the result.

use parking_lot::Mutex;
use tracing::trace;

use crate::record::TapRecord;

#[cfg(test)]
#[path = "sink_test.rs"]
mod tests;

/// Accepts structured trace records, fire-and-forget
///
/// Implementors must be `Send + Sync`; a tap may be driven from any task.
/// A sink must not assume anything about record ordering across streams -
/// only records from the same tap instance arrive in sequence.
pub trait TraceSink: Send + Sync {
    /// Accept one record for trace-level emission
    fn trace(&self, record: &TapRecord);
}

/// Sink that emits records as `tracing` trace events
///
/// Each record is serialized to JSON and attached as a structured field,
/// with the record's own message as the event message.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl TraceSink for TracingSink {
    fn trace(&self, record: &TapRecord) {
        if let Ok(json) = serde_json::to_string(record) {
            trace!(target: "stream_tap", record = %json, "{}", record.msg());
        } else {
            trace!(target: "stream_tap", "{}", record.msg());
        }
    }
}

/// Sink that stores records in memory, in arrival order
///
/// Useful for tests and for inspecting a short stream after the fact.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<TapRecord>>,
}

impl MemorySink {
    /// Create an empty memory sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records received so far
    pub fn records(&self) -> Vec<TapRecord> {
        self.records.lock().clone()
    }

    /// Number of records received so far
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Check if no records have been received
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl TraceSink for MemorySink {
    fn trace(&self, record: &TapRecord) {
        self.records.lock().push(record.clone());
    }
}
