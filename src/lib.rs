//! Stream Tap - transparent observation stage for chunk streams
//!
//! A `StreamTap` sits between an upstream producer and a downstream consumer
//! and records a structured trace for every chunk that flows past, without
//! touching the chunk itself. At stream end it records a single summary with
//! the total chunk count.
//!
//! # Design Principles
//!
//! - **Transparent**: chunks pass through by move, unchanged - never dropped,
//!   delayed, or reordered
//! - **Fail-silent for logging**: no sink means no records and nothing else
//!   changes; malformed or unexpected chunk shapes are logged as-is, never
//!   rejected
//! - **Single-owner state**: one tap per stream instance, a plain counter,
//!   no locking
//! - **Narrow sink coupling**: the tap only needs "accept one structured
//!   record" from its logging sink, nothing more
//!
//! # Architecture
//!
//! ```text
//! upstream ──→ [TapStage]
//!                  │
//!                  ├──→ StreamTap.transform(chunk)
//!                  │         │
//!                  │         └──→ TraceSink.trace(record)
//!                  │
//!                  └──→ downstream (chunk, unchanged)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use stream_tap::{StreamTap, StreamType, TracingSink};
//!
//! let mut tap = StreamTap::new(Some(Arc::new(TracingSink::new())), StreamType::Agent)
//!     .with_prefix("SSE");
//!
//! let chunk = tap.transform("hello".into());
//! tap.finish();
//! ```

pub mod chunk;
pub mod record;
pub mod sink;
pub mod stage;
pub mod tap;

pub use chunk::Chunk;
pub use record::{ChunkRecord, StreamType, SummaryRecord, TapRecord, TRACE_MARKER};
pub use sink::{MemorySink, TraceSink, TracingSink};
pub use stage::TapStage;
pub use tap::StreamTap;
