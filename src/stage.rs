//! TapStage - channel pump wiring a tap into a pipeline
//!
//! `TapStage` connects a `StreamTap` between two `mpsc` channels: it pulls
//! one chunk at a time from the upstream receiver, observes it, and forwards
//! it to the downstream sender. Backpressure comes entirely from the
//! channels - the stage holds no buffer and never prefetches.
//!
//! Cancellation is propagated transparently in both directions:
//!
//! - Upstream closing its sender ends the stream normally; the tap records
//!   its summary and the downstream sender is dropped.
//! - Downstream dropping its receiver stops the stage immediately; no
//!   summary is recorded and the upstream receiver is dropped.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::chunk::Chunk;
use crate::tap::StreamTap;

#[cfg(test)]
#[path = "stage_test.rs"]
mod tests;

/// Pipeline stage driving a `StreamTap` between two channels
#[derive(Debug)]
pub struct TapStage {
    tap: StreamTap,
}

impl TapStage {
    /// Create a stage around an existing tap
    pub fn new(tap: StreamTap) -> Self {
        Self { tap }
    }

    /// Pump chunks from `rx` to `tx` until either side terminates
    ///
    /// Each chunk is fully observed and forwarded before the next one is
    /// pulled. When `rx` is exhausted the tap's summary is recorded; when
    /// `tx` is closed the stage stops without a summary.
    pub async fn run(mut self, mut rx: mpsc::Receiver<Chunk>, tx: mpsc::Sender<Chunk>) {
        debug!(stream_type = %self.tap.stream_type(), "tap stage started");

        while let Some(chunk) = rx.recv().await {
            let chunk = self.tap.transform(chunk);

            if tx.send(chunk).await.is_err() {
                // Downstream cancelled mid-stream: stop pulling, skip the summary.
                debug!(
                    chunks = self.tap.chunks_seen(),
                    "downstream closed, tap stage stopping"
                );
                return;
            }
        }

        self.tap.finish();
        debug!(chunks = self.tap.chunks_seen(), "tap stage finished");
    }

    /// Spawn the stage onto the current runtime
    pub fn spawn(self, rx: mpsc::Receiver<Chunk>, tx: mpsc::Sender<Chunk>) -> JoinHandle<()> {
        tokio::spawn(self.run(rx, tx))
    }
}

impl From<StreamTap> for TapStage {
    fn from(tap: StreamTap) -> Self {
        Self::new(tap)
    }
}
