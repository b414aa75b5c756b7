//! Serialized block emission.
//!
//! [`BlockPrinter`] is the single critical section shared by every request
//! and connection handler. Assigning an identifier, stamping the receipt
//! time, rendering and writing happen under one gate, so identifiers reach
//! the console in increasing order and no two blocks interleave. Decoding
//! stays outside the gate.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Local;

use crate::counter::SequenceCounter;
use crate::entry::LogEntry;
use crate::error::SinkError;
use crate::render::{self, BatchMeta, Block, StreamMeta, Theme, Timestamp};
use crate::sink::{ConsoleSink, StdoutSink};

pub struct BlockPrinter {
    sink: Arc<dyn ConsoleSink>,
    theme: Theme,
    gate: Mutex<()>,
}

impl std::fmt::Debug for BlockPrinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockPrinter")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl BlockPrinter {
    pub fn new(sink: Arc<dyn ConsoleSink>, theme: Theme) -> Self {
        Self {
            sink,
            theme,
            gate: Mutex::new(()),
        }
    }

    /// Printer writing to standard output.
    pub fn stdout(theme: Theme) -> Self {
        Self::new(Arc::new(StdoutSink::new()), theme)
    }

    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    // The gate guards no data, so a panic in another holder leaves nothing
    // inconsistent behind.
    fn enter(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Assign the next batch identifier and print the batch block.
    ///
    /// The identifier is consumed even if the write fails.
    pub fn print_batch(
        &self,
        counter: &SequenceCounter,
        source: &str,
        entries: &[LogEntry],
    ) -> Result<u64, SinkError> {
        let _gate = self.enter();
        let meta = BatchMeta {
            id: counter.next(),
            source,
            received: Local::now(),
        };
        let block = render::batch_block(&self.theme, &meta, entries);
        self.sink.write_block(&block)?;
        Ok(meta.id)
    }

    /// Assign the next stream identifier and print the entry block.
    pub fn print_stream(
        &self,
        counter: &SequenceCounter,
        source: &str,
        entry: &LogEntry,
    ) -> Result<u64, SinkError> {
        let _gate = self.enter();
        let meta = StreamMeta {
            id: counter.next(),
            source,
            received: Local::now(),
        };
        let block = render::stream_block(&self.theme, &meta, entry);
        self.sink.write_block(&block)?;
        Ok(meta.id)
    }

    /// Print a block that carries no identifier (banners, notices).
    pub fn print(&self, block: &Block) -> Result<(), SinkError> {
        let _gate = self.enter();
        self.sink.write_block(block)
    }

    /// Build a notice under the gate so its timestamp matches its position.
    pub fn notice<F>(&self, build: F) -> Result<(), SinkError>
    where
        F: FnOnce(&Theme, &Timestamp) -> Block,
    {
        let _gate = self.enter();
        let block = build(&self.theme, &Local::now());
        self.sink.write_block(&block)
    }
}
