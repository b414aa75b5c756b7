//! Shared helpers for logsink-axum integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use logsink_axum::{SinkContext, serve_stream};
use logsink_core::{Block, BlockPrinter, ConsoleSink, MemorySink, SinkError, Theme};
use tokio::net::TcpListener;

/// Peer address injected into oneshot requests.
pub const TEST_PEER: ([u8; 4], u16) = ([127, 0, 0, 1], 4000);

/// Context whose printer captures plain-text blocks in memory.
pub fn memory_context() -> (SinkContext, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let printer = BlockPrinter::new(sink.clone(), Theme::plain());
    (SinkContext::new(printer), sink)
}

/// Sink that refuses the next `failures` numbered blocks and records
/// everything else.
pub struct FlakySink {
    inner: Arc<MemorySink>,
    failures: AtomicUsize,
}

impl ConsoleSink for FlakySink {
    fn write_block(&self, block: &Block) -> Result<(), SinkError> {
        let numbered = block_id(block, "ENTRY").is_some() || block_id(block, "BATCH").is_some();
        if numbered
            && self
                .failures
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
        {
            return Err(std::io::Error::other("console unplugged").into());
        }
        self.inner.write_block(block)
    }
}

/// Context whose first `failures` batch or entry writes fail.
pub fn flaky_context(failures: usize) -> (SinkContext, Arc<MemorySink>) {
    let inner = Arc::new(MemorySink::new());
    let sink = FlakySink {
        inner: inner.clone(),
        failures: AtomicUsize::new(failures),
    };
    let printer = BlockPrinter::new(Arc::new(sink), Theme::plain());
    (SinkContext::new(printer), inner)
}

/// Serve the stream endpoint on an ephemeral local port.
pub async fn spawn_stream_server(ctx: SinkContext) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve_stream(listener, ctx));
    addr
}

/// Identifier of an `ENTRY #NNNN` or `BATCH #NNNN` block, if it is one.
pub fn block_id(block: &Block, title: &str) -> Option<u64> {
    let header = block.lines().get(1)?;
    let rest = header.strip_prefix(title)?.strip_prefix(" #")?;
    rest.split_whitespace().next()?.parse().ok()
}

pub fn entry_blocks(sink: &MemorySink) -> Vec<Block> {
    sink.blocks()
        .into_iter()
        .filter(|b| block_id(b, "ENTRY").is_some())
        .collect()
}

/// Wait until the sink holds at least `count` blocks matching `filter`.
pub async fn wait_for<F>(sink: &MemorySink, count: usize, filter: F)
where
    F: Fn(&Block) -> bool,
{
    let waited = tokio::time::timeout(Duration::from_secs(5), async {
        while sink.blocks().iter().filter(|b| filter(*b)).count() < count {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await;
    assert!(
        waited.is_ok(),
        "timed out waiting for {count} blocks, console so far:\n{}",
        sink.text()
    );
}

pub async fn wait_for_entries(sink: &MemorySink, count: usize) {
    wait_for(sink, count, |b| block_id(b, "ENTRY").is_some()).await;
}
