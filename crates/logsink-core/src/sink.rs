//! Console output port.
//!
//! The rendered blocks are the only visible artifact of the sink. This port
//! abstracts where they go so the adapters can write to stdout in
//! production and to memory in tests.

use std::io::Write;
use std::sync::Mutex;

use crate::error::SinkError;
use crate::render::Block;

/// Destination for rendered blocks.
///
/// A call writes one complete block; implementations must not split it.
pub trait ConsoleSink: Send + Sync {
    fn write_block(&self, block: &Block) -> Result<(), SinkError>;
}

/// Writes blocks to the process standard output and flushes after each one.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub const fn new() -> Self {
        Self
    }
}

impl ConsoleSink for StdoutSink {
    fn write_block(&self, block: &Block) -> Result<(), SinkError> {
        let mut out = std::io::stdout().lock();
        out.write_all(block.to_text().as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Keeps every block in memory, in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    blocks: Mutex<Vec<Block>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the blocks written so far.
    pub fn blocks(&self) -> Vec<Block> {
        self.blocks
            .lock()
            .map(|blocks| blocks.clone())
            .unwrap_or_default()
    }

    /// Everything written so far as console text.
    pub fn text(&self) -> String {
        self.blocks().iter().map(Block::to_text).collect()
    }

    pub fn len(&self) -> usize {
        self.blocks.lock().map(|blocks| blocks.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ConsoleSink for MemorySink {
    fn write_block(&self, block: &Block) -> Result<(), SinkError> {
        self.blocks
            .lock()
            .map_err(|_| SinkError::Render("memory sink lock poisoned".to_string()))?
            .push(block.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_keeps_write_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.write_block(&Block::new(vec!["a".into()])).unwrap();
        sink.write_block(&Block::new(vec!["b".into(), "c".into()]))
            .unwrap();
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.text(), "a\nb\nc\n");
    }

    #[test]
    fn stdout_sink_accepts_blocks() {
        StdoutSink::new()
            .write_block(&Block::new(vec![String::new()]))
            .unwrap();
    }
}
