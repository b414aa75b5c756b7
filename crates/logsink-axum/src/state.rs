//! Shared endpoint state.
//!
//! Each endpoint gets the process-wide printer and its own counter. Both
//! are created once at the composition root and injected into handlers.

use std::sync::Arc;

use logsink_core::{BlockPrinter, SequenceCounter};

/// State handed to the handlers of one endpoint.
#[derive(Debug, Clone)]
pub struct EndpointState {
    /// Serializes numbering and writing of blocks across all handlers.
    pub printer: Arc<BlockPrinter>,
    /// Batch counter for the HTTP endpoint, entry counter for the stream endpoint.
    pub counter: Arc<SequenceCounter>,
}

impl EndpointState {
    pub const fn new(printer: Arc<BlockPrinter>, counter: Arc<SequenceCounter>) -> Self {
        Self { printer, counter }
    }
}
