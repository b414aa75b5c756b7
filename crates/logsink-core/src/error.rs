//! Error taxonomy shared by both ingestion front-ends.
//!
//! Every failure is contained at the smallest unit of work (one request,
//! one message, one connection). Adapters decide how each variant is
//! surfaced: the batch endpoint turns all of them into a client error, the
//! stream endpoint degrades decode failures to plain text and only ends a
//! connection on transport or render faults.

use thiserror::Error;

/// Errors produced while decoding, rendering or emitting log entries.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The payload is not well-formed for the expected envelope shape.
    #[error("{0}")]
    Decode(String),

    /// Connection-level fault (abrupt disconnect, protocol violation).
    #[error("{0}")]
    Transport(String),

    /// Unexpected fault while formatting a block.
    #[error("Render fault: {0}")]
    Render(String),

    /// The console stream rejected a write.
    #[error("Console write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl SinkError {
    /// True for faults raised while formatting or writing a block.
    pub const fn is_render_fault(&self) -> bool {
        matches!(self, Self::Render(_) | Self::Io(_))
    }
}

impl From<serde_json::Error> for SinkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
