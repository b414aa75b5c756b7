#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod counter;
pub mod entry;
pub mod error;
pub mod printer;
pub mod render;
pub mod sink;

// Re-export commonly used types for convenience
pub use config::{
    BATCH_PATH, DEFAULT_BATCH_PORT, DEFAULT_HOST, DEFAULT_STREAM_PORT, EndpointConfig,
};
pub use counter::SequenceCounter;
pub use entry::{EntryFormat, LogEntry};
pub use error::SinkError;
pub use printer::BlockPrinter;
pub use render::{BatchMeta, Block, StreamMeta, Theme, Timestamp, format_timestamp};
pub use sink::{ConsoleSink, MemorySink, StdoutSink};
