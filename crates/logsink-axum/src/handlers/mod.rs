//! Request and connection handlers.
//!
//! Handlers are thin: they decode the transport envelope and hand entries
//! to the shared `BlockPrinter`.

pub mod batch;
pub mod stream;
