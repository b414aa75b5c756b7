#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used only by the integration tests
#[cfg(test)]
use futures_util as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tokio_tungstenite as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    CorsConfig, ServerConfig, SinkContext, bootstrap, serve_all, serve_batch, serve_stream,
    start_batch_server, start_stream_server,
};
pub use error::HttpError;
pub use routes::{create_batch_router, create_stream_router};
pub use state::EndpointState;
