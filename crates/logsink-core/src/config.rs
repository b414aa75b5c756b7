//! Endpoint addressing and defaults.
//!
//! Loading values from the environment or the command line is the CLI's
//! concern; this module only carries the resolved values.

use serde::{Deserialize, Serialize};

/// Default bind host for both endpoints.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port of the batch (HTTP) endpoint.
pub const DEFAULT_BATCH_PORT: u16 = 8080;

/// Default port of the stream (WebSocket) endpoint.
pub const DEFAULT_STREAM_PORT: u16 = 12345;

/// Route accepting batches.
pub const BATCH_PATH: &str = "/logs";

/// Where one endpoint listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub host: String,
    pub port: u16,
}

impl EndpointConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Defaults for the batch endpoint.
    pub fn batch_defaults() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_BATCH_PORT)
    }

    /// Defaults for the stream endpoint.
    pub fn stream_defaults() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_STREAM_PORT)
    }

    /// `host:port` string suitable for binding.
    ///
    /// IPv6 literals are bracketed.
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Public URL of the batch route.
    pub fn batch_url(&self) -> String {
        format!("http://{}{BATCH_PATH}", self.bind_addr())
    }

    /// Public URL of the stream endpoint.
    pub fn stream_url(&self) -> String {
        format!("ws://{}", self.bind_addr())
    }
}
