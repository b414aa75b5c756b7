//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the printer and the per-endpoint
//! counters are created. Handlers receive them through `EndpointState`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use logsink_core::{BlockPrinter, EndpointConfig, SequenceCounter, Theme, render};
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::{create_batch_router, create_stream_router};
use crate::state::EndpointState;

/// CORS configuration for the batch endpoint.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for both endpoints.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Where the batch (HTTP) endpoint listens.
    pub batch: EndpointConfig,
    /// Where the stream (WebSocket) endpoint listens.
    pub stream: EndpointConfig,
    /// CORS configuration of the batch endpoint.
    pub cors: CorsConfig,
    /// Console styling.
    pub theme: Theme,
}

impl ServerConfig {
    /// Default addresses, permissive CORS, auto-detected colors.
    pub fn with_defaults() -> Self {
        Self {
            batch: EndpointConfig::batch_defaults(),
            stream: EndpointConfig::stream_defaults(),
            cors: CorsConfig::default(),
            theme: Theme::detect(),
        }
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        if !origins.is_empty() {
            self.cors = CorsConfig::AllowOrigins(origins);
        }
        self
    }
}

/// Shared services for both endpoints.
///
/// One printer for the whole process, one counter per endpoint.
#[derive(Debug, Clone)]
pub struct SinkContext {
    pub printer: Arc<BlockPrinter>,
    pub batches: Arc<SequenceCounter>,
    pub entries: Arc<SequenceCounter>,
}

impl SinkContext {
    pub fn new(printer: BlockPrinter) -> Self {
        Self {
            printer: Arc::new(printer),
            batches: Arc::new(SequenceCounter::new()),
            entries: Arc::new(SequenceCounter::new()),
        }
    }

    /// State for the batch endpoint's handlers.
    pub fn batch_state(&self) -> EndpointState {
        EndpointState::new(Arc::clone(&self.printer), Arc::clone(&self.batches))
    }

    /// State for the stream endpoint's handlers.
    pub fn stream_state(&self) -> EndpointState {
        EndpointState::new(Arc::clone(&self.printer), Arc::clone(&self.entries))
    }
}

/// Build the context writing to standard output.
pub fn bootstrap(config: &ServerConfig) -> SinkContext {
    SinkContext::new(BlockPrinter::stdout(config.theme.clone()))
}

async fn bind(endpoint: &EndpointConfig, what: &str) -> Result<TcpListener> {
    let addr = endpoint.bind_addr();
    TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {what} endpoint on {addr}"))
}

/// Serve the batch endpoint on an already bound listener.
pub async fn serve_batch(listener: TcpListener, ctx: SinkContext, cors: CorsConfig) -> Result<()> {
    let app = create_batch_router(ctx.batch_state(), &cors);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

/// Serve the stream endpoint on an already bound listener.
pub async fn serve_stream(listener: TcpListener, ctx: SinkContext) -> Result<()> {
    let app = create_stream_router(ctx.stream_state());
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

/// Bind, announce and serve the batch endpoint.
pub async fn start_batch_server(
    endpoint: &EndpointConfig,
    ctx: SinkContext,
    cors: CorsConfig,
) -> Result<()> {
    let listener = bind(endpoint, "batch").await?;
    let url = endpoint.batch_url();
    ctx.printer.print(&render::banner(
        ctx.printer.theme(),
        "logd HttpSink",
        "Batched Telemetry Server",
        "Active",
        &url,
    ))?;
    info!("batch endpoint listening on {}", url);
    serve_batch(listener, ctx, cors).await
}

/// Bind, announce and serve the stream endpoint.
pub async fn start_stream_server(endpoint: &EndpointConfig, ctx: SinkContext) -> Result<()> {
    let listener = bind(endpoint, "stream").await?;
    let url = endpoint.stream_url();
    ctx.printer.print(&render::banner(
        ctx.printer.theme(),
        "logd SocketSink",
        "Wireless Logging Protocol Server",
        "Listening",
        &url,
    ))?;
    info!("stream endpoint listening on {}", url);
    serve_stream(listener, ctx).await
}

/// Run both endpoints in one process, sharing one printer.
///
/// Returns as soon as either endpoint fails.
pub async fn serve_all(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config);
    tokio::try_join!(
        start_batch_server(&config.batch, ctx.clone(), config.cors.clone()),
        start_stream_server(&config.stream, ctx),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_origins_keeps_cors_open() {
        let config = ServerConfig::with_defaults().with_allowed_origins(Vec::new());
        assert!(matches!(config.cors, CorsConfig::AllowAll));
    }

    #[test]
    fn listed_origins_restrict_cors() {
        let config = ServerConfig::with_defaults()
            .with_allowed_origins(vec!["http://localhost:5173".to_string()]);
        assert!(
            matches!(config.cors, CorsConfig::AllowOrigins(ref o) if o == &["http://localhost:5173"])
        );
    }
}
