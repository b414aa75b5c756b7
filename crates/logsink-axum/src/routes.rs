//! Route definitions and router construction.
//!
//! The batch and stream endpoints listen on separate addresses, so each
//! gets its own router.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use logsink_core::BATCH_PATH;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::CorsConfig;
use crate::handlers;
use crate::state::EndpointState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Router of the batch endpoint: `POST /logs` and `GET /health`.
///
/// Batches are not size limited.
///
/// Handlers read the peer address from `ConnectInfo`, so serve it with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn create_batch_router(state: EndpointState, cors_config: &CorsConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            BATCH_PATH,
            post(handlers::batch::ingest).layer(DefaultBodyLimit::disable()),
        )
        .with_state(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Router of the stream endpoint: a WebSocket upgrade on any path.
pub fn create_stream_router(state: EndpointState) -> Router {
    Router::new()
        .route("/", get(handlers::stream::upgrade))
        .fallback(handlers::stream::upgrade)
        .with_state(state)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
