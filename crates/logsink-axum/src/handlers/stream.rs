//! WebSocket stream ingestion.
//!
//! Every text or binary frame received on a connection is one entry with
//! its own identifier and block. Nothing is sent back to the client.
//!
//! ## Lifecycle
//!
//! 1. Upgrade, print `Connection established from <peer>`.
//! 2. For each frame: decode (JSON or plain text, never an error), then
//!    number, render and print it through the shared printer.
//! 3. A close frame or end of stream prints `Connection closed <peer>`.
//!    A transport error prints `Connection error <peer>: <reason>`.
//!    A render fault ends this connection only.

use std::net::SocketAddr;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{ConnectInfo, State};
use axum::response::IntoResponse;
use logsink_core::{Block, LogEntry, SinkError, Theme, Timestamp, render};
use tracing::{debug, error, info, warn};

use crate::state::EndpointState;

/// Why a connection's receive loop ended.
#[derive(Debug)]
enum Disconnect {
    /// Close frame or clean end of stream.
    Closed,
    /// Connection-level fault.
    Transport(SinkError),
    /// Printing an entry failed.
    Fault(SinkError),
}

/// WebSocket upgrade endpoint, mounted on every path of the stream listener.
pub async fn upgrade(
    ws: WebSocketUpgrade,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    State(state): State<EndpointState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_connection(socket, peer, state))
}

async fn handle_connection(mut socket: WebSocket, peer: SocketAddr, state: EndpointState) {
    let source = peer_label(&peer);
    info!(peer = %source, "stream connection opened");
    print_notice(&state, |theme, at| {
        render::connection_opened(theme, at, &source)
    });

    match receive_loop(&mut socket, &source, &state).await {
        Disconnect::Closed => {
            info!(peer = %source, "stream connection closed");
            print_notice(&state, |theme, at| {
                render::connection_closed(theme, at, &source)
            });
        }
        Disconnect::Transport(err) => {
            warn!(peer = %source, error = %err, "stream connection lost");
            print_notice(&state, |theme, at| {
                render::connection_error(theme, at, &source, &err.to_string())
            });
        }
        Disconnect::Fault(err) => {
            error!(peer = %source, error = %err, "stream connection aborted");
            print_notice(&state, |theme, at| {
                render::connection_error(theme, at, &source, &err.to_string())
            });
        }
    }
}

async fn receive_loop(socket: &mut WebSocket, source: &str, state: &EndpointState) -> Disconnect {
    loop {
        let entry = match socket.recv().await {
            None | Some(Ok(Message::Close(_))) => return Disconnect::Closed,
            Some(Ok(Message::Text(text))) => LogEntry::from_stream_message(text.as_str()),
            Some(Ok(Message::Binary(bytes))) => LogEntry::from_stream_bytes(&bytes),
            // ping/pong
            Some(Ok(_)) => continue,
            Some(Err(err)) => return Disconnect::Transport(SinkError::Transport(err.to_string())),
        };

        match state.printer.print_stream(&state.counter, source, &entry) {
            Ok(id) => debug!(entry = id, peer = %source, format = entry.format().label(), "entry rendered"),
            Err(err) => return Disconnect::Fault(err),
        }
    }
}

/// `address:port` as shown in headers and notices. IPv6 addresses are not
/// bracketed.
fn peer_label(peer: &SocketAddr) -> String {
    format!("{}:{}", peer.ip(), peer.port())
}

fn print_notice<F>(state: &EndpointState, build: F)
where
    F: FnOnce(&Theme, &Timestamp) -> Block,
{
    if let Err(err) = state.printer.notice(build) {
        warn!(error = %err, "failed to print connection notice");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_peers_are_address_and_port() {
        let peer: SocketAddr = "127.0.0.1:51234".parse().unwrap();
        assert_eq!(peer_label(&peer), "127.0.0.1:51234");
    }

    #[test]
    fn ipv6_peers_are_not_bracketed() {
        let peer: SocketAddr = "[::1]:51234".parse().unwrap();
        assert_eq!(peer_label(&peer), "::1:51234");
    }
}
