//! `POST /logs` - batched ingestion.
//!
//! The body must be a JSON array; each element is one entry. The batch
//! counter only advances once the body decoded successfully. A body that
//! cannot be read at all is reported the same way as one that does not
//! decode.

use std::net::SocketAddr;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{ConnectInfo, State};
use logsink_core::{LogEntry, SinkError, render};
use serde_json::Value;
use tracing::{debug, warn};

use crate::dto::BatchAck;
use crate::error::HttpError;
use crate::state::EndpointState;

/// Accept one batch, print it as a single block and acknowledge the count.
pub async fn ingest(
    State(state): State<EndpointState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<BatchAck>, HttpError> {
    let source = peer.ip().to_string();

    let result = body
        .map_err(|rejection| SinkError::Decode(rejection.body_text()))
        .and_then(|body| decode_batch(&body))
        .and_then(|entries| {
            let id = state
                .printer
                .print_batch(&state.counter, &source, &entries)?;
            debug!(batch = id, entries = entries.len(), %source, "batch rendered");
            Ok(entries.len())
        });

    match result {
        Ok(processed) => Ok(Json(BatchAck::success(processed))),
        Err(err) => {
            warn!(%source, error = %err, "batch rejected");
            let notice = render::batch_error(state.printer.theme(), &err.to_string());
            if let Err(print_err) = state.printer.print(&notice) {
                warn!(error = %print_err, "failed to print batch error notice");
            }
            Err(err.into())
        }
    }
}

/// Decode a request body into entries, preserving array order.
pub fn decode_batch(body: &[u8]) -> Result<Vec<LogEntry>, SinkError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => Ok(items.into_iter().map(LogEntry::from_batch_element).collect()),
        other => Err(SinkError::Decode(format!(
            "expected a JSON array of log entries, got {}",
            kind(&other)
        ))),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_array_in_order() {
        let entries = decode_batch(br#"["a", {"x": 1}, 3]"#).unwrap();
        assert_eq!(
            entries,
            vec![
                LogEntry::Text("a".into()),
                LogEntry::Structured(json!({"x": 1})),
                LogEntry::Structured(json!(3)),
            ]
        );
    }

    #[test]
    fn empty_array_is_a_valid_batch() {
        assert!(decode_batch(b"[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_invalid_json() {
        let err = decode_batch(b"not json").unwrap_err();
        assert!(matches!(err, SinkError::Decode(_)));
    }

    #[test]
    fn rejects_non_array_documents() {
        let err = decode_batch(br#"{"x": 1}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected a JSON array of log entries, got an object"
        );
    }

    #[test]
    fn rejects_empty_body() {
        assert!(decode_batch(b"").is_err());
    }
}
