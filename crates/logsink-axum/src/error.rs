//! Axum-specific error types and mappings.
//!
//! Every failure of the batch endpoint is reported to the caller as a
//! client error carrying the failure message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use logsink_core::SinkError;
use thiserror::Error;

use crate::dto::ErrorBody;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request body is not a JSON array of entries.
    #[error("{0}")]
    BadRequest(String),

    /// Rendering or writing the batch failed after it was accepted.
    #[error("{0}")]
    Render(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Render(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody::new(self.to_string());
        (status, axum::Json(body)).into_response()
    }
}

impl From<SinkError> for HttpError {
    fn from(err: SinkError) -> Self {
        if err.is_render_fault() {
            Self::Render(err.to_string())
        } else {
            Self::BadRequest(err.to_string())
        }
    }
}
