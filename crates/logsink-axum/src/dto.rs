//! Response bodies of the batch endpoint.

use serde::Serialize;

/// `{"status":"success","processed":N}`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BatchAck {
    pub status: &'static str,
    pub processed: usize,
}

impl BatchAck {
    pub const fn success(processed: usize) -> Self {
        Self {
            status: "success",
            processed,
        }
    }
}

/// `{"status":"error","message":"..."}`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}
