//! # Response Envelope
//!
//! Uniform success/error wrapper for every dispatched call. The payload is
//! whatever JSON the provider returned; nothing here interprets it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Failure taxonomy shared by envelopes and fail-fast errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "network-unreachable")]
    NetworkUnreachable,
    #[serde(rename = "timeout")]
    Timeout,
    #[serde(rename = "client-error-4xx")]
    ClientError,
    #[serde(rename = "server-error-5xx")]
    ServerError,
    #[serde(rename = "malformed-response")]
    MalformedResponse,
    #[serde(rename = "unknown-operation")]
    UnknownOperation,
    #[serde(rename = "missing-path-param")]
    MissingPathParam,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NetworkUnreachable => "network-unreachable",
            ErrorKind::Timeout => "timeout",
            ErrorKind::ClientError => "client-error-4xx",
            ErrorKind::ServerError => "server-error-5xx",
            ErrorKind::MalformedResponse => "malformed-response",
            ErrorKind::UnknownOperation => "unknown-operation",
            ErrorKind::MissingPathParam => "missing-path-param",
        }
    }

    /// Kind for an HTTP status of 400 or above.
    pub fn from_status(status: u16) -> ErrorKind {
        if status < 500 {
            ErrorKind::ClientError
        } else {
            ErrorKind::ServerError
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified failure of one remote call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedError {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl NormalizedError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            kind,
            message: message.into(),
            status,
        }
    }
}

impl fmt::Display for NormalizedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(s) => write!(f, "{} ({}): {}", self.kind, s, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for NormalizedError {}

/// Result of one dispatched call.
///
/// A failed envelope never carries a payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<NormalizedError>,
}

impl ResponseEnvelope {
    pub fn ok(status: u16, payload: Value) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            status: Some(status),
            error: None,
        }
    }

    pub fn failed(error: NormalizedError) -> Self {
        Self {
            success: false,
            payload: None,
            status: error.status,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub fn into_payload(self) -> Option<Value> {
        self.payload
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn error(&self) -> Option<&NormalizedError> {
        self.error.as_ref()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }

    /// Converts into a `Result`, for callers that prefer `?`.
    pub fn into_result(self) -> Result<Value, NormalizedError> {
        match (self.payload, self.error) {
            (Some(p), None) => Ok(p),
            (_, Some(e)) => Err(e),
            (None, None) => Ok(Value::Null),
        }
    }
}
