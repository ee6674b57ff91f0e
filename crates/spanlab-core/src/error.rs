//! Shared error type across SpanLab crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// No such resource or route.
    NotFound,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// HTTP status carried by JSON error envelopes.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::BadRequest => 400,
            ClientCode::NotFound => 404,
            ClientCode::Internal => 500,
        }
    }

    /// Human label used in the `error` field of JSON responses.
    pub fn label(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "Bad Request",
            ClientCode::NotFound => "Not Found",
            ClientCode::Internal => "Internal Server Error",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SpanLabError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum SpanLabError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal: {0}")]
    Internal(String),
    #[error(transparent)]
    Fault(#[from] Fault),
}

impl SpanLabError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SpanLabError::BadRequest(_) => ClientCode::BadRequest,
            SpanLabError::NotFound(_) => ClientCode::NotFound,
            SpanLabError::Internal(_) => ClientCode::Internal,
            SpanLabError::Fault(_) => ClientCode::Internal,
        }
    }

    /// Kind name exposed in the envelope `type` field, fault path only.
    pub fn fault_kind(&self) -> Option<&'static str> {
        match self {
            SpanLabError::Fault(f) => Some(f.kind),
            _ => None,
        }
    }
}

/// A fault that no handler recovers from. It propagates to the outermost
/// conversion boundary, which logs it and renders a generic 500 envelope
/// carrying the fault's message and kind name.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Fault {
    /// Short kind name, e.g. `InjectedFault`.
    pub kind: &'static str,
    pub message: String,
}

impl Fault {
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
