//! JSON response envelopes.
//!
//! Every route answers with one of these shapes. The `type` discriminator is
//! spelled through serde renames so the Rust side can keep `kind`.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Liveness envelope for `/health`.
#[derive(Debug, Serialize)]
pub struct HealthEnvelope {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Unix seconds at response time.
    pub timestamp: f64,
}

impl HealthEnvelope {
    pub fn now(service: &'static str, version: &'static str) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        Self {
            status: "healthy",
            service,
            version,
            timestamp,
        }
    }
}

/// Envelope returned by all latency routes.
#[derive(Debug, Serialize)]
pub struct LatencyEnvelope {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub delay_ms: u64,
    pub message: String,
}

impl LatencyEnvelope {
    pub fn new(kind: &'static str, delay_ms: u64, message: impl Into<String>) -> Self {
        Self {
            kind,
            delay_ms,
            message: message.into(),
        }
    }
}

/// Success envelope for routes without a scenario payload.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope {
    pub status: &'static str,
    pub message: String,
}

impl SuccessEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }
}

/// Error envelope shared by every failure path. `kind` is present only when
/// an uncaught fault reached the conversion boundary; it then names the
/// fault kind.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub code: u16,
    pub message: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>, code: u16, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
            message: message.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: &'static str) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// Flat parent/child demo response (`/nested/simple`).
#[derive(Debug, Serialize)]
pub struct SimpleNestedEnvelope {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub spans: Vec<&'static str>,
}

/// Multi-level demo response (`/nested/complex`); `structure` mirrors the
/// scope tree that was just emitted.
#[derive(Debug, Serialize)]
pub struct ComplexNestedEnvelope {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub structure: serde_json::Value,
}

/// Simulated-transaction demo response (`/nested/database`); `operations`
/// lists the sub-steps in execution order.
#[derive(Debug, Serialize)]
pub struct DatabaseEnvelope {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub operations: Vec<String>,
}
