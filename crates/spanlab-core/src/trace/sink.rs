//! Span records and the sinks that consume them.

use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Attribute value attached to a scope.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    I64(i64),
    Bool(bool),
    Str(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::I64(v) => write!(f, "{v}"),
            AttrValue::Bool(v) => write!(f, "{v}"),
            AttrValue::Str(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::I64(v)
    }
}

impl From<u64> for AttrValue {
    fn from(v: u64) -> Self {
        AttrValue::I64(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Str(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Str(v)
    }
}

/// A finished timing scope.
#[derive(Debug, Clone)]
pub struct SpanRecord {
    pub id: u64,
    pub parent_id: Option<u64>,
    pub name: &'static str,
    pub service: String,
    pub resource: Option<String>,
    pub attrs: Vec<(&'static str, AttrValue)>,
    pub start: Instant,
    pub end: Instant,
}

impl SpanRecord {
    /// Wall-clock time between open and close.
    pub fn duration(&self) -> Duration {
        self.end.duration_since(self.start)
    }

    /// Look up an attribute by key.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Whether `other`'s interval lies entirely within this one.
    pub fn contains(&self, other: &SpanRecord) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Consumer of finished scopes. Implementations must tolerate concurrent
/// calls from independent requests.
pub trait SpanSink: Send + Sync {
    fn record(&self, span: SpanRecord);
}

/// Default sink: one structured log event per finished scope.
#[derive(Debug, Default)]
pub struct LogSink;

impl SpanSink for LogSink {
    fn record(&self, span: SpanRecord) {
        let attrs = span
            .attrs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(",");
        tracing::debug!(
            target: "spanlab::trace",
            span_id = span.id,
            parent_id = span.parent_id,
            name = span.name,
            service = %span.service,
            resource = span.resource.as_deref(),
            duration_ms = span.duration().as_millis() as u64,
            %attrs,
            "scope closed"
        );
    }
}

/// In-memory sink for inspecting emitted scopes.
#[derive(Debug, Default)]
pub struct RecordingSink {
    spans: Mutex<Vec<SpanRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every span recorded so far, in close order.
    pub fn snapshot(&self) -> Vec<SpanRecord> {
        self.spans
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Names only, in close order.
    pub fn names(&self) -> Vec<&'static str> {
        self.snapshot().iter().map(|s| s.name).collect()
    }
}

impl SpanSink for RecordingSink {
    fn record(&self, span: SpanRecord) {
        self.spans
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(span);
    }
}
