//! Timing scopes for external observability.
//!
//! A [`Tracer`] is an explicitly constructed handle (no process globals) that
//! hands out [`Scope`] guards. A scope records a named interval; closing is
//! tied to `Drop`, so every exit path — including early returns and error
//! paths — ends the interval. Child scopes borrow their parent, which makes
//! two properties hold by construction:
//!
//! - a child's interval is contained in its parent's interval
//! - scopes close in strict reverse order of opening
//!
//! Finished scopes are pushed to a [`SpanSink`]; the service never reads them
//! back.

mod scope;
mod sink;

pub use scope::{Scope, Tracer};
pub use sink::{AttrValue, LogSink, RecordingSink, SpanRecord, SpanSink};
