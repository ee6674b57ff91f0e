//! SpanLab core: error surface, response envelopes, timing scopes, and the
//! random-source seam shared by the server and its tests.
//!
//! This crate defines the contracts the HTTP layer serves. It intentionally
//! carries no transport or runtime dependencies so the primitives can be
//! exercised without standing up a server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SpanLabError`/`Result` so the process
//! never dies on a single bad request.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod envelope;
pub mod error;
pub mod random;
pub mod trace;

/// Shared result type.
pub use error::{Result, SpanLabError};
