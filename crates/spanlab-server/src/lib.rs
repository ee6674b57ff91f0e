//! SpanLab server library entry.
//!
//! This crate wires the config loader, shared state, router, and handlers
//! into a synthetic-traffic service for exercising an external tracing
//! agent. It is intended to be consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod obs;
pub mod router;
