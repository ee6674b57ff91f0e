//! Top-level facade crate for SpanLab.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use spanlab_core::*;
}

pub mod server {
    pub use spanlab_server::*;
}
