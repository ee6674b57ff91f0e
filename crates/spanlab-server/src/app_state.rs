//! Shared application state.
//!
//! The tracer and random source are constructed once here and injected into
//! handlers through the state, so there are no process-wide singletons and
//! tests can swap in recording/scripted implementations.

use std::sync::Arc;

use spanlab_core::random::{RandomSource, ThreadRngSource};
use spanlab_core::trace::{LogSink, Tracer};

use crate::config::ServiceConfig;

/// Service label attached to emitted scopes and the health envelope.
pub const SERVICE_NAME: &str = "spanlab";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    tracer: Tracer,
    random: Arc<dyn RandomSource>,
}

impl AppState {
    /// Production wiring: log-backed tracer, thread-local RNG.
    pub fn new(cfg: ServiceConfig) -> Self {
        Self::with_parts(
            cfg,
            Tracer::new(SERVICE_NAME, Arc::new(LogSink)),
            Arc::new(ThreadRngSource),
        )
    }

    /// Explicit wiring for tests.
    pub fn with_parts(cfg: ServiceConfig, tracer: Tracer, random: Arc<dyn RandomSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, tracer, random }),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn tracer(&self) -> &Tracer {
        &self.inner.tracer
    }

    pub fn random(&self) -> &dyn RandomSource {
        self.inner.random.as_ref()
    }
}
