//! Axum router wiring.
//!
//! One handler per route; unknown paths fall through to the 404 envelope.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, handlers, obs};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::panel::index))
        .route("/health", get(handlers::health::health))
        .route("/latency/fast", get(handlers::latency::fast))
        .route("/latency/medium", get(handlers::latency::medium))
        .route("/latency/slow", get(handlers::latency::slow))
        .route("/latency/very-slow", get(handlers::latency::very_slow))
        .route("/latency/custom", get(handlers::latency::custom))
        .route("/error/500", get(handlers::errors::internal))
        .route("/error/404", get(handlers::errors::not_found))
        .route("/error/400", get(handlers::errors::bad_request))
        .route("/error/exception", get(handlers::errors::exception))
        .route("/error/random", get(handlers::errors::random))
        .route("/nested/simple", get(handlers::nested::simple))
        .route("/nested/complex", get(handlers::nested::complex))
        .route("/nested/database", get(handlers::nested::database))
        .fallback(handlers::unknown_route)
        .layer(middleware::from_fn(obs::trace_requests))
        .with_state(state)
}
