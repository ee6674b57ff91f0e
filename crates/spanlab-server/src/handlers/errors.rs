//! Error routes: deterministic envelopes, one genuine fault, one coin flip.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use spanlab_core::envelope::{ErrorEnvelope, SuccessEnvelope};
use spanlab_core::error::Fault;

use crate::app_state::AppState;

use super::ApiError;

/// Deterministic 500. The envelope is returned intentionally, not raised.
pub async fn internal() -> impl IntoResponse {
    tracing::error!("intentional 500 response triggered");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorEnvelope::new(
            "Internal Server Error",
            500,
            "This is a test error",
        )),
    )
}

/// Deterministic 404.
pub async fn not_found() -> impl IntoResponse {
    tracing::warn!("intentional 404 response triggered");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorEnvelope::new(
            "Not Found",
            404,
            "Resource not found (test)",
        )),
    )
}

/// Deterministic 400.
pub async fn bad_request() -> impl IntoResponse {
    tracing::warn!("intentional 400 response triggered");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorEnvelope::new("Bad Request", 400, "Invalid request (test)")),
    )
}

/// Raises a fault that nothing on the way up recovers from; the conversion
/// boundary in [`super::ApiError`] turns it into the 500 envelope.
pub async fn exception() -> Result<Json<SuccessEnvelope>, ApiError> {
    tracing::error!("intentionally raising an unhandled fault");
    let message = poisoned_lookup()?;
    Ok(Json(SuccessEnvelope::new(message)))
}

/// Stand-in for a buggy dependency. Always faults.
fn poisoned_lookup() -> Result<String, Fault> {
    Err(Fault::new(
        "InjectedFault",
        "This is an intentional unhandled fault for trace testing",
    ))
}

/// 50% chance of failure, drawn from the injected random source.
pub async fn random(State(state): State<AppState>) -> Response {
    let mut scope = state.tracer().scope("error.random");

    if state.random().unit() < 0.5 {
        scope.set_attr("error", true);
        tracing::error!("random error branch hit (50% chance)");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorEnvelope::new(
                "Random Error",
                500,
                "Bad luck! (50% chance error)",
            )),
        )
            .into_response()
    } else {
        Json(SuccessEnvelope::new("Lucky! No error this time")).into_response()
    }
}
