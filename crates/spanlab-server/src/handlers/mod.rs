//! Route handlers and the error conversion boundary.

pub mod errors;
pub mod health;
pub mod latency;
pub mod nested;
pub mod panel;

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use spanlab_core::envelope::ErrorEnvelope;
use spanlab_core::SpanLabError;

/// Single conversion boundary from [`SpanLabError`] to an HTTP response.
///
/// Anything a handler propagates with `?` ends here: the error is logged
/// (warning for client errors, error for server errors) and rendered as a
/// JSON envelope. A fault additionally exposes its kind in the `type` field.
/// No error ever takes the process down or leaves a connection hanging.
pub struct ApiError(pub SpanLabError);

impl<E> From<E> for ApiError
where
    E: Into<SpanLabError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = StatusCode::from_u16(code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut envelope = ErrorEnvelope::new(code.label(), code.http_status(), self.0.to_string());
        match &self.0 {
            SpanLabError::Fault(fault) => {
                tracing::error!(kind = fault.kind, error = %fault, "unhandled fault caught at the boundary");
                envelope = envelope.with_kind(fault.kind);
            }
            err if status.is_server_error() => {
                tracing::error!(error = %err, "request failed");
            }
            err => {
                tracing::warn!(error = %err, "request rejected");
            }
        }

        (status, Json(envelope)).into_response()
    }
}

/// Fallback for paths outside the route table.
pub async fn unknown_route(uri: Uri) -> ApiError {
    ApiError(SpanLabError::NotFound(format!("no route for {}", uri.path())))
}
