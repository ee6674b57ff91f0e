use axum::Json;
use spanlab_core::envelope::HealthEnvelope;

use crate::app_state::{SERVICE_NAME, SERVICE_VERSION};

/// Liveness probe. No failure modes.
pub async fn health() -> Json<HealthEnvelope> {
    Json(HealthEnvelope::now(SERVICE_NAME, SERVICE_VERSION))
}
