//! Latency routes: scripted delays under a timing scope.
//!
//! The sleep is awaited inside the request's own task, so a slow request
//! never blocks other in-flight requests. `tokio::time::sleep` waits at
//! least the requested duration; the envelope reports the resolved value.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use spanlab_core::envelope::LatencyEnvelope;
use tokio::time::{sleep, Duration};

use crate::app_state::AppState;

const FAST_DELAY_MS: u64 = 100;
const MEDIUM_DELAY_MS: u64 = 500;
const SLOW_DELAY_MS: u64 = 2_000;
const VERY_SLOW_DELAY_MS: u64 = 5_000;

/// Used when the `delay` parameter is absent or unparsable.
const DEFAULT_DELAY_MS: u64 = 1_000;
/// Upper clamp for caller-supplied delays.
const MAX_DELAY_MS: u64 = 30_000;

pub async fn fast(State(state): State<AppState>) -> Json<LatencyEnvelope> {
    fixed(state, "latency.fast", "fast", FAST_DELAY_MS, "Fast response").await
}

pub async fn medium(State(state): State<AppState>) -> Json<LatencyEnvelope> {
    fixed(state, "latency.medium", "medium", MEDIUM_DELAY_MS, "Medium response").await
}

pub async fn slow(State(state): State<AppState>) -> Json<LatencyEnvelope> {
    fixed(state, "latency.slow", "slow", SLOW_DELAY_MS, "Slow response").await
}

pub async fn very_slow(State(state): State<AppState>) -> Json<LatencyEnvelope> {
    fixed(
        state,
        "latency.very_slow",
        "very_slow",
        VERY_SLOW_DELAY_MS,
        "Very slow response",
    )
    .await
}

async fn fixed(
    state: AppState,
    scope_name: &'static str,
    kind: &'static str,
    delay_ms: u64,
    message: &'static str,
) -> Json<LatencyEnvelope> {
    let _scope = state.tracer().scope(scope_name);
    sleep(Duration::from_millis(delay_ms)).await;
    Json(LatencyEnvelope::new(kind, delay_ms, message))
}

#[derive(Debug, Deserialize)]
pub struct CustomDelayQuery {
    /// Raw string so unparsable input can fall back to the default instead
    /// of rejecting the request.
    delay: Option<String>,
}

pub async fn custom(
    State(state): State<AppState>,
    Query(query): Query<CustomDelayQuery>,
) -> Json<LatencyEnvelope> {
    let delay_ms = resolve_delay(query.delay.as_deref());

    let mut scope = state.tracer().scope("latency.custom");
    scope.set_attr("delay_ms", delay_ms);
    sleep(Duration::from_millis(delay_ms)).await;

    Json(LatencyEnvelope::new(
        "custom",
        delay_ms,
        format!("Custom delay of {delay_ms}ms"),
    ))
}

/// Clamp in-range integers to [0, 30000]; default anything unparsable.
fn resolve_delay(raw: Option<&str>) -> u64 {
    match raw {
        None => DEFAULT_DELAY_MS,
        Some(s) => match s.trim().parse::<i64>() {
            Ok(v) => v.clamp(0, MAX_DELAY_MS as i64) as u64,
            Err(_) => DEFAULT_DELAY_MS,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_delay_defaults_when_absent() {
        assert_eq!(resolve_delay(None), 1_000);
    }

    #[test]
    fn resolve_delay_passes_in_range_values() {
        assert_eq!(resolve_delay(Some("0")), 0);
        assert_eq!(resolve_delay(Some("120")), 120);
        assert_eq!(resolve_delay(Some("30000")), 30_000);
    }

    #[test]
    fn resolve_delay_clamps_out_of_range_values() {
        assert_eq!(resolve_delay(Some("-5")), 0);
        assert_eq!(resolve_delay(Some("30001")), 30_000);
        assert_eq!(resolve_delay(Some("999999999")), 30_000);
    }

    #[test]
    fn resolve_delay_defaults_on_unparsable_input() {
        assert_eq!(resolve_delay(Some("abc")), 1_000);
        assert_eq!(resolve_delay(Some("1.5")), 1_000);
        assert_eq!(resolve_delay(Some("")), 1_000);
    }
}
