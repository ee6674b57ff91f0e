//! Fan-out contract: N concurrent requests complete independently, not
//! serialized behind each other's delays.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use spanlab_server::app_state::AppState;
use spanlab_server::config::ServiceConfig;
use spanlab_server::router::build_router;
use tower::ServiceExt;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn twenty_concurrent_fast_requests_do_not_serialize() {
    const REQUESTS: usize = 20;

    let app = build_router(AppState::new(ServiceConfig::default()));

    let start = Instant::now();
    let mut handles = Vec::with_capacity(REQUESTS);
    for _ in 0..REQUESTS {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            app.oneshot(
                Request::builder()
                    .uri("/latency/fast")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
        }));
    }

    let mut success = 0usize;
    let mut failure = 0usize;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(response) if response.status() == StatusCode::OK => success += 1,
            _ => failure += 1,
        }
    }
    let elapsed = start.elapsed();

    assert_eq!(success + failure, REQUESTS);
    assert_eq!(success, REQUESTS);

    // each request sleeps 100ms; serialized execution would take 2s
    assert!(elapsed >= Duration::from_millis(100));
    assert!(
        elapsed < Duration::from_millis(1500),
        "requests appear serialized: {elapsed:?}"
    );
}
