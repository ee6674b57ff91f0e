//! Nested-scope routes: span hierarchy, ordering, attributes, durations.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use spanlab_core::random::ScriptedSource;
use spanlab_core::trace::{AttrValue, RecordingSink, SpanRecord, Tracer};
use spanlab_server::app_state::AppState;
use spanlab_server::config::ServiceConfig;
use spanlab_server::router::build_router;
use tower::ServiceExt;

/// Router wired with a recording sink and a floored random source (every
/// randomized duration collapses to its lower bound).
fn recording_app() -> (Router, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let state = AppState::with_parts(
        ServiceConfig::default(),
        Tracer::new("spanlab", sink.clone()),
        Arc::new(ScriptedSource::new([])),
    );
    (build_router(state), sink)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn by_name<'a>(spans: &'a [SpanRecord], name: &str) -> &'a SpanRecord {
    spans
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("missing span {name}"))
}

#[tokio::test]
async fn simple_nested_spans_and_response() {
    let (app, sink) = recording_app();

    let start = Instant::now();
    let (status, body) = get(app, "/nested/simple").await;
    let elapsed = start.elapsed();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "simple_nested");
    assert_eq!(body["spans"], json!(["parent", "child1", "child2"]));
    assert!(elapsed >= Duration::from_millis(250), "elapsed {elapsed:?}");

    // close order is strict LIFO
    assert_eq!(
        sink.names(),
        vec!["nested.child1", "nested.child2", "nested.parent"]
    );

    let spans = sink.snapshot();
    let parent = by_name(&spans, "nested.parent");
    let child1 = by_name(&spans, "nested.child1");
    let child2 = by_name(&spans, "nested.child2");

    assert_eq!(child1.parent_id, Some(parent.id));
    assert_eq!(child2.parent_id, Some(parent.id));
    assert!(parent.contains(child1));
    assert!(parent.contains(child2));
    assert!(child1.end <= child2.start, "siblings must not overlap");

    assert_eq!(parent.attr("children_count"), Some(&AttrValue::I64(2)));
    assert!(parent.duration() >= Duration::from_millis(250));
}

#[tokio::test]
async fn complex_nested_three_level_hierarchy() {
    let (app, sink) = recording_app();

    let (status, body) = get(app, "/nested/complex").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "complex_nested");
    assert_eq!(
        body["structure"],
        json!({ "level1": { "level2a": { "level3": {} }, "level2b": {} } })
    );

    assert_eq!(
        sink.names(),
        vec![
            "nested.level3",
            "nested.level2a",
            "nested.level2b",
            "nested.level1"
        ]
    );

    let spans = sink.snapshot();
    let level1 = by_name(&spans, "nested.level1");
    let level2a = by_name(&spans, "nested.level2a");
    let level2b = by_name(&spans, "nested.level2b");
    let level3 = by_name(&spans, "nested.level3");

    assert_eq!(level2a.parent_id, Some(level1.id));
    assert_eq!(level2b.parent_id, Some(level1.id));
    assert_eq!(level3.parent_id, Some(level2a.id));

    assert!(level1.contains(level2a));
    assert!(level1.contains(level2b));
    assert!(level2a.contains(level3));
    assert!(level2a.end <= level2b.start, "siblings must not overlap");
}

#[tokio::test]
async fn database_simulation_operations_and_spans() {
    let (app, sink) = recording_app();

    let (status, body) = get(app, "/nested/database").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "database_simulation");
    assert_eq!(
        body["operations"],
        json!(["connected", "query_0", "query_1", "query_2", "committed"])
    );

    assert_eq!(
        sink.names(),
        vec![
            "database.connect",
            "database.query",
            "database.query",
            "database.query",
            "database.commit",
            "database.transaction"
        ]
    );

    let spans = sink.snapshot();
    let txn = by_name(&spans, "database.transaction");
    assert_eq!(txn.service, "spanlab");
    assert_eq!(txn.resource.as_deref(), Some("transaction"));
    assert_eq!(txn.attr("query_count"), Some(&AttrValue::I64(3)));
    // floored query durations: 50 + 3 x 50 + 30
    assert!(txn.duration() >= Duration::from_millis(230));

    let queries: Vec<&SpanRecord> = spans.iter().filter(|s| s.name == "database.query").collect();
    assert_eq!(queries.len(), 3);
    for (i, query) in queries.iter().enumerate() {
        assert_eq!(query.service, "spanlab-db");
        assert_eq!(
            query.resource.as_deref(),
            Some(format!("SELECT * FROM table_{i}").as_str())
        );
        assert_eq!(query.attr("query_id"), Some(&AttrValue::I64(i as i64)));
        assert_eq!(query.parent_id, Some(txn.id));
        assert!(txn.contains(query));
        assert!(query.duration() >= Duration::from_millis(50));
    }

    let connect = by_name(&spans, "database.connect");
    let commit = by_name(&spans, "database.commit");
    assert_eq!(connect.service, "spanlab-db");
    assert_eq!(commit.service, "spanlab-db");
    assert!(connect.end <= queries[0].start);
    assert!(queries[2].end <= commit.start);
}
