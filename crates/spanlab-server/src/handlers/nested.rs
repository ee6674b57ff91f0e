//! Nested-scope routes: hierarchical timing scopes for trace-tree demos.
//!
//! Children borrow their parent guard, so intervals nest and siblings run
//! strictly one after another.

use axum::extract::State;
use axum::Json;
use serde_json::json;
use spanlab_core::envelope::{ComplexNestedEnvelope, DatabaseEnvelope, SimpleNestedEnvelope};
use tokio::time::{sleep, Duration};

use crate::app_state::AppState;

/// Service label on simulated database sub-scopes.
const DB_SERVICE: &str = "spanlab-db";

/// One parent, two sequential children.
pub async fn simple(State(state): State<AppState>) -> Json<SimpleNestedEnvelope> {
    {
        let mut parent = state.tracer().scope("nested.parent");
        sleep(Duration::from_millis(50)).await;

        {
            let _child1 = parent.child("nested.child1");
            sleep(Duration::from_millis(100)).await;
        }
        {
            let _child2 = parent.child("nested.child2");
            sleep(Duration::from_millis(100)).await;
        }

        parent.set_attr("children_count", 2i64);
    }

    Json(SimpleNestedEnvelope {
        kind: "simple_nested",
        spans: vec!["parent", "child1", "child2"],
    })
}

/// Three-level hierarchy.
pub async fn complex(State(state): State<AppState>) -> Json<ComplexNestedEnvelope> {
    {
        let level1 = state.tracer().scope("nested.level1");
        sleep(Duration::from_millis(50)).await;

        {
            let level2a = level1.child("nested.level2a");
            sleep(Duration::from_millis(50)).await;

            {
                let _level3 = level2a.child("nested.level3");
                sleep(Duration::from_millis(100)).await;
            }
        }
        {
            let _level2b = level1.child("nested.level2b");
            sleep(Duration::from_millis(100)).await;
        }
    }

    Json(ComplexNestedEnvelope {
        kind: "complex_nested",
        structure: json!({
            "level1": {
                "level2a": { "level3": {} },
                "level2b": {}
            }
        }),
    })
}

/// Simulated transaction: connect, three randomized queries, commit.
pub async fn database(State(state): State<AppState>) -> Json<DatabaseEnvelope> {
    let mut operations = Vec::new();

    {
        let mut txn = state
            .tracer()
            .scope("database.transaction")
            .with_resource("transaction");

        {
            let _connect = txn
                .child("database.connect")
                .with_service(DB_SERVICE)
                .with_resource("connect");
            sleep(Duration::from_millis(50)).await;
            operations.push("connected".to_string());
        }

        for i in 0..3i64 {
            let mut query = txn
                .child("database.query")
                .with_service(DB_SERVICE)
                .with_resource(format!("SELECT * FROM table_{i}"));
            query.set_attr("query_id", i);

            let wait = state.random().range_ms(50, 200);
            sleep(Duration::from_millis(wait)).await;
            operations.push(format!("query_{i}"));
        }

        {
            let _commit = txn
                .child("database.commit")
                .with_service(DB_SERVICE)
                .with_resource("commit");
            sleep(Duration::from_millis(30)).await;
            operations.push("committed".to_string());
        }

        txn.set_attr("query_count", 3i64);
    }

    Json(DatabaseEnvelope {
        kind: "database_simulation",
        operations,
    })
}
