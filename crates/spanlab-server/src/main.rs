//! SpanLab server
//!
//! Synthetic HTTP traffic for tracing agents:
//! - `/latency/*` scripted delays
//! - `/error/*` scripted failures
//! - `/nested/*` hierarchical timing scopes
//! - `/` static control panel

use tracing_subscriber::{fmt, EnvFilter};

use spanlab_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Defaults -> optional spanlab.yaml -> HOST/PORT env overrides.
    let cfg = config::load().expect("config load failed");
    let listen = cfg.listen_addr().expect("listen address must resolve");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "spanlab-server starting");
    tracing::info!("endpoints: /health, /latency/*, /error/*, /nested/*, / (panel)");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
